//! # tokengate-axum — request-authentication gate for Axum services
//!
//! Sits in front of protected handlers, decides whether the requested route
//! is public, and for protected routes validates the presented access token
//! against the identity authority before injecting verified caller/client
//! identity into the request. Downstream code can trust the identity
//! headers precisely because this gate strips any inbound value for them
//! before validation: a client cannot self-assert identity.
//!
//! ## Request flow
//!
//! ```text
//! inbound request
//!   → strip identity headers        (always, spoofed values never survive)
//!   → public route?                 (X-Public marker; yes → pass through)
//!   → extract access_token param    (absent → anonymous pass-through)
//!   → authority lookup              (bounded timeout, classified failures)
//!   → write X-Caller-Id/X-Client-Id → handler
//! ```
//!
//! ## Modules
//!
//! | Module         | Responsibility                                         |
//! |----------------|--------------------------------------------------------|
//! | [`trust`]      | Trust-context headers: public marker, identity readers |
//! | [`gate`]       | [`authenticate_request`] — the credential flow         |
//! | [`middleware`] | [`auth_middleware`] — Tower/Axum wiring                |
//! | [`extract`]    | [`CallerIdentity`] extractor for handlers              |
//!
//! Identity headers are a convention, not a cryptographic guarantee: the
//! trust model holds only while every inbound path into the service runs
//! through this gate (or an upstream boundary that strips the same headers).

pub mod extract;
pub mod gate;
pub mod middleware;
pub mod trust;

pub use extract::CallerIdentity;
pub use gate::authenticate_request;
pub use middleware::{auth_middleware, AuthState};
pub use trust::{caller_id, client_id, is_public};
