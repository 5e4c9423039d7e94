//! # tokengate-authority — typed client for the identity authority
//!
//! The credential-validation half of the tokengate request-authentication
//! gate. Given an access-token identifier extracted from an inbound request,
//! this crate resolves it against the remote identity authority and returns
//! either the verified [`AccessToken`] record or a classified [`AuthError`].
//!
//! ## Endpoint
//!
//! `GET {base_url}/oauth/access_token/{token_id}` with a bounded per-request
//! timeout (default 200 ms). Success bodies deserialize to [`AccessToken`];
//! failure bodies deserialize to [`AuthError`] and are forwarded verbatim.
//!
//! ## Failure classification
//!
//! | Source                                         | Result                                                  |
//! |------------------------------------------------|---------------------------------------------------------|
//! | Transport failure (connect, timeout, body read)| `internal_server_error` (500), transport message        |
//! | Authority error payload (status > 299)         | the authority's own status/message, unchanged           |
//! | Unparsable error payload                       | `internal_server_error`, "invalid error interface"      |
//! | Unparsable success payload                     | `internal_server_error`, "error when unmarshal access token response" |
//!
//! The client never decides whether a token is fake or expired; that
//! judgment belongs to the authority. Its only judgment calls concern its
//! own ability to complete the exchange, which it keeps distinct from
//! authority-issued rejections so callers can return accurate diagnostics.

pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use client::{AuthorityClient, HttpAuthorityClient};
pub use config::{AuthorityConfig, ConfigError};
pub use error::AuthError;
pub use token::AccessToken;
