//! Tower/Axum wiring for the gate.
//!
//! Mount with `axum::middleware::from_fn_with_state` ahead of protected
//! routes:
//!
//! ```ignore
//! let state = AuthState { authority: Arc::new(HttpAuthorityClient::new(&config)?) };
//! let app = Router::new()
//!     .route("/assets/:id", get(get_asset))
//!     .layer(from_fn_with_state(state, auth_middleware));
//! ```

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tokengate_authority::{AuthError, AuthorityClient};

use crate::gate::authenticate_request;
use crate::trust::{is_public, strip_identity};

/// Shared state for the authentication middleware.
#[derive(Clone)]
pub struct AuthState {
    /// Credential validator; safe for concurrent use across requests.
    pub authority: Arc<dyn AuthorityClient>,
}

/// Authentication middleware.
///
/// For each request:
/// 1. Strips inbound identity headers; even public routes must not carry
///    spoofed identity past the gate.
/// 2. Public routes (`X-Public: true`) pass through unauthenticated.
/// 3. Protected routes run the credential flow; a classified failure halts
///    the request and is rendered with the failure's own status and body.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Response {
    strip_identity(&mut req);

    if is_public(Some(&req)) {
        return next.run(req).await;
    }

    match authenticate_request(Some(&mut req), state.authority.as_ref()).await {
        Ok(()) => next.run(req).await,
        Err(err) => reject(&err),
    }
}

/// Render a classified validation failure as an HTTP response.
fn reject(err: &AuthError) -> Response {
    if err.is_internal() {
        tracing::warn!(status = err.status, message = %err.message, "credential validation failed in the gate");
    } else {
        tracing::debug!(status = err.status, message = %err.message, "authority rejected credential");
    }

    let status = StatusCode::from_u16(err.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err)).into_response()
}
