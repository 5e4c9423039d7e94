//! The credential flow: extraction, remote validation, identity injection.

use axum::http::{HeaderValue, Request};
use tokengate_authority::{AuthError, AuthorityClient};

use crate::trust::{strip_identity, HEADER_CALLER_ID, HEADER_CLIENT_ID, PARAM_ACCESS_TOKEN};

/// Authenticate a request against the identity authority.
///
/// Steps, in order:
///
/// 1. `None` request → `Ok` (nothing to authenticate).
/// 2. Strip any inbound identity headers, unconditionally.
/// 3. Read the trimmed `access_token` query parameter. Absent or empty →
///    `Ok`: the anonymous path, not a failure. Whether the target route
///    actually requires a credential is [`crate::trust::is_public`]'s job,
///    decided by the caller before this function runs.
/// 4. Look the token up with the authority; a classified failure propagates
///    unchanged and the request stays unauthenticated.
/// 5. On success write `X-Client-Id` and `X-Caller-Id` from the record.
///
/// After a successful return the trust headers reflect either "no
/// credential presented" or "credential verified during this call",
/// never a spoofed or partially-validated state.
///
/// # Errors
///
/// Propagates the [`AuthError`] produced by the authority client, verbatim.
pub async fn authenticate_request<B: Send>(
    req: Option<&mut Request<B>>,
    authority: &dyn AuthorityClient,
) -> Result<(), AuthError> {
    let Some(req) = req else {
        return Ok(());
    };

    strip_identity(req);

    let Some(token_id) = access_token_id(req) else {
        return Ok(());
    };

    let token = authority.get_access_token(&token_id).await?;
    tracing::debug!(caller_id = token.user_id, client_id = token.client_id, "request authenticated");

    let headers = req.headers_mut();
    headers.insert(HEADER_CLIENT_ID, HeaderValue::from(token.client_id));
    headers.insert(HEADER_CALLER_ID, HeaderValue::from(token.user_id));

    Ok(())
}

/// Extract the trimmed access-token identifier from the request query.
///
/// Empty-after-trimming values count as absent.
fn access_token_id<B>(req: &Request<B>) -> Option<String> {
    let query = req.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == PARAM_ACCESS_TOKEN)
        .map(|(_, value)| value.trim().to_string())
        .filter(|v| !v.is_empty())
}
