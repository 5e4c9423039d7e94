//! Request trust context: the identity-bearing headers the gate owns.
//!
//! `X-Caller-Id` and `X-Client-Id` are authoritative identity for
//! downstream handlers, so they are removed and recomputed on every pass
//! through the gate, never merged with inbound values. `X-Public` is
//! consumed only: upstream routing config sets it to mark a route public.

use axum::http::header::HeaderName;
use axum::http::{HeaderMap, Request};

/// Marker header set by upstream routing config on public routes.
pub const HEADER_PUBLIC: HeaderName = HeaderName::from_static("x-public");
/// Verified end-user identity, written exclusively by the gate.
pub const HEADER_CALLER_ID: HeaderName = HeaderName::from_static("x-caller-id");
/// Verified OAuth client identity, written exclusively by the gate.
pub const HEADER_CLIENT_ID: HeaderName = HeaderName::from_static("x-client-id");
/// Query parameter carrying the access-token identifier.
pub const PARAM_ACCESS_TOKEN: &str = "access_token";

/// Whether the request targets a public route.
///
/// `None` (no request context available) is treated as public. Otherwise
/// the route is public exactly when it carries `X-Public: true`.
pub fn is_public<B>(req: Option<&Request<B>>) -> bool {
    match req {
        None => true,
        Some(req) => req
            .headers()
            .get(&HEADER_PUBLIC)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true"),
    }
}

/// Verified caller (end-user) identity previously injected by the gate.
///
/// Returns the anonymous sentinel `0` for a missing request, missing
/// header, or non-numeric value. Never fails: malformed trust data
/// degrades to "no identity".
pub fn caller_id<B>(req: Option<&Request<B>>) -> i64 {
    req.map_or(0, |r| id_from_headers(r.headers(), &HEADER_CALLER_ID))
}

/// Verified client identity previously injected by the gate.
///
/// Same degradation rules as [`caller_id`].
pub fn client_id<B>(req: Option<&Request<B>>) -> i64 {
    req.map_or(0, |r| id_from_headers(r.headers(), &HEADER_CLIENT_ID))
}

/// Remove any inbound identity headers from the request.
///
/// Runs before validation on every pass: a request must never carry
/// attacker-supplied identity into the trust boundary.
pub fn strip_identity<B>(req: &mut Request<B>) {
    req.headers_mut().remove(&HEADER_CALLER_ID);
    req.headers_mut().remove(&HEADER_CLIENT_ID);
}

pub(crate) fn id_from_headers(headers: &HeaderMap, name: &HeaderName) -> i64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}
