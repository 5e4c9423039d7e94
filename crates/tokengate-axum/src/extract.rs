//! Typed extraction of gate-verified identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::trust::{id_from_headers, HEADER_CALLER_ID, HEADER_CLIENT_ID};

/// Identity established by the gate for the current request.
///
/// Zero values are the anonymous sentinel: no credential was presented, or
/// the route was public and skipped validation. The extractor never
/// rejects; handlers decide what anonymity means for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Verified end-user identifier, `0` when anonymous.
    pub caller_id: i64,
    /// Verified OAuth client identifier, `0` when anonymous.
    pub client_id: i64,
}

impl CallerIdentity {
    /// Whether the gate verified a credential for this request.
    pub fn is_authenticated(&self) -> bool {
        self.caller_id != 0
    }
}

#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CallerIdentity {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            caller_id: id_from_headers(&parts.headers, &HEADER_CALLER_ID),
            client_id: id_from_headers(&parts.headers, &HEADER_CLIENT_ID),
        })
    }
}
