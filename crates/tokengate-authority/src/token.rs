//! Access-token records returned by the identity authority.

use serde::{Deserialize, Serialize};

/// An access token as described by the identity authority.
///
/// Owned by the authority; the gate holds a request-scoped copy only and
/// never persists it. `serde(deny_unknown_fields)` is intentionally not
/// used, for resilience against authority schema evolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The credential identifier presented by the client.
    pub id: String,
    /// Verified end-user (caller) identifier.
    pub user_id: i64,
    /// Verified OAuth client identifier.
    pub client_id: i64,
}
