//! Classified credential-validation failures.
//!
//! [`AuthError`] shares the identity authority's wire format, so the same
//! type parses authority error payloads and serializes gate responses. An
//! authority rejection (unknown token, expired token) travels through the
//! gate with its status and message untouched; only failures of the gate's
//! own exchange with the authority are minted locally, always as the
//! internal-service class.

use serde::{Deserialize, Serialize};

/// A classified credential-validation failure.
///
/// `status` and `message` are required on the wire; `error` is the
/// machine-readable kind and defaults to empty when the authority omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct AuthError {
    /// HTTP status associated with the failure.
    pub status: u16,
    /// Human-readable description.
    pub message: String,
    /// Machine-readable kind, e.g. `not_found` or `unauthorized`.
    #[serde(default)]
    pub error: String,
}

impl AuthError {
    /// A failure of the gate's own exchange with the authority (500).
    pub fn internal_service(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            error: "internal_server_error".to_string(),
        }
    }

    /// A malformed-request rejection (400).
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: 400,
            message: message.into(),
            error: "bad_request".to_string(),
        }
    }

    /// An unknown-credential rejection (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: 404,
            message: message.into(),
            error: "not_found".to_string(),
        }
    }

    /// A rejected-credential failure (401).
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: 401,
            message: message.into(),
            error: "unauthorized".to_string(),
        }
    }

    /// Whether this failure originated inside the gate rather than as an
    /// authority rejection. Internal failures are safe to render as a
    /// 500-equivalent; everything else carries the authority's verdict.
    pub fn is_internal(&self) -> bool {
        self.status >= 500
    }
}
