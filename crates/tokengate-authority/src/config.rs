//! Identity authority client configuration.
//!
//! Configures the authority base URL and the per-request timeout. Defaults
//! point at a local authority instance; override via environment variables
//! or explicit construction for staging/testing.

use url::Url;

/// Default per-request timeout for authority lookups, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 200;

const DEFAULT_AUTHORITY_URL: &str = "http://localhost:8080";

/// Configuration for connecting to the identity authority.
#[derive(Debug, Clone)]
pub struct AuthorityConfig {
    /// Base URL of the identity authority.
    pub base_url: Url,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl AuthorityConfig {
    /// Create a configuration for the given authority with the default timeout.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `TOKENGATE_AUTHORITY_URL` (default: `http://localhost:8080`)
    /// - `TOKENGATE_TIMEOUT_MS` (default: 200)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_url("TOKENGATE_AUTHORITY_URL", DEFAULT_AUTHORITY_URL)?;

        let timeout_ms = match std::env::var("TOKENGATE_TIMEOUT_MS") {
            Err(_) => DEFAULT_TIMEOUT_MS,
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::InvalidTimeout("TOKENGATE_TIMEOUT_MS".to_string(), raw)
            })?,
        };

        Ok(Self {
            base_url,
            timeout_ms,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout for {0}: not a millisecond count: {1}")]
    InvalidTimeout(String, String),
}
