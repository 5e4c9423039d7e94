//! Credential validation against the remote identity authority.
//!
//! [`AuthorityClient`] is the capability interface the gate depends on;
//! [`HttpAuthorityClient`] is the production implementation over
//! `reqwest`. Tests substitute deterministic implementations of the trait
//! (or point the HTTP client at a mock server) without a real network.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::AuthorityConfig;
use crate::error::AuthError;
use crate::token::AccessToken;

/// Path prefix for the authority's access-token resource.
const ACCESS_TOKEN_PREFIX: &str = "oauth/access_token";

const TRANSPORT_FAILURE: &str = "invalid rest client response when trying to get access token";

/// Capability interface for access-token lookup.
///
/// Implementations must be safe for concurrent use by many requests
/// simultaneously.
#[async_trait]
pub trait AuthorityClient: Send + Sync {
    /// Resolve a token identifier to its verified access-token record.
    ///
    /// # Errors
    ///
    /// Returns the authority's own classified error when it rejects the
    /// token, or an internal-service [`AuthError`] when the exchange itself
    /// fails (transport error, unparsable payload).
    async fn get_access_token(&self, token_id: &str) -> Result<AccessToken, AuthError>;
}

/// HTTP client for the identity authority.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted
/// and pools connections across clones.
#[derive(Debug, Clone)]
pub struct HttpAuthorityClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl HttpAuthorityClient {
    /// Create a client from configuration.
    ///
    /// The timeout applies per request: a lookup that exceeds it surfaces
    /// as the internal-service transport failure, never a hang.
    ///
    /// # Errors
    ///
    /// Returns an internal-service [`AuthError`] if the underlying HTTP
    /// client cannot be built.
    pub fn new(config: &AuthorityConfig) -> Result<Self, AuthError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                AuthError::internal_service(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }
}

#[async_trait]
impl AuthorityClient for HttpAuthorityClient {
    async fn get_access_token(&self, token_id: &str) -> Result<AccessToken, AuthError> {
        let url = format!("{}{ACCESS_TOKEN_PREFIX}/{token_id}", self.base_url);

        let resp = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            Err(err) => {
                tracing::warn!(error = %err, "no usable response from identity authority");
                return Err(AuthError::internal_service(TRANSPORT_FAILURE));
            }
        };

        let status = resp.status().as_u16();
        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "identity authority response body unreadable");
                return Err(AuthError::internal_service(TRANSPORT_FAILURE));
            }
        };

        if status > 299 {
            // The authority classified the failure itself; forward its
            // payload unchanged so callers see the authority's own status
            // and message (e.g. not_found vs unauthorized).
            let authority_err: AuthError = serde_json::from_slice(&body)
                .map_err(|_| AuthError::internal_service("invalid error interface"))?;
            tracing::debug!(status = authority_err.status, "authority rejected access token");
            return Err(authority_err);
        }

        serde_json::from_slice(&body).map_err(|_| {
            AuthError::internal_service("error when unmarshal access token response")
        })
    }
}
