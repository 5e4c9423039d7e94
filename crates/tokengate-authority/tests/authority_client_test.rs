//! Contract tests for `HttpAuthorityClient` against a mocked identity
//! authority.
//!
//! | Authority behavior | Expected classification |
//! |--------------------|-------------------------|
//! | 200 with a valid record | record returned |
//! | 404 with an error payload | payload forwarded verbatim |
//! | non-2xx with an unparsable body | "invalid error interface" |
//! | 200 with an unparsable body | "error when unmarshal access token response" |
//! | unreachable / timed out | "invalid rest client response when trying to get access token" |

use std::time::Duration;

use tokengate_authority::{AuthError, AuthorityClient, AuthorityConfig, HttpAuthorityClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRANSPORT_FAILURE: &str = "invalid rest client response when trying to get access token";

fn test_client(server: &MockServer) -> HttpAuthorityClient {
    let config = AuthorityConfig {
        base_url: server.uri().parse().unwrap(),
        timeout_ms: 1_000,
    };
    HttpAuthorityClient::new(&config).unwrap()
}

// ── Success path ─────────────────────────────────────────────────────

#[tokio::test]
async fn valid_token_returns_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ABC123",
            "user_id": 7,
            "client_id": 3
        })))
        .mount(&server)
        .await;

    let token = test_client(&server)
        .get_access_token("ABC123")
        .await
        .unwrap();
    assert_eq!(token.id, "ABC123");
    assert_eq!(token.user_id, 7);
    assert_eq!(token.client_id, 3);
}

#[tokio::test]
async fn record_deserializes_with_unknown_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ABC123",
            "user_id": 7,
            "client_id": 3,
            "scope": "read write"
        })))
        .mount(&server)
        .await;

    let token = test_client(&server)
        .get_access_token("ABC123")
        .await
        .unwrap();
    assert_eq!(token.user_id, 7);
}

// ── Authority rejections ─────────────────────────────────────────────

#[tokio::test]
async fn authority_error_payload_is_forwarded_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/UNKNOWN"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": 404,
            "message": "token not found",
            "error": "not_found"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_access_token("UNKNOWN")
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::not_found("token not found"));
    assert!(!err.is_internal());
}

#[tokio::test]
async fn authority_unauthorized_stays_distinct_from_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/EXPIRED"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": 401,
            "message": "access token expired",
            "error": "unauthorized"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_access_token("EXPIRED")
        .await
        .unwrap_err();
    assert_eq!(err.status, 401);
    assert_eq!(err.message, "access token expired");
}

#[tokio::test]
async fn unparsable_error_payload_is_internal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/ABC123"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>upstream broke</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_access_token("ABC123")
        .await
        .unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "invalid error interface");
}

// ── Gate-side transport failures ─────────────────────────────────────

#[tokio::test]
async fn unreachable_authority_is_transport_failure() {
    // Nothing listens on this port; the connect itself fails.
    let config = AuthorityConfig {
        base_url: "http://127.0.0.1:9".parse().unwrap(),
        timeout_ms: 1_000,
    };
    let client = HttpAuthorityClient::new(&config).unwrap();

    let err = client.get_access_token("ABC123").await.unwrap_err();
    assert_eq!(err.status, 500);
    assert_eq!(err.message, TRANSPORT_FAILURE);
}

#[tokio::test]
async fn slow_authority_times_out_as_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/ABC123"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "ABC123", "user_id": 7, "client_id": 3}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = AuthorityConfig {
        base_url: server.uri().parse().unwrap(),
        timeout_ms: 50,
    };
    let client = HttpAuthorityClient::new(&config).unwrap();

    let err = client.get_access_token("ABC123").await.unwrap_err();
    assert_eq!(err.message, TRANSPORT_FAILURE);
}

#[tokio::test]
async fn malformed_success_payload_is_internal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_access_token("ABC123")
        .await
        .unwrap_err();
    assert_eq!(err.message, "error when unmarshal access token response");
}

#[tokio::test]
async fn empty_success_body_is_unmarshal_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/access_token/ABC123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .get_access_token("ABC123")
        .await
        .unwrap_err();
    assert_eq!(err.message, "error when unmarshal access token response");
}
