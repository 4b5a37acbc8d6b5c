//! Integration tests for the transport's retry, authentication and error
//! classification behavior, using wiremock as the API stand-in.

mod common;

use std::time::Duration;

use algo_sdk::{Client, Error};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 500 on the first attempts, 200 on the next: the call succeeds and the
/// server sees exactly failed + 1 attempts.
#[tokio::test]
async fn test_transient_500_is_retried_until_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_envelope()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .max_retries(2)
        .build()
        .unwrap();

    let user = client.users().get(1).await.expect("request should recover");
    assert_eq!(user.id, 1);
    assert_eq!(user.email, "dev@algo.dev");

    mock_server.verify().await;
}

/// A 404 is terminal: exactly one attempt, classified as NotFound.
#[tokio::test]
async fn test_not_found_is_never_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "project not found"
            })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .max_retries(3)
        .build()
        .unwrap();

    let error = client.projects().get(99).await.unwrap_err();

    assert!(matches!(error, Error::NotFound { .. }));
    assert_eq!(error.status_code(), Some(404));

    mock_server.verify().await;
}

/// A server that always answers 503 exhausts the retry budget: the server
/// sees max_retries + 1 attempts and the last failure surfaces.
#[tokio::test]
async fn test_persistent_503_exhausts_retries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/deployments/5"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .max_retries(2)
        .build()
        .unwrap();

    let error = client.deployments().get(5).await.unwrap_err();

    assert!(matches!(error, Error::Api { status: 503, .. }));
    assert_eq!(error.status_code(), Some(503));

    mock_server.verify().await;
}

/// 429 is retried per policy; on exhaustion the RateLimit error carries the
/// original status and body. Retry-After: 0 keeps the test fast and must be
/// honored without panicking.
#[tokio::test]
async fn test_rate_limit_preserves_body_after_exhaustion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/billing"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_json(serde_json::json!({"error": "rate limited"})),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .max_retries(1)
        .build()
        .unwrap();

    let error = client.billing().get(None, None).await.unwrap_err();

    assert!(matches!(error, Error::RateLimit { .. }));
    assert_eq!(error.status_code(), Some(429));
    assert_eq!(
        error.response_body(),
        Some(&serde_json::json!({"error": "rate limited"}))
    );

    mock_server.verify().await;
}

/// Every request carries the configured bearer token.
#[tokio::test]
async fn test_bearer_token_sent_on_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .and(header("authorization", "Bearer secret"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_envelope()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("secret")
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    client.users().get(1).await.unwrap();

    mock_server.verify().await;
}

/// Without an API key the Authorization header is absent entirely.
#[tokio::test]
async fn test_no_authorization_header_without_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_envelope()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    client.users().get(1).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

/// An attempt that exceeds the wall-clock timeout is a transport failure,
/// not an application error.
#[tokio::test]
async fn test_timeout_is_a_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::user_envelope())
                .set_delay(Duration::from_millis(250)),
        )
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::test_api_key())
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .max_retries(0)
        .build()
        .unwrap();

    let error = client.users().get(1).await.unwrap_err();

    assert!(matches!(error, Error::Timeout(_)));
    assert_eq!(error.status_code(), None);
}

/// Explicit overrides win over whatever the environment provides: the client
/// targets the override base URL and sends the override key.
#[cfg(feature = "env")]
#[tokio::test]
async fn test_from_env_with_overrides_takes_precedence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/1"))
        .and(header("authorization", "Bearer override-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::user_envelope()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::from_env_with(
        algo_sdk::ClientConfigBuilder::new()
            .api_key("override-key")
            .base_url(mock_server.uri())
            .max_retries(0)
            .build(),
    )
    .unwrap();

    client.users().get(1).await.unwrap();

    mock_server.verify().await;
}

/// A terminal 400 surfaces as a Validation error with the body attached.
#[tokio::test]
async fn test_validation_error_propagates_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "email already taken"
            })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());

    let params = algo_sdk::UserCreateParams::builder()
        .email("dev@algo.dev")
        .username("dev")
        .password("hunter2")
        .build()
        .unwrap();

    let error = client.users().create(params).await.unwrap_err();

    assert!(matches!(error, Error::Validation { .. }));
    assert_eq!(error.status_code(), Some(400));
    assert_eq!(
        error.response_body(),
        Some(&serde_json::json!({"error": "email already taken"}))
    );
}
