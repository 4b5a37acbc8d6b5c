//! Shared helpers for integration tests

use algo_sdk::Client;

/// API key used by tests that assert on the Authorization header.
pub fn test_api_key() -> String {
    "test-api-key-12345".to_string()
}

/// Build a client pointed at a mock server, with fast-fail retries so test
/// failures do not hang behind backoff sleeps.
pub fn test_client(uri: &str) -> Client {
    Client::builder()
        .api_key(test_api_key())
        .base_url(uri)
        .max_retries(0)
        .build()
        .expect("failed to build test client")
}

/// A minimal valid user envelope body.
pub fn user_envelope() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "id": 1,
            "email": "dev@algo.dev",
            "username": "dev",
            "created_at": "2024-01-15T10:00:00Z"
        }
    })
}
