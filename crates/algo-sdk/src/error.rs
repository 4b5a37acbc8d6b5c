//! Error types for the Algo SDK
//!
//! This module provides the SDK's error taxonomy, following Rust idioms with
//! the `thiserror` crate: every failed operation resolves to exactly one
//! `Error` value carrying the HTTP status and response body where available.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Result type alias for operations that can fail with an Algo SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// HTTP status codes that are retried with backoff.
///
/// Any status outside this set is terminal on first receipt.
pub const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Whether a raw HTTP status is eligible for retry.
///
/// This is evaluated on the raw status before classification; the resulting
/// `Error` variant plays no part in the retry decision.
pub fn is_retryable_status(status: u16) -> bool {
    RETRYABLE_STATUSES.contains(&status)
}

/// Main error type for the Algo SDK.
///
/// API-level variants (`Authentication` through `Api`) are produced by
/// [`Error::from_response`] and carry the original status code and the
/// decoded response body for caller inspection. `Transport` and `Timeout`
/// cover failures where no response was received.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or connection failure; no response was received.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The request exceeded the configured wall-clock timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Authentication failed (401).
    #[error("Authentication failed: {message}")]
    Authentication {
        /// Error message from the API
        message: String,
        /// Response body, if any
        body: Option<Value>,
    },

    /// Resource not found (404).
    #[error("Resource not found: {message}")]
    NotFound {
        /// Error message from the API
        message: String,
        /// Response body, if any
        body: Option<Value>,
    },

    /// Request validation failed (400).
    #[error("Validation failed: {message}")]
    Validation {
        /// Error message from the API
        message: String,
        /// Response body, if any
        body: Option<Value>,
    },

    /// Rate limit exceeded (429).
    #[error("Rate limit exceeded: {message}")]
    RateLimit {
        /// Error message from the API
        message: String,
        /// Time to wait before retrying, if provided by the API
        retry_after: Option<Duration>,
        /// Response body, if any
        body: Option<Value>,
    },

    /// Generic API error for status codes >= 400 not covered above.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
        /// Response body, if any
        body: Option<Value>,
    },

    /// Failed to deserialize a success response.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Classify an HTTP error response (status >= 400) into an error value.
    ///
    /// The body is decoded as JSON when possible; otherwise the raw text is
    /// preserved so callers never lose the server's payload.
    pub fn from_response(status: u16, headers: &http::HeaderMap, body: &[u8]) -> Self {
        let body = decode_body(body);

        match status {
            401 => Error::Authentication {
                message: extract_message(body.as_ref(), "authentication failed"),
                body,
            },
            404 => Error::NotFound {
                message: extract_message(body.as_ref(), "resource not found"),
                body,
            },
            400 => Error::Validation {
                message: extract_message(body.as_ref(), "validation failed"),
                body,
            },
            429 => Error::RateLimit {
                message: extract_message(body.as_ref(), "rate limit exceeded"),
                retry_after: parse_retry_after(headers),
                body,
            },
            _ => Error::Api {
                status,
                message: extract_message(body.as_ref(), "unexpected API error"),
                body,
            },
        }
    }

    /// The HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { .. } => Some(401),
            Error::NotFound { .. } => Some(404),
            Error::Validation { .. } => Some(400),
            Error::RateLimit { .. } => Some(429),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The response body associated with this error, if any.
    pub fn response_body(&self) -> Option<&Value> {
        match self {
            Error::Authentication { body, .. }
            | Error::NotFound { body, .. }
            | Error::Validation { body, .. }
            | Error::RateLimit { body, .. }
            | Error::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Check if this error would have been eligible for retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport(_) | Error::Timeout(_) | Error::RateLimit { .. } => true,
            Error::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }

    /// Get the retry delay requested by the server, if any.
    pub fn retry_after(&self) -> Option<Duration> {
        if let Error::RateLimit { retry_after, .. } = self {
            *retry_after
        } else {
            None
        }
    }
}

fn decode_body(body: &[u8]) -> Option<Value> {
    if body.is_empty() {
        return None;
    }
    match serde_json::from_slice(body) {
        Ok(value) => Some(value),
        // Non-JSON bodies are surfaced verbatim as a string
        Err(_) => Some(Value::String(String::from_utf8_lossy(body).into_owned())),
    }
}

/// Pull a human-readable message out of common error body shapes:
/// `{"error": "..."}`, `{"message": "..."}` or `{"error": {"message": "..."}}`.
fn extract_message(body: Option<&Value>, fallback: &str) -> String {
    body.and_then(|v| {
        v.get("error")
            .and_then(Value::as_str)
            .or_else(|| v.get("message").and_then(Value::as_str))
            .or_else(|| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(Value::as_str)
            })
    })
    .map(str::to_string)
    .unwrap_or_else(|| fallback.to_string())
}

fn parse_retry_after(headers: &http::HeaderMap) -> Option<Duration> {
    headers
        .get(http::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn no_headers() -> http::HeaderMap {
        http::HeaderMap::new()
    }

    #[test]
    fn test_classify_401() {
        let body = br#"{"error": "invalid api key"}"#;
        let error = Error::from_response(401, &no_headers(), body);

        assert_matches!(&error, Error::Authentication { message, .. } if message == "invalid api key");
        assert_eq!(error.status_code(), Some(401));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_classify_404() {
        let error = Error::from_response(404, &no_headers(), b"");

        assert_matches!(&error, Error::NotFound { message, body } => {
            assert_eq!(message, "resource not found");
            assert!(body.is_none());
        });
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_classify_400_preserves_body() {
        let body = br#"{"error": {"message": "name is required", "field": "name"}}"#;
        let error = Error::from_response(400, &no_headers(), body);

        assert_matches!(&error, Error::Validation { message, .. } if message == "name is required");
        assert_eq!(
            error.response_body().unwrap()["error"]["field"],
            serde_json::json!("name")
        );
    }

    #[test]
    fn test_classify_429_with_retry_after() {
        let mut headers = http::HeaderMap::new();
        headers.insert("retry-after", "7".parse().unwrap());

        let error = Error::from_response(429, &headers, br#"{"error": "rate limited"}"#);

        assert_matches!(&error, Error::RateLimit { .. });
        assert_eq!(error.retry_after(), Some(Duration::from_secs(7)));
        assert_eq!(
            error.response_body(),
            Some(&serde_json::json!({"error": "rate limited"}))
        );
        assert!(error.is_retryable());
    }

    #[test]
    fn test_classify_other_statuses_as_generic_api_error() {
        for status in [403, 409, 422, 500, 503] {
            let error = Error::from_response(status, &no_headers(), b"{}");
            assert_matches!(&error, Error::Api { status: s, .. } if *s == status);
            assert_eq!(error.status_code(), Some(status));
        }
    }

    #[test]
    fn test_non_json_body_surfaced_verbatim() {
        let error = Error::from_response(502, &no_headers(), b"Bad Gateway");

        assert_eq!(
            error.response_body(),
            Some(&Value::String("Bad Gateway".to_string()))
        );
    }

    #[test]
    fn test_retryable_status_set() {
        for status in RETRYABLE_STATUSES {
            assert!(is_retryable_status(status));
        }
        for status in [400, 401, 403, 404, 408, 422, 501, 505] {
            assert!(!is_retryable_status(status), "{status} must be terminal");
        }
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(Error::Transport("connection refused".to_string()).is_retryable());
        assert!(Error::Timeout(Duration::from_secs(30)).is_retryable());
        assert!(
            Error::Api {
                status: 503,
                message: "unavailable".to_string(),
                body: None,
            }
            .is_retryable()
        );

        assert!(
            !Error::NotFound {
                message: "missing".to_string(),
                body: None,
            }
            .is_retryable()
        );
        assert!(!Error::ResponseValidation("bad json".to_string()).is_retryable());
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        assert_eq!(Error::Transport("dns failure".to_string()).status_code(), None);
        assert_eq!(Error::Timeout(Duration::from_secs(1)).status_code(), None);
    }
}
