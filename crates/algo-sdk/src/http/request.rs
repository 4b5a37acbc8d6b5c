//! HTTP request builder and retry loop

use std::time::Duration;

use http::{HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;
use url::Url;

use super::Response;
use crate::error::{Error, Result, is_retryable_status};

/// Longest backoff gap between attempts.
const BACKOFF_CAP: Duration = Duration::from_secs(32);

/// Backoff gap inserted after failed attempt `attempt` (0-based).
///
/// Exponential, 1s doubling per attempt, capped. Monotonically
/// non-decreasing in the attempt number.
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    let exp = attempt.min(63);
    BACKOFF_CAP.min(Duration::from_secs(1u64.checked_shl(exp).unwrap_or(u64::MAX)))
}

/// Builder for a single API request.
///
/// Obtained from [`HttpTransport::request`](super::HttpTransport::request)
/// with authentication and default headers already attached. `send()` runs
/// the full retry loop and resolves to either a decoded [`Response`] or a
/// classified [`Error`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    timeout: Duration,
    max_retries: u32,
    http_client: Option<reqwest::Client>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
            timeout: crate::config::DEFAULT_TIMEOUT,
            max_retries: crate::config::DEFAULT_MAX_RETRIES,
            http_client: None,
        }
    }

    /// Set the HTTP client to use.
    pub(crate) fn with_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Set a header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value contains invalid
    /// characters.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Append a query parameter.
    ///
    /// Keys with empty values are omitted rather than sent as `key=`.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.is_empty() {
            self.url.query_pairs_mut().append_pair(key, &value);
        }
        self
    }

    /// Append a query parameter when the value is present.
    ///
    /// Absent values are omitted entirely, never sent as empty or null.
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Set a JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    /// Override the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Send the request, retrying transient failures with backoff.
    ///
    /// A request is retried with identical method, URL, query and body only
    /// when no response was received (connect failure or timeout) or the
    /// status is one of {429, 500, 502, 503, 504}. Any other status is
    /// terminal on first receipt. After `max_retries` retries the last
    /// failure surfaces; a `Retry-After` header on a 429 overrides the
    /// computed backoff for that gap.
    ///
    /// Retries replay non-idempotent bodies verbatim, so a POST whose
    /// success response was lost in transit can execute twice server-side.
    pub async fn send(self) -> Result<Response> {
        let client = self
            .http_client
            .ok_or_else(|| Error::HttpClient("no HTTP client configured".to_string()))?;

        let mut req = client
            .request(self.method.clone(), self.url.as_str())
            .timeout(self.timeout);

        for (key, value) in &self.headers {
            req = req.header(key, value);
        }

        if let Some(body) = self.body {
            req = req.body(body);
        }

        // Call-local retry state; attempts are strictly sequential.
        let mut attempt: u32 = 0;
        loop {
            let outcome = req
                .try_clone()
                .ok_or_else(|| Error::HttpClient("could not clone request".to_string()))?
                .send()
                .await;

            match outcome {
                Ok(resp) => {
                    let status = resp.status();
                    let headers = resp.headers().clone();
                    let body = resp
                        .bytes()
                        .await
                        .map_err(|e| Error::Transport(e.to_string()))?
                        .to_vec();

                    if !status.is_client_error() && !status.is_server_error() {
                        return Ok(Response::new(status, headers, body));
                    }

                    // Retry eligibility is a function of the raw status,
                    // decided before classification.
                    if is_retryable_status(status.as_u16()) && attempt < self.max_retries {
                        let delay = retry_after_hint(&headers)
                            .unwrap_or_else(|| backoff_delay(attempt));
                        tracing::debug!(
                            status = status.as_u16(),
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "retrying request after transient error status"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                        continue;
                    }

                    return Err(Error::from_response(status.as_u16(), &headers, &body));
                }
                Err(e) if e.is_timeout() => {
                    if attempt >= self.max_retries {
                        return Err(Error::Timeout(self.timeout));
                    }
                    let delay = backoff_delay(attempt);
                    tracing::debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "request timed out, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) if e.is_connect() => {
                    if attempt >= self.max_retries {
                        return Err(Error::Transport(e.to_string()));
                    }
                    let delay = backoff_delay(attempt);
                    tracing::debug!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "connection failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(Error::Transport(e.to_string()));
                }
            }
        }
    }

    /// Get the method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn retry_after_hint(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(http::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(path: &str) -> RequestBuilder {
        let url = format!("http://localhost:4000/api/v1{path}").parse().unwrap();
        RequestBuilder::new(Method::GET, url)
    }

    #[test]
    fn test_query_appends_pairs() {
        let request = builder("/users").query("page", 2).query("limit", 20);
        assert_eq!(
            request.url().as_str(),
            "http://localhost:4000/api/v1/users?page=2&limit=20"
        );
    }

    #[test]
    fn test_query_omits_empty_values() {
        let request = builder("/users").query("search", "");
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn test_query_opt_omits_absent_values() {
        let request = builder("/users")
            .query_opt("search", None::<String>)
            .query_opt("page", Some(1));
        assert_eq!(request.url().query(), Some("page=1"));
    }

    #[test]
    fn test_json_body_is_serialized() {
        let request = builder("/users")
            .json(&serde_json::json!({"email": "dev@algo.dev"}))
            .unwrap();
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"email":"dev@algo.dev"}"#.as_slice())
        );
    }

    #[test]
    fn test_invalid_header_name_rejected() {
        let result = builder("/users").header("bad header", "x");
        assert!(matches!(result, Err(Error::InvalidHeaderName(_))));
    }

    #[test]
    fn test_backoff_delay_growth() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
        assert_eq!(backoff_delay(5), BACKOFF_CAP);
        assert_eq!(backoff_delay(100), BACKOFF_CAP);
    }

    #[test]
    fn test_retry_after_hint_parses_seconds() {
        let mut headers = HeaderMap::new();
        headers.insert("retry-after", "3".parse().unwrap());
        assert_eq!(retry_after_hint(&headers), Some(Duration::from_secs(3)));

        headers.insert("retry-after", "soon".parse().unwrap());
        assert_eq!(retry_after_hint(&headers), None);
    }
}
