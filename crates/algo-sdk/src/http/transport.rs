//! HTTP transport for the Algo API
//!
//! The transport owns the connection pool and the immutable client
//! configuration. It hands out [`RequestBuilder`]s with authentication and
//! default headers already attached; the retry loop itself lives in
//! [`RequestBuilder::send`].

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{Method, RequestBuilder};
use crate::error::{Error, Result};

/// HTTP transport for the Algo API.
///
/// Cheap to clone; the connection pool and configuration are shared behind an
/// `Arc` and immutable after construction, so the transport is safe for
/// concurrent use without external locking.
///
/// # Example
///
/// ```rust,no_run
/// use algo_sdk::http::HttpTransport;
///
/// let transport = HttpTransport::builder()
///     .api_key("algo-...")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    inner: Arc<TransportInner>,
}

#[derive(Debug)]
struct TransportInner {
    /// HTTP client owning the connection pool
    http_client: reqwest::Client,
    /// Base URL, normalized without a trailing slash
    base_url: String,
    /// API key for bearer authentication
    api_key: Option<SecretString>,
    /// Wall-clock timeout per request attempt
    timeout: Duration,
    /// Maximum number of retries for transient failures
    max_retries: u32,
    /// Custom headers to include with every request
    default_headers: http::HeaderMap,
}

impl HttpTransport {
    /// Create a new builder for configuring the transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Create a request builder for the given method and endpoint path.
    ///
    /// The target URL is the configured base URL concatenated with `path`
    /// (which must start with `/`). Static headers are attached here once;
    /// they are not re-derived per attempt.
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url: Url = format!("{}{}", self.inner.base_url, path)
            .parse()
            .map_err(|e| {
                Error::InvalidUrl(format!("failed to construct URL from path '{path}': {e}"))
            })?;

        let mut builder = RequestBuilder::new(method, url)
            .with_client(self.inner.http_client.clone())
            .timeout(self.inner.timeout)
            .max_retries(self.inner.max_retries)
            .header("content-type", "application/json")?;

        if let Some(api_key) = &self.inner.api_key {
            builder = builder.header(
                "authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )?;
        }

        for (key, value) in &self.inner.default_headers {
            if let Ok(value_str) = value.to_str() {
                builder = builder.header(key.as_str(), value_str)?;
            }
        }

        Ok(builder)
    }

    /// Get the base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }
}

/// Builder for creating an [`HttpTransport`] with custom configuration.
#[derive(Default)]
pub struct HttpTransportBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    default_headers: http::HeaderMap,
}

impl HttpTransportBuilder {
    /// Set the API key for bearer authentication.
    ///
    /// When absent, requests are sent without an `Authorization` header.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    ///
    /// Defaults to `http://localhost:4000/api/v1`. A trailing slash is
    /// stripped so endpoint paths can always start with `/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the per-attempt request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries for transient failures.
    ///
    /// Defaults to 3 retries (4 attempts total).
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Add a custom header to include with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<http::HeaderName>()
            .map_err(|_| Error::InvalidHeaderName(key_str))?;
        let value = value_str
            .parse::<http::HeaderValue>()
            .map_err(|_| Error::InvalidHeaderValue(value_str))?;

        self.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the transport with the configured settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or HTTP client creation
    /// fails.
    pub fn build(self) -> Result<HttpTransport> {
        let timeout = self
            .timeout
            .unwrap_or(crate::config::DEFAULT_TIMEOUT);

        let http_client = reqwest::Client::builder()
            .user_agent(format!("algo-sdk-rust/{}", crate::VERSION))
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        let base_url_string = self
            .base_url
            .unwrap_or_else(|| crate::DEFAULT_BASE_URL.to_string());

        if base_url_string.trim().is_empty() {
            return Err(Error::InvalidUrl("base URL cannot be empty".to_string()));
        }

        let base_url: Url = base_url_string
            .parse()
            .map_err(|e| Error::InvalidUrl(format!("{e}")))?;

        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(Error::InvalidUrl(format!(
                    "invalid URL scheme '{scheme}': only 'http' and 'https' are supported"
                )));
            }
        }

        let inner = Arc::new(TransportInner {
            http_client,
            base_url: base_url_string.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            timeout,
            max_retries: self
                .max_retries
                .unwrap_or(crate::config::DEFAULT_MAX_RETRIES),
            default_headers: self.default_headers,
        });

        Ok(HttpTransport { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let transport = HttpTransport::builder().build().unwrap();

        assert_eq!(transport.base_url(), "http://localhost:4000/api/v1");
        assert_eq!(transport.inner.timeout, Duration::from_secs(30));
        assert_eq!(transport.inner.max_retries, 3);
        assert!(transport.inner.api_key.is_none());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let transport = HttpTransport::builder()
            .base_url("https://algo.example.com/api/v1/")
            .build()
            .unwrap();

        assert_eq!(transport.base_url(), "https://algo.example.com/api/v1");
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        let result = HttpTransport::builder()
            .base_url("ftp://algo.example.com")
            .build();

        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_rejects_empty_url() {
        let result = HttpTransport::builder().base_url("   ").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_request_url_is_base_plus_path() {
        let transport = HttpTransport::builder()
            .base_url("https://algo.example.com/api/v1")
            .build()
            .unwrap();

        let request = transport.request(Method::GET, "/projects/42").unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://algo.example.com/api/v1/projects/42"
        );
    }

    #[test]
    fn test_request_carries_auth_header_when_configured() {
        let transport = HttpTransport::builder()
            .api_key("secret")
            .build()
            .unwrap();

        let request = transport.request(Method::GET, "/users").unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer secret"
        );
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_request_without_api_key_has_no_auth_header() {
        let transport = HttpTransport::builder().build().unwrap();

        let request = transport.request(Method::GET, "/users").unwrap();
        assert!(!request.headers().contains_key("authorization"));
    }

    #[test]
    fn test_custom_default_headers_attached() {
        let transport = HttpTransport::builder()
            .header("x-algo-trace", "on")
            .unwrap()
            .build()
            .unwrap();

        let request = transport.request(Method::GET, "/users").unwrap();
        assert_eq!(request.headers().get("x-algo-trace").unwrap(), "on");
    }
}
