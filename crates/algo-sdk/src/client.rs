//! Main client implementation for the Algo API

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{
    config::ClientConfig,
    error::Result,
    http::{HttpTransport, Method, RequestBuilder},
    resources::{Ai, Billing, Deployments, Files, Projects, Resources, Users, Webhooks},
};

/// Main client for interacting with the Algo platform API.
///
/// The client provides access to all API endpoints and handles
/// authentication, retries and response decoding through a shared transport.
/// Cloning is cheap; clones share configuration and the connection pool.
///
/// # Example
///
/// ```rust,no_run
/// use algo_sdk::Client;
///
/// let client = Client::new("algo-...");
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// Transport executing every request (auth, retries, decoding)
    transport: HttpTransport,

    // Lazy-initialized resources
    users: OnceLock<Users>,
    projects: OnceLock<Projects>,
    files: OnceLock<Files>,
    deployments: OnceLock<Deployments>,
    webhooks: OnceLock<Webhooks>,
    resources: OnceLock<Resources>,
    billing: OnceLock<Billing>,
    ai: OnceLock<Ai>,
}

impl Client {
    /// Create a new client with an API key and default configuration.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the
    /// default configuration. For fallible construction use
    /// [`Client::try_new()`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder()
            .api_key(api_key)
            .build()
            .expect("failed to build client with default configuration")
    }

    /// Create a new client with an API key (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or HTTP client
    /// configuration fails.
    pub fn try_new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> AlgoClientBuilder {
        AlgoClientBuilder::default()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut transport_builder = HttpTransport::builder()
            .timeout(config.timeout)
            .max_retries(config.max_retries);

        if let Some(api_key) = config.api_key {
            transport_builder = transport_builder.api_key(api_key.expose_secret());
        }
        if let Some(base_url) = config.base_url {
            transport_builder = transport_builder.base_url(base_url);
        }
        for (key, value) in config.default_headers {
            if let (Some(key), Ok(value_str)) = (key, value.to_str()) {
                transport_builder = transport_builder.header(key.as_str(), value_str)?;
            }
        }

        let transport = transport_builder.build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                users: OnceLock::new(),
                projects: OnceLock::new(),
                files: OnceLock::new(),
                deployments: OnceLock::new(),
                webhooks: OnceLock::new(),
                resources: OnceLock::new(),
                billing: OnceLock::new(),
                ai: OnceLock::new(),
            }),
        })
    }

    /// Create a client from environment variables (`ALGO_API_KEY`,
    /// `ALGO_BASE_URL`, `ALGO_TIMEOUT`, `ALGO_MAX_RETRIES`).
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Create a client from environment variables, with explicit overrides
    /// taking precedence over anything found in the environment.
    ///
    /// ```rust,no_run
    /// use algo_sdk::{Client, ClientConfigBuilder};
    ///
    /// # fn main() -> algo_sdk::Result<()> {
    /// let client = Client::from_env_with(
    ///     ClientConfigBuilder::new()
    ///         .base_url("http://localhost:4000/api/v1")
    ///         .build(),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "env")]
    pub fn from_env_with(overrides: ClientConfig) -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?.merge(overrides))
    }

    /// Access the Users API endpoint.
    pub fn users(&self) -> &Users {
        self.inner.users.get_or_init(|| Users::new(self.clone()))
    }

    /// Access the Projects API endpoint.
    pub fn projects(&self) -> &Projects {
        self.inner
            .projects
            .get_or_init(|| Projects::new(self.clone()))
    }

    /// Access the Files API endpoint.
    pub fn files(&self) -> &Files {
        self.inner.files.get_or_init(|| Files::new(self.clone()))
    }

    /// Access the Deployments API endpoint.
    pub fn deployments(&self) -> &Deployments {
        self.inner
            .deployments
            .get_or_init(|| Deployments::new(self.clone()))
    }

    /// Access the Webhooks API endpoint.
    pub fn webhooks(&self) -> &Webhooks {
        self.inner
            .webhooks
            .get_or_init(|| Webhooks::new(self.clone()))
    }

    /// Access the platform resources API endpoint (usage and limits).
    pub fn resources(&self) -> &Resources {
        self.inner
            .resources
            .get_or_init(|| Resources::new(self.clone()))
    }

    /// Access the Billing API endpoint.
    pub fn billing(&self) -> &Billing {
        self.inner
            .billing
            .get_or_init(|| Billing::new(self.clone()))
    }

    /// Access the AI API endpoints (agents and models).
    pub fn ai(&self) -> &Ai {
        self.inner.ai.get_or_init(|| Ai::new(self.clone()))
    }

    /// Create a request builder for the given method and endpoint path.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        self.inner.transport.request(method, path)
    }

    /// Get the base URL for the API.
    pub fn base_url(&self) -> &str {
        self.inner.transport.base_url()
    }
}

/// Builder for creating a configured Client.
#[derive(Default)]
pub struct AlgoClientBuilder {
    config: ClientConfig,
}

impl AlgoClientBuilder {
    /// Set the API key for bearer authentication.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::new(api_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the per-attempt request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to
    /// HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| crate::Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::from_config(self.config)
    }
}
