//! Configuration for the Zadarma client

use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;
use zadarma_core::ResponseFormat;

use crate::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which API deployment the client talks to.
///
/// Chosen once when the client is built; a client never switches
/// deployments afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Live API.
    #[default]
    Production,
    /// Sandbox API, for testing without real calls or charges.
    Sandbox,
}

impl Environment {
    /// Base URL of this deployment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => PRODUCTION_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// Configuration for the Zadarma client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key (sent in clear as the first half of the signature header)
    pub api_key: Option<String>,

    /// API secret used as the HMAC key
    pub api_secret: Option<SecretString>,

    /// Deployment to talk to
    pub environment: Environment,

    /// Explicit base URL, overriding `environment`
    pub base_url: Option<String>,

    /// Response format requested on every call
    pub format: ResponseFormat,

    /// Default timeout for requests
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,

    /// Client-side rate limiting
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            environment: Environment::Production,
            base_url: None,
            format: ResponseFormat::Json,
            timeout: DEFAULT_TIMEOUT,
            default_headers: HeaderMap::new(),
            proxy: None,
            rate_limit: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with credentials.
    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_secret: Some(SecretString::new(api_secret.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Base URL the client will use: the explicit override if set, otherwise
    /// the environment's.
    pub fn resolved_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// This will look for:
    /// - `ZADARMA_API_KEY` and `ZADARMA_API_SECRET` for authentication
    /// - `ZADARMA_SANDBOX` (`1`, `true`, `yes`) to select the sandbox
    /// - `ZADARMA_BASE_URL` for an explicit base URL
    /// - `ZADARMA_FORMAT` (`json` or `xml`)
    /// - `ZADARMA_TIMEOUT` for request timeout (in seconds)
    /// - `ZADARMA_PROXY` for HTTP proxy
    ///
    /// # Errors
    ///
    /// Returns an error if `ZADARMA_FORMAT` holds an unknown format or
    /// `ZADARMA_TIMEOUT` is not a whole number of seconds.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use crate::error::Error;
        use std::env;

        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(api_key) = env::var("ZADARMA_API_KEY") {
            config.api_key = Some(api_key);
        }
        if let Ok(api_secret) = env::var("ZADARMA_API_SECRET") {
            config.api_secret = Some(SecretString::new(api_secret.into_boxed_str()));
        }

        if let Ok(sandbox) = env::var("ZADARMA_SANDBOX")
            && matches!(
                sandbox.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            )
        {
            config.environment = Environment::Sandbox;
        }

        if let Ok(base_url) = env::var("ZADARMA_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(format) = env::var("ZADARMA_FORMAT") {
            config.format = format.parse()?;
        }

        if let Ok(timeout_str) = env::var("ZADARMA_TIMEOUT") {
            let timeout_secs = timeout_str.trim().parse::<u64>().map_err(|_| {
                Error::InvalidRequest(format!(
                    "Invalid ZADARMA_TIMEOUT '{timeout_str}': expected whole seconds"
                ))
            })?;
            config.timeout = Duration::from_secs(timeout_secs);
        }

        if let Ok(proxy) = env::var("ZADARMA_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    ///
    /// `environment`, `format` and `timeout` are taken from `other` only when
    /// they differ from their defaults. [`ZadarmaClientBuilder`](crate::ZadarmaClientBuilder)
    /// applies explicitly set values after merging.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.api_secret.is_some() {
            self.api_secret = other.api_secret;
        }
        if other.environment != Environment::default() {
            self.environment = other.environment;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.format != ResponseFormat::default() {
            self.format = other.format;
        }
        if other.timeout != DEFAULT_TIMEOUT {
            self.timeout = other.timeout;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.rate_limit.is_some() {
            self.rate_limit = other.rate_limit;
        }

        self
    }
}

/// Configuration for client-side rate limiting.
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per minute
    pub requests_per_minute: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        // Documented general limit of the API.
        Self {
            requests_per_minute: 100,
        }
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the API secret.
    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.config.api_secret = Some(SecretString::new(api_secret.into().into_boxed_str()));
        self
    }

    /// Select the deployment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Shorthand for `environment(Environment::Sandbox)`.
    pub fn sandbox(self) -> Self {
        self.environment(Environment::Sandbox)
    }

    /// Set an explicit base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the response format.
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> crate::Result<Self> {
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

    /// Set the HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Enable rate limiting with the API's documented limit.
    pub fn with_rate_limiting(mut self) -> Self {
        self.config.rate_limit = Some(RateLimitConfig::default());
        self
    }

    /// Set custom rate limiting configuration.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
