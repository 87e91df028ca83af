//! Main client implementation for the Zadarma API

use std::fmt;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use url::Url;
use zadarma_core::{Credentials, ParameterSet, ResponseFormat};

use crate::{
    config::{ClientConfig, Environment, RateLimitConfig},
    error::{Error, Result},
    http::{
        FilePart, Method, ReqwestTransport, Response, SignedRequest, Transport,
        build_multipart_request, build_request,
    },
    observability::{RequestTimer, log_rate_limit_wait, log_transport_failure},
    resources::{Info, Requests, Sip, Sms, Statistics},
};

/// Main client for interacting with the Zadarma API.
///
/// Every call is signed with the client's credentials and carries the
/// client's response format unless a different one is requested. Cloning is
/// cheap: clones share the transport, credentials and rate limiter.
///
/// # Example
///
/// ```rust,no_run
/// use zadarma::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("your-key", "your-secret");
/// let response = client.info().balance().await?;
/// println!("{}", response.text()?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    base_url: Url,
    format: ResponseFormat,
    rate_limiter: Option<DefaultDirectRateLimiter>,
}

impl Client {
    /// Create a new client for the production API.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the credentials are empty or the HTTP
    /// client cannot be built. For fallible construction with explicit error
    /// handling, use [`Client::try_new()`] instead.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self::try_new(api_key, api_secret)
            .expect("Failed to build client with provided credentials")
    }

    /// Create a new client for the production API (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if either credential is empty or the HTTP client
    /// cannot be configured.
    pub fn try_new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::builder()
            .api_key(api_key)
            .api_secret(api_secret)
            .build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ZadarmaClientBuilder {
        ZadarmaClientBuilder::default()
    }

    /// Create a client from a configuration object, sending through
    /// [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when the key or secret is missing,
    /// [`Error::Core`] when one is empty, [`Error::InvalidUrl`] for a bad base
    /// URL and [`Error::HttpClient`] if the HTTP client cannot be created.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut transport = ReqwestTransport::builder()
            .timeout(config.timeout)
            .default_headers(config.default_headers.clone());
        if let Some(proxy) = &config.proxy {
            transport = transport.proxy(proxy.clone());
        }

        Self::from_transport(config, Arc::new(transport.build()?))
    }

    /// Create a client that sends through a custom [`Transport`].
    ///
    /// Transport-level settings in `config` (timeout, default headers, proxy)
    /// are ignored; the transport owns them.
    ///
    /// # Errors
    ///
    /// Same as [`Client::from_config`], minus HTTP client construction.
    pub fn from_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let credentials = match (config.api_key, config.api_secret) {
            (Some(key), Some(secret)) => Credentials::from_secret(key, secret)?,
            (None, _) => {
                return Err(Error::Authentication(
                    "API key is required (set ZADARMA_API_KEY or call api_key())".to_string(),
                ));
            }
            (_, None) => {
                return Err(Error::Authentication(
                    "API secret is required (set ZADARMA_API_SECRET or call api_secret())"
                        .to_string(),
                ));
            }
        };

        let base_url = parse_base_url(
            config
                .base_url
                .as_deref()
                .unwrap_or_else(|| config.environment.base_url()),
        )?;

        tracing::debug!(
            base_url = %base_url,
            format = %config.format,
            transport = transport.name(),
            rate_limited = config.rate_limit.is_some(),
            "Zadarma client created"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                credentials,
                base_url,
                format: config.format,
                rate_limiter: config.rate_limit.as_ref().map(rate_limiter),
            }),
        })
    }

    /// Call `path` with `params`, signed, in the client's response format.
    ///
    /// Non-2xx responses are returned as `Ok`; use
    /// [`Response::error_for_status`] to turn them into errors.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use zadarma::{Client, Method, ParameterSet};
    /// # async fn example(client: Client) -> zadarma::Result<()> {
    /// let response = client
    ///     .call(Method::GET, "/v1/info/price/", ParameterSet::new().with("number", "79123456789"))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for a malformed path and the
    /// transport's error when no response could be obtained.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        params: ParameterSet,
    ) -> Result<Response> {
        self.call_with_format(method, path, params, self.inner.format)
            .await
    }

    /// Like [`call`](Self::call), requesting `format` instead of the
    /// client's default.
    #[tracing::instrument(
        skip(self, method, params),
        fields(method = %method, param_count = params.len())
    )]
    pub async fn call_with_format(
        &self,
        method: Method,
        path: &str,
        params: ParameterSet,
        format: ResponseFormat,
    ) -> Result<Response> {
        let params = params.with_format(format);
        let request = build_request(
            &self.inner.base_url,
            method,
            path,
            &params,
            Some(&self.inner.credentials),
        )?;

        self.dispatch(path, request).await
    }

    /// Call `path` without an `Authorization` header.
    ///
    /// The `format` parameter is still added.
    #[tracing::instrument(
        skip(self, method, params),
        fields(method = %method, param_count = params.len())
    )]
    pub async fn call_unauthenticated(
        &self,
        method: Method,
        path: &str,
        params: ParameterSet,
    ) -> Result<Response> {
        let params = params.with_format(self.inner.format);
        let request = build_request(&self.inner.base_url, method, path, &params, None)?;

        self.dispatch(path, request).await
    }

    /// Upload `file` as `multipart/form-data` next to `params`.
    ///
    /// The signature covers `params` (with `format`) only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] when `method` is GET.
    #[tracing::instrument(
        skip(self, method, params, file),
        fields(method = %method, file_name = file.file_name())
    )]
    pub async fn call_multipart(
        &self,
        method: Method,
        path: &str,
        params: ParameterSet,
        file: FilePart,
    ) -> Result<Response> {
        let params = params.with_format(self.inner.format);
        let request = build_multipart_request(
            &self.inner.base_url,
            method,
            path,
            &params,
            file,
            Some(&self.inner.credentials),
        )?;

        self.dispatch(path, request).await
    }

    async fn dispatch(&self, path: &str, request: SignedRequest) -> Result<Response> {
        if let Some(limiter) = &self.inner.rate_limiter {
            let timer = RequestTimer::start();
            limiter.until_ready().await;
            log_rate_limit_wait(path, timer.elapsed());
        }

        let method = request.method().clone();
        self.inner.transport.send(request).await.inspect_err(|e| {
            if e.is_transport() {
                log_transport_failure(method.as_str(), path, &e.to_string());
            }
        })
    }

    /// Account and pricing endpoints.
    pub fn info(&self) -> Info<'_> {
        Info::new(self)
    }

    /// SIP line endpoints.
    pub fn sip(&self) -> Sip<'_> {
        Sip::new(self)
    }

    /// SMS endpoints.
    pub fn sms(&self) -> Sms<'_> {
        Sms::new(self)
    }

    /// Callback request endpoints.
    pub fn requests(&self) -> Requests<'_> {
        Requests::new(self)
    }

    /// Call statistics endpoints.
    pub fn statistics(&self) -> Statistics<'_> {
        Statistics::new(self)
    }

    /// Base URL every call is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Default response format.
    pub fn format(&self) -> ResponseFormat {
        self.inner.format
    }

    /// Public API key of the client's credentials.
    pub fn api_key(&self) -> &str {
        self.inner.credentials.key()
    }

    /// Name of the transport in use.
    pub fn transport_name(&self) -> &'static str {
        self.inner.transport.name()
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("format", &self.inner.format)
            .field("credentials", &self.inner.credentials)
            .field("transport", &self.inner.transport.name())
            .field("rate_limited", &self.inner.rate_limiter.is_some())
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let base_url: Url = raw
        .trim()
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("'{}': {}", raw, e)))?;

    match base_url.scheme() {
        "http" | "https" => Ok(base_url),
        scheme => Err(Error::InvalidUrl(format!(
            "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
            scheme
        ))),
    }
}

fn rate_limiter(config: &RateLimitConfig) -> DefaultDirectRateLimiter {
    // A zero budget would never admit a request; treat it as one per minute.
    let per_minute = NonZeroU32::new(config.requests_per_minute).unwrap_or(NonZeroU32::MIN);
    RateLimiter::direct(Quota::per_minute(per_minute))
}

/// Builder for creating a configured [`Client`].
#[derive(Debug, Default)]
pub struct ZadarmaClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    // Set explicitly on the builder; applied after any environment merge.
    environment: Option<Environment>,
    format: Option<ResponseFormat>,
    timeout: Option<Duration>,
}

impl ZadarmaClientBuilder {
    /// Set the API key.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = Some(api_key.into());
        self
    }

    /// Set the API secret.
    pub fn api_secret(mut self, api_secret: impl Into<String>) -> Self {
        self.config.api_secret = Some(secrecy::SecretString::new(
            api_secret.into().into_boxed_str(),
        ));
        self
    }

    /// Select the deployment.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Talk to the sandbox instead of production.
    pub fn sandbox(self) -> Self {
        self.environment(Environment::Sandbox)
    }

    /// Set an explicit base URL, overriding the environment.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the default response format.
    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: http::HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: http::HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Limit the request rate on the client side.
    pub fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Send through a custom transport instead of [`ReqwestTransport`].
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client with the configured options.
    ///
    /// When the key or secret was not supplied and the `env` feature is on,
    /// the missing values are taken from the environment first. Anything set
    /// on the builder wins over the environment.
    pub fn build(self) -> Result<Client> {
        let Self {
            config,
            transport,
            environment,
            format,
            timeout,
        } = self;

        #[cfg(feature = "env")]
        let config = if config.api_key.is_none() || config.api_secret.is_none() {
            ClientConfig::from_env()?.merge(config)
        } else {
            config
        };

        let mut config = config;
        if let Some(environment) = environment {
            config.environment = environment;
        }
        if let Some(format) = format {
            config.format = format;
        }
        if let Some(timeout) = timeout {
            config.timeout = timeout;
        }

        match transport {
            Some(transport) => Client::from_transport(config, transport),
            None => Client::from_config(config),
        }
    }
}
