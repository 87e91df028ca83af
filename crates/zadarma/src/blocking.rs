//! Blocking client
//!
//! Wraps the async [`Client`](crate::Client) with a private current-thread
//! runtime. Requests are assembled and signed exactly as in the async client;
//! only the way the caller waits differs.
//!
//! Do not use this client from inside an async runtime. Blocking on a nested
//! runtime panics, and so does dropping the client there, since that drops
//! its runtime. The client is not `Clone`, so the runtime is dropped exactly
//! where the client is. Share the async client via
//! [`async_client`](Client::async_client) instead.

use tokio::runtime::{Builder, Runtime};
use zadarma_core::{ParameterSet, ResponseFormat};

use crate::{
    client::{Client as AsyncClient, ZadarmaClientBuilder},
    config::ClientConfig,
    error::Result,
    http::{FilePart, Method, Response},
};

/// Blocking counterpart of [`crate::Client`].
///
/// # Example
///
/// ```rust,no_run
/// use zadarma::blocking::Client;
///
/// let client = Client::new("your-key", "your-secret").unwrap();
/// let response = client.balance().unwrap();
/// println!("{}", response.text().unwrap());
/// ```
#[derive(Debug)]
pub struct Client {
    inner: AsyncClient,
    runtime: Runtime,
}

impl Client {
    /// Create a blocking client for the production API.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        Self::from_builder(
            AsyncClient::builder()
                .api_key(api_key)
                .api_secret(api_secret),
        )
    }

    /// Create a blocking client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::wrap(AsyncClient::from_config(config)?)
    }

    /// Build the async client from `builder` and wrap it.
    pub fn from_builder(builder: ZadarmaClientBuilder) -> Result<Self> {
        Self::wrap(builder.build()?)
    }

    /// Wrap an existing async client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the runtime cannot be started.
    pub fn wrap(inner: AsyncClient) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    /// The wrapped async client.
    pub fn async_client(&self) -> &AsyncClient {
        &self.inner
    }

    /// Blocking [`crate::Client::call`].
    pub fn call(&self, method: Method, path: &str, params: ParameterSet) -> Result<Response> {
        self.runtime.block_on(self.inner.call(method, path, params))
    }

    /// Blocking [`crate::Client::call_with_format`].
    pub fn call_with_format(
        &self,
        method: Method,
        path: &str,
        params: ParameterSet,
        format: ResponseFormat,
    ) -> Result<Response> {
        self.runtime
            .block_on(self.inner.call_with_format(method, path, params, format))
    }

    /// Blocking [`crate::Client::call_unauthenticated`].
    pub fn call_unauthenticated(
        &self,
        method: Method,
        path: &str,
        params: ParameterSet,
    ) -> Result<Response> {
        self.runtime
            .block_on(self.inner.call_unauthenticated(method, path, params))
    }

    /// Blocking [`crate::Client::call_multipart`].
    pub fn call_multipart(
        &self,
        method: Method,
        path: &str,
        params: ParameterSet,
        file: FilePart,
    ) -> Result<Response> {
        self.runtime
            .block_on(self.inner.call_multipart(method, path, params, file))
    }

    /// Current account balance.
    pub fn balance(&self) -> Result<Response> {
        self.runtime.block_on(self.inner.info().balance())
    }
}
