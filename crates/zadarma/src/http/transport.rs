//! Transport trait for sending assembled requests
//!
//! The SDK only assembles and signs requests; delivering them is delegated to
//! a [`Transport`]. [`ReqwestTransport`] is the default implementation, and
//! custom transports can be plugged in with
//! [`Client::from_transport`](crate::Client::from_transport).

use super::{RequestBody, Response, SignedRequest};
use crate::error::{Error, Result};
use crate::observability::{RequestMetadata, RequestTimer, ResponseMetadata};
use async_trait::async_trait;
use http::HeaderMap;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use std::fmt;
use std::time::Duration;

/// Sends a [`SignedRequest`] and returns the raw [`Response`].
///
/// Implementations must return non-2xx responses as `Ok` and reserve `Err`
/// for failures to obtain a response at all (connection errors, timeouts).
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send the request and wait for the full response.
    async fn send(&self, request: SignedRequest) -> Result<Response>;

    /// Transport name for debugging/logging.
    fn name(&self) -> &'static str;
}

/// [`Transport`] backed by `reqwest`.
///
/// # Example
///
/// ```rust,no_run
/// use zadarma::http::ReqwestTransport;
/// use std::time::Duration;
///
/// let transport = ReqwestTransport::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new builder for configuring the transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wrap an existing `reqwest` client.
    ///
    /// `timeout` is only used to report [`Error::Timeout`]; the client's own
    /// timeout settings apply.
    pub fn from_client(http_client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            http_client,
            timeout,
        }
    }

    fn prepare(
        &self,
        request: SignedRequest,
    ) -> Result<(reqwest::RequestBuilder, RequestMetadata)> {
        let (method, url, authorization, body) = request.into_parts();
        let mut metadata = RequestMetadata::new(method.as_str(), url.path());

        let mut req = self.http_client.request(method, url);
        if let Some(authorization) = authorization {
            req = req.header(AUTHORIZATION, authorization);
        }

        let req = match body {
            RequestBody::Empty => req,
            RequestBody::Form(body) => {
                metadata = metadata.with_body_size(body.len());
                req.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(body)
            }
            RequestBody::Multipart { fields, file } => {
                metadata = metadata.with_body_size(file.bytes().len());

                let mut form = reqwest::multipart::Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }

                let part = reqwest::multipart::Part::bytes(file.bytes().to_vec())
                    .file_name(file.file_name().to_string())
                    .mime_str(file.content_type())
                    .map_err(|e| {
                        Error::InvalidRequest(format!(
                            "Invalid content type '{}': {}",
                            file.content_type(),
                            e
                        ))
                    })?;
                req.multipart(form.part(file.field_name().to_string(), part))
            }
        };

        Ok((req, metadata))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: SignedRequest) -> Result<Response> {
        let (req, metadata) = self.prepare(request)?;
        let timer = RequestTimer::start();
        metadata.log_request();

        let resp = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.timeout)
            } else {
                Error::Connection(e.to_string())
            }
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.timeout)
            } else {
                Error::Connection(e.to_string())
            }
        })?;

        let response = Response::new(status, headers, body).with_elapsed(timer.elapsed());
        let outcome = ResponseMetadata::new(status.as_u16(), response.elapsed())
            .with_body_size(response.body().len());
        if response.is_success() {
            outcome.log_success(&metadata);
        } else {
            outcome.log_error(&metadata, "non-success status");
        }

        Ok(response)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// Builder for creating a [`ReqwestTransport`].
#[derive(Debug)]
pub struct ReqwestTransportBuilder {
    timeout: Duration,
    default_headers: HeaderMap,
    proxy: Option<String>,
}

impl Default for ReqwestTransportBuilder {
    fn default() -> Self {
        Self {
            timeout: crate::config::DEFAULT_TIMEOUT,
            default_headers: HeaderMap::new(),
            proxy: None,
        }
    }
}

impl ReqwestTransportBuilder {
    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set headers sent with every request.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the proxy URL is invalid or the HTTP
    /// client cannot be created.
    pub fn build(self) -> Result<ReqwestTransport> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(format!("zadarma-rust/{}", crate::VERSION))
            .default_headers(self.default_headers);

        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::HttpClient(format!("Invalid proxy '{}': {}", proxy, e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(ReqwestTransport {
            http_client,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let transport = ReqwestTransport::new().unwrap();
        assert_eq!(transport.name(), "reqwest");
        assert_eq!(transport.timeout, crate::config::DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_builder_with_proxy() {
        let transport = ReqwestTransport::builder()
            .proxy("http://127.0.0.1:3128")
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        assert_eq!(transport.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_builder_rejects_bad_proxy() {
        let result = ReqwestTransport::builder().proxy("not a url").build();
        assert!(matches!(result, Err(Error::HttpClient(_))));
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestTransport>();
    }
}
