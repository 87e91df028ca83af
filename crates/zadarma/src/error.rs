//! Error types for the Zadarma SDK
//!
//! Transport failures (connection errors, timeouts) propagate unchanged from
//! the HTTP client. Non-2xx responses are *not* errors at this layer: they are
//! returned as a [`Response`](crate::http::Response) and only become
//! [`Error::Api`] when the caller asks for it via
//! [`Response::error_for_status`](crate::http::Response::error_for_status).

use std::time::Duration;
use thiserror::Error;
use zadarma_core::CoreError;

/// Result type alias for operations that can fail with a Zadarma SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Zadarma SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// Credentials were not supplied.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Signing input validation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// API returned an error status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API, or the raw body
        message: String,
    },

    /// Failed to decode an API response.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an API error from an HTTP response status and body.
    ///
    /// The API reports failures as `{"status":"error","message":"..."}`; when
    /// the body has that shape the message is extracted, otherwise the whole
    /// body is kept.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| body.trim().to_string());

        Error::Api { status, message }
    }

    /// HTTP status of an [`Error::Api`], if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error came from the transport rather than the API.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Connection(_) | Error::Timeout(_) | Error::HttpClient(_)
        )
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
}
