//! Error types for request signing.

use thiserror::Error;

/// Result type alias for signing primitives.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while preparing signing inputs.
///
/// Signing itself cannot fail once [`Credentials`](crate::Credentials) exist;
/// every variant here is an input-validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A credential component was empty.
    #[error("Credential component '{0}' must not be empty")]
    EmptyCredential(&'static str),

    /// A response format string was not `json` or `xml`.
    #[error("Unsupported response format '{0}', expected 'json' or 'xml'")]
    InvalidFormat(String),
}
