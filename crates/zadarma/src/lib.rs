//! # Zadarma SDK
//!
//! Rust client for the Zadarma telephony HTTP API:
//! - HMAC-SHA1 request signing (via [`zadarma_core`])
//! - GET query strings, form bodies and multipart uploads
//! - Production and sandbox deployments
//! - Helpers for balance, pricing, SIP, SMS, callback and statistics endpoints
//! - Optional client-side rate limiting and a blocking client
//!
//! Responses are returned as raw bytes with status and headers; parsing the
//! JSON or XML body is up to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zadarma::{Client, Method, ParameterSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-key", "your-secret");
//!
//!     let balance = client.info().balance().await?;
//!     println!("{}", balance.text()?);
//!
//!     let price = client
//!         .call(Method::GET, "/v1/info/price/", ParameterSet::new().with("number", "79123456789"))
//!         .await?
//!         .error_for_status()?;
//!     println!("{}", price.text()?);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ZadarmaClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, Environment, RateLimitConfig};
pub use error::{Error, Result};
pub use crate::http::{FilePart, Method, Response, StatusCode};
pub use zadarma_core::{Credentials, ParameterSet, ResponseFormat};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;

// Blocking wrapper (requires blocking feature)
#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use zadarma::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Environment, Error, FilePart, Method, ParameterSet, Response,
        ResponseFormat, Result,
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Production API base URL
pub const PRODUCTION_BASE_URL: &str = "https://api.zadarma.com";

/// Sandbox API base URL
pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.zadarma.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_constants() {
        assert_eq!(PRODUCTION_BASE_URL, "https://api.zadarma.com");
        assert_eq!(SANDBOX_BASE_URL, "https://api-sandbox.zadarma.com");
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
