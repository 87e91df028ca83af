#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Request signing primitives for the Zadarma telephony API.
//!
//! Every authenticated call to the API carries an `Authorization` header of
//! the form `key:signature`. This crate computes that header from the request
//! path, the request parameters, and the account credentials:
//!
//! - [`ParameterSet`] holds the request parameters as an unordered value
//! - [`canonical_query`] sorts and form-urlencodes them into the canonical
//!   parameter string, which doubles as the GET query string / form body
//! - [`RequestSigner`] turns path + canonical string into the header value
//!
//! Signing is pure and synchronous: no clocks, nonces, or shared state.
//!
//! # Examples
//!
//! ```rust
//! use zadarma_core::prelude::*;
//!
//! # fn main() -> Result<(), zadarma_core::CoreError> {
//! let credentials = Credentials::new("testkey", "testsecret")?;
//! let params = ParameterSet::new().with_format(ResponseFormat::Json);
//!
//! let signed = RequestSigner::new(&credentials).sign("/v1/info/balance/", &params);
//! assert_eq!(signed.canonical_query(), "format=json");
//! assert_eq!(
//!     signed.authorization(),
//!     "testkey:ODEyZGUyNzU3Y2YyYTkwYWJjNjdhNmE4ZGY0NTM3YzZkZDZmYTdlYw=="
//! );
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod format;
pub mod params;
pub mod signer;

pub use canonical::{canonical_query, parse_query};
pub use credentials::Credentials;
pub use error::{CoreError, Result};
pub use format::ResponseFormat;
pub use params::ParameterSet;
pub use signer::{RequestSigner, SignedParams, authorization_header};

/// Name of the parameter carrying the requested response format.
pub const FORMAT_PARAM: &str = "format";

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use zadarma_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::credentials::Credentials;
    pub use crate::format::ResponseFormat;
    pub use crate::params::ParameterSet;
    pub use crate::signer::{RequestSigner, SignedParams};
}
