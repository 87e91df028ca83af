//! HTTP layer: request assembly and transport
//!
//! [`build_request`] turns a path and parameter set into a [`SignedRequest`];
//! a [`Transport`] sends it and hands back a [`Response`] with the raw body.

pub use request::{FilePart, RequestBody, SignedRequest, build_multipart_request, build_request};
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};

mod request;
mod response;
pub mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
