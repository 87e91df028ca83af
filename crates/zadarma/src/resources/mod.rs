//! API resource endpoints
//!
//! Thin helpers over [`Client::call`] that fill in the method, path and
//! parameters of common endpoints. They return the raw [`Response`]; bodies
//! are left to the caller.
//!
//! [`Response`]: crate::http::Response

pub mod info;
pub mod requests;
pub mod sip;
pub mod sms;
pub mod statistics;

pub use info::Info;
pub use requests::Requests;
pub use sip::Sip;
pub use sms::Sms;
pub use statistics::Statistics;
