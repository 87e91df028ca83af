//! HMAC-SHA1 request signing for the Zadarma API.
//!
//! The header value is
//! `key:base64(hex(HMAC-SHA1(secret, path + canonical + hex(MD5(canonical)))))`.
//! The base64 step encodes the lowercase *hex string* of the MAC, not its raw
//! bytes; the remote service verifies exactly that form.

use crate::canonical::canonical_query;
use crate::credentials::Credentials;
use crate::params::ParameterSet;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Output of signing one request.
///
/// Carries the canonical parameter string alongside the header value so the
/// request builder sends exactly the bytes that were signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParams {
    canonical_query: String,
    authorization: String,
}

impl SignedParams {
    /// The sorted, encoded parameter string that was signed.
    pub fn canonical_query(&self) -> &str {
        &self.canonical_query
    }

    /// The `Authorization` header value.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Split into `(canonical_query, authorization)`.
    pub fn into_parts(self) -> (String, String) {
        (self.canonical_query, self.authorization)
    }
}

/// Request signer for authenticated API calls.
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    /// Sign a request to `path` carrying `params`.
    ///
    /// `params` must already contain every parameter that will be sent,
    /// including `format`.
    pub fn sign(&self, path: &str, params: &ParameterSet) -> SignedParams {
        let canonical = canonical_query(params);
        let authorization = self.authorization_for(path, &canonical);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            path,
            params = params.len(),
            canonical_len = canonical.len(),
            "Signed request parameters"
        );

        SignedParams {
            canonical_query: canonical,
            authorization,
        }
    }

    /// Compute the header value for an already canonicalized parameter string.
    pub fn authorization_for(&self, path: &str, canonical: &str) -> String {
        let input = signing_input(path, canonical);
        let mac_hex = hmac_sha1_hex(self.credentials.expose_secret(), &input);
        format!("{}:{}", self.credentials.key(), STANDARD.encode(mac_hex))
    }
}

/// Compute the `Authorization` header value from raw components.
///
/// Convenience wrapper around [`RequestSigner`] for callers that do not keep
/// a [`Credentials`] value around.
///
/// # Panics
///
/// Panics if `key` or `secret` is empty; signing without credentials is a
/// programming error.
pub fn authorization_header(path: &str, params: &ParameterSet, key: &str, secret: &str) -> String {
    let credentials = match Credentials::new(key, secret) {
        Ok(credentials) => credentials,
        Err(e) => panic!("cannot sign request to '{path}': {e}"),
    };
    RequestSigner::new(&credentials)
        .sign(path, params)
        .authorization
}

/// `path + canonical + hex(MD5(canonical))`, no separators.
pub(crate) fn signing_input(path: &str, canonical: &str) -> String {
    let digest = md5_hex(canonical);
    let mut input = String::with_capacity(path.len() + canonical.len() + digest.len());
    input.push_str(path);
    input.push_str(canonical);
    input.push_str(&digest);
    input
}

pub(crate) fn md5_hex(data: &str) -> String {
    hex::encode(Md5::digest(data.as_bytes()))
}

pub(crate) fn hmac_sha1_hex(secret: &str, message: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
