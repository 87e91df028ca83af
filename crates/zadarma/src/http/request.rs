//! HTTP request assembly

use crate::error::{Error, Result};
use bytes::Bytes;
use http::Method;
use std::path::Path;
use url::Url;
use zadarma_core::{Credentials, ParameterSet, RequestSigner, canonical_query};

/// Binary part of a multipart upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    field_name: String,
    file_name: String,
    content_type: String,
    bytes: Bytes,
}

impl FilePart {
    /// Create a file part from in-memory content.
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk into a part named `field_name`.
    ///
    /// The file name sent is the final component of `path`.
    pub async fn from_path(
        field_name: impl Into<String>,
        path: impl AsRef<Path>,
        content_type: impl Into<String>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::InvalidRequest(format!("Path '{}' has no file name", path.display()))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;

        Ok(Self::new(field_name, file_name, content_type, bytes))
    }

    /// Form field name of the part.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// File name reported to the server.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type of the content.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// File content.
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

/// Body of a [`SignedRequest`].
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body (GET).
    Empty,
    /// `application/x-www-form-urlencoded` body holding the canonical parameter string.
    Form(String),
    /// `multipart/form-data` body: the parameters as text parts plus one file part.
    Multipart {
        /// Text fields, sorted by name
        fields: Vec<(String, String)>,
        /// Binary part
        file: FilePart,
    },
}

/// A fully assembled request, ready for a [`Transport`](super::Transport).
///
/// Produced once per call and never reused.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    method: Method,
    url: Url,
    authorization: Option<String>,
    body: RequestBody,
}

impl SignedRequest {
    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Target URL, including the query string for GET.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `Authorization` header value, if the call is authenticated.
    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }

    /// Request body.
    pub fn body(&self) -> &RequestBody {
        &self.body
    }

    /// Split into `(method, url, authorization, body)`.
    pub fn into_parts(self) -> (Method, Url, Option<String>, RequestBody) {
        (self.method, self.url, self.authorization, self.body)
    }
}

/// Assemble a request to `path` with `params`.
///
/// GET requests carry the canonical parameter string as their query string
/// and no body; every other verb sends it as a form-encoded body and leaves
/// the URL bare. With `credentials` the `Authorization` header is computed
/// over the same canonical string; without them it is omitted.
///
/// `params` must already include `format`.
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] for a malformed path and
/// [`Error::InvalidUrl`] if the URL cannot be built.
pub fn build_request(
    base_url: &Url,
    method: Method,
    path: &str,
    params: &ParameterSet,
    credentials: Option<&Credentials>,
) -> Result<SignedRequest> {
    let mut url = join_path(base_url, path)?;
    let (canonical, authorization) = encode(path, params, credentials);

    let body = if method == Method::GET {
        if !canonical.is_empty() {
            url.set_query(Some(&canonical));
        }
        RequestBody::Empty
    } else {
        RequestBody::Form(canonical)
    };

    Ok(SignedRequest {
        method,
        url,
        authorization,
        body,
    })
}

/// Assemble a multipart upload to `path`.
///
/// `params` travel as text parts next to `file`. The signature covers only
/// `params`; the file content is not part of it.
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] for a malformed path or a GET method,
/// and [`Error::InvalidUrl`] if the URL cannot be built.
pub fn build_multipart_request(
    base_url: &Url,
    method: Method,
    path: &str,
    params: &ParameterSet,
    file: FilePart,
    credentials: Option<&Credentials>,
) -> Result<SignedRequest> {
    if method == Method::GET {
        return Err(Error::InvalidRequest(
            "Multipart uploads need a method with a body, not GET".to_string(),
        ));
    }

    let url = join_path(base_url, path)?;
    let (_, authorization) = encode(path, params, credentials);
    let fields = params
        .sorted()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Ok(SignedRequest {
        method,
        url,
        authorization,
        body: RequestBody::Multipart { fields, file },
    })
}

fn encode(
    path: &str,
    params: &ParameterSet,
    credentials: Option<&Credentials>,
) -> (String, Option<String>) {
    match credentials {
        Some(credentials) => {
            let (canonical, authorization) =
                RequestSigner::new(credentials).sign(path, params).into_parts();
            (canonical, Some(authorization))
        }
        None => (canonical_query(params), None),
    }
}

fn join_path(base_url: &Url, path: &str) -> Result<Url> {
    if !path.starts_with('/') {
        return Err(Error::InvalidRequest(format!(
            "API path '{}' must start with '/'",
            path
        )));
    }
    if path.contains(['?', '#']) {
        return Err(Error::InvalidRequest(format!(
            "API path '{}' must not contain a query or fragment; pass parameters separately",
            path
        )));
    }

    base_url.join(path).map_err(|e| {
        Error::InvalidUrl(format!("Failed to construct URL from path '{}': {}", path, e))
    })
}
