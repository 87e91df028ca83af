//! Canonical parameter string.
//!
//! The canonical string is the `&`-joined list of `key=value` pairs, sorted by
//! key and form-urlencoded (alphanumerics and `*-._` pass through, space
//! becomes `+`, everything else is `%XX` over UTF-8 bytes). The same string is
//! used as the GET query string, as the form body of other verbs, and as the
//! input to the signature.

use crate::params::ParameterSet;
use url::form_urlencoded;

/// Build the canonical parameter string for `params`.
///
/// An empty set yields an empty string.
pub fn canonical_query(params: &ParameterSet) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.sorted())
        .finish()
}

/// Decode a form-urlencoded string back into a parameter set.
///
/// Later duplicates of a key win.
pub fn parse_query(query: &str) -> ParameterSet {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}
