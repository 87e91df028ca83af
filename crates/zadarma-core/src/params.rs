//! Request parameters.

use crate::FORMAT_PARAM;
use crate::format::ResponseFormat;
use std::collections::HashMap;

/// Request parameters keyed by name.
///
/// Keys are unique and iteration order carries no meaning: the signer always
/// copies the entries into a freshly sorted sequence before encoding them, so
/// two sets with the same entries sign identically no matter how they were
/// built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: HashMap<String, String>,
}

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy of this set with `key` set to `value`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Return a copy of this set with `value` set only when present.
    pub fn with_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Return a copy of this set carrying the `format` parameter.
    ///
    /// An existing `format` entry is replaced.
    pub fn with_format(self, format: ResponseFormat) -> Self {
        self.with(FORMAT_PARAM, format.as_str())
    }

    /// Set `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by key using byte-wise ordering.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        entries
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        set.extend(iter);
        set
    }
}

impl<K, V> Extend<(K, V)> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ParameterSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for ParameterSet {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing_value() {
        let mut params = ParameterSet::new();
        assert_eq!(params.insert("number", "100"), None);
        assert_eq!(params.insert("number", "200"), Some("100".to_string()));
        assert_eq!(params.get("number"), Some("200"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_with_format_overrides() {
        let params = ParameterSet::new()
            .with("format", "xml")
            .with_format(ResponseFormat::Json);
        assert_eq!(params.get("format"), Some("json"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = ParameterSet::new()
            .with_opt("caller_id", None::<String>)
            .with_opt("number", Some("71234567890"));
        assert!(!params.contains_key("caller_id"));
        assert_eq!(params.get("number"), Some("71234567890"));
    }

    #[test]
    fn test_sorted_is_bytewise() {
        let params = ParameterSet::from([("b", "1"), ("B", "2"), ("a", "3"), ("_", "4")]);
        let keys: Vec<&str> = params.sorted().into_iter().map(|(k, _)| k).collect();
        // Uppercase sorts before underscore, which sorts before lowercase.
        assert_eq!(keys, vec!["B", "_", "a", "b"]);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = ParameterSet::from([("x", "1"), ("y", "2")]);
        let b = ParameterSet::from([("y", "2"), ("x", "1")]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_remove_and_empty() {
        let mut params = ParameterSet::from([("only", "one")]);
        assert_eq!(params.remove("only"), Some("one".to_string()));
        assert!(params.is_empty());
        assert_eq!(params.remove("only"), None);
    }
}
