//! API credential management.
//!
//! The secret is wrapped in `SecretString`, which keeps it out of `Debug`
//! output and zeroes the memory on drop.

use crate::error::{CoreError, Result};
use secrecy::{ExposeSecret, SecretString};

/// Key/secret pair used to sign requests.
///
/// Both components are required and must be non-empty; a signer can only be
/// built from a validated pair.
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: SecretString,
}

impl Credentials {
    /// Create credentials from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyCredential`] if either component is empty.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let secret = secret.into();

        if key.trim().is_empty() {
            return Err(CoreError::EmptyCredential("key"));
        }
        if secret.is_empty() {
            return Err(CoreError::EmptyCredential("secret"));
        }

        Ok(Self {
            key,
            secret: SecretString::new(secret.into_boxed_str()),
        })
    }

    /// Create credentials from a key and an already-wrapped secret.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyCredential`] if either component is empty.
    pub fn from_secret(key: impl Into<String>, secret: SecretString) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CoreError::EmptyCredential("key"));
        }
        if secret.expose_secret().is_empty() {
            return Err(CoreError::EmptyCredential("secret"));
        }
        Ok(Self { key, secret })
    }

    /// The public API key (safe to log).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Expose the secret for signing.
    ///
    /// Only use this for the HMAC computation; never log the return value.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_new() {
        let creds = Credentials::new("my_key", "my_secret").unwrap();
        assert_eq!(creds.key(), "my_key");
        assert_eq!(creds.expose_secret(), "my_secret");
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = Credentials::new("  ", "secret").unwrap_err();
        assert_eq!(err, CoreError::EmptyCredential("key"));
    }

    #[test]
    fn test_empty_secret_rejected() {
        let err = Credentials::new("key", "").unwrap_err();
        assert_eq!(err, CoreError::EmptyCredential("secret"));

        let err = Credentials::from_secret("key", SecretString::new("".into())).unwrap_err();
        assert_eq!(err, CoreError::EmptyCredential("secret"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("visible_key", "super_secret_value").unwrap();
        let debug_output = format!("{:?}", creds);

        assert!(debug_output.contains("visible_key"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_value"));
    }
}
