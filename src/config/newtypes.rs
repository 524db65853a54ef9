//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear
//! error messages.

use std::fmt;

use crate::error::ConfigError;

/// A validated Selly API key.
///
/// This newtype ensures the API key is non-empty and masks its value in
/// debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the key value, displaying only
/// `ApiKey(*****)` instead of the actual key.
///
/// # Example
///
/// ```rust
/// use selly_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated Selly account email.
///
/// The email is the username half of the HTTP Basic credentials sent on
/// every request, so it must be present and at least shaped like an email
/// address. Full RFC 5321 validation is the remote service's job.
///
/// # Example
///
/// ```rust
/// use selly_api::AccountEmail;
///
/// let email = AccountEmail::new("merchant@example.com").unwrap();
/// assert_eq!(email.as_ref(), "merchant@example.com");
///
/// assert!(AccountEmail::new("not-an-email").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountEmail(String);

impl AccountEmail {
    /// Creates a new validated account email.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEmail`] if the value is empty or does
    /// not contain an `@`.
    pub fn new(email: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into();
        let email = email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ConfigError::InvalidEmail { email });
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for AccountEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API root URL.
///
/// The root is prepended verbatim to every request path: no trailing-slash
/// normalization is applied in either direction. This override exists for
/// tests and proxies; production use keeps the default
/// [`DEFAULT_API_ROOT`](crate::config::DEFAULT_API_ROOT).
///
/// # Example
///
/// ```rust
/// use selly_api::ApiRoot;
///
/// let root = ApiRoot::new("http://127.0.0.1:8080/api/v2").unwrap();
/// assert_eq!(root.as_ref(), "http://127.0.0.1:8080/api/v2");
///
/// assert!(ApiRoot::new("selly.gg/api/v2").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRoot(String);

impl ApiRoot {
    /// Creates a new validated API root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiRoot`] if the value does not start
    /// with `http://` or `https://`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::InvalidApiRoot { url });
        }
        Ok(Self(url))
    }
}

impl AsRef<str> for ApiRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
