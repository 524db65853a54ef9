//! Configuration types for the Selly API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`SellyConfig`]: The configuration struct holding credentials and client settings
//! - [`SellyConfigBuilder`]: A builder for constructing [`SellyConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`AccountEmail`]: A validated account email newtype
//! - [`ApiRoot`]: A validated base URL override
//!
//! # Example
//!
//! ```rust
//! use selly_api::{AccountEmail, ApiKey, SellyConfig};
//!
//! let config = SellyConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .email(AccountEmail::new("merchant@example.com").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_root(), selly_api::DEFAULT_API_ROOT);
//! ```

mod newtypes;

pub use newtypes::{AccountEmail, ApiKey, ApiRoot};

use crate::error::ConfigError;

/// The versioned API root all requests target unless overridden.
pub const DEFAULT_API_ROOT: &str = "https://selly.gg/api/v2";

/// Configuration for the Selly API client.
///
/// Holds the immutable credentials (account email and API key) plus client
/// settings. Credentials are fixed for the lifetime of a client instance.
///
/// # Thread Safety
///
/// `SellyConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use selly_api::{AccountEmail, ApiKey, SellyConfig};
///
/// let config = SellyConfig::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .email(AccountEmail::new("merchant@example.com").unwrap())
///     .strict_status(true)
///     .build()
///     .unwrap();
///
/// assert!(config.strict_status());
/// ```
#[derive(Clone, Debug)]
pub struct SellyConfig {
    api_key: ApiKey,
    email: AccountEmail,
    api_root: Option<ApiRoot>,
    strict_status: bool,
}

impl SellyConfig {
    /// Creates a new builder for constructing a `SellyConfig`.
    #[must_use]
    pub fn builder() -> SellyConfigBuilder {
        SellyConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the account email.
    #[must_use]
    pub const fn email(&self) -> &AccountEmail {
        &self.email
    }

    /// Returns the API root all request paths are appended to.
    ///
    /// This is the configured override, or [`DEFAULT_API_ROOT`] when none
    /// was set.
    #[must_use]
    pub fn api_root(&self) -> &str {
        self.api_root
            .as_ref()
            .map_or(DEFAULT_API_ROOT, AsRef::as_ref)
    }

    /// Returns whether non-2xx responses are surfaced as errors.
    ///
    /// See [`SellyConfigBuilder::strict_status`] for the two modes.
    #[must_use]
    pub const fn strict_status(&self) -> bool {
        self.strict_status
    }
}

// Verify SellyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SellyConfig>();
};

/// Builder for constructing [`SellyConfig`] instances.
///
/// Required fields are `api_key` and `email`. All other fields have
/// defaults.
///
/// # Defaults
///
/// - `api_root`: [`DEFAULT_API_ROOT`]
/// - `strict_status`: `false`
///
/// # Example
///
/// ```rust
/// use selly_api::{AccountEmail, ApiKey, ApiRoot, SellyConfig};
///
/// let config = SellyConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .email(AccountEmail::new("merchant@example.com").unwrap())
///     .api_root(ApiRoot::new("http://127.0.0.1:8080/api/v2").unwrap())
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SellyConfigBuilder {
    api_key: Option<ApiKey>,
    email: Option<AccountEmail>,
    api_root: Option<ApiRoot>,
    strict_status: Option<bool>,
}

impl SellyConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the account email (required).
    #[must_use]
    pub fn email(mut self, email: AccountEmail) -> Self {
        self.email = Some(email);
        self
    }

    /// Overrides the API root requests are sent to.
    ///
    /// The override replaces the full versioned root and is used verbatim.
    /// Intended for tests and proxies.
    #[must_use]
    pub fn api_root(mut self, api_root: ApiRoot) -> Self {
        self.api_root = Some(api_root);
        self
    }

    /// Selects how HTTP error statuses are surfaced.
    ///
    /// In the default compatibility mode (`false`), the service's 4xx/5xx
    /// responses are returned like success bodies and callers inspect the
    /// payload, matching upstream behavior where the service reports
    /// application errors in the body. With `true`, any non-2xx response
    /// becomes [`ApiError::Status`](crate::ApiError::Status).
    #[must_use]
    pub const fn strict_status(mut self, strict: bool) -> Self {
        self.strict_status = Some(strict);
        self
    }

    /// Builds the [`SellyConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `email` was not set.
    pub fn build(self) -> Result<SellyConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let email = self
            .email
            .ok_or(ConfigError::MissingRequiredField { field: "email" })?;

        Ok(SellyConfig {
            api_key,
            email,
            api_root: self.api_root,
            strict_status: self.strict_status.unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_builder() -> SellyConfigBuilder {
        SellyConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .email(AccountEmail::new("merchant@example.com").unwrap())
    }

    #[test]
    fn test_build_with_required_fields_uses_defaults() {
        let config = test_builder().build().unwrap();

        assert_eq!(config.api_root(), DEFAULT_API_ROOT);
        assert!(!config.strict_status());
        assert_eq!(config.email().as_ref(), "merchant@example.com");
        assert_eq!(config.api_key().as_ref(), "test-key");
    }

    #[test]
    fn test_build_without_api_key_fails() {
        let result = SellyConfig::builder()
            .email(AccountEmail::new("merchant@example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "api_key" })
        ));
    }

    #[test]
    fn test_build_without_email_fails() {
        let result = SellyConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "email" })
        ));
    }

    #[test]
    fn test_api_root_override_is_used_verbatim() {
        let config = test_builder()
            .api_root(ApiRoot::new("http://127.0.0.1:9999/api/v2").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.api_root(), "http://127.0.0.1:9999/api/v2");
    }

    #[test]
    fn test_strict_status_opt_in() {
        let config = test_builder().strict_status(true).build().unwrap();
        assert!(config.strict_status());
    }

    #[test]
    fn test_default_api_root_is_versioned() {
        assert_eq!(DEFAULT_API_ROOT, "https://selly.gg/api/v2");
    }
}
