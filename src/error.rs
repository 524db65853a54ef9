//! Error types for configuration validation.
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use selly_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while constructing or validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Selly API key.")]
    EmptyApiKey,

    /// Account email is invalid.
    #[error("Invalid account email '{email}'. Expected the email address of the Selly account.")]
    InvalidEmail {
        /// The invalid email that was provided.
        email: String,
    },

    /// API root URL is invalid.
    #[error("Invalid API root '{url}'. Expected an absolute URL with scheme (e.g., 'https://selly.gg/api/v2').")]
    InvalidApiRoot {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
