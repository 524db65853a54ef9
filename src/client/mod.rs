//! HTTP client for Selly API communication.
//!
//! This module provides the [`SellyClient`] type for making authenticated
//! requests to the Selly v2 API.
//!
//! # Overview
//!
//! The client owns its immutable credentials and base URL; there is no
//! global or module-level mutable state. Every call is a single stateless
//! request/response round trip: one outbound HTTP request per invocation,
//! no retries, no caching.
//!
//! # Example
//!
//! ```rust,ignore
//! use selly_api::{AccountEmail, ApiKey, SellyClient};
//!
//! let client = SellyClient::new(
//!     ApiKey::new("my-api-key")?,
//!     AccountEmail::new("merchant@example.com")?,
//! );
//!
//! let response = client.get("/coupons").await?;
//! println!("{}", response.payload);
//! ```

pub mod errors;
pub mod response;

use std::fmt;

use base64::prelude::*;

use crate::client::errors::ApiError;
use crate::client::response::{ApiResponse, Payload};
use crate::config::{AccountEmail, ApiKey, SellyConfig, DEFAULT_API_ROOT};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP methods supported by the Selly API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Client for the Selly v2 API.
///
/// The client handles:
/// - Target URL construction from the API root and the request path
/// - HTTP Basic authentication from the account email and API key
/// - JSON body serialization and response decoding
///
/// # URL construction
///
/// The target URL is always `api_root + path`, concatenated verbatim: the
/// caller supplies the leading slash and no slash normalization happens in
/// either direction.
///
/// # Thread Safety
///
/// `SellyClient` is `Send + Sync`. It holds no mutable state, so sharing
/// one instance across tasks is safe; concurrent calls are independent
/// round trips with no ordering between them.
///
/// # Example
///
/// ```rust,ignore
/// use selly_api::{AccountEmail, ApiKey, HttpMethod, SellyClient};
///
/// let client = SellyClient::new(
///     ApiKey::new("my-api-key")?,
///     AccountEmail::new("merchant@example.com")?,
/// );
///
/// // Generic request
/// let response = client
///     .request(HttpMethod::Get, "/orders", None)
///     .await?;
///
/// // Fixed-verb wrapper
/// let response = client.get("/orders").await?;
/// ```
#[derive(Debug)]
pub struct SellyClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The versioned API root request paths are appended to.
    api_root: String,
    /// Precomputed `Basic` authorization header value.
    authorization: String,
    /// User-Agent header sent with every request.
    user_agent: String,
    /// Whether non-2xx responses become [`ApiError::Status`].
    strict: bool,
}

// Verify SellyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SellyClient>();
};

impl SellyClient {
    /// Creates a client for the production API root.
    ///
    /// No network call occurs at construction; the credentials are fixed
    /// for the lifetime of the instance.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(api_key: ApiKey, email: AccountEmail) -> Self {
        Self::build(&api_key, &email, DEFAULT_API_ROOT, false)
    }

    /// Creates a client from a [`SellyConfig`].
    ///
    /// Use this constructor to override the API root or opt into strict
    /// status handling.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created.
    #[must_use]
    pub fn with_config(config: &SellyConfig) -> Self {
        Self::build(
            config.api_key(),
            config.email(),
            config.api_root(),
            config.strict_status(),
        )
    }

    fn build(api_key: &ApiKey, email: &AccountEmail, api_root: &str, strict: bool) -> Self {
        let credentials = format!("{}:{}", email.as_ref(), api_key.as_ref());
        let authorization = format!("Basic {}", BASE64_STANDARD.encode(credentials.as_bytes()));

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!("Selly API Library v{SDK_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_root: api_root.to_string(),
            authorization,
            user_agent,
            strict,
        }
    }

    /// Returns the API root for this client.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Returns the `Authorization` header value sent with every request.
    #[must_use]
    pub fn authorization_header(&self) -> &str {
        &self.authorization
    }

    /// Returns whether this client surfaces non-2xx responses as errors.
    #[must_use]
    pub const fn strict_status(&self) -> bool {
        self.strict
    }

    /// Sends an HTTP request to the Selly API.
    ///
    /// The target URL is `api_root + path`, concatenated verbatim. The
    /// request carries `Authorization`, `Content-Type: application/json`,
    /// and `Accept: application/json` headers; `body`, when present, is
    /// serialized as the JSON payload.
    ///
    /// The response body is decoded as JSON when possible and kept as raw
    /// text otherwise. In the default compatibility mode the decoded body
    /// is returned for every completed round trip regardless of status
    /// code; callers inspect [`ApiResponse::status`] themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the request fails at the
    /// transport level (name resolution, connection, TLS), and
    /// [`ApiError::Status`] for non-2xx responses when the client was
    /// configured with strict status handling.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.api_root, path);

        tracing::debug!(%method, %url, "sending request to the Selly API");

        let mut req_builder = match method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        req_builder = req_builder
            .header("Authorization", &self.authorization)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", &self.user_agent);

        if let Some(body) = &body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let body_text = res.text().await?;
        let payload = Payload::from_body(body_text);

        if self.strict && !(200..=299).contains(&status) {
            tracing::debug!(%method, %url, status, "non-2xx response in strict mode");
            return Err(ApiError::Status { status, payload });
        }

        Ok(ApiResponse { status, payload })
    }

    /// Sends a GET request to the given path.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn get(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(HttpMethod::Get, path, None).await
    }

    /// Sends a POST request with a JSON body to the given path.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse, ApiError> {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    /// Sends a PUT request with a JSON body to the given path.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn put(&self, path: &str, body: serde_json::Value) -> Result<ApiResponse, ApiError> {
        self.request(HttpMethod::Put, path, Some(body)).await
    }

    /// Sends a DELETE request to the given path.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, ApiError> {
        self.request(HttpMethod::Delete, path, None).await
    }
}
