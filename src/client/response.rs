//! Response types for the Selly API client.
//!
//! This module provides the [`ApiResponse`] type returned by every API call
//! and the [`Payload`] type holding the decoded response body.

use std::fmt;

/// A decoded response body.
///
/// The service answers with JSON on both success and error statuses, but
/// proxies and outages can produce plain-text bodies. Decoding attempts
/// JSON first and falls back to the raw text unchanged.
///
/// # Example
///
/// ```rust
/// use selly_api::Payload;
/// use serde_json::json;
///
/// assert_eq!(
///     Payload::from_body(r#"{"id":"c1"}"#.to_string()),
///     Payload::Json(json!({"id": "c1"}))
/// );
/// assert_eq!(
///     Payload::from_body("Service Unavailable".to_string()),
///     Payload::Text("Service Unavailable".to_string())
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The raw body text, kept when the body is not valid JSON.
    Text(String),
}

impl Payload {
    /// Decodes a response body, preferring JSON.
    ///
    /// Bodies that fail to parse as JSON are returned as [`Payload::Text`]
    /// unchanged, including empty bodies.
    #[must_use]
    pub fn from_body(body: String) -> Self {
        serde_json::from_str(&body).map_or(Self::Text(body), Self::Json)
    }

    /// Returns the JSON value, if the body decoded as JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if the body did not decode as JSON.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A response from the Selly API.
///
/// Carries the HTTP status code and the decoded body. In the default
/// compatibility mode every completed round trip produces one of these,
/// including 4xx/5xx responses: the service reports application errors in
/// the body, so callers inspect `status` and `payload` themselves.
///
/// # Example
///
/// ```rust
/// use selly_api::{ApiResponse, Payload};
/// use serde_json::json;
///
/// let response = ApiResponse {
///     status: 404,
///     payload: Payload::Json(json!({"error": "not found"})),
/// };
///
/// assert!(!response.is_ok());
/// assert_eq!(response.json(), Some(&json!({"error": "not found"})));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The decoded response body.
    pub payload: Payload,
}

impl ApiResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the JSON body, if the body decoded as JSON.
    #[must_use]
    pub const fn json(&self) -> Option<&serde_json::Value> {
        self.payload.as_json()
    }
}
