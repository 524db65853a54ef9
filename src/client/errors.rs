//! Error types for Selly API calls.
//!
//! Every API call returns `Result<ApiResponse, ApiError>`. The variants
//! keep the two genuinely different failure sources apart so callers can
//! pattern-match instead of inspecting strings:
//!
//! - [`ApiError::Transport`]: the request never completed (DNS, connection,
//!   TLS). The transport reason text is preserved via `Display` and the
//!   error source chain.
//! - [`ApiError::Status`]: the service answered with a non-2xx status.
//!   Only produced in strict mode; the default compatibility mode returns
//!   those responses as `Ok` values.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.get_coupon("c1").await {
//!     Ok(response) => println!("{}", response.payload),
//!     Err(ApiError::Status { status, payload }) => {
//!         println!("API error {status}: {payload}");
//!     }
//!     Err(ApiError::Transport(e)) => {
//!         println!("Transport failure: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

use crate::client::response::Payload;

/// Unified error type for Selly API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or connection error. The request did not complete.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx response, surfaced as an error in strict mode only.
    ///
    /// Carries the decoded body when the service sent JSON, or the raw
    /// text otherwise.
    #[error("Selly API responded with status {status}: {payload}")]
    Status {
        /// The HTTP status code of the response.
        status: u16,
        /// The decoded response body.
        payload: Payload,
    },
}
