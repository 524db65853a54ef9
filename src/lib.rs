//! # Selly API Rust client
//!
//! A Rust client for the [Selly.gg](https://developer.selly.gg) v2 REST API,
//! covering coupons, orders, products, product groups, and queries.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`SellyConfig`] and [`SellyConfigBuilder`]
//! - Validated newtypes for credentials ([`ApiKey`], [`AccountEmail`])
//! - A generic [`SellyClient::request`] operation plus fixed-verb wrappers
//! - Helper methods for every resource collection the API exposes
//!
//! The client is a pass-through mapping from method calls to the HTTP verbs
//! and URL paths the service defines. It holds nothing but its immutable
//! credentials and base URL: no caching, no retries, no rate limiting, no
//! pagination handling. Every call is one authenticated round trip.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use selly_api::{AccountEmail, ApiKey, SellyClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SellyClient::new(
//!     ApiKey::new("your-api-key")?,
//!     AccountEmail::new("merchant@example.com")?,
//! );
//!
//! let response = client.list_orders().await?;
//! if let Some(orders) = response.json() {
//!     println!("{orders}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Creating resources
//!
//! Create and update operations wrap their fields under the singular
//! resource key the service expects:
//!
//! ```rust,no_run
//! use selly_api::{AccountEmail, ApiKey, ProductFields, SellyClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = SellyClient::new(
//! #     ApiKey::new("your-api-key")?,
//! #     AccountEmail::new("merchant@example.com")?,
//! # );
//! // Coupons take their fields directly
//! let product_ids = vec!["prod_1".to_string()];
//! client.create_coupon("SUMMER20", 20, &product_ids, Some(100)).await?;
//!
//! // Products take a configuration struct with documented defaults
//! let product = ProductFields {
//!     title: "License key".to_string(),
//!     price: 499,
//!     ..ProductFields::default()
//! };
//! client.create_product(&product).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! By default the client runs in compatibility mode: the service reports
//! application errors in the response body, so 4xx/5xx responses come back
//! as `Ok` values and callers inspect [`ApiResponse::status`] and
//! [`ApiResponse::payload`]. Transport failures are always a distinct
//! [`ApiError::Transport`]. Opt into strict handling with
//! [`SellyConfigBuilder::strict_status`] to turn non-2xx responses into
//! [`ApiError::Status`].
//!
//! ```rust,no_run
//! use selly_api::{AccountEmail, ApiError, ApiKey, SellyClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = SellyClient::new(
//! #     ApiKey::new("your-api-key")?,
//! #     AccountEmail::new("merchant@example.com")?,
//! # );
//! match client.get_coupon("c1").await {
//!     Ok(response) if response.is_ok() => println!("{}", response.payload),
//!     Ok(response) => println!("API reported {}: {}", response.status, response.payload),
//!     Err(ApiError::Transport(e)) => eprintln!("transport failure: {e}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: credentials and base URL live on the client instance
//! - **Fail-fast validation**: configuration newtypes validate on construction
//! - **Thread-safe**: the client is `Send + Sync`; calls are independent
//! - **Async-first**: designed for use with the Tokio runtime

pub mod client;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use client::errors::ApiError;
pub use client::response::{ApiResponse, Payload};
pub use client::{HttpMethod, SellyClient, SDK_VERSION};
pub use config::{
    AccountEmail, ApiKey, ApiRoot, SellyConfig, SellyConfigBuilder, DEFAULT_API_ROOT,
};
pub use error::ConfigError;
pub use resources::{PaymentMethods, ProductFields, DEFAULT_SELLER_NOTE};
