//! Order endpoints.
//!
//! Orders are created by buyers through the storefront, so the API exposes
//! them read-only.

use crate::client::errors::ApiError;
use crate::client::response::ApiResponse;
use crate::client::SellyClient;

impl SellyClient {
    /// Lists all orders on the account.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn list_orders(&self) -> Result<ApiResponse, ApiError> {
        self.get("/orders").await
    }

    /// Fetches a specific order by id.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn get_order(&self, order_id: &str) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/orders/{order_id}")).await
    }
}
