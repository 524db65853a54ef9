//! Product group endpoints.
//!
//! Product groups bundle listings on the storefront; the API exposes them
//! read-only.

use crate::client::errors::ApiError;
use crate::client::response::ApiResponse;
use crate::client::SellyClient;

impl SellyClient {
    /// Lists all product groups on the account.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn list_product_groups(&self) -> Result<ApiResponse, ApiError> {
        self.get("/product_groups").await
    }

    /// Fetches a specific product group by id.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn get_product_group(&self, product_group_id: &str) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/product_groups/{product_group_id}")).await
    }
}
