//! Query endpoints.
//!
//! Queries are support messages buyers send through the storefront contact
//! form; the API exposes them read-only.

use crate::client::errors::ApiError;
use crate::client::response::ApiResponse;
use crate::client::SellyClient;

impl SellyClient {
    /// Lists all queries on the account.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn list_queries(&self) -> Result<ApiResponse, ApiError> {
        self.get("/queries").await
    }

    /// Fetches a specific query by id.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn get_query(&self, query_id: &str) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/queries/{query_id}")).await
    }
}
