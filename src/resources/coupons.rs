//! Coupon endpoints.
//!
//! Coupons attach a discount to a set of products. The coupon code is
//! unique per account; uniqueness and all other validation is enforced by
//! the remote service, not client-side.
//!
//! # Example
//!
//! ```rust,ignore
//! // Create a coupon limited to 100 uses
//! let product_ids = vec!["prod_1".to_string(), "prod_2".to_string()];
//! client.create_coupon("SUMMER20", 20, &product_ids, Some(100)).await?;
//!
//! // An absent max_use means unlimited
//! client.create_coupon("LAUNCH", 10, &product_ids, None).await?;
//! ```

use serde_json::json;

use crate::client::errors::ApiError;
use crate::client::response::ApiResponse;
use crate::client::SellyClient;

impl SellyClient {
    /// Lists all coupons on the account.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn list_coupons(&self) -> Result<ApiResponse, ApiError> {
        self.get("/coupons").await
    }

    /// Fetches a specific coupon by id.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn get_coupon(&self, coupon_id: &str) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/coupons/{coupon_id}")).await
    }

    /// Creates a new coupon.
    ///
    /// `max_use` caps how many times the code can be redeemed; `None`
    /// means unlimited and is passed through to the service as JSON
    /// `null`.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn create_coupon(
        &self,
        code: &str,
        discount: i64,
        product_ids: &[String],
        max_use: Option<u32>,
    ) -> Result<ApiResponse, ApiError> {
        let body = json!({
            "coupon": {
                "code": code,
                "discount": discount,
                "product_ids": product_ids,
                "max_use": max_use,
            }
        });
        self.post("/coupons", body).await
    }

    /// Updates an existing coupon, replacing its fields.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn update_coupon(
        &self,
        coupon_id: &str,
        code: &str,
        discount: i64,
        product_ids: &[String],
        max_use: Option<u32>,
    ) -> Result<ApiResponse, ApiError> {
        let body = json!({
            "coupon": {
                "code": code,
                "discount": discount,
                "product_ids": product_ids,
                "max_use": max_use,
            }
        });
        self.put(&format!("/coupons/{coupon_id}"), body).await
    }

    /// Deletes an existing coupon.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn delete_coupon(&self, coupon_id: &str) -> Result<ApiResponse, ApiError> {
        self.delete(&format!("/coupons/{coupon_id}")).await
    }
}
