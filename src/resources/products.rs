//! Product endpoints and the product field set.
//!
//! Create and update operations take a [`ProductFields`] value describing
//! the full listing; the service replaces the product with exactly what is
//! sent, so defaults are serialized alongside caller-set fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use selly_api::{PaymentMethods, ProductFields};
//!
//! let product = ProductFields {
//!     title: "License key".to_string(),
//!     description: "One activation".to_string(),
//!     price: 499,
//!     payments: PaymentMethods {
//!         bitcoin: true,
//!         paypal: true,
//!         ..PaymentMethods::default()
//!     },
//!     ..ProductFields::default()
//! };
//!
//! client.create_product(&product).await?;
//! ```

use serde::Serialize;
use serde_json::json;

use crate::client::errors::ApiError;
use crate::client::response::ApiResponse;
use crate::client::SellyClient;

/// Seller note applied when none is provided.
pub const DEFAULT_SELLER_NOTE: &str = "Thank you for your purchase";

/// Payment methods a product can be bought with.
///
/// Each flag enables one checkout option. All methods are disabled by
/// default; enable the ones the listing should accept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct PaymentMethods {
    /// Accept Bitcoin.
    pub bitcoin: bool,
    /// Accept Ethereum.
    pub ethereum: bool,
    /// Accept PayPal.
    pub paypal: bool,
    /// Accept Stripe card payments.
    pub stripe: bool,
    /// Accept Litecoin.
    pub litecoin: bool,
    /// Accept Dash.
    pub dash: bool,
    /// Accept Perfect Money.
    pub perfect_money: bool,
    /// Accept Bitcoin Cash.
    pub bitcoin_cash: bool,
    /// Accept Ripple.
    pub ripple: bool,
}

/// The full field set of a product listing.
///
/// Passed as a single argument to [`SellyClient::create_product`] and
/// [`SellyClient::update_product`]; combine caller-set fields with
/// struct-update syntax over [`ProductFields::default`].
///
/// # Defaults
///
/// - `title`, `description`: empty
/// - `stock`: `None` (unmanaged; only the serials product type tracks stock)
/// - `price`: `0`; `currency`: `"USD"`
/// - `product_type`: `1`
/// - `payments`: all methods disabled
/// - `private`, `unlisted`: `false`
/// - `seller_note`: [`DEFAULT_SELLER_NOTE`]
/// - `minimum_quantity`: `1`; `maximum_quantity`: `None` (no cap)
/// - `custom_fields`: empty
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductFields {
    /// Listing title.
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Units in stock. `None` leaves stock unmanaged; the value is only
    /// meaningful for the serials product type.
    pub stock: Option<i64>,
    /// Price in the minor units of `currency`.
    pub price: i64,
    /// ISO currency code the price is denominated in.
    pub currency: String,
    /// Server-defined product type discriminant.
    pub product_type: i64,
    /// Payment methods the product can be bought with.
    #[serde(flatten)]
    pub payments: PaymentMethods,
    /// Hide the listing from everyone without the direct link.
    pub private: bool,
    /// Keep the listing off the public storefront.
    pub unlisted: bool,
    /// Note delivered to the buyer with the purchase.
    pub seller_note: String,
    /// Smallest quantity a single order may contain.
    pub minimum_quantity: u32,
    /// Largest quantity a single order may contain; `None` means no cap.
    pub maximum_quantity: Option<u32>,
    /// Custom input fields shown at checkout, keyed by field name. The
    /// field definitions are server-defined JSON.
    pub custom_fields: serde_json::Map<String, serde_json::Value>,
}

impl Default for ProductFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            stock: None,
            price: 0,
            currency: "USD".to_string(),
            product_type: 1,
            payments: PaymentMethods::default(),
            private: false,
            unlisted: false,
            seller_note: DEFAULT_SELLER_NOTE.to_string(),
            minimum_quantity: 1,
            maximum_quantity: None,
            custom_fields: serde_json::Map::new(),
        }
    }
}

impl SellyClient {
    /// Lists all products on the account.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn list_products(&self) -> Result<ApiResponse, ApiError> {
        self.get("/products").await
    }

    /// Fetches a specific product by id.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn get_product(&self, product_id: &str) -> Result<ApiResponse, ApiError> {
        self.get(&format!("/products/{product_id}")).await
    }

    /// Creates a new product listing.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn create_product(&self, product: &ProductFields) -> Result<ApiResponse, ApiError> {
        let body = json!({ "product": product });
        self.post("/products", body).await
    }

    /// Updates an existing product, replacing its fields.
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn update_product(
        &self,
        product_id: &str,
        product: &ProductFields,
    ) -> Result<ApiResponse, ApiError> {
        let body = json!({ "product": product });
        self.put(&format!("/products/{product_id}"), body).await
    }

    /// Deletes an existing product.
    ///
    /// Upstream quirk, kept for wire compatibility: unlike every other
    /// endpoint, this path carries no leading slash, so the segment lands
    /// directly after the API root (`…/api/v2products/{id}`).
    ///
    /// # Errors
    ///
    /// See [`SellyClient::request`].
    pub async fn delete_product(&self, product_id: &str) -> Result<ApiResponse, ApiError> {
        self.delete(&format!("products/{product_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fields_match_documented_defaults() {
        let fields = ProductFields::default();

        assert_eq!(fields.title, "");
        assert_eq!(fields.description, "");
        assert_eq!(fields.stock, None);
        assert_eq!(fields.price, 0);
        assert_eq!(fields.currency, "USD");
        assert_eq!(fields.product_type, 1);
        assert_eq!(fields.payments, PaymentMethods::default());
        assert!(!fields.private);
        assert!(!fields.unlisted);
        assert_eq!(fields.seller_note, DEFAULT_SELLER_NOTE);
        assert_eq!(fields.minimum_quantity, 1);
        assert_eq!(fields.maximum_quantity, None);
        assert!(fields.custom_fields.is_empty());
    }

    #[test]
    fn test_all_payment_methods_default_disabled() {
        let payments = PaymentMethods::default();
        let value = serde_json::to_value(payments).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 9);
        for (name, enabled) in object {
            assert_eq!(enabled, &serde_json::json!(false), "{name} should default off");
        }
    }

    #[test]
    fn test_serialization_flattens_payment_flags_into_product() {
        let fields = ProductFields {
            payments: PaymentMethods {
                bitcoin: true,
                ..PaymentMethods::default()
            },
            ..ProductFields::default()
        };

        let value = serde_json::to_value(&fields).unwrap();
        assert_eq!(value["bitcoin"], serde_json::json!(true));
        assert_eq!(value["paypal"], serde_json::json!(false));
        assert!(value.get("payments").is_none());
    }

    #[test]
    fn test_serialization_includes_defaults_and_nulls() {
        let value = serde_json::to_value(ProductFields::default()).unwrap();

        assert_eq!(value["minimum_quantity"], serde_json::json!(1));
        assert_eq!(value["seller_note"], serde_json::json!(DEFAULT_SELLER_NOTE));
        assert_eq!(value["stock"], serde_json::Value::Null);
        assert_eq!(value["maximum_quantity"], serde_json::Value::Null);
        assert_eq!(value["custom_fields"], serde_json::json!({}));
    }

    #[test]
    fn test_struct_update_syntax_overrides_selected_fields() {
        let fields = ProductFields {
            title: "License key".to_string(),
            price: 499,
            ..ProductFields::default()
        };

        assert_eq!(fields.title, "License key");
        assert_eq!(fields.price, 499);
        assert_eq!(fields.minimum_quantity, 1);
    }
}
