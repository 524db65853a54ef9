//! Resource helper methods for the Selly v2 API.
//!
//! Each submodule extends [`SellyClient`](crate::SellyClient) with the
//! endpoints of one remote resource collection. Every helper builds a path
//! of the form `/{resource}` or `/{resource}/{id}`, wraps create/update
//! fields under the singular resource key the service expects (e.g.
//! `{"coupon": {...}}`), and delegates to the generic verb methods.
//!
//! | Resource | Operations |
//! |---|---|
//! | [`coupons`] | list, get, create, update, delete |
//! | [`orders`] | list, get |
//! | [`products`] | list, get, create, update, delete |
//! | [`product_groups`] | list, get |
//! | [`queries`] | list, get |
//!
//! Orders, product groups, and queries are server-defined records; the
//! client returns their JSON payloads without asserting a local shape.

pub mod coupons;
pub mod orders;
pub mod product_groups;
pub mod products;
pub mod queries;

pub use products::{PaymentMethods, ProductFields, DEFAULT_SELLER_NOTE};
