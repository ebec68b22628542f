//! A thin client for the parts of the Shopify Admin REST API that the sales skill needs: the shop's reference data
//! (currency template and timezone) and a bounded window of recent orders.
mod api;
mod config;
mod error;
mod shopify_order;

pub mod data_objects;

pub use api::{ShopifyApi, MAX_ORDERS_PER_REQUEST};
pub use config::ShopifyConfig;
pub use data_objects::ShopifyShop;
pub use error::ShopifyApiError;
pub use shopify_order::ShopifyOrder;
