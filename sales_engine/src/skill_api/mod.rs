//! # Sales skill public API
//!
//! [`SalesReportApi`] answers one voice request end to end. It is created by supplying a backend that implements
//! [`OrderDataSource`](crate::traits::OrderDataSource):
//!
//! ```rust,ignore
//! use sales_engine::{SalesReportApi, SkillRequest, Intent};
//! use shopify_tools::{ShopifyApi, ShopifyConfig};
//! let shopify = ShopifyApi::new(ShopifyConfig::new_from_env_or_default())?;
//! let api = SalesReportApi::new(shopify);
//! let response = api.respond(&SkillRequest::for_intent(Intent::OrdersToday)).await;
//! println!("{}", response.display_text);
//! ```
pub mod report_api;
