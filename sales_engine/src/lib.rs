//! Sales Engine
//!
//! The core of the Shopify sales voice skill. Given a store's settings and a window of recent orders, it works out
//! what to say in answer to questions like "How many orders have I had today?" or "What were yesterday's gross
//! sales?".
//!
//! The library is divided into:
//! 1. Pure building blocks: local dates and elapsed time ([`mod@date_window`]), currency rendering
//!    ([`mod@money`]), order filtering and totals ([`mod@order_filter`]) and the canned sentences
//!    ([`mod@responses`]).
//! 2. Intent dispatch ([`mod@dispatcher`]), which turns a voice request into exactly one answer.
//! 3. The public API ([`SalesReportApi`]), which fetches data from an [`OrderDataSource`] backend and answers a
//!    request. With the `shopify` feature, `shopify_tools::ShopifyApi` is such a backend.
pub mod data_objects;
pub mod date_window;
pub mod dispatcher;
pub mod integrations;
pub mod money;
pub mod order_filter;
pub mod report;
pub mod responses;
mod skill_api;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use data_objects::{LocalZone, Order, StoreInfo};
pub use dispatcher::{Intent, SkillRequest, SkillResponse};
pub use report::SalesReport;
pub use skill_api::report_api::{SalesReportApi, ORDER_WINDOW_DAYS};
pub use skill_common::DateString;
pub use traits::{DataSourceError, OrderDataSource};
