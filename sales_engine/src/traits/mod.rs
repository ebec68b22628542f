//! # Collaborator interfaces
//!
//! The sales engine never talks to the network itself. Instead, a backend that implements [`OrderDataSource`] is
//! handed to [`crate::SalesReportApi`]. With the `shopify` feature enabled, `shopify_tools::ShopifyApi` is such a
//! backend.
mod order_data_source;

pub use order_data_source::{DataSourceError, OrderDataSource};
