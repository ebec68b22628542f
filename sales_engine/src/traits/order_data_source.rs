use skill_common::DateString;
use thiserror::Error;

use crate::data_objects::{Order, StoreInfo};

#[derive(Debug, Clone, Error)]
pub enum DataSourceError {
    #[error("Could not fetch store info. {0}")]
    StoreInfo(String),
    #[error("Could not fetch orders. {0}")]
    Orders(String),
}

/// The commerce backend that the skill reads order activity from.
#[allow(async_fn_in_trait)]
pub trait OrderDataSource {
    /// Fetch the store's currency template and timezone.
    async fn fetch_store_info(&self) -> Result<StoreInfo, DataSourceError>;
    /// Fetch the orders created from the start of `from` until the end of `to`, both local dates in the given UTC
    /// `offset` (`±hh:mm`).
    ///
    /// Implementations must return the orders most recent first, and may cap the number of orders returned.
    async fn fetch_orders(&self, from: &DateString, to: &DateString, offset: &str)
        -> Result<Vec<Order>, DataSourceError>;
}
