use std::sync::{Arc, Mutex};

use skill_common::DateString;

use crate::{
    data_objects::{LocalZone, Order, StoreInfo},
    traits::{DataSourceError, OrderDataSource},
};

/// An in-memory [`OrderDataSource`]. Like Shopify, it selects orders by their date at the requested offset.
///
/// Setting either half to `None` makes the corresponding fetch fail, which is how tests simulate an unavailable store.
#[derive(Debug, Clone, Default)]
pub struct StaticOrderSource {
    pub store: Option<StoreInfo>,
    pub orders: Option<Vec<Order>>,
    requests: Arc<Mutex<Vec<OrderRequest>>>,
}

/// The arguments of one `fetch_orders` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub from: DateString,
    pub to: DateString,
    pub offset: String,
}

impl StaticOrderSource {
    pub fn new(store: StoreInfo, orders: Vec<Order>) -> Self {
        Self { store: Some(store), orders: Some(orders), requests: Arc::default() }
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Every `fetch_orders` call made so far, oldest first.
    pub fn order_requests(&self) -> Vec<OrderRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl OrderDataSource for StaticOrderSource {
    async fn fetch_store_info(&self) -> Result<StoreInfo, DataSourceError> {
        self.store.clone().ok_or_else(|| DataSourceError::StoreInfo("Store is unavailable".into()))
    }

    async fn fetch_orders(
        &self,
        from: &DateString,
        to: &DateString,
        offset: &str,
    ) -> Result<Vec<Order>, DataSourceError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(OrderRequest { from: from.clone(), to: to.clone(), offset: offset.to_string() });
        }
        let orders = self.orders.clone().ok_or_else(|| DataSourceError::Orders("Error 503. Unavailable".into()))?;
        let zone = LocalZone::from_offset(offset).map_err(|e| DataSourceError::Orders(e.to_string()))?;
        Ok(orders
            .into_iter()
            .filter(|o| {
                let date = o.local_date(&zone);
                date.as_str() >= from.as_str() && date.as_str() <= to.as_str()
            })
            .collect())
    }
}
