//! Shopify as an [`OrderDataSource`].
use std::str::FromStr;

use log::*;
use rust_decimal::Decimal;
use shopify_tools::{ShopifyApi, ShopifyOrder, ShopifyShop};
use skill_common::DateString;

use crate::{
    data_objects::{Order, StoreInfo},
    traits::{DataSourceError, OrderDataSource},
};

impl OrderDataSource for ShopifyApi {
    async fn fetch_store_info(&self) -> Result<StoreInfo, DataSourceError> {
        let shop = self.fetch_shop().await.map_err(|e| DataSourceError::StoreInfo(e.to_string()))?;
        Ok(store_info_from_shop(shop))
    }

    async fn fetch_orders(
        &self,
        from: &DateString,
        to: &DateString,
        offset: &str,
    ) -> Result<Vec<Order>, DataSourceError> {
        let orders =
            ShopifyApi::fetch_orders(self, from, to, offset).await.map_err(|e| DataSourceError::Orders(e.to_string()))?;
        Ok(orders.into_iter().filter_map(|o| order_from_shopify_order(o).map_err(|e| warn!("🛍️ {e}")).ok()).collect())
    }
}

pub fn store_info_from_shop(shop: ShopifyShop) -> StoreInfo {
    let store = StoreInfo::new(shop.money_format, shop.timezone);
    match shop.iana_timezone {
        Some(name) => store.with_iana_timezone(name),
        None => store,
    }
}

/// Converts a Shopify order. Orders whose total can't be read as a decimal are rejected.
pub fn order_from_shopify_order(order: ShopifyOrder) -> Result<Order, String> {
    let total_price = Decimal::from_str(order.total_price.trim())
        .map_err(|e| format!("Order {} has an invalid total price '{}'. {e}", order.id, order.total_price))?;
    Ok(Order {
        id: order.id,
        created_at: order.created_at,
        total_price,
        status: order.status,
        financial_status: order.financial_status,
    })
}
