use serde::{Deserialize, Serialize};

/// The subset of a Shopify order that the order listing query asks for
/// (`fields=id,created_at,total_price,status,financial_status`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopifyOrder {
    pub id: u64,
    /// ISO-8601 timestamp in the store's local offset, e.g. `2020-04-29T10:15:00+01:00`
    pub created_at: String,
    /// Decimal amount as a string, e.g. `"10.00"`
    pub total_price: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub financial_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrdersResponse {
    pub orders: Vec<ShopifyOrder>,
}
