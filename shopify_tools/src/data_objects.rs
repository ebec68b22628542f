use serde::{Deserialize, Serialize};

/// Store reference data, as returned by `GET shop.json`. Only the fields the skill uses are modelled; everything else
/// in the response is ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShopifyShop {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    /// Currency template, e.g. `£{{amount}}`
    pub money_format: String,
    /// Display name of the store timezone, e.g. `(GMT+00:00) Europe/London`
    pub timezone: String,
    /// e.g. `Europe/London`
    pub iana_timezone: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ShopResponse {
    pub shop: ShopifyShop,
}
