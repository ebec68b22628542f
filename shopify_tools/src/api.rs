use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::de::DeserializeOwned;
use skill_common::{helpers::is_utc_offset, DateString};

use crate::{
    config::ShopifyConfig,
    data_objects::ShopResponse,
    shopify_order::OrdersResponse,
    ShopifyApiError,
    ShopifyOrder,
    ShopifyShop,
};

/// Shopify caps a single page of the order listing at this many records.
pub const MAX_ORDERS_PER_REQUEST: usize = 250;

const ORDER_FIELDS: &str = "id,created_at,total_price,status,financial_status";

#[derive(Clone)]
pub struct ShopifyApi {
    config: ShopifyConfig,
    client: Arc<Client>,
}

impl ShopifyApi {
    pub fn new(config: ShopifyConfig) -> Result<Self, ShopifyApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        if !config.uses_basic_auth() {
            let val = HeaderValue::from_str(config.admin_access_token.reveal().as_str())
                .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
            headers.insert("X-Shopify-Access-Token", val);
        }
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ShopifyApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub fn config(&self) -> &ShopifyConfig {
        &self.config
    }

    pub async fn rest_query<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ShopifyApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if let Some(key) = &self.config.api_key {
            req = req.basic_auth(key, Some(self.config.password.reveal()));
        }
        if !params.is_empty() {
            req = req.query(params);
        }
        let response = req.send().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| ShopifyApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| ShopifyApiError::RestResponseError(e.to_string()))?;
            Err(ShopifyApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("https://{}/admin/api/{}{path}", self.config.shop, self.config.api_version)
    }

    /// Fetches the store's reference data: currency template and timezone.
    pub async fn fetch_shop(&self) -> Result<ShopifyShop, ShopifyApiError> {
        debug!("Fetching shop info for {}", self.config.shop);
        let result = self.rest_query::<ShopResponse>(Method::GET, "/shop.json", &[]).await?;
        info!(
            "Fetched shop info. money_format: {} timezone: {} iana_timezone: {:?}",
            result.shop.money_format, result.shop.timezone, result.shop.iana_timezone
        );
        Ok(result.shop)
    }

    /// Fetches orders created between the start of `from` and the end of `to` (inclusive), in the store's local
    /// `offset`, regardless of their open/closed status.
    ///
    /// Only a single page of at most [`MAX_ORDERS_PER_REQUEST`] orders is returned, most recent first.
    pub async fn fetch_orders(
        &self,
        from: &DateString,
        to: &DateString,
        offset: &str,
    ) -> Result<Vec<ShopifyOrder>, ShopifyApiError> {
        let params = orders_query_params(from, to, offset)?;
        let params = params.iter().map(|(k, v)| (*k, v.as_str())).collect::<Vec<_>>();
        debug!("Fetching orders from {from} to {to} ({offset})");
        let result = self.rest_query::<OrdersResponse>(Method::GET, "/orders.json", &params).await?;
        let count = result.orders.len();
        info!("Fetched {count} orders from {from} to {to}");
        if count >= MAX_ORDERS_PER_REQUEST {
            warn!("Order fetch hit the {MAX_ORDERS_PER_REQUEST} record limit. Older orders in the range were omitted.");
        }
        Ok(result.orders)
    }
}

/// Builds the query string for the order listing endpoint.
pub fn orders_query_params(
    from: &DateString,
    to: &DateString,
    offset: &str,
) -> Result<Vec<(&'static str, String)>, ShopifyApiError> {
    if !is_utc_offset(offset) {
        return Err(ShopifyApiError::RestRequestError(format!("'{offset}' is not a UTC offset of the form +hh:mm")));
    }
    Ok(vec![
        ("created_at_min", format!("{from}T00:00:00{offset}")),
        ("created_at_max", format!("{to}T23:59:59{offset}")),
        ("status", "any".to_string()),
        ("limit", MAX_ORDERS_PER_REQUEST.to_string()),
        ("fields", ORDER_FIELDS.to_string()),
    ])
}
