use anyhow::{anyhow, Result};
use chrono::Utc;
use log::*;
use sales_engine::{
    date_window::date_offset,
    dispatcher::{compose_message, INTENT_REQUEST},
    Intent,
    OrderDataSource,
    SalesReportApi,
    SkillRequest,
};
use sales_skill_server::data_objects::AlexaResponse;
use shopify_tools::{ShopifyApi, ShopifyConfig};

use crate::formatting::{format_orders, format_report, format_store_info};

fn new_shopify_api() -> Result<ShopifyApi> {
    let config = ShopifyConfig::new_from_env_or_default();
    info!("🛍️ Connecting to {}", config.shop);
    ShopifyApi::new(config).map_err(|e| anyhow!("Error creating Shopify API: {e}"))
}

pub async fn print_store_info() -> Result<()> {
    let api = new_shopify_api()?;
    let store = api.fetch_store_info().await?;
    println!("{}", format_store_info(&store, Utc::now()));
    Ok(())
}

pub async fn print_orders(days_ago: u32) -> Result<()> {
    let api = new_shopify_api()?;
    let store = api.fetch_store_info().await?;
    let now = Utc::now();
    let zone = store.local_zone();
    let date = date_offset(now, &zone, -i64::from(days_ago))?;
    let offset = zone.offset_string(now);
    let orders = OrderDataSource::fetch_orders(&api, &date, &date, &offset).await?;
    println!("Orders on {date} ({zone})");
    println!("{}", format_orders(&orders, &store));
    Ok(())
}

pub async fn print_report() -> Result<()> {
    let api = SalesReportApi::new(new_shopify_api()?);
    let report = api.load_report(Utc::now()).await;
    let answers = Intent::ALL.iter().map(|&intent| (intent, compose_message(Some(intent), &report))).collect::<Vec<_>>();
    println!("{}", format_report(&answers));
    Ok(())
}

pub async fn ask_intent(intent: String) -> Result<()> {
    let api = SalesReportApi::new(new_shopify_api()?);
    let request = SkillRequest::new(INTENT_REQUEST.to_string(), Some(intent));
    let response = AlexaResponse::from(api.respond(&request).await);
    let json = serde_json::to_string_pretty(&response)?;
    println!("{json}");
    Ok(())
}
