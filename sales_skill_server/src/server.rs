use std::time::Duration;

use actix_web::{
    dev::Server,
    http::KeepAlive,
    middleware::{Condition, Logger},
    web,
    App,
    HttpServer,
};
use log::*;
use sales_engine::{OrderDataSource, SalesReportApi};
use shopify_tools::ShopifyApi;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{health, json_config, AlexaRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let shopify = ShopifyApi::new(config.shopify_config.clone())
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🛍️ Answering questions about {}", config.shopify_config.shop);
    let srv = create_server_instance(config, shopify)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Builds the report API each worker hands to the Alexa route.
pub fn report_api<B: OrderDataSource>(config: &ServerConfig, source: B) -> SalesReportApi<B> {
    let api = SalesReportApi::new(source).with_title(config.card_title.as_str());
    match config.timezone {
        Some(zone) => api.with_timezone(zone),
        None => api,
    }
}

pub fn create_server_instance<B>(config: ServerConfig, source: B) -> Result<Server, ServerError>
where B: OrderDataSource + Clone + Send + 'static {
    let access_log = config.access_log;
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let api = report_api(&config, source.clone());
        App::new()
            .wrap(Condition::new(
                access_log,
                Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("skill::access_log"),
            ))
            .app_data(json_config())
            .app_data(web::Data::new(api))
            .service(health)
            .service(AlexaRoute::<B>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}
