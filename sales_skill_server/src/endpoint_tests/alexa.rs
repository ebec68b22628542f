use actix_web::{http::StatusCode, web, web::ServiceConfig};
use chrono::{Duration, Utc};
use sales_engine::{DataSourceError, Order, StoreInfo};
use serde_json::Value;

use super::{helpers::post_request, mocks::MockOrderSource};
use crate::{
    config::ServerConfig,
    routes::{json_config, AlexaRoute},
    server::report_api,
};

const LAUNCH_REQUEST: &str = r#"{
    "version": "1.0",
    "session": { "new": true, "sessionId": "amzn1.echo-api.session.1" },
    "request": { "type": "LaunchRequest", "requestId": "amzn1.echo-api.request.1" }
}"#;

fn intent_request(name: &str) -> String {
    serde_json::json!({
        "version": "1.0",
        "request": {
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.2",
            "intent": { "name": name }
        }
    })
    .to_string()
}

fn configure_with(source: MockOrderSource, config: ServerConfig) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        cfg.app_data(json_config())
            .app_data(web::Data::new(report_api(&config, source)))
            .service(AlexaRoute::<MockOrderSource>::new());
    }
}

fn speech(body: &str) -> (String, String) {
    let value: Value = serde_json::from_str(body).expect("Response was not JSON");
    assert_eq!(value["version"], "1.0");
    assert_eq!(value["response"]["shouldEndSession"], true);
    assert_eq!(value["response"]["outputSpeech"]["type"], "SSML");
    let ssml = value["response"]["outputSpeech"]["ssml"].as_str().unwrap().to_string();
    let content = value["response"]["card"]["content"].as_str().unwrap().to_string();
    (ssml, content)
}

#[actix_web::test]
async fn launch_request_gets_the_greeting() {
    let _ = env_logger::try_init().ok();
    // No expectations: any call to Shopify would fail the test
    let source = MockOrderSource::new();
    let (status, body) = post_request("/alexa", LAUNCH_REQUEST, configure_with(source, ServerConfig::default())).await;
    assert_eq!(status, StatusCode::OK);
    let (ssml, content) = speech(&body);
    assert!(content.starts_with("Hi, this is the Shopify Alexa skill."));
    assert!(ssml.starts_with("<speak>Hi, this is the Shopify Alexa skill."));
}

#[actix_web::test]
async fn most_recent_order() {
    let _ = env_logger::try_init().ok();
    let mut source = MockOrderSource::new();
    source.expect_fetch_store_info().times(1).returning(|| Ok(StoreInfo::new("${{amount}}", "(GMT+00:00) UTC")));
    source.expect_fetch_orders().withf(|_, _, offset| offset.eq_ignore_ascii_case("+00:00")).times(1).returning(|_, _, _| {
        // A little over half an hour, since the request's clock was read before this fetch
        let placed = (Utc::now() - Duration::seconds(30 * 60 + 20)).to_rfc3339();
        Ok(vec![Order::new(1001, placed, "12.50".parse().unwrap())])
    });
    let (status, body) = post_request(
        "/alexa",
        &intent_request("MostRecentOrderIntent"),
        configure_with(source, ServerConfig::default()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (ssml, content) = speech(&body);
    assert_eq!(content, "The most recent order was 30 minutes ago for $12.50");
    assert_eq!(ssml, "<speak>The most recent order was 30 minutes ago for $12.50</speak>");
}

#[actix_web::test]
async fn shopify_unavailable() {
    let _ = env_logger::try_init().ok();
    let mut source = MockOrderSource::new();
    source
        .expect_fetch_store_info()
        .returning(|| Err(DataSourceError::StoreInfo("Error 503. Service unavailable".into())));
    source
        .expect_fetch_orders()
        .returning(|_, _, _| Err(DataSourceError::Orders("Error 503. Service unavailable".into())));
    let (status, body) = post_request(
        "/alexa",
        &intent_request("GrossSalesTodayIntent"),
        configure_with(source, ServerConfig::default()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, content) = speech(&body);
    assert_eq!(content, "No sales yet today.");
}

#[actix_web::test]
async fn card_title_comes_from_config() {
    let _ = env_logger::try_init().ok();
    let mut source = MockOrderSource::new();
    source.expect_fetch_store_info().returning(|| Ok(StoreInfo::default()));
    source.expect_fetch_orders().returning(|_, _, _| Ok(vec![]));
    let config = ServerConfig { card_title: "Corner Shop".to_string(), ..Default::default() };
    let (status, body) =
        post_request("/alexa", &intent_request("OrdersYesterdayIntent"), configure_with(source, config)).await;
    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["response"]["card"]["title"], "Corner Shop");
    assert_eq!(value["response"]["card"]["content"], "You had no orders yesterday.");
}

#[actix_web::test]
async fn malformed_envelope() {
    let _ = env_logger::try_init().ok();
    let source = MockOrderSource::new();
    let (status, body) =
        post_request("/alexa", r#"{"session": {}}"#, configure_with(source, ServerConfig::default())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let value: Value = serde_json::from_str(&body).unwrap();
    assert!(value["error"].as_str().unwrap().starts_with("Payload deserialization error."));
}
