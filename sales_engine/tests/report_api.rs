use chrono::{DateTime, Utc};
use rust_decimal_macros::dec;
use sales_engine::{
    test_utils::{prepare_env::prepare_test_env, StaticOrderSource},
    Intent,
    LocalZone,
    Order,
    SalesReportApi,
    SkillRequest,
    StoreInfo,
};

fn now() -> DateTime<Utc> {
    "2020-04-29T13:00:00Z".parse().unwrap()
}

fn london_store() -> StoreInfo {
    StoreInfo::new("£{{amount}}", "(GMT+01:00) Europe/London")
}

fn orders() -> Vec<Order> {
    vec![
        Order::new(4, "2020-04-29T13:58:12+01:00", dec!(12.50)),
        Order::new(3, "2020-04-29T11:00:00+01:00", dec!(10.00)),
        Order::new(2, "2020-04-29T08:00:00+01:00", dec!(7.50)),
        Order::new(1, "2020-04-28T19:20:00+01:00", dec!(1234.5)),
    ]
}

#[tokio::test]
async fn answers_every_intent() {
    prepare_test_env();
    let api = SalesReportApi::new(StaticOrderSource::new(london_store(), orders()));
    let mut answers = vec![];
    for intent in Intent::ALL {
        let response = api.respond_at(&SkillRequest::for_intent(intent), now()).await;
        assert!(response.end_session);
        answers.push(response.display_text);
    }
    assert_eq!(answers, vec![
        "You have had 3 orders so far today.",
        "You had 1 order yesterday.",
        "Gross sales so far today are £30.00",
        "Gross sales yesterday were £1,234.50",
        "The most recent order was just now for £12.50",
    ]);
}

#[tokio::test]
async fn one_fetch_per_request() {
    prepare_test_env();
    let source = StaticOrderSource::new(london_store(), orders());
    let api = SalesReportApi::new(source.clone());
    api.respond_at(&SkillRequest::for_intent(Intent::OrdersToday), now()).await;
    api.respond_at(&SkillRequest::for_intent(Intent::GrossSalesYesterday), now()).await;
    let requests = source.order_requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.from == "2020-04-27" && r.to == "2020-04-29" && r.offset == "+01:00"));
}

#[tokio::test]
async fn timezone_override_moves_the_window() {
    prepare_test_env();
    let source = StaticOrderSource::new(london_store(), orders());
    let zone = LocalZone::from_iana("Pacific/Auckland").unwrap();
    let api = SalesReportApi::new(source.clone()).with_timezone(zone);
    let response = api.respond_at(&SkillRequest::for_intent(Intent::OrdersToday), now()).await;
    // 13:00 UTC is 01:00 the next morning in Auckland, and order 4 (12:58 UTC) landed just before that
    assert_eq!(response.display_text, "You have had 1 order so far today.");
    let requests = source.order_requests();
    assert_eq!(requests[0].from, "2020-04-28");
    assert_eq!(requests[0].to, "2020-04-30");
    assert_eq!(requests[0].offset, "+12:00");
}

#[tokio::test]
async fn timezone_override_keeps_elapsed_time_real() {
    prepare_test_env();
    let orders = vec![Order::new(1, "2020-04-29T13:30:00+01:00", dec!(10.00))];
    let zone = LocalZone::from_iana("Pacific/Auckland").unwrap();
    let api = SalesReportApi::new(StaticOrderSource::new(london_store(), orders)).with_timezone(zone);
    let response = api.respond_at(&SkillRequest::for_intent(Intent::MostRecentOrder), now()).await;
    assert_eq!(response.display_text, "The most recent order was 30 minutes ago for £10.00");
}

#[tokio::test]
async fn store_fallback_keeps_elapsed_time_real() {
    prepare_test_env();
    let orders = vec![Order::new(1, "2020-04-29T13:30:00+01:00", dec!(10.00))];
    let mut source = StaticOrderSource::new(london_store(), orders);
    source.store = None;
    let api = SalesReportApi::new(source);
    let later = "2020-04-29T14:00:00Z".parse().unwrap();
    let response = api.respond_at(&SkillRequest::for_intent(Intent::MostRecentOrder), later).await;
    assert_eq!(response.display_text, "The most recent order was 1 hour and 30 minutes ago for 10.00");
}

#[tokio::test]
async fn unavailable_source_still_answers() {
    prepare_test_env();
    let api = SalesReportApi::new(StaticOrderSource::unavailable()).with_title("My Shop");
    let response = api.respond_at(&SkillRequest::for_intent(Intent::MostRecentOrder), now()).await;
    assert_eq!(response.title, "My Shop");
    assert_eq!(response.display_text, "There are no recent orders.");
    assert_eq!(response.spoken_text, "<speak>There are no recent orders.</speak>");
}
