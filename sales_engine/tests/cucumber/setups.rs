use chrono::{DateTime, Utc};
use cucumber::given;
use rust_decimal::Decimal;
use sales_engine::{Order, StoreInfo};

use crate::cucumber::SkillWorld;

#[given(expr = "a store with money format {string} in timezone {string}")]
async fn store_settings(world: &mut SkillWorld, money_format: String, timezone: String) {
    world.store = StoreInfo::new(money_format, timezone);
}

#[given(expr = "the store IANA timezone is {string}")]
async fn store_iana_timezone(world: &mut SkillWorld, name: String) {
    world.store = world.store.clone().with_iana_timezone(name);
}

#[given(expr = "the time is {string}")]
async fn current_time(world: &mut SkillWorld, now: String) {
    world.now = now.parse::<DateTime<Utc>>().expect("Not a valid RFC3339 timestamp");
}

#[given(expr = "order {int} was placed at {string} for {string}")]
async fn order_placed(world: &mut SkillWorld, id: u64, created_at: String, total: String) {
    let total = total.parse::<Decimal>().expect("Not a valid decimal amount");
    world.orders.push(Order::new(id, created_at, total));
}

#[given("the store info cannot be fetched")]
async fn store_unavailable(world: &mut SkillWorld) {
    world.store_available = false;
}

#[given("the orders cannot be fetched")]
async fn orders_unavailable(world: &mut SkillWorld) {
    world.orders_available = false;
}
