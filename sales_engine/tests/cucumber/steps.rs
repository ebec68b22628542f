use cucumber::{then, when};
use sales_engine::{dispatcher::INTENT_REQUEST, responses::GREETING, SkillRequest};

use crate::cucumber::SkillWorld;

#[when(expr = "I ask the skill for {word}")]
async fn ask_intent(world: &mut SkillWorld, intent: String) {
    world.ask(SkillRequest::new(INTENT_REQUEST.to_string(), Some(intent))).await;
}

#[when(expr = "a {word} arrives")]
async fn other_request(world: &mut SkillWorld, request_type: String) {
    world.ask(SkillRequest::new(request_type, None)).await;
}

#[then(expr = "the skill says {string}")]
async fn skill_says(world: &mut SkillWorld, message: String) {
    let response = world.response();
    assert_eq!(response.display_text, message);
    assert_eq!(response.spoken_text, format!("<speak>{message}</speak>"));
}

#[then("the skill greets me")]
async fn skill_greets(world: &mut SkillWorld) {
    assert_eq!(world.response().display_text, GREETING);
}

#[then("the session ends")]
async fn session_ends(world: &mut SkillWorld) {
    assert!(world.response().end_session);
}

#[then(expr = "orders were requested from {string} to {string} at offset {string}")]
async fn orders_requested(world: &mut SkillWorld, from: String, to: String, offset: String) {
    let requests = world.source.order_requests();
    assert_eq!(requests.len(), 1, "Expected exactly one order fetch");
    assert_eq!(requests[0].from, from.as_str());
    assert_eq!(requests[0].to, to.as_str());
    assert_eq!(requests[0].offset, offset);
}

#[then("no orders were requested")]
async fn no_orders_requested(world: &mut SkillWorld) {
    assert!(world.source.order_requests().is_empty());
}
