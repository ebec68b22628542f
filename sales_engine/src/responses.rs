//! The canned sentences the skill speaks.
use std::fmt::Display;

use crate::money::FormattedMoney;

pub const GREETING: &str =
    "Hi, this is the Shopify Alexa skill. You can ask me things like, \"How many orders have I had today?\"";
pub const NO_RECENT_ORDERS: &str = "There are no recent orders.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Day {
    Today,
    Yesterday,
}

impl Day {
    /// Offset from today, in days
    pub fn offset(&self) -> i64 {
        match self {
            Day::Today => 0,
            Day::Yesterday => -1,
        }
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Day::Today => f.write_str("today"),
            Day::Yesterday => f.write_str("yesterday"),
        }
    }
}

pub fn orders_count_message(count: usize, day: Day) -> String {
    match (day, count) {
        (Day::Today, 0) => "You have had no orders yet today.".to_string(),
        (Day::Today, 1) => "You have had 1 order so far today.".to_string(),
        (Day::Today, n) => format!("You have had {n} orders so far today."),
        (Day::Yesterday, 0) => "You had no orders yesterday.".to_string(),
        (Day::Yesterday, 1) => "You had 1 order yesterday.".to_string(),
        (Day::Yesterday, n) => format!("You had {n} orders yesterday."),
    }
}

pub fn sales_message(total: &FormattedMoney, day: Day) -> String {
    match (day, total.is_zero()) {
        (Day::Today, true) => "No sales yet today.".to_string(),
        (Day::Yesterday, true) => "No sales yesterday.".to_string(),
        (Day::Today, false) => format!("Gross sales so far today are {}", total.display),
        (Day::Yesterday, false) => format!("Gross sales yesterday were {}", total.display),
    }
}

/// `latest` carries the elapsed-time phrase and the formatted total of the most recent order, if there is one.
pub fn most_recent_order_message(latest: Option<(&str, &FormattedMoney)>) -> String {
    match latest {
        None => NO_RECENT_ORDERS.to_string(),
        Some((elapsed, total)) => format!("The most recent order was {elapsed} for {}", total.display),
    }
}
