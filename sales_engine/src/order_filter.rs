use log::*;
use rust_decimal::Decimal;
use skill_common::DateString;

use crate::data_objects::{LocalZone, Order};

/// Orders placed on the `target` date in `zone`, in their original order.
pub fn filter_by_date(orders: &[Order], target: &DateString, zone: &LocalZone) -> Vec<Order> {
    let result = orders.iter().filter(|o| o.local_date(zone) == target.as_str()).cloned().collect::<Vec<_>>();
    trace!("🧮️ {} of {} orders were placed on {target}", result.len(), orders.len());
    result
}

pub fn count(orders: &[Order]) -> usize {
    orders.len()
}

/// Sum of the order totals. Zero for an empty list. A sum too large for a `Decimal` saturates at `Decimal::MAX`.
pub fn gross_total(orders: &[Order]) -> Decimal {
    orders.iter().try_fold(Decimal::ZERO, |total, o| total.checked_add(o.total_price)).unwrap_or_else(|| {
        warn!("🧮️ The total of {} orders is too large to represent", orders.len());
        Decimal::MAX
    })
}

/// The order with the latest `created_at`. Orders whose timestamp can't be read sort behind all others, and ties
/// go to whichever comes first in `orders`.
pub fn most_recent(orders: &[Order]) -> Option<&Order> {
    orders.iter().reduce(|best, o| if o.created_at_instant() > best.created_at_instant() { o } else { best })
}
