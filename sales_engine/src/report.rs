use chrono::{DateTime, Utc};
use skill_common::DateString;

use crate::{
    data_objects::{LocalZone, Order, StoreInfo},
    date_window::{date_offset, elapsed_phrase, DateWindowError},
    money::{format_money, FormattedMoney},
    order_filter::{count, filter_by_date, gross_total, most_recent},
    responses::{most_recent_order_message, orders_count_message, sales_message, Day},
};

/// Everything needed to answer one voice request: the store's settings, the fetched order window, and the moment
/// the request is being answered.
#[derive(Debug, Clone)]
pub struct SalesReport {
    now: DateTime<Utc>,
    zone: LocalZone,
    store: StoreInfo,
    orders: Vec<Order>,
}

impl SalesReport {
    pub fn new(now: DateTime<Utc>, zone: LocalZone, store: StoreInfo, orders: Vec<Order>) -> Self {
        Self { now, zone, store, orders }
    }

    pub fn date_for(&self, day: Day) -> Result<DateString, DateWindowError> {
        date_offset(self.now, &self.zone, day.offset())
    }

    pub fn orders_on(&self, day: Day) -> Result<Vec<Order>, DateWindowError> {
        let date = self.date_for(day)?;
        Ok(filter_by_date(&self.orders, &date, &self.zone))
    }

    pub fn format_money(&self, amount: rust_decimal::Decimal) -> FormattedMoney {
        format_money(amount, &self.store.money_format)
    }

    pub fn gross_sales(&self, day: Day) -> Result<FormattedMoney, DateWindowError> {
        let orders = self.orders_on(day)?;
        Ok(self.format_money(gross_total(&orders)))
    }

    pub fn orders_count_message(&self, day: Day) -> Result<String, DateWindowError> {
        let orders = self.orders_on(day)?;
        Ok(orders_count_message(count(&orders), day))
    }

    pub fn gross_sales_message(&self, day: Day) -> Result<String, DateWindowError> {
        let total = self.gross_sales(day)?;
        Ok(sales_message(&total, day))
    }

    pub fn most_recent_order_message(&self) -> Result<String, DateWindowError> {
        match most_recent(&self.orders) {
            None => Ok(most_recent_order_message(None)),
            Some(order) => {
                let elapsed = elapsed_phrase(self.now, &order.created_at)?;
                let total = self.format_money(order.total_price);
                Ok(most_recent_order_message(Some((&elapsed, &total))))
            },
        }
    }
}
