//! Local calendar dates and human-relative elapsed time.
//!
//! Everything here is computed relative to an explicit `now` instant, and local dates relative to the store's
//! [`LocalZone`], so the same inputs always give the same answer.
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use skill_common::DateString;
use thiserror::Error;

use crate::data_objects::LocalZone;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateWindowError {
    #[error("'{0}' is not a valid UTC offset")]
    InvalidOffset(String),
    #[error("'{0}' is not a recognised IANA timezone")]
    UnknownTimezone(String),
    #[error("Could not read order timestamp '{0}'")]
    InvalidTimestamp(String),
    #[error("Date is out of range. {0}")]
    OutOfRange(String),
}

/// Today's date in the given zone.
pub fn local_today_date(now_utc: DateTime<Utc>, zone: &LocalZone) -> Result<DateString, DateWindowError> {
    date_offset(now_utc, zone, 0)
}

/// The local date `days` days away from today. Negative values are in the past.
pub fn date_offset(now_utc: DateTime<Utc>, zone: &LocalZone, days: i64) -> Result<DateString, DateWindowError> {
    let today = zone.local_datetime(now_utc).date();
    let date = Duration::try_days(days)
        .and_then(|d| today.checked_add_signed(d))
        .ok_or_else(|| DateWindowError::OutOfRange(format!("{today} {days:+} days")))?;
    to_date_string(date)
}

fn to_date_string(date: NaiveDate) -> Result<DateString, DateWindowError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(DateWindowError::OutOfRange(date.to_string()));
    }
    date.format("%Y-%m-%d").to_string().parse::<DateString>().map_err(|e| DateWindowError::OutOfRange(e.to_string()))
}

/// The date portion of a `yyyy-mm-ddThh:mm:ss±hh:mm` timestamp. The timestamp is assumed to be well-formed.
pub fn date_only(timestamp: &str) -> &str {
    timestamp.get(0..10).unwrap_or(timestamp)
}

/// Describes how long ago the order was placed, e.g. "2 hours and 15 minutes ago".
///
/// This is the real time between the two instants, so the offset the order is stamped with doesn't matter.
/// Sub-minute precision is dropped. Timestamps in the future are treated as having just happened.
pub fn elapsed_phrase(now_utc: DateTime<Utc>, order_timestamp: &str) -> Result<String, DateWindowError> {
    let order_time = DateTime::parse_from_rfc3339(order_timestamp)
        .map_err(|_| DateWindowError::InvalidTimestamp(order_timestamp.to_string()))?
        .with_timezone(&Utc);
    let minutes = (now_utc - order_time).num_minutes().max(0);
    Ok(phrase_for_minutes(minutes))
}

pub fn phrase_for_minutes(elapsed_minutes: i64) -> String {
    let hours = elapsed_minutes / 60;
    let mins = elapsed_minutes % 60;
    match (hours, mins) {
        _ if elapsed_minutes <= 2 => "just now".to_string(),
        (0, _) => format!("{elapsed_minutes} minutes ago"),
        (1, 0) => "exactly 1 hour ago".to_string(),
        (1, 1) => "1 hour and 1 minute ago".to_string(),
        (1, m) => format!("1 hour and {m} minutes ago"),
        (h, 0) => format!("exactly {h} hours ago"),
        (h, 1) => format!("{h} hours and 1 minute ago"),
        (h, m) => format!("{h} hours and {m} minutes ago"),
    }
}
