use std::fmt::Display;

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use chrono_tz::Tz;
use log::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use skill_common::helpers::timezone_offset_from_display;

use crate::date_window::{date_only, DateWindowError};

pub const DEFAULT_MONEY_FORMAT: &str = "{{amount}}";
pub const UTC_OFFSET: &str = "+00:00";

//--------------------------------------        Order         ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    /// ISO-8601 timestamp, expressed in the store's local offset
    pub created_at: String,
    pub total_price: Decimal,
    pub status: Option<String>,
    pub financial_status: Option<String>,
}

impl Order {
    pub fn new<S: Into<String>>(id: u64, created_at: S, total_price: Decimal) -> Self {
        Self { id, created_at: created_at.into(), total_price, status: None, financial_status: None }
    }

    pub fn with_financial_status<S: Into<String>>(mut self, status: S) -> Self {
        self.financial_status = Some(status.into());
        self
    }

    /// The calendar date the order was placed on in `zone`, as `yyyy-mm-dd`. A timestamp that can't be read keeps
    /// its own date portion.
    pub fn local_date(&self, zone: &LocalZone) -> String {
        match self.created_at_instant() {
            Some(t) => zone.local_datetime(t.with_timezone(&Utc)).format("%Y-%m-%d").to_string(),
            None => date_only(&self.created_at).to_string(),
        }
    }

    pub fn created_at_instant(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.created_at).ok()
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order #{} @ {} for {}", self.id, self.created_at, self.total_price)
    }
}

//--------------------------------------      StoreInfo       ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    /// Currency template, e.g. `£{{amount}}`
    pub money_format: String,
    /// Display name of the store timezone, e.g. `(GMT+00:00) Europe/London`
    pub timezone: String,
    /// The `±hh:mm` offset carried in `timezone`
    pub timezone_offset: String,
    pub iana_timezone: Option<String>,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            money_format: DEFAULT_MONEY_FORMAT.to_string(),
            timezone: "(GMT+00:00) UTC".to_string(),
            timezone_offset: UTC_OFFSET.to_string(),
            iana_timezone: None,
        }
    }
}

impl StoreInfo {
    pub fn new<S: Into<String>>(money_format: S, timezone: S) -> Self {
        let timezone = timezone.into();
        let timezone_offset = timezone_offset_from_display(&timezone).unwrap_or_else(|| {
            warn!("🕰️ Store timezone '{timezone}' does not contain a UTC offset. Assuming {UTC_OFFSET}");
            UTC_OFFSET.to_string()
        });
        Self { money_format: money_format.into(), timezone, timezone_offset, iana_timezone: None }
    }

    pub fn with_iana_timezone<S: Into<String>>(mut self, name: S) -> Self {
        self.iana_timezone = Some(name.into());
        self
    }

    /// The zone used to work out local dates. A recognised IANA name is preferred, since it tracks daylight saving;
    /// otherwise the fixed offset from the display name is used.
    pub fn local_zone(&self) -> LocalZone {
        if let Some(name) = &self.iana_timezone {
            match LocalZone::from_iana(name) {
                Ok(zone) => return zone,
                Err(e) => warn!("🕰️ {e}. Falling back to the fixed offset {}", self.timezone_offset),
            }
        }
        LocalZone::from_offset(&self.timezone_offset).unwrap_or_else(|e| {
            warn!("🕰️ {e}. Falling back to UTC");
            LocalZone::utc()
        })
    }
}

//--------------------------------------      LocalZone       ---------------------------------------------------------
/// The store's timezone, injected into every local-date calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalZone {
    Fixed(FixedOffset),
    Named(Tz),
}

impl Default for LocalZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl LocalZone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// Parses an offset of the form `+hh:mm` or `-hh:mm`.
    pub fn from_offset(offset: &str) -> Result<Self, DateWindowError> {
        let invalid = || DateWindowError::InvalidOffset(offset.to_string());
        if !skill_common::helpers::is_utc_offset(offset) {
            return Err(invalid());
        }
        let hours = offset[1..3].parse::<i32>().map_err(|_| invalid())?;
        let minutes = offset[4..6].parse::<i32>().map_err(|_| invalid())?;
        let seconds = hours * 3600 + minutes * 60;
        let fixed = if offset.starts_with('-') { FixedOffset::west_opt(seconds) } else { FixedOffset::east_opt(seconds) };
        fixed.map(Self::Fixed).ok_or_else(invalid)
    }

    pub fn from_iana(name: &str) -> Result<Self, DateWindowError> {
        name.parse::<Tz>().map(Self::Named).map_err(|_| DateWindowError::UnknownTimezone(name.to_string()))
    }

    /// The UTC offset in force at the given instant.
    pub fn offset_at(&self, now_utc: DateTime<Utc>) -> FixedOffset {
        match self {
            Self::Fixed(offset) => *offset,
            Self::Named(tz) => now_utc.with_timezone(tz).offset().fix(),
        }
    }

    /// Wall-clock time in this zone at the given instant.
    pub fn local_datetime(&self, now_utc: DateTime<Utc>) -> NaiveDateTime {
        now_utc.with_timezone(&self.offset_at(now_utc)).naive_local()
    }

    /// The offset at the given instant, rendered as `±hh:mm` for API queries.
    pub fn offset_string(&self, now_utc: DateTime<Utc>) -> String {
        let secs = self.offset_at(now_utc).local_minus_utc();
        let sign = if secs < 0 { '-' } else { '+' };
        let mins = secs.abs() / 60;
        format!("{sign}{:02}:{:02}", mins / 60, mins % 60)
    }
}

impl Display for LocalZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(offset) => write!(f, "UTC{offset}"),
            Self::Named(tz) => write!(f, "{}", tz.name()),
        }
    }
}
