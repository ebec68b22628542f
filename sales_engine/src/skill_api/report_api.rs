use std::fmt::Debug;

use chrono::{DateTime, Utc};
use log::*;
use skill_common::DateString;

use crate::{
    data_objects::{LocalZone, StoreInfo},
    date_window::{date_offset, local_today_date, DateWindowError},
    dispatcher::{compose_message, SkillRequest, SkillResponse, DEFAULT_CARD_TITLE},
    report::SalesReport,
    responses::GREETING,
    traits::OrderDataSource,
};

/// How many days before today the order window starts. Two days back comfortably covers "yesterday" in any zone,
/// and gives the most-recent-order query something to find early in the morning.
pub const ORDER_WINDOW_DAYS: i64 = 2;

pub struct SalesReportApi<B> {
    source: B,
    title: String,
    timezone: Option<LocalZone>,
}

impl<B> Debug for SalesReportApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SalesReportApi({}, timezone: {:?})", self.title, self.timezone)
    }
}

impl<B> Clone for SalesReportApi<B>
where B: OrderDataSource + Clone
{
    fn clone(&self) -> Self {
        Self { source: self.source.clone(), title: self.title.clone(), timezone: self.timezone }
    }
}

impl<B> SalesReportApi<B>
where B: OrderDataSource
{
    pub fn new(source: B) -> Self {
        Self { source, title: DEFAULT_CARD_TITLE.to_string(), timezone: None }
    }

    /// The title shown on the card that accompanies every spoken answer.
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Overrides the timezone the store reports for itself.
    pub fn with_timezone(mut self, zone: LocalZone) -> Self {
        self.timezone = Some(zone);
        self
    }

    pub async fn respond(&self, request: &SkillRequest) -> SkillResponse {
        self.respond_at(request, Utc::now()).await
    }

    /// Answers `request` as if it arrived at `now`. Exactly one answer is produced, whatever happens upstream.
    pub async fn respond_at(&self, request: &SkillRequest, now: DateTime<Utc>) -> SkillResponse {
        let intent = request.intent();
        debug!("🗣️ Received {} (intent: {:?})", request.request_type, request.intent_name);
        let message = match intent {
            Some(intent) => {
                let report = self.load_report(now).await;
                compose_message(Some(intent), &report)
            },
            None => GREETING.to_string(),
        };
        info!("🗣️ {}: {message}", intent.map(|i| i.name()).unwrap_or("Greeting"));
        SkillResponse::new(self.title.as_str(), &message)
    }

    /// Fetches the store settings and the recent order window.
    ///
    /// Upstream failures don't propagate. Missing store info falls back to a plain `{{amount}}` template in UTC, and
    /// missing orders are treated as an empty window.
    pub async fn load_report(&self, now: DateTime<Utc>) -> SalesReport {
        let store = self.source.fetch_store_info().await.unwrap_or_else(|e| {
            warn!("🛍️ {e}. Using default store settings.");
            StoreInfo::default()
        });
        let zone = self.timezone.unwrap_or_else(|| store.local_zone());
        trace!("🛍️ Store zone is {zone}");
        let orders = match order_window(now, &zone) {
            Ok((from, to)) => {
                let offset = zone.offset_string(now);
                self.source.fetch_orders(&from, &to, &offset).await.unwrap_or_else(|e| {
                    warn!("🛍️ {e}. Treating the order window as empty.");
                    vec![]
                })
            },
            Err(e) => {
                warn!("🛍️ Could not work out the order window. {e}");
                vec![]
            },
        };
        debug!("🛍️ Loaded {} orders", orders.len());
        SalesReport::new(now, zone, store, orders)
    }
}

/// The first and last local dates of the order window, inclusive.
fn order_window(now: DateTime<Utc>, zone: &LocalZone) -> Result<(DateString, DateString), DateWindowError> {
    let from = date_offset(now, zone, -ORDER_WINDOW_DAYS)?;
    let to = local_today_date(now, zone)?;
    Ok((from, to))
}
