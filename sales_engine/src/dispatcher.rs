//! Maps a voice intent onto exactly one canned answer.
use std::{fmt::Display, str::FromStr};

use log::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    report::SalesReport,
    responses::{Day, GREETING},
};

pub const INTENT_REQUEST: &str = "IntentRequest";
pub const DEFAULT_CARD_TITLE: &str = "Shopify Skill";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    #[serde(rename = "OrdersTodayIntent")]
    OrdersToday,
    #[serde(rename = "OrdersYesterdayIntent")]
    OrdersYesterday,
    #[serde(rename = "GrossSalesTodayIntent")]
    GrossSalesToday,
    #[serde(rename = "GrossSalesYesterdayIntent")]
    GrossSalesYesterday,
    #[serde(rename = "MostRecentOrderIntent")]
    MostRecentOrder,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown intent: {0}")]
pub struct UnknownIntent(pub String);

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::OrdersToday,
        Intent::OrdersYesterday,
        Intent::GrossSalesToday,
        Intent::GrossSalesYesterday,
        Intent::MostRecentOrder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Intent::OrdersToday => "OrdersTodayIntent",
            Intent::OrdersYesterday => "OrdersYesterdayIntent",
            Intent::GrossSalesToday => "GrossSalesTodayIntent",
            Intent::GrossSalesYesterday => "GrossSalesYesterdayIntent",
            Intent::MostRecentOrder => "MostRecentOrderIntent",
        }
    }
}

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL.into_iter().find(|i| i.name() == s).ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The parts of an inbound voice request that the skill cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequest {
    /// e.g. `LaunchRequest` or `IntentRequest`
    pub request_type: String,
    pub intent_name: Option<String>,
}

impl SkillRequest {
    pub fn new<S: Into<String>>(request_type: S, intent_name: Option<S>) -> Self {
        Self { request_type: request_type.into(), intent_name: intent_name.map(Into::into) }
    }

    pub fn for_intent(intent: Intent) -> Self {
        Self::new(INTENT_REQUEST, Some(intent.name()))
    }

    /// The recognised intent, if this is an intent request for one.
    pub fn intent(&self) -> Option<Intent> {
        if self.request_type != INTENT_REQUEST {
            return None;
        }
        let name = self.intent_name.as_deref()?;
        name.parse::<Intent>().map_err(|e| debug!("🗣️ {e}")).ok()
    }
}

/// The answer handed back to the voice platform adapter. The session always ends after one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub title: String,
    /// SSML
    pub spoken_text: String,
    pub display_text: String,
    pub end_session: bool,
}

impl SkillResponse {
    pub fn new<S: Into<String>>(title: S, message: &str) -> Self {
        Self {
            title: title.into(),
            spoken_text: format!("<speak>{}</speak>", escape_ssml(message)),
            display_text: message.to_string(),
            end_session: true,
        }
    }
}

/// SSML is XML, so characters like `&` in a currency template must be escaped before being spoken.
fn escape_ssml(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut s, c| {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            _ => s.push(c),
        }
        s
    })
}

/// Picks the answer for `intent`. Requests without a recognised intent get the greeting.
pub fn compose_message(intent: Option<Intent>, report: &SalesReport) -> String {
    let Some(intent) = intent else {
        return GREETING.to_string();
    };
    let message = match intent {
        Intent::OrdersToday => report.orders_count_message(Day::Today),
        Intent::OrdersYesterday => report.orders_count_message(Day::Yesterday),
        Intent::GrossSalesToday => report.gross_sales_message(Day::Today),
        Intent::GrossSalesYesterday => report.gross_sales_message(Day::Yesterday),
        Intent::MostRecentOrder => report.most_recent_order_message(),
    };
    message.unwrap_or_else(|e| {
        warn!("🗣️ Could not answer {intent}. {e}");
        GREETING.to_string()
    })
}
