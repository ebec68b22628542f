use std::env;

use log::*;
use sales_engine::{dispatcher::DEFAULT_CARD_TITLE, LocalZone};
use shopify_tools::ShopifyConfig;
use skill_common::helpers::{non_empty_env, parse_boolean_flag};

const DEFAULT_SKILL_HOST: &str = "127.0.0.1";
const DEFAULT_SKILL_PORT: u16 = 8370;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// The title of the card that accompanies every spoken answer.
    pub card_title: String,
    /// When set, this zone is used instead of the one the store reports for itself.
    pub timezone: Option<LocalZone>,
    /// Wrap every request in the access log middleware.
    pub access_log: bool,
    /// Shopify storefront configuration
    pub shopify_config: ShopifyConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SKILL_HOST.to_string(),
            port: DEFAULT_SKILL_PORT,
            card_title: DEFAULT_CARD_TITLE.to_string(),
            timezone: None,
            access_log: true,
            shopify_config: ShopifyConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SKILL_HOST").ok().unwrap_or_else(|| DEFAULT_SKILL_HOST.into());
        let port = env::var("SKILL_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SKILL_PORT. {e} Using the default, {DEFAULT_SKILL_PORT}, \
                         instead."
                    );
                    DEFAULT_SKILL_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SKILL_PORT);
        let card_title = non_empty_env("SKILL_CARD_TITLE").unwrap_or_else(|| DEFAULT_CARD_TITLE.to_string());
        let timezone = non_empty_env("SKILL_TIMEZONE").and_then(|name| timezone_override(&name));
        let access_log = parse_boolean_flag(env::var("SKILL_ACCESS_LOG").ok(), true);
        if !access_log {
            info!("🪛️ The HTTP access log is disabled");
        }
        let shopify_config = ShopifyConfig::new_from_env_or_default();
        Self { host, port, card_title, timezone, access_log, shopify_config }
    }
}

fn timezone_override(name: &str) -> Option<LocalZone> {
    match LocalZone::from_iana(name) {
        Ok(zone) => {
            info!("🪛️ Using {zone} in place of the store's timezone");
            Some(zone)
        },
        Err(e) => {
            warn!("🪛️ Ignoring SKILL_TIMEZONE. {e}. The store's own timezone will be used.");
            None
        },
    }
}
