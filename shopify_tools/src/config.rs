use log::*;
use skill_common::{helpers::non_empty_env, Secret};

pub const DEFAULT_API_VERSION: &str = "2024-04";

#[derive(Debug, Clone, Default)]
pub struct ShopifyConfig {
    /// The storefront domain, e.g. "my-shop.myshopify.com"
    pub shop: String,
    pub api_version: String,
    /// Access token for custom apps. Sent in the `X-Shopify-Access-Token` header.
    pub admin_access_token: Secret<String>,
    /// Private apps authenticate with HTTP basic auth instead. When an API key is set, it takes precedence over the
    /// access token.
    pub api_key: Option<String>,
    pub password: Secret<String>,
}

impl ShopifyConfig {
    pub fn new<S: Into<String>>(shop: S, admin_access_token: S) -> Self {
        Self {
            shop: shop_domain(&shop.into()),
            api_version: DEFAULT_API_VERSION.to_string(),
            admin_access_token: Secret::new(admin_access_token.into()),
            ..Default::default()
        }
    }

    pub fn new_from_env_or_default() -> Self {
        let shop = non_empty_env("SKILL_SHOPIFY_SHOP").map(|s| shop_domain(&s)).unwrap_or_else(|| {
            warn!("SKILL_SHOPIFY_SHOP not set, using (probably useless) default");
            "example.myshopify.com".to_string()
        });
        let api_version = non_empty_env("SKILL_SHOPIFY_API_VERSION").unwrap_or_else(|| {
            warn!("SKILL_SHOPIFY_API_VERSION not set, using {DEFAULT_API_VERSION} as default");
            DEFAULT_API_VERSION.to_string()
        });
        let api_key = non_empty_env("SKILL_SHOPIFY_API_KEY");
        let password = Secret::new(non_empty_env("SKILL_SHOPIFY_PASSWORD").unwrap_or_default());
        let admin_access_token = Secret::new(non_empty_env("SKILL_SHOPIFY_ADMIN_ACCESS_TOKEN").unwrap_or_else(|| {
            if api_key.is_none() {
                warn!("Neither SKILL_SHOPIFY_ADMIN_ACCESS_TOKEN nor SKILL_SHOPIFY_API_KEY is set. Requests will fail.");
            }
            String::default()
        }));
        if api_key.is_some() && password.is_empty() {
            warn!("SKILL_SHOPIFY_API_KEY is set, but SKILL_SHOPIFY_PASSWORD is not");
        }
        Self { shop, api_version, admin_access_token, api_key, password }
    }

    pub fn uses_basic_auth(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Private apps have historically been configured with a bare shop name (e.g. "my-shop"). Expand those to the full
/// myshopify domain, and leave anything that already looks like a domain alone.
pub fn shop_domain(shop: &str) -> String {
    let shop = shop.trim().trim_start_matches("https://").trim_end_matches('/');
    if shop.contains('.') {
        shop.to_string()
    } else {
        format!("{shop}.myshopify.com")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bare_shop_names_are_expanded() {
        assert_eq!(shop_domain("my-shop"), "my-shop.myshopify.com");
        assert_eq!(shop_domain("my-shop.myshopify.com"), "my-shop.myshopify.com");
        assert_eq!(shop_domain("https://shop.example.com/"), "shop.example.com");
    }

    #[test]
    fn new_config_uses_default_version() {
        let config = ShopifyConfig::new("my-shop", "shpat_000");
        assert_eq!(config.shop, "my-shop.myshopify.com");
        assert_eq!(config.api_version, DEFAULT_API_VERSION);
        assert!(!config.uses_basic_auth());
        assert_eq!(format!("{:?}", config.admin_access_token), "****");
    }
}
