#[cfg(feature = "shopify")]
pub mod shopify;
