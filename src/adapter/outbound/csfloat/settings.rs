//! CSFloat feed configuration.

use serde::Deserialize;

/// Listing feed and link settings.
///
/// The API key is not part of this struct; it is read from
/// `CSFLOAT_API_KEY` at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct CsfloatConfig {
    /// REST API base URL; `/listings` is appended.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Listing page prefix used in notification links.
    #[serde(default = "default_item_url")]
    pub item_url: String,
    /// Newest-listings page linked from digests.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// Price-lookup prefix used in notification links.
    #[serde(default = "default_price_lookup_url")]
    pub price_lookup_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_api_url() -> String {
    "https://csfloat.com/api/v1".into()
}

fn default_item_url() -> String {
    "https://csfloat.com/item".into()
}

fn default_search_url() -> String {
    "https://csfloat.com/search?sort_by=most_recent".into()
}

fn default_price_lookup_url() -> String {
    "https://pricempire.com/item/csgo/skin".into()
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for CsfloatConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            item_url: default_item_url(),
            search_url: default_search_url(),
            price_lookup_url: default_price_lookup_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
