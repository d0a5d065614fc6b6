//! CSFloat listings client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client as HttpClient;
use tracing::debug;
use url::Url;

use super::dto::decode_listings;
use super::settings::CsfloatConfig;
use crate::error::Result;
use crate::port::{FeedPage, FeedQuery, ListingFeed};

/// HTTP client for `GET /listings`.
///
/// Any non-success status is reported as [`FeedPage::Throttled`]; the feed
/// uses 429 for rate limiting but other refusals are handled the same way.
pub struct CsfloatClient {
    http: HttpClient,
    listings_url: Url,
    api_key: Option<String>,
}

impl CsfloatClient {
    /// Build a client from config and an optional API key.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_url` is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn from_config(config: &CsfloatConfig, api_key: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(concat!("floatscout/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let listings_url = Url::parse(&format!(
            "{}/listings",
            config.api_url.trim_end_matches('/')
        ))?;

        Ok(Self {
            http,
            listings_url,
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    fn url_for(&self, query: &FeedQuery) -> Url {
        let mut url = self.listings_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("type", query.kind.as_str())
                .append_pair("min_price", &query.min_price.to_string())
                .append_pair("max_price", &query.max_price.to_string())
                .append_pair("sort_by", query.sort_by.as_str());
            if let Some(limit) = query.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
            pairs.append_pair("page", &query.page.to_string());
        }
        url
    }
}

#[async_trait]
impl ListingFeed for CsfloatClient {
    async fn fetch(&self, query: &FeedQuery) -> Result<FeedPage> {
        let url = self.url_for(query);
        debug!(%url, "Fetching listings");

        let mut request = self.http.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(AUTHORIZATION, key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Ok(FeedPage::Throttled {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(FeedPage::Listings(decode_listings(&body, query.kind)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CsfloatClient {
        CsfloatClient::from_config(&CsfloatConfig::default(), None).unwrap()
    }

    #[test]
    fn buy_now_query_omits_unset_limit() {
        let url = client().url_for(&FeedQuery::buy_now(1000, 50000, None));
        assert_eq!(
            url.as_str(),
            "https://csfloat.com/api/v1/listings?type=buy_now&min_price=1000&max_price=50000&sort_by=most_recent&page=0"
        );
    }

    #[test]
    fn auction_query_carries_limit_and_page() {
        let url = client().url_for(&FeedQuery::auctions(1000, 50000, 50, 2));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("type".into(), "auction".into())));
        assert!(pairs.contains(&("sort_by".into(), "expires_soon".into())));
        assert!(pairs.contains(&("limit".into(), "50".into())));
        assert!(pairs.contains(&("page".into(), "2".into())));
    }

    #[test]
    fn empty_api_key_is_ignored() {
        let client = CsfloatClient::from_config(&CsfloatConfig::default(), Some(String::new())).unwrap();
        assert!(client.api_key.is_none());
    }
}
