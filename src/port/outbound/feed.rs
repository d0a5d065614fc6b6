//! Listing feed port.
//!
//! One call fetches one page. Throttling is not an error: it is reported as
//! [`FeedPage::Throttled`] so the caller can back off and abandon the cycle.
//! Transport and decoding failures are errors.

use async_trait::async_trait;

use crate::domain::{Cents, Listing, ListingType};
use crate::error::Result;

/// Feed sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    MostRecent,
    ExpiresSoon,
}

impl SortOrder {
    /// Wire name used in feed queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MostRecent => "most_recent",
            Self::ExpiresSoon => "expires_soon",
        }
    }
}

/// Parameters for one page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub kind: ListingType,
    pub min_price: Cents,
    pub max_price: Cents,
    pub sort_by: SortOrder,
    /// Page size. `None` lets the feed apply its own default.
    pub limit: Option<u32>,
    pub page: u32,
}

impl FeedQuery {
    /// Newest buy-now listings within a price band.
    #[must_use]
    pub fn buy_now(min_price: Cents, max_price: Cents, limit: Option<u32>) -> Self {
        Self {
            kind: ListingType::BuyNow,
            min_price,
            max_price,
            sort_by: SortOrder::MostRecent,
            limit,
            page: 0,
        }
    }

    /// Auctions, soonest expiry first.
    #[must_use]
    pub fn auctions(min_price: Cents, max_price: Cents, limit: u32, page: u32) -> Self {
        Self {
            kind: ListingType::Auction,
            min_price,
            max_price,
            sort_by: SortOrder::ExpiresSoon,
            limit: Some(limit),
            page,
        }
    }

    /// Same query, different page.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// Result of a page fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedPage {
    Listings(Vec<Listing>),
    /// The feed answered with a non-success status.
    Throttled { status: u16 },
}

/// Source of marketplace listings.
#[async_trait]
pub trait ListingFeed: Send + Sync {
    async fn fetch(&self, query: &FeedQuery) -> Result<FeedPage>;
}
