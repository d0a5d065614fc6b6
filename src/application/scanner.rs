//! Auction page scanner.
//!
//! Walks the auction feed sorted by soonest expiry. Each page's last entry
//! is its latest-expiring one, so once that entry falls past the deadline
//! no later page can hold anything inside the window and pagination stops.

use chrono::{DateTime, Utc};

use super::backoff::RateLimitBackoff;
use crate::domain::{Cents, Listing};
use crate::error::Result;
use crate::port::{FeedQuery, ListingFeed};

/// Result of one pagination pass.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// Every fetched entry, in feed order.
    Complete { listings: Vec<Listing>, pages: u32 },
    /// A page was throttled; the scan is abandoned.
    Throttled { pages: u32 },
}

/// Why pagination stopped after a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    PastDeadline,
    ShortPage,
    NoExpiry,
    PageCap,
}

/// Paginates the auction feed up to a lookahead deadline.
#[derive(Debug, Clone, Copy)]
pub struct AuctionScanner {
    page_size: u32,
    max_pages: u32,
}

impl AuctionScanner {
    #[must_use]
    pub fn new(page_size: u32, max_pages: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            max_pages: max_pages.max(1),
        }
    }

    /// Fetch pages until one ends past `deadline` or the feed runs out.
    pub async fn collect(
        &self,
        feed: &dyn ListingFeed,
        backoff: &mut RateLimitBackoff,
        price_band: (Cents, Cents),
        deadline: DateTime<Utc>,
    ) -> Result<ScanOutcome> {
        let query = FeedQuery::auctions(price_band.0, price_band.1, self.page_size, 0);
        let mut listings = Vec::new();
        let mut pages = 0;

        loop {
            let page = feed.fetch(&query.with_page(pages)).await?;
            pages += 1;

            let Some(batch) = backoff.admit(page).await else {
                return Ok(ScanOutcome::Throttled { pages });
            };

            let stop = self.stop_after(&batch, pages, deadline);
            listings.extend(batch);

            if let Some(reason) = stop {
                tracing::debug!(pages, collected = listings.len(), ?reason, "Auction pagination done");
                return Ok(ScanOutcome::Complete { listings, pages });
            }
        }
    }

    fn stop_after(&self, batch: &[Listing], pages: u32, deadline: DateTime<Utc>) -> Option<Stop> {
        let Some(last) = batch.last() else {
            return Some(Stop::ShortPage);
        };
        match last.expires_at() {
            None => Some(Stop::NoExpiry),
            Some(at) if at > deadline => Some(Stop::PastDeadline),
            Some(_) if batch.len() < self.page_size as usize => Some(Stop::ShortPage),
            Some(_) if pages >= self.max_pages => Some(Stop::PageCap),
            Some(_) => None,
        }
    }
}
