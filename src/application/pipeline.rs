//! Deal-detection pipeline.
//!
//! One invocation is one cycle: fetch, classify, deduplicate, batch and
//! deliver. The pipeline holds no run state of its own beyond backoff
//! bookkeeping; counters and seen keys live in the [`PollContext`] lent to
//! each call.

use std::sync::Arc;
use std::time::Duration;

use super::backoff::RateLimitBackoff;
use super::batcher::{Accepted, Links, NotificationBatcher};
use super::scanner::{AuctionScanner, ScanOutcome};
use super::state::PollContext;
use crate::domain::{classify, DealCriteria, DedupKey, DedupStore, Listing, ListingType, Verdict};
use crate::error::{ConfigError, Result};
use crate::port::{Clock, FeedQuery, ListingFeed, Notifier};

/// Fetch sizing and cadence for the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Buy-now page size after the first poll.
    pub page_size: u32,
    /// Page size for the first poll; `None` omits the limit.
    pub initial_page_size: Option<u32>,
    pub auction_page_size: u32,
    pub max_auction_pages: u32,
    pub rate_limit_cooldown: Duration,
    /// Log a status line every this many buy-now polls (0 disables).
    pub checkpoint_every: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            initial_page_size: None,
            auction_page_size: 50,
            max_auction_pages: 20,
            rate_limit_cooldown: Duration::from_secs(300),
            checkpoint_every: 75,
        }
    }
}

/// What one cycle did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub fetched: usize,
    pub classified: usize,
    /// Deals that were new to the dedup store.
    pub new_deals: usize,
    pub notified: bool,
    pub throttled: bool,
}

impl CycleReport {
    fn throttled() -> Self {
        Self {
            throttled: true,
            ..Self::default()
        }
    }
}

pub struct Pipeline {
    feed: Arc<dyn ListingFeed>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    criteria: DealCriteria,
    batcher: NotificationBatcher,
    backoff: RateLimitBackoff,
    scanner: AuctionScanner,
    settings: PipelineSettings,
}

impl Pipeline {
    #[must_use]
    pub fn new(
        feed: Arc<dyn ListingFeed>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
        criteria: DealCriteria,
        links: Links,
        settings: PipelineSettings,
    ) -> Self {
        let backoff = RateLimitBackoff::new(settings.rate_limit_cooldown, clock.clone());
        let scanner = AuctionScanner::new(settings.auction_page_size, settings.max_auction_pages);
        Self {
            feed,
            notifier,
            clock,
            criteria,
            batcher: NotificationBatcher::new(links),
            backoff,
            scanner,
            settings,
        }
    }

    #[must_use]
    pub fn criteria(&self) -> &DealCriteria {
        &self.criteria
    }

    /// Backoffs taken so far.
    #[must_use]
    pub fn backoffs(&self) -> u64 {
        self.backoff.engaged()
    }

    /// Poll the newest buy-now listings once.
    pub async fn poll_listings(&mut self, ctx: &mut PollContext) -> Result<CycleReport> {
        let cycle = ctx.session.record_poll();
        if cycle == 1 {
            tracing::info!("Listening for deals");
        } else if ctx.session.is_checkpoint(self.settings.checkpoint_every) {
            tracing::info!(
                cycle,
                deals = ctx.session.deals(),
                backoffs = self.backoff.engaged(),
                "Checkpoint"
            );
        }

        let limit = if cycle == 1 {
            self.settings.initial_page_size
        } else {
            Some(self.settings.page_size)
        };
        let query = FeedQuery::buy_now(self.criteria.min_price, self.criteria.max_price, limit);

        let page = self.feed.fetch(&query).await?;
        let Some(listings) = self.backoff.admit(page).await else {
            return Ok(CycleReport::throttled());
        };

        let fetched = listings.len();
        let accepted = self.accept(&listings, &mut ctx.listings, Listing::dedup_key);

        let mut report = CycleReport {
            fetched,
            classified: fetched,
            new_deals: accepted.len(),
            ..CycleReport::default()
        };
        report.notified = self.deliver(ctx, ListingType::BuyNow, &accepted).await?;
        Ok(report)
    }

    /// Scan auctions expiring within `hours` once.
    ///
    /// # Errors
    ///
    /// Returns an error if the window overflows the calendar, the feed
    /// fails, or delivery fails.
    pub async fn scan_auctions(&mut self, ctx: &mut PollContext, hours: u32) -> Result<CycleReport> {
        let deadline = self
            .clock
            .now()
            .checked_add_signed(chrono::Duration::hours(i64::from(hours)))
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "auction_lookahead_hours",
                reason: format!("{hours} hours is out of range"),
            })?;
        let scan = ctx.session.record_auction_scan();
        tracing::debug!(scan, hours, %deadline, "Scanning auctions");

        let outcome = self
            .scanner
            .collect(
                self.feed.as_ref(),
                &mut self.backoff,
                (self.criteria.min_price, self.criteria.max_price),
                deadline,
            )
            .await?;

        let listings = match outcome {
            ScanOutcome::Complete { listings, .. } => listings,
            ScanOutcome::Throttled { pages } => {
                tracing::debug!(pages, "Auction scan abandoned");
                return Ok(CycleReport::throttled());
            }
        };

        let fetched = listings.len();
        // Sorted by expiry: everything after the first late entry is late too.
        let in_window: Vec<Listing> = listings
            .into_iter()
            .filter(|listing| listing.expires_at().is_some())
            .take_while(|listing| listing.expires_by(deadline))
            .collect();

        let accepted = self.accept(&in_window, &mut ctx.auctions, Listing::auction_key);
        let mut report = CycleReport {
            fetched,
            classified: in_window.len(),
            new_deals: accepted.len(),
            ..CycleReport::default()
        };
        report.notified = self.deliver(ctx, ListingType::Auction, &accepted).await?;
        Ok(report)
    }

    /// Classify `listings` and keep deals whose key is new to `seen`.
    fn accept(
        &self,
        listings: &[Listing],
        seen: &mut DedupStore,
        key: fn(&Listing) -> DedupKey,
    ) -> Vec<Accepted> {
        let mut accepted = Vec::new();
        for listing in listings {
            match classify(listing, &self.criteria) {
                Verdict::Deal { discount } => {
                    if seen.record(key(listing)) {
                        tracing::info!(
                            id = %listing.id,
                            name = %listing.item.name,
                            price = ?listing.price,
                            discount,
                            "Deal found"
                        );
                        accepted.push(Accepted {
                            listing: listing.clone(),
                            discount,
                        });
                    } else {
                        tracing::trace!(id = %listing.id, "Deal already notified");
                    }
                }
                Verdict::Rejected(reason) => {
                    tracing::trace!(id = %listing.id, %reason, "Not a deal");
                }
                Verdict::Ineligible(field) => {
                    tracing::debug!(id = %listing.id, missing = %field, "Listing ineligible");
                }
            }
        }
        accepted
    }

    async fn deliver(
        &self,
        ctx: &mut PollContext,
        kind: ListingType,
        accepted: &[Accepted],
    ) -> Result<bool> {
        ctx.session.record_deals(accepted.len());
        let Some(notification) = self.batcher.compose(kind, accepted) else {
            return Ok(false);
        };
        tracing::info!(
            kind = %kind,
            deals = accepted.len(),
            subject = %notification.subject,
            "Sending notification"
        );
        self.notifier.send(&notification).await?;
        Ok(true)
    }
}
