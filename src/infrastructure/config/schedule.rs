//! Poll timing and page sizing.

use std::time::Duration;

use serde::Deserialize;

use crate::application::{PipelineSettings, ScheduleSettings};

/// `[schedule]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// Seconds between buy-now polls.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Minutes between auction scans.
    #[serde(default = "default_auction_interval_mins")]
    pub auction_interval_mins: u64,
    /// Auctions expiring within this many hours are considered.
    #[serde(default = "default_auction_lookahead_hours")]
    pub auction_lookahead_hours: u32,
    /// Buy-now page size after the first poll.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Page size of the first poll. Unset lets the feed choose.
    #[serde(default)]
    pub initial_page_size: Option<u32>,
    #[serde(default = "default_auction_page_size")]
    pub auction_page_size: u32,
    /// Upper bound on pages fetched per auction scan.
    #[serde(default = "default_max_auction_pages")]
    pub max_auction_pages: u32,
    /// Seconds to wait after a throttled response.
    #[serde(default = "default_rate_limit_cooldown_secs")]
    pub rate_limit_cooldown_secs: u64,
    /// Log a status line every this many buy-now polls. 0 disables.
    #[serde(default = "default_checkpoint_every")]
    pub checkpoint_every: u64,
    /// Scheduler loop granularity in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

const fn default_poll_interval_secs() -> u64 {
    24
}

const fn default_auction_interval_mins() -> u64 {
    50
}

const fn default_auction_lookahead_hours() -> u32 {
    1
}

const fn default_page_size() -> u32 {
    20
}

const fn default_auction_page_size() -> u32 {
    50
}

const fn default_max_auction_pages() -> u32 {
    20
}

const fn default_rate_limit_cooldown_secs() -> u64 {
    300
}

const fn default_checkpoint_every() -> u64 {
    75
}

const fn default_tick_ms() -> u64 {
    1_000
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            auction_interval_mins: default_auction_interval_mins(),
            auction_lookahead_hours: default_auction_lookahead_hours(),
            page_size: default_page_size(),
            initial_page_size: None,
            auction_page_size: default_auction_page_size(),
            max_auction_pages: default_max_auction_pages(),
            rate_limit_cooldown_secs: default_rate_limit_cooldown_secs(),
            checkpoint_every: default_checkpoint_every(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl ScheduleConfig {
    #[must_use]
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            page_size: self.page_size,
            initial_page_size: self.initial_page_size,
            auction_page_size: self.auction_page_size,
            max_auction_pages: self.max_auction_pages,
            rate_limit_cooldown: Duration::from_secs(self.rate_limit_cooldown_secs),
            checkpoint_every: self.checkpoint_every,
        }
    }

    #[must_use]
    pub fn schedule_settings(&self) -> ScheduleSettings {
        ScheduleSettings {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            auction_interval: Duration::from_secs(self.auction_interval_mins.saturating_mul(60)),
            auction_lookahead_hours: self.auction_lookahead_hours,
            tick: Duration::from_millis(self.tick_ms),
        }
    }
}
