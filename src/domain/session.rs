//! Per-run session counters.

/// Counters for the current run. Owned by the scheduler, never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    polls: u64,
    auction_scans: u64,
    deals: u64,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one buy-now poll cycle and return the new total.
    pub fn record_poll(&mut self) -> u64 {
        self.polls += 1;
        self.polls
    }

    /// Count one auction scan and return the new total.
    pub fn record_auction_scan(&mut self) -> u64 {
        self.auction_scans += 1;
        self.auction_scans
    }

    pub fn record_deals(&mut self, count: usize) {
        self.deals += count as u64;
    }

    #[must_use]
    pub fn polls(&self) -> u64 {
        self.polls
    }

    #[must_use]
    pub fn auction_scans(&self) -> u64 {
        self.auction_scans
    }

    #[must_use]
    pub fn deals(&self) -> u64 {
        self.deals
    }

    /// Whether the current poll count lands on a status checkpoint.
    #[must_use]
    pub fn is_checkpoint(&self, every: u64) -> bool {
        every > 0 && self.polls > 1 && self.polls % every == 0
    }
}
