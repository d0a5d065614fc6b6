//! Run-scoped application state.

use crate::domain::{DedupStore, SessionState};

/// Mutable state carried from one poll cycle to the next.
///
/// Owned exclusively by the scheduler and lent to each cycle, so the
/// classifier and batcher stay pure.
#[derive(Debug, Default)]
pub struct PollContext {
    pub session: SessionState,
    /// Buy-now keys (wear float, falling back to listing id).
    pub listings: DedupStore,
    /// Auction keys (listing id).
    pub auctions: DedupStore,
}

impl PollContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
