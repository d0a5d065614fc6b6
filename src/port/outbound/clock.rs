//! Clock port.
//!
//! The scheduler, backoff handler and auction scanner read time and sleep
//! only through [`Clock`], so tests can drive them without real waiting.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Source of wall-clock time and blocking sleeps.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current UTC time.
    fn now(&self) -> DateTime<Utc>;

    /// Suspend the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}
