//! Rate-limit backoff.
//!
//! A throttled page aborts the cycle that fetched it and blocks the whole
//! loop for the cooldown. The sleep goes through [`Clock`], so a backoff
//! taken during a buy-now poll also delays the next auction scan.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::Listing;
use crate::port::{Clock, FeedPage};

/// Turns feed pages into listings, sleeping off throttled responses.
pub struct RateLimitBackoff {
    cooldown: Duration,
    clock: Arc<dyn Clock>,
    engaged: u64,
}

impl RateLimitBackoff {
    #[must_use]
    pub fn new(cooldown: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            cooldown,
            clock,
            engaged: 0,
        }
    }

    /// Listings from `page`, or `None` after sleeping off a throttle.
    pub async fn admit(&mut self, page: FeedPage) -> Option<Vec<Listing>> {
        match page {
            FeedPage::Listings(listings) => Some(listings),
            FeedPage::Throttled { status } => {
                self.engaged += 1;
                tracing::warn!(
                    status,
                    cooldown_secs = self.cooldown.as_secs(),
                    "Feed throttled, backing off"
                );
                self.clock.sleep(self.cooldown).await;
                None
            }
        }
    }

    /// Number of backoffs taken this run.
    #[must_use]
    pub fn engaged(&self) -> u64 {
        self.engaged
    }

    #[must_use]
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClock {
        sleeps: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Clock for RecordingClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::<Utc>::UNIX_EPOCH
        }

        async fn sleep(&self, duration: Duration) {
            self.sleeps.lock().unwrap().push(duration);
        }
    }

    #[tokio::test]
    async fn listings_pass_through_without_sleeping() {
        let clock = Arc::new(RecordingClock::default());
        let mut backoff = RateLimitBackoff::new(Duration::from_secs(60), clock.clone());

        let admitted = backoff.admit(FeedPage::Listings(vec![])).await;

        assert_eq!(admitted, Some(vec![]));
        assert_eq!(backoff.engaged(), 0);
        assert!(clock.sleeps.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn throttle_sleeps_for_cooldown_once() {
        let clock = Arc::new(RecordingClock::default());
        let mut backoff = RateLimitBackoff::new(Duration::from_secs(60), clock.clone());

        let admitted = backoff.admit(FeedPage::Throttled { status: 429 }).await;

        assert!(admitted.is_none());
        assert_eq!(backoff.engaged(), 1);
        assert_eq!(*clock.sleeps.lock().unwrap(), vec![Duration::from_secs(60)]);
    }
}
