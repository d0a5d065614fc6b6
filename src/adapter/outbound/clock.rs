//! Wall-clock adapter.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::port::Clock;

/// [`Clock`] backed by the system time and the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
