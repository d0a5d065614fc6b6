//! Poll scheduler.
//!
//! Two timers share one cooperative loop: the buy-now poll and the auction
//! scan. Handlers run to completion one at a time, so a tick that comes due
//! while a handler is running waits for it. The next due time is measured
//! from when the handler finished, never from when it was scheduled.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use super::pipeline::{CycleReport, Pipeline};
use super::state::PollContext;
use crate::error::Result;
use crate::port::{Clock, ShutdownHook};

/// Timer configuration.
#[derive(Debug, Clone)]
pub struct ScheduleSettings {
    pub poll_interval: Duration,
    pub auction_interval: Duration,
    pub auction_lookahead_hours: u32,
    /// Loop granularity between due-time checks.
    pub tick: Duration,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(24),
            auction_interval: Duration::from_secs(50 * 60),
            auction_lookahead_hours: 1,
            tick: Duration::from_secs(1),
        }
    }
}

/// Handlers that ran during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fired {
    pub listings: bool,
    pub auctions: bool,
}

/// Owns the pipeline and its run state, and decides when each poll runs.
pub struct Scheduler {
    pipeline: Pipeline,
    context: PollContext,
    clock: Arc<dyn Clock>,
    settings: ScheduleSettings,
    /// `None` means due now.
    next_poll: Option<DateTime<Utc>>,
    next_auction: Option<DateTime<Utc>>,
}

impl Scheduler {
    /// Both timers start due, so the first tick runs both polls.
    #[must_use]
    pub fn new(pipeline: Pipeline, clock: Arc<dyn Clock>, settings: ScheduleSettings) -> Self {
        Self {
            pipeline,
            context: PollContext::new(),
            clock,
            settings,
            next_poll: None,
            next_auction: None,
        }
    }

    #[must_use]
    pub fn context(&self) -> &PollContext {
        &self.context
    }

    #[must_use]
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Run whichever handlers are due, buy-now first.
    pub async fn tick(&mut self) -> Fired {
        let mut fired = Fired::default();

        if is_due(self.next_poll, self.clock.now()) {
            let result = self.pipeline.poll_listings(&mut self.context).await;
            log_cycle("listings", &result);
            self.next_poll = Some(self.clock.now() + to_chrono(self.settings.poll_interval));
            fired.listings = true;
        }

        if is_due(self.next_auction, self.clock.now()) {
            let hours = self.settings.auction_lookahead_hours;
            let result = self.pipeline.scan_auctions(&mut self.context, hours).await;
            log_cycle("auctions", &result);
            self.next_auction = Some(self.clock.now() + to_chrono(self.settings.auction_interval));
            fired.auctions = true;
        }

        fired
    }

    /// Tick until `shutdown` resolves. A handler still running at that
    /// point is dropped.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    tracing::info!(
                        polls = self.context.session.polls(),
                        deals = self.context.session.deals(),
                        "Stopping scheduler"
                    );
                    return;
                }
                () = self.step() => {}
            }
        }
    }

    async fn step(&mut self) {
        self.tick().await;
        self.clock.sleep(self.settings.tick).await;
    }

    /// Ask `hook` for a final auction scan and run it if requested.
    pub async fn shutdown(&mut self, hook: &dyn ShutdownHook) -> Result<Option<CycleReport>> {
        match hook.exit_scan_hours().await? {
            Some(hours) if hours > 0 => {
                tracing::info!(hours, "Running exit auction scan");
                let report = self.pipeline.scan_auctions(&mut self.context, hours).await?;
                Ok(Some(report))
            }
            _ => {
                tracing::debug!("Exit auction scan skipped");
                Ok(None)
            }
        }
    }
}

fn is_due(next: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    next.map_or(true, |at| now >= at)
}

fn to_chrono(duration: Duration) -> chrono::Duration {
    chrono::Duration::from_std(duration).unwrap_or_else(|_| chrono::Duration::days(365))
}

fn log_cycle(trigger: &'static str, result: &Result<CycleReport>) {
    match result {
        Ok(report) if report.throttled => {
            tracing::debug!(trigger, "Cycle abandoned after throttle");
        }
        Ok(report) => {
            tracing::debug!(
                trigger,
                fetched = report.fetched,
                new_deals = report.new_deals,
                notified = report.notified,
                "Cycle complete"
            );
        }
        Err(err) => {
            tracing::error!(trigger, error = %err, "Cycle failed");
        }
    }
}
