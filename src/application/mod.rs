//! Application services (use cases).
//!
//! The [`Scheduler`] owns a [`Pipeline`] and the [`PollContext`] it mutates.
//! The pipeline runs one cycle at a time through classification,
//! deduplication and batching, using the ports for I/O.

pub mod backoff;
pub mod batcher;
pub mod pipeline;
pub mod scanner;
pub mod scheduler;
pub mod state;

pub use backoff::RateLimitBackoff;
pub use batcher::{display_name, format_cents, price_lookup_slug, Accepted, Links, NotificationBatcher};
pub use pipeline::{CycleReport, Pipeline, PipelineSettings};
pub use scanner::{AuctionScanner, ScanOutcome};
pub use scheduler::{Fired, ScheduleSettings, Scheduler};
pub use state::PollContext;
