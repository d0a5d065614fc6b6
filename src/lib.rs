//! Floatscout - CSFloat deal alerts.
//!
//! Polls the CSFloat listing feed, flags items priced well below their
//! reference price, and sends batched email alerts. A second, slower timer
//! scans auctions that are about to expire.
//!
//! # Architecture
//!
//! Hexagonal layout:
//!
//! - [`domain`] - Listings, the deal classifier and the dedup store (pure)
//! - [`port`] - Traits at the I/O seams: feed, notifier, clock, shutdown hook
//! - [`application`] - Pipeline, auction scanner, backoff and scheduler
//! - [`adapter`] - CSFloat client, email/log notifiers, CLI
//! - [`infrastructure`] - Configuration, logging and wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `email` (default) - SMTP delivery via `lettre`; without it alerts are
//!   only logged
//!
//! # Example
//!
//! ```no_run
//! use floatscout::infrastructure::bootstrap::build_scheduler;
//! use floatscout::infrastructure::config::settings::Config;
//!
//! # async fn demo() -> floatscout::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let mut scheduler = build_scheduler(&config)?;
//! scheduler.run_until(async { let _ = tokio::signal::ctrl_c().await; }).await;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
