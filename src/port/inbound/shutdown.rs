//! Shutdown hook port.
//!
//! When the process receives an interrupt, the scheduler asks a
//! [`ShutdownHook`] whether to run one last auction scan before exiting, and
//! over how many hours. Interactive runs prompt the operator; headless runs
//! use a configured answer.

use async_trait::async_trait;

use crate::error::Result;

/// Decides the exit-time auction scan.
#[async_trait]
pub trait ShutdownHook: Send + Sync {
    /// Hours of lookahead for a final auction scan, or `None` to skip it.
    async fn exit_scan_hours(&self) -> Result<Option<u32>>;
}

/// A hook with a fixed answer, for headless deployments and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedShutdown {
    hours: Option<u32>,
}

impl FixedShutdown {
    #[must_use]
    pub const fn new(hours: Option<u32>) -> Self {
        Self { hours }
    }

    /// Never scan on exit.
    #[must_use]
    pub const fn skip() -> Self {
        Self { hours: None }
    }
}

#[async_trait]
impl ShutdownHook for FixedShutdown {
    async fn exit_scan_hours(&self) -> Result<Option<u32>> {
        Ok(self.hours)
    }
}
