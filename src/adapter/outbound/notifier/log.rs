//! Log-only notifier.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;
use crate::port::{Notification, Notifier};

/// Writes notifications to the log instead of delivering them.
///
/// Used when email is disabled, so a dry run still shows what would have
/// been sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        info!(
            subject = %notification.subject,
            body = %notification.body,
            "Notification"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
