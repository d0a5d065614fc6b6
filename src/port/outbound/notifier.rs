//! Notifier port for deal alerts.
//!
//! A poll cycle produces at most one [`Notification`]. Delivery is a single
//! best-effort attempt; failures are returned to the cycle that sent it.

use async_trait::async_trait;

use crate::error::Result;

/// A formatted alert ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
}

/// Trait for notification transports.
///
/// Implementations must be thread-safe (`Send + Sync`). Recipients are a
/// property of the transport, not of the notification.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `notification`.
    async fn send(&self, notification: &Notification) -> Result<()>;

    /// Short transport name for logging.
    fn name(&self) -> &'static str;
}

/// Registry of notifiers (composite pattern).
///
/// Delivers to every registered notifier. All are attempted; the first
/// failure is returned.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifierRegistry {
    async fn send(&self, notification: &Notification) -> Result<()> {
        let mut first_error = None;
        for notifier in &self.notifiers {
            if let Err(err) = notifier.send(notification).await {
                tracing::warn!(notifier = notifier.name(), error = %err, "Delivery failed");
                first_error.get_or_insert(err);
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "registry"
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send(&self, _notification: &Notification) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingNotifier {
        count: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Notifier for CountingNotifier {
        async fn send(&self, _notification: &Notification) -> Result<()> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _notification: &Notification) -> Result<()> {
            Err(Error::Notify("smtp down".into()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn sample() -> Notification {
        Notification {
            subject: "subject".into(),
            body: "body".into(),
        }
    }

    #[tokio::test]
    async fn test_registry_sends_to_all() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = NotifierRegistry::new();
        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));
        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));

        registry.send(&sample()).await.unwrap();

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_registry_attempts_all_and_reports_failure() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut registry = NotifierRegistry::new();
        registry.register(Box::new(FailingNotifier));
        registry.register(Box::new(CountingNotifier {
            count: count.clone(),
        }));

        let result = registry.send(&sample()).await;

        assert!(matches!(result, Err(Error::Notify(_))));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_null_notifier() {
        NullNotifier.send(&sample()).await.unwrap();
    }

    #[test]
    fn test_registry_len_and_is_empty() {
        let mut registry = NotifierRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);

        registry.register(Box::new(NullNotifier));
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
    }
}
