use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use floatscout::error::{Error, Result};
use floatscout::port::{Notification, Notifier};

/// Thread-safe notification collector for delivery assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    fail: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later send fail (the notification is still recorded).
    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.sent.lock().expect("lock notifications").len()
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("lock notifications").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        self.sent
            .lock()
            .expect("lock notifications")
            .push(notification.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(Error::Notify("scripted failure".into()));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
