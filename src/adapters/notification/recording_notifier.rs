use std::sync::{Arc, Mutex};

use crate::ports::{Notification, NotificationLevel, Notifier};

/// Keeps every notification in memory, in delivery order.
///
/// The terminal binary drains it after each command; tests inspect it.
/// Notifications can also be passed on to another notifier as they arrive.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    received: Arc<Mutex<Vec<Notification>>>,
    forward: Option<Arc<dyn Notifier>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records notifications and also delivers each one to `downstream`.
    pub fn forwarding_to(downstream: Arc<dyn Notifier>) -> Self {
        Self {
            received: Arc::default(),
            forward: Some(downstream),
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().map(|n| n.clone()).unwrap_or_default()
    }

    /// Removes and returns everything received so far.
    pub fn drain(&self) -> Vec<Notification> {
        self.received
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.lock().ok().and_then(|n| n.last().cloned())
    }

    pub fn count(&self, level: NotificationLevel) -> usize {
        self.received
            .lock()
            .map(|n| n.iter().filter(|x| x.level == level).count())
            .unwrap_or(0)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Some(downstream) = &self.forward {
            downstream.notify(notification.clone());
        }
        if let Ok(mut received) = self.received.lock() {
            received.push(notification);
        }
    }
}
