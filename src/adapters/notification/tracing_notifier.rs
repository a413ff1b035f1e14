use crate::ports::{Notification, NotificationLevel, Notifier};

/// Writes notifications to the tracing log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(level = ?notification.level, "{}", notification.message)
            }
            NotificationLevel::Error => tracing::error!("{}", notification.message),
        }
    }
}
