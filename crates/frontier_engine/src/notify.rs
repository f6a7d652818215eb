use std::sync::mpsc;

use frontier_core::{Notification, NotificationKind};
use frontier_logging::{frontier_info, frontier_warn};

/// Displays transient messages. Fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotificationSink;

impl NotificationSink for LogNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                frontier_info!("{}: {}", notification.title, notification.message)
            }
            NotificationKind::Invalid | NotificationKind::Failure => {
                frontier_warn!("{}: {}", notification.title, notification.message)
            }
        }
    }
}

/// Forwards notifications to a channel drained by the presentation layer.
pub struct ChannelNotificationSink {
    tx: mpsc::Sender<Notification>,
}

impl ChannelNotificationSink {
    pub fn new(tx: mpsc::Sender<Notification>) -> Self {
        Self { tx }
    }
}

impl NotificationSink for ChannelNotificationSink {
    fn notify(&self, notification: Notification) {
        let _ = self.tx.send(notification);
    }
}
