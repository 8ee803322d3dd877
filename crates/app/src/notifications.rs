//! Transient user-facing notification queue.
//!
//! Operations push messages here instead of rendering anything; the UI
//! drains the queue and shows each entry as a toast.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// One transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// FIFO queue of pending notifications.
#[derive(Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.queue.push_back(Notification {
            level: NotificationLevel::Info,
            message: message.into(),
        });
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.queue.push_back(Notification {
            level: NotificationLevel::Error,
            message: message.into(),
        });
    }

    /// Take all pending notifications, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.queue.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
