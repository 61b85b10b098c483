//! Structured notification events
//!
//! Every mutating store operation emits a notification for a UI layer
//! (toast, log pane) to consume. The store buffers them with a bounded
//! backlog and the consumer drains at its own pace; the engine never
//! depends on how they are rendered.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Xp,
    LevelUp,
    Unlock,
    Achievement,
    QuestStarted,
    QuestComplete,
    Info,
    Error,
}

/// A user-facing event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xp: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            xp: None,
            icon: None,
        }
    }

    pub fn with_xp(mut self, xp: u64) -> Self {
        self.xp = Some(xp);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Bounded FIFO of pending notifications
#[derive(Debug, Default)]
pub struct NotificationQueue {
    buffer: VecDeque<Notification>,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::new(),
            capacity,
        }
    }

    /// Push a notification, dropping the oldest when full
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            kind = ?notification.kind,
            title = %notification.title,
            "notification"
        );
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(notification);
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        self.buffer.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_drops_oldest_when_full() {
        let mut queue = NotificationQueue::new(2);
        queue.push(Notification::new(NotificationKind::Info, "a", ""));
        queue.push(Notification::new(NotificationKind::Info, "b", ""));
        queue.push(Notification::new(NotificationKind::Info, "c", ""));

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "b");
        assert_eq!(drained[1].title, "c");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_builder_fields() {
        let n = Notification::new(NotificationKind::Xp, "Quest", "+120 XP")
            .with_xp(120)
            .with_icon("🎯");
        assert_eq!(n.xp, Some(120));
        assert_eq!(n.icon.as_deref(), Some("🎯"));
    }
}
