//! Notification list state and its optimistic read transitions.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::time::Duration;

use crate::optimistic::Action;
use crate::types::Notification;

/// Interval of the unread-count refresh in the header bell.
pub const UNREAD_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Notifications currently shown plus the server-reported unread count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationList {
    pub items: Vec<Notification>,
    /// Last count from `GET /notifications/unread-count`; may lag `items`.
    pub unread_count: u64,
}

impl NotificationList {
    #[must_use]
    pub fn new(items: Vec<Notification>) -> Self {
        let unread_count = items.iter().filter(|n| !n.read).count() as u64;
        Self { items, unread_count }
    }

    #[must_use]
    pub fn unread(&self) -> Vec<&Notification> {
        self.items.iter().filter(|n| !n.read).collect()
    }

    #[must_use]
    pub fn has_unread(&self) -> bool {
        self.unread_count > 0 || self.items.iter().any(|n| !n.read)
    }
}

/// Local mirror of the backend read mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotificationAction {
    MarkRead(String),
    MarkAllRead,
}

/// Items a read action flipped and how much it took off the unread count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadUndo {
    flipped: Vec<String>,
    uncounted: u64,
}

impl Action<NotificationList> for NotificationAction {
    type Undo = ReadUndo;

    fn apply(&self, state: &mut NotificationList) -> ReadUndo {
        let mut flipped = Vec::new();
        for n in state.items.iter_mut().filter(|n| !n.read) {
            if let Self::MarkRead(id) = self {
                if &n.id != id {
                    continue;
                }
            }
            n.read = true;
            flipped.push(n.id.clone());
        }
        let uncounted = match self {
            Self::MarkRead(_) => u64::from(!flipped.is_empty() && state.unread_count > 0),
            Self::MarkAllRead => state.unread_count,
        };
        state.unread_count -= uncounted;
        ReadUndo { flipped, uncounted }
    }

    fn undo(&self, state: &mut NotificationList, undo: ReadUndo) {
        for n in state.items.iter_mut().filter(|n| n.read && undo.flipped.contains(&n.id)) {
            n.read = false;
        }
        state.unread_count = state.unread_count.saturating_add(undo.uncounted);
    }
}
