//! Notification bell state.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use calls::notifications::NotificationList;

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub list: NotificationList,
    pub panel_open: bool,
}

impl NotificationsState {
    /// Badge text; empty when nothing is unread, capped at `99+`.
    #[must_use]
    pub fn badge(&self) -> String {
        match self.list.unread_count {
            0 => String::new(),
            n @ 1..=99 => n.to_string(),
            _ => "99+".to_owned(),
        }
    }

    /// Record a polled count. The bell list is not touched.
    pub fn set_unread_count(&mut self, count: u64) {
        self.list.unread_count = count;
    }
}
