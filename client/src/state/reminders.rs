//! Reminder list state for the reminders page.

#[cfg(test)]
#[path = "reminders_test.rs"]
mod reminders_test;

use calls::Reminder;
use calls::reminders::sort_for_display;

/// Which reminder listing is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReminderScope {
    #[default]
    Today,
    All,
}

impl ReminderScope {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Aujourd'hui",
            Self::All => "Tous",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RemindersState {
    pub scope: ReminderScope,
    pub items: Vec<Reminder>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RemindersState {
    pub fn begin_load(&mut self, scope: ReminderScope) {
        self.scope = scope;
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, scope: ReminderScope, result: Result<Vec<Reminder>, String>) {
        if scope != self.scope {
            return;
        }
        self.loading = false;
        match result {
            Ok(mut items) => {
                sort_for_display(&mut items);
                self.items = items;
            }
            Err(message) => self.error = Some(message),
        }
    }
}
