//! Reminder list ordering and optimistic done/delete transitions.

#[cfg(test)]
#[path = "reminders_test.rs"]
mod reminders_test;

use chrono::{DateTime, Utc};

use crate::optimistic::{Action, remove_tracked, restore_removed};
use crate::time::{epoch_millis_or_zero, parse_timestamp};
use crate::types::{Reminder, ReminderStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReminderAction {
    MarkDone(String),
    Delete(String),
}

/// Reminders an action touched, as they were, with their list positions.
pub type ReminderUndo = Vec<(usize, Reminder)>;

impl Action<Vec<Reminder>> for ReminderAction {
    type Undo = ReminderUndo;

    fn apply(&self, state: &mut Vec<Reminder>) -> ReminderUndo {
        match self {
            Self::MarkDone(id) => {
                let mut touched = Vec::new();
                for (index, r) in state.iter_mut().enumerate().filter(|(_, r)| &r.id == id) {
                    touched.push((index, r.clone()));
                    r.status = ReminderStatus::Done;
                }
                touched
            }
            Self::Delete(id) => remove_tracked(state, |r| &r.id == id),
        }
    }

    fn undo(&self, state: &mut Vec<Reminder>, undo: ReminderUndo) {
        match self {
            Self::MarkDone(_) => {
                for (_, before) in undo {
                    for r in state.iter_mut().filter(|r| r.id == before.id) {
                        r.status = before.status;
                    }
                }
            }
            Self::Delete(_) => restore_removed(state, undo, |a, b| a.id == b.id),
        }
    }
}

/// Pending reminders first by ascending due time, then done, then canceled.
pub fn sort_for_display(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| {
        status_rank(a.status)
            .cmp(&status_rank(b.status))
            .then_with(|| due_millis(a).cmp(&due_millis(b)))
    });
}

/// Pending reminders whose due time is before `now`.
#[must_use]
pub fn overdue<'a>(reminders: &'a [Reminder], now: DateTime<Utc>) -> Vec<&'a Reminder> {
    reminders.iter().filter(|r| is_overdue(r, now)).collect()
}

#[must_use]
pub fn is_overdue(reminder: &Reminder, now: DateTime<Utc>) -> bool {
    reminder.status == ReminderStatus::Pending
        && parse_timestamp(&reminder.due_at).is_some_and(|due| due < now)
}

#[must_use]
pub fn pending_count(reminders: &[Reminder]) -> usize {
    reminders.iter().filter(|r| r.status == ReminderStatus::Pending).count()
}

fn status_rank(status: ReminderStatus) -> u8 {
    match status {
        ReminderStatus::Pending => 0,
        ReminderStatus::Done => 1,
        ReminderStatus::Canceled => 2,
    }
}

fn due_millis(reminder: &Reminder) -> i64 {
    epoch_millis_or_zero(Some(&reminder.due_at))
}
