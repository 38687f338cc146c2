//! Reconciling a call edit form into the backend update payload.
//!
//! The form carries the callback as one free-text field, `"<date> • <slot>"`.
//! Only statuses in [`crate::status::RECALL_STATUSES`] persist it; every other
//! status sends explicit `null`s so the backend drops a stale callback.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use serde::{Deserialize, Serialize};

use crate::status::{ApiCallStatus, UiCallStatus};
use crate::types::{Call, CallDirection};

/// Separator between the date and the time slot in the reminder field.
pub const REMINDER_DELIMITER: char = '•';

/// Edit-form values for a single call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallEdit {
    pub status: UiCallStatus,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    /// Combined `"date • slot"` string as typed or picked.
    pub reminder: String,
}

/// `PATCH /calls/{id}` body. Recall fields always serialize, as `null` when cleared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallUpdate {
    pub status: ApiCallStatus,
    pub first_name: String,
    pub last_name: String,
    pub callee_number: String,
    pub email: Option<String>,
    pub notes: String,
    pub recall_date: Option<String>,
    pub recall_slot: Option<String>,
}

/// `POST /calls` body: an update payload plus the call direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCall {
    #[serde(rename = "type")]
    pub direction: CallDirection,
    #[serde(flatten)]
    pub fields: CallUpdate,
}

impl CallEdit {
    /// Pre-fill the form from a fetched call.
    #[must_use]
    pub fn from_call(call: &Call) -> Self {
        Self {
            status: call.ui_status(),
            first_name: call.first_name.clone(),
            last_name: call.last_name.clone(),
            phone: call.callee_number.clone(),
            email: call.email.clone().unwrap_or_default(),
            notes: call.notes.clone(),
            reminder: compose_reminder(call.recall_date.as_deref(), call.recall_slot.as_deref()),
        }
    }

    /// Build the creation payload for a call logged by hand.
    #[must_use]
    pub fn to_new_call(&self, direction: CallDirection) -> NewCall {
        NewCall {
            direction,
            fields: self.to_update(),
        }
    }

    /// Build the update payload, deciding null-vs-value for the callback.
    #[must_use]
    pub fn to_update(&self) -> CallUpdate {
        let (recall_date, recall_slot) = if self.status.requires_recall() {
            split_reminder(&self.reminder)
        } else {
            (None, None)
        };
        let email = self.email.trim();
        CallUpdate {
            status: self.status.to_api(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            callee_number: self.phone.trim().to_owned(),
            email: (!email.is_empty()).then(|| email.to_owned()),
            notes: self.notes.clone(),
            recall_date,
            recall_slot,
        }
    }
}

/// Split `"2024-05-01 • 10h-12h"` into date and slot. Without a delimiter the
/// whole string is the date. Blank parts become `None`.
#[must_use]
pub fn split_reminder(raw: &str) -> (Option<String>, Option<String>) {
    let (date, slot) = match raw.split_once(REMINDER_DELIMITER) {
        Some((date, slot)) => (date, Some(slot)),
        None => (raw, None),
    };
    (non_blank(date), slot.and_then(non_blank))
}

/// Inverse of [`split_reminder`] for pre-filling the form.
#[must_use]
pub fn compose_reminder(date: Option<&str>, slot: Option<&str>) -> String {
    match (date.and_then(non_blank), slot.and_then(non_blank)) {
        (Some(date), Some(slot)) => format!("{date} {REMINDER_DELIMITER} {slot}"),
        (Some(date), None) => date,
        (None, Some(slot)) => format!("{REMINDER_DELIMITER} {slot}"),
        (None, None) => String::new(),
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
