//! Client-side call filters: free-text search, status set, date range, direction.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::status::UiCallStatus;
use crate::time::parse_date;
use crate::types::{Call, CallDirection};

/// Filter values entered in a call list toolbar. The default allows everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallFilter {
    pub search: String,
    /// Empty means "every status".
    pub statuses: BTreeSet<UiCallStatus>,
    /// Inclusive lower bound on the call date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the call date.
    pub date_to: Option<NaiveDate>,
    pub direction: Option<CallDirection>,
}

impl CallFilter {
    #[must_use]
    pub fn allows(&self, call: &Call) -> bool {
        self.matches_search(call)
            && self.matches_status(call)
            && self.matches_dates(call)
            && self.direction.map_or(true, |d| d == call.direction)
    }

    pub fn set_status_enabled(&mut self, status: UiCallStatus, enabled: bool) {
        if enabled {
            self.statuses.insert(status);
        } else {
            self.statuses.remove(&status);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn matches_search(&self, call: &Call) -> bool {
        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || search_haystack(call).contains(&needle)
    }

    fn matches_status(&self, call: &Call) -> bool {
        self.statuses.is_empty() || self.statuses.contains(&call.ui_status())
    }

    /// Calls without a parseable date are dropped once any bound is set.
    fn matches_dates(&self, call: &Call) -> bool {
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        let Some(day) = call_day(call) else {
            return false;
        };
        self.date_from.map_or(true, |from| day >= from) && self.date_to.map_or(true, |to| day <= to)
    }
}

/// Calendar day a call is filed under: occurrence, else creation.
#[must_use]
pub fn call_day(call: &Call) -> Option<NaiveDate> {
    call.occurred_at
        .as_deref()
        .and_then(parse_date)
        .or_else(|| call.created_at.as_deref().and_then(parse_date))
}

/// Lower-cased concatenation of every searchable display field.
///
/// Phone numbers are included verbatim, so `06 12` does not match `0612`.
fn search_haystack(call: &Call) -> String {
    let fields = [
        call.first_name.as_str(),
        call.last_name.as_str(),
        call.caller_number.as_str(),
        call.callee_number.as_str(),
        call.email.as_deref().unwrap_or_default(),
        call.user_name.as_deref().unwrap_or_default(),
        call.notes.as_str(),
    ];
    fields.join(" ").to_lowercase()
}
