//! REST paths and query parameters of the backend API.
//!
//! Paths are relative to the API base (`/api` behind the dashboard's origin,
//! or the URL given to the CLI) so both HTTP stacks share them.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use chrono::NaiveDate;

use crate::filter::CallFilter;
use crate::listing::CallView;
use crate::status::ApiCallStatus;
use crate::types::CallDirection;

pub const LOGIN: &str = "/auth/login";
pub const REFRESH: &str = "/auth/refresh";
pub const ME: &str = "/auth/me";

pub const CALLS: &str = "/calls";
pub const CALLS_TODAY: &str = "/calls/today";
pub const CALLS_HISTORY: &str = "/calls/history";

pub const REMINDERS: &str = "/reminders";
pub const REMINDERS_TODAY: &str = "/reminders/today";

pub const NOTIFICATIONS_UNREAD: &str = "/notifications/unread";
pub const NOTIFICATIONS_UNREAD_COUNT: &str = "/notifications/unread-count";
pub const NOTIFICATIONS_READ_ALL: &str = "/notifications/read-all";

pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_KPIS: &str = "/admin/kpis";

/// Listing endpoint backing each call view.
#[must_use]
pub fn calls_for_view(view: CallView) -> &'static str {
    match view {
        CallView::All => CALLS,
        CallView::Today => CALLS_TODAY,
        CallView::History => CALLS_HISTORY,
    }
}

#[must_use]
pub fn call(id: &str) -> String {
    format!("{CALLS}/{id}")
}

#[must_use]
pub fn reminder(id: &str) -> String {
    format!("{REMINDERS}/{id}")
}

#[must_use]
pub fn reminder_done(id: &str) -> String {
    format!("{REMINDERS}/{id}/done")
}

#[must_use]
pub fn notification_read(id: &str) -> String {
    format!("/notifications/{id}/read")
}

#[must_use]
pub fn admin_user(id: &str) -> String {
    format!("{ADMIN_USERS}/{id}")
}

#[must_use]
pub fn admin_user_deactivate(id: &str) -> String {
    format!("{ADMIN_USERS}/{id}/deactivate")
}

#[must_use]
pub fn admin_user_reset_password(id: &str) -> String {
    format!("{ADMIN_USERS}/{id}/reset-password")
}

#[must_use]
pub fn admin_user_stats(id: &str) -> String {
    format!("{ADMIN_USERS}/{id}/stats")
}

/// Server-side filters and pagination for `GET /calls`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallQuery {
    pub search: Option<String>,
    pub statuses: Vec<ApiCallStatus>,
    pub direction: Option<CallDirection>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl CallQuery {
    /// Carry a toolbar filter over to the backend listing.
    #[must_use]
    pub fn from_filter(filter: &CallFilter) -> Self {
        let search = filter.search.trim();
        Self {
            search: (!search.is_empty()).then(|| search.to_owned()),
            statuses: filter.statuses.iter().map(|s| s.to_api()).collect(),
            direction: filter.direction,
            from: filter.date_from,
            to: filter.date_to,
            page: None,
            page_size: None,
        }
    }

    /// Query pairs in a stable order; absent values are omitted. Statuses
    /// are joined with commas.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if !self.statuses.is_empty() {
            let codes = self.statuses.iter().map(|s| s.code()).collect::<Vec<_>>();
            pairs.push(("status", codes.join(",")));
        }
        if let Some(direction) = self.direction {
            pairs.push(("type", direction.key().to_owned()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        pairs
    }
}
