//! Administration helpers: user list filtering, user mutation payloads and
//! local call-status breakdowns for the supervision dashboard.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use serde::{Deserialize, Serialize};

use crate::listing::compare_names;
use crate::status::UiCallStatus;
use crate::types::{Call, Role, User};

/// Toolbar filter of the user management table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Matched against name and email, case-insensitive.
    pub search: String,
    pub role: Option<Role>,
    pub include_inactive: bool,
}

impl UserFilter {
    #[must_use]
    pub fn allows(&self, user: &User) -> bool {
        if !self.include_inactive && !user.active {
            return false;
        }
        if self.role.is_some_and(|role| role != user.role) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        format!("{} {} {}", user.first_name, user.last_name, user.email)
            .to_lowercase()
            .contains(&needle)
    }
}

/// Filter then order by last name, first name.
#[must_use]
pub fn visible_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    let mut rows = users.iter().filter(|u| filter.allows(u)).cloned().collect::<Vec<_>>();
    rows.sort_by(|a, b| {
        compare_names(&a.last_name, &b.last_name).then_with(|| compare_names(&a.first_name, &b.first_name))
    });
    rows
}

/// `POST /admin/users` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
    pub password: String,
}

/// `PATCH /admin/users/{id}` body; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl UserPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `POST /admin/users/{id}/reset-password` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordReset {
    /// Present when the backend generates the password instead of emailing a link.
    #[serde(default)]
    pub temporary_password: Option<String>,
}

/// Number of calls per UI status, in enumeration order, zeros included.
#[must_use]
pub fn status_breakdown(calls: &[Call]) -> Vec<(UiCallStatus, usize)> {
    UiCallStatus::ALL
        .into_iter()
        .map(|status| (status, calls.iter().filter(|c| c.ui_status() == status).count()))
        .collect()
}

/// Share of acted-upon calls that produced an appointment (set or rescheduled).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn appointment_rate(calls: &[Call]) -> f64 {
    let acted = calls.iter().filter(|c| !c.ui_status().is_neutral()).count();
    if acted == 0 {
        return 0.0;
    }
    let appointments = calls
        .iter()
        .filter(|c| {
            matches!(
                c.ui_status(),
                UiCallStatus::AppointmentSet | UiCallStatus::AppointmentRescheduled
            )
        })
        .count();
    appointments as f64 / acted as f64
}

/// `0.25` → `"25.0 %"`.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{:.1} %", rate * 100.0)
}
