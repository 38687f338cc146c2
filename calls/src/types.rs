//! Wire DTOs exchanged with the call-tracking backend.
//!
//! DESIGN
//! ======
//! The backend owns every entity; these types only mirror its JSON. Fields
//! the backend may omit are `Option` or `#[serde(default)]` so a partial
//! payload still renders. Timestamps stay as strings and are parsed on demand
//! by [`crate::time`].

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::status::{ApiCallStatus, UiCallStatus};

/// Whether the call was received or placed by the agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Inbound,
    #[default]
    Outbound,
}

impl CallDirection {
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inbound => "Entrant",
            Self::Outbound => "Sortant",
        }
    }

    /// Parse a form or query value; `None` for anything else (meaning "all").
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "inbound" => Some(Self::Inbound),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }
}

/// A logged phone interaction with a prospect or client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub id: String,
    /// Agent who owns the call.
    pub user_id: String,
    /// Owner display name, present on admin listings.
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub direction: CallDirection,
    #[serde(default)]
    pub caller_number: String,
    #[serde(default)]
    pub callee_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: ApiCallStatus,
    /// Import cohort; `None` for calls logged by hand.
    #[serde(default)]
    pub wave: Option<u32>,
    /// Callback date (`YYYY-MM-DD`).
    #[serde(default)]
    pub recall_date: Option<String>,
    /// Callback time slot, e.g. `10h-12h`.
    #[serde(default)]
    pub recall_slot: Option<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub occurred_at: Option<String>,
    #[serde(default)]
    pub last_call_at: Option<String>,
}

impl Call {
    #[must_use]
    pub fn ui_status(&self) -> UiCallStatus {
        self.status.to_ui()
    }

    /// `Last First`, trimmed; the callee number when both names are empty.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.last_name.trim(), self.first_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.callee_number.clone()
        } else {
            name.to_owned()
        }
    }

    /// The prospect-side number: the caller for inbound, the callee for outbound.
    #[must_use]
    pub fn contact_number(&self) -> &str {
        match self.direction {
            CallDirection::Inbound => &self.caller_number,
            CallDirection::Outbound => &self.callee_number,
        }
    }
}

/// Lifecycle of a scheduled follow-up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    #[default]
    Pending,
    Done,
    Canceled,
}

/// A scheduled follow-up task tied to a call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub call_id: String,
    pub due_at: String,
    #[serde(default)]
    pub status: ReminderStatus,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Prospect name copied from the call, when the backend joins it in.
    #[serde(default)]
    pub contact_name: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    ReminderDue,
    CallMissed,
    #[default]
    System,
}

impl NotificationKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ReminderDue => "Rappel",
            Self::CallMissed => "Appel manqué",
            Self::System => "Système",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub read_at: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Regular,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Administrateur",
            Self::Regular => "Commercial",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_owned()
        }
    }
}

fn default_true() -> bool {
    true
}

/// Access/refresh token pair issued by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds, when the backend reports it.
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /auth/refresh` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Aggregate dashboard figures from `GET /admin/kpis`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpis {
    pub total_calls: u64,
    pub calls_today: u64,
    pub appointments_set: u64,
    pub callbacks_pending: u64,
    pub reminders_due_today: u64,
    /// Share of acted-upon calls that ended with an appointment, 0.0..=1.0.
    pub conversion_rate: f64,
    pub active_users: u64,
}

/// Per-agent activity figures from `GET /admin/users/{id}/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStats {
    pub user_id: String,
    pub total_calls: u64,
    pub calls_today: u64,
    pub appointments_set: u64,
    pub reminders_pending: u64,
    /// Counts keyed by backend status code.
    pub by_status: std::collections::BTreeMap<String, u64>,
}

/// Paginated envelope used by listing endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

/// Listing response that is either a bare array or a [`Page`] envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListBody<T> {
    Bare(Vec<T>),
    Paged(Page<T>),
}

impl<T> ListBody<T> {
    /// Normalize to an envelope; a bare array is one complete page.
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        match self {
            Self::Paged(page) => page,
            Self::Bare(items) => {
                let total = items.len() as u64;
                let page_size = u32::try_from(items.len()).unwrap_or(u32::MAX);
                Page {
                    items,
                    total,
                    page: 1,
                    page_size,
                }
            }
        }
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.into_page().items
    }
}

fn default_page() -> u32 {
    1
}

/// `GET /notifications/unread-count` body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}
