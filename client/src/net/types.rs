//! Wire DTOs used by pages and components.
//!
//! The schema itself lives in the `calls` crate so the CLI decodes the same
//! shapes; this module only gathers the names the UI needs.

pub use calls::admin::{NewUser, PasswordReset, UserPatch};
pub use calls::edit::{CallUpdate, NewCall};
pub use calls::types::{
    AuthTokens, Call, CallDirection, Credentials, Kpis, ListBody, Notification, Page, Reminder, ReminderStatus, Role,
    UnreadCount, User, UserStats,
};
