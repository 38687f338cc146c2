//! Call-tracking domain model and client-side derivations.
//!
//! This crate is UI-framework agnostic: the Leptos dashboard and the CLI both
//! consume it for wire types, status vocabulary mapping, list derivation and
//! edit reconciliation. It performs no I/O.

pub mod admin;
pub mod edit;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod listing;
pub mod notifications;
pub mod optimistic;
pub mod reminders;
pub mod status;
pub mod time;
pub mod types;

pub use error::ApiError;
pub use filter::CallFilter;
pub use listing::{CallListPage, CallView, derive_page};
pub use status::{ApiCallStatus, UiCallStatus};
pub use types::{Call, CallDirection, Notification, Reminder, User};
