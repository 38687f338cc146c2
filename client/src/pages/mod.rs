//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, mutations) and
//! delegates rendering details to `components`.

pub mod calls;
pub mod dashboard;
pub mod login;
pub mod reminders;
pub mod users;
