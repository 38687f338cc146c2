//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each state struct is created once in `App`, wrapped in an `RwSignal`, and
//! provided as context. Pages read and update them through `expect_context`.

pub mod admin;
pub mod auth;
pub mod calls;
pub mod notifications;
pub mod reminders;
pub mod toasts;
pub mod ui;
