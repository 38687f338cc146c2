//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and call list pieces while reading and
//! writing shared state from Leptos context providers.

pub mod call_edit_dialog;
pub mod call_filters;
pub mod call_table;
pub mod notification_bell;
pub mod pagination;
pub mod sidebar;
pub mod status_badge;
pub mod toast_stack;
