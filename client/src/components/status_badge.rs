//! Colored status pill.

use ::calls::UiCallStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(status: UiCallStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.label()}</span> }
}
