//! Toast helpers used after backend round-trips.
//!
//! Each pushed toast schedules its own dismissal after [`TOAST_TTL`] in the
//! browser. An unauthorized response also ends the session so route guards
//! send the user back to `/login`.

use ::calls::ApiError;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::toasts::{TOAST_TTL, ToastKind, ToastState};

pub fn toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    let message = message.into();
    toasts.update(|t| id = t.push(kind, message));
    schedule_dismiss(toasts, id);
}

pub fn toast_success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    toast(toasts, ToastKind::Success, message);
}

/// Surface a failed request.
pub fn report_failure(auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, err: &ApiError) {
    leptos::logging::warn!("request failed: {err}");
    if err.is_unauthorized() {
        auth.update(AuthState::sign_out);
    }
    let mut id = 0;
    toasts.update(|t| id = t.push_error(err));
    schedule_dismiss(toasts, id);
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, id, TOAST_TTL);
    }
}
