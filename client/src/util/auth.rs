//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated and non-admin
//! redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a route guard should send the visitor to `/login`.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Whether an admin-only route should send a signed-in agent home.
#[must_use]
pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    !state.loading && state.user.as_ref().is_some_and(|u| !u.is_admin())
}

/// Id of the signed-in user; the key list pages reload on.
#[must_use]
pub fn signed_in_id(state: &AuthState) -> Option<String> {
    state.user.as_ref().map(|u| u.id.clone())
}

/// Changes only on sign-in, sign-out or a user switch, not on token refreshes
/// or `loading` flips.
pub fn signed_in_user(auth: RwSignal<AuthState>) -> Memo<Option<String>> {
    Memo::new(move |_| auth.with(signed_in_id))
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` when a non-admin opens an admin route.
pub fn install_admin_guard<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate("/login", NavigateOptions::default());
        } else if should_redirect_non_admin(&state) {
            navigate("/", NavigateOptions::default());
        }
    });
}
