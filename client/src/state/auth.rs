//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The token pair is mirrored to
//! localStorage so a reload keeps the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use calls::types::{AuthTokens, User};

use crate::util::session;

/// Authentication state tracking the current user, held tokens and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub tokens: Option<AuthTokens>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state: restore persisted tokens and, if any, wait for `/auth/me`.
    #[must_use]
    pub fn restore() -> Self {
        let tokens = session::load_tokens();
        Self {
            loading: tokens.is_some(),
            user: None,
            tokens,
        }
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.tokens.as_ref().map(|t| t.access_token.as_str())
    }

    /// Store freshly issued tokens. A refresh that omits the refresh token
    /// keeps the previous one.
    pub fn set_tokens(&mut self, mut tokens: AuthTokens) {
        if tokens.refresh_token.is_none() {
            tokens.refresh_token = self.tokens.as_ref().and_then(|t| t.refresh_token.clone());
        }
        session::save_tokens(&tokens);
        self.tokens = Some(tokens);
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        session::clear_tokens();
        self.user = None;
        self.tokens = None;
        self.loading = false;
    }
}
