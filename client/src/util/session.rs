//! Persisted auth tokens.
//!
//! The token pair lives in `localStorage` so a reload keeps the user signed
//! in; the API helpers read it on every request.

use calls::types::AuthTokens;

use super::storage;

const TOKENS_KEY: &str = "calldesk_tokens";

pub fn load_tokens() -> Option<AuthTokens> {
    storage::load_json(TOKENS_KEY)
}

pub fn save_tokens(tokens: &AuthTokens) {
    storage::save_json(TOKENS_KEY, tokens);
}

pub fn clear_tokens() {
    storage::remove(TOKENS_KEY);
}

/// `Authorization` header value for an access token.
#[must_use]
pub fn bearer(access_token: &str) -> String {
    format!("Bearer {access_token}")
}
