//! CLI error type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use calls::error::extract_message;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing access token; run `calldesk auth login` or set CALLDESK_TOKEN")]
    MissingToken,
    #[error("missing refresh token; pass --refresh-token or set CALLDESK_REFRESH_TOKEN")]
    MissingRefreshToken,
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("nothing to update; pass at least one field")]
    EmptyUpdate,
}

impl CliError {
    /// Status error carrying the backend's message, or the raw body when it
    /// has no recognizable message field.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_message(body).unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() { "(empty body)".to_owned() } else { body.to_owned() }
        });
        Self::Server { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Server { status: 401, .. })
    }
}
