//! Uniform error type for backend round-trips.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is surfaced to the user the same way: a transient toast
//! carrying the backend's own message when it sent one, or a generic
//! localized fallback. Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Toast text used when the backend gives no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur est survenue. Veuillez réessayer.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status, with the message extracted from the body if any.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// Success status but the body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Browser-only endpoint called during server rendering.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a response code and its raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: extract_message(body),
        }
    }

    /// Text to show in a toast.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message), ..
            } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401, .. })
    }
}

/// Pull a human message out of an error body: `message`, then `detail`
/// (string, or the first `msg` of a validation list), then `error`.
#[must_use]
pub fn extract_message(body: &str) -> Option<String> {
    let value = serde_json::from_str::<Value>(body).ok()?;
    let text = |v: &Value| v.as_str().map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);

    if let Some(message) = value.get("message").and_then(text) {
        return Some(message);
    }
    match value.get("detail") {
        Some(Value::Array(items)) => {
            if let Some(msg) = items.iter().find_map(|item| item.get("msg").and_then(text)) {
                return Some(msg);
            }
        }
        Some(detail) => {
            if let Some(msg) = text(detail) {
                return Some(msg);
            }
        }
        None => {}
    }
    value.get("error").and_then(text)
}
