//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every request fails with [`ApiError::Unavailable`]
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; pages turn failures into toasts
//! instead of panicking so a bad response never breaks hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use ::calls::endpoints::{self, CallQuery};
use ::calls::{ApiError, CallView};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    AuthTokens, Call, CallUpdate, Credentials, Kpis, ListBody, NewCall, NewUser, Notification, Page, PasswordReset,
    Reminder, UnreadCount, User, UserPatch, UserStats,
};
use crate::state::reminders::ReminderScope;

/// Prefix of every backend path, relative to the page origin.
pub const API_BASE: &str = "/api";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Decode a success body. An empty body decodes as JSON `null` so unit
/// responses (`204 No Content`) work.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Perform one request and return the raw success body.
async fn send(
    method: Method,
    path: &str,
    query: &[(&'static str, String)],
    body: Option<serde_json::Value>,
) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = api_url(path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
            Method::Delete => Request::delete(&url),
        };
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        if let Some(tokens) = crate::util::session::load_tokens() {
            builder = builder.header("Authorization", &crate::util::session::bearer(&tokens.access_token));
        }
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if !resp.ok() {
            leptos::logging::warn!("{method:?} {path} failed: {status}");
            return Err(ApiError::from_response(status, &text));
        }
        Ok(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, query, body);
        Err(ApiError::Unavailable)
    }
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    decode(&send(Method::Get, path, &[], None).await?)
}

async fn send_json<B: Serialize, T: DeserializeOwned>(method: Method, path: &str, body: &B) -> Result<T, ApiError> {
    decode(&send(method, path, &[], Some(to_body(body)?)).await?)
}

/// Fire a body-less mutation and ignore the response body.
async fn send_empty(method: Method, path: &str) -> Result<(), ApiError> {
    send(method, path, &[], None).await.map(|_| ())
}

// =============================================================
// Auth
// =============================================================

/// Exchange credentials for a token pair via `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend error (e.g. bad credentials) or a transport failure.
pub async fn login(credentials: &Credentials) -> Result<AuthTokens, ApiError> {
    send_json(Method::Post, endpoints::LOGIN, credentials).await
}

/// Obtain a fresh access token via `POST /auth/refresh`.
///
/// # Errors
///
/// Returns the backend error when the refresh token is rejected.
pub async fn refresh(refresh_token: &str) -> Result<AuthTokens, ApiError> {
    let body = ::calls::types::RefreshRequest {
        refresh_token: refresh_token.to_owned(),
    };
    send_json(Method::Post, endpoints::REFRESH, &body).await
}

/// Fetch the currently authenticated user from `/auth/me`.
///
/// # Errors
///
/// Returns an unauthorized error when no valid token is held.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    get_json(endpoints::ME).await
}

// =============================================================
// Calls
// =============================================================

/// Server-filtered, paginated `GET /calls`.
///
/// # Errors
///
/// Returns the backend or transport error.
pub async fn list_calls(query: &CallQuery) -> Result<Page<Call>, ApiError> {
    let body = send(Method::Get, endpoints::CALLS, &query.to_pairs(), None).await?;
    decode::<ListBody<Call>>(&body).map(ListBody::into_page)
}

/// Every call backing a list view; the page derives filtering and order locally.
///
/// # Errors
///
/// Returns the backend or transport error.
pub async fn fetch_calls(view: CallView) -> Result<Vec<Call>, ApiError> {
    get_json::<ListBody<Call>>(endpoints::calls_for_view(view))
        .await
        .map(ListBody::into_items)
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn fetch_call(id: &str) -> Result<Call, ApiError> {
    get_json(&endpoints::call(id)).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn create_call(call: &NewCall) -> Result<Call, ApiError> {
    send_json(Method::Post, endpoints::CALLS, call).await
}

/// Send a reconciled edit via `PATCH /calls/{id}` and return the stored call.
///
/// # Errors
///
/// Returns the backend or transport error.
pub async fn update_call(id: &str, update: &CallUpdate) -> Result<Call, ApiError> {
    send_json(Method::Patch, &endpoints::call(id), update).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn delete_call(id: &str) -> Result<(), ApiError> {
    send_empty(Method::Delete, &endpoints::call(id)).await
}

// =============================================================
// Reminders
// =============================================================

/// # Errors
///
/// Returns the backend or transport error.
pub async fn fetch_reminders(scope: ReminderScope) -> Result<Vec<Reminder>, ApiError> {
    get_json::<ListBody<Reminder>>(reminders_path(scope))
        .await
        .map(ListBody::into_items)
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn mark_reminder_done(id: &str) -> Result<(), ApiError> {
    send_empty(Method::Post, &endpoints::reminder_done(id)).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn delete_reminder(id: &str) -> Result<(), ApiError> {
    send_empty(Method::Delete, &endpoints::reminder(id)).await
}

fn reminders_path(scope: ReminderScope) -> &'static str {
    match scope {
        ReminderScope::Today => endpoints::REMINDERS_TODAY,
        ReminderScope::All => endpoints::REMINDERS,
    }
}

// =============================================================
// Notifications
// =============================================================

/// # Errors
///
/// Returns the backend or transport error.
pub async fn fetch_unread_notifications() -> Result<Vec<Notification>, ApiError> {
    get_json::<ListBody<Notification>>(endpoints::NOTIFICATIONS_UNREAD)
        .await
        .map(ListBody::into_items)
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn fetch_unread_count() -> Result<u64, ApiError> {
    get_json::<UnreadCount>(endpoints::NOTIFICATIONS_UNREAD_COUNT)
        .await
        .map(|c| c.count)
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn mark_notification_read(id: &str) -> Result<(), ApiError> {
    send_empty(Method::Post, &endpoints::notification_read(id)).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn mark_all_notifications_read() -> Result<(), ApiError> {
    send_empty(Method::Post, endpoints::NOTIFICATIONS_READ_ALL).await
}

// =============================================================
// Administration
// =============================================================

/// # Errors
///
/// Returns the backend or transport error; agents get a forbidden status.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    get_json::<ListBody<User>>(endpoints::ADMIN_USERS)
        .await
        .map(ListBody::into_items)
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn create_user(user: &NewUser) -> Result<User, ApiError> {
    send_json(Method::Post, endpoints::ADMIN_USERS, user).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn update_user(id: &str, patch: &UserPatch) -> Result<User, ApiError> {
    send_json(Method::Patch, &endpoints::admin_user(id), patch).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn deactivate_user(id: &str) -> Result<(), ApiError> {
    send_empty(Method::Post, &endpoints::admin_user_deactivate(id)).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn reset_user_password(id: &str) -> Result<PasswordReset, ApiError> {
    let body = send(Method::Post, &endpoints::admin_user_reset_password(id), &[], None).await?;
    decode::<Option<PasswordReset>>(&body).map(Option::unwrap_or_default)
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn fetch_user_stats(id: &str) -> Result<UserStats, ApiError> {
    get_json(&endpoints::admin_user_stats(id)).await
}

/// # Errors
///
/// Returns the backend or transport error.
pub async fn fetch_kpis() -> Result<Kpis, ApiError> {
    get_json(endpoints::ADMIN_KPIS).await
}
