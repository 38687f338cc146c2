//! Typed HTTP client for the call-tracking backend.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::time::Duration;

use calls::admin::{NewUser, PasswordReset, UserPatch};
use calls::edit::{CallUpdate, NewCall};
use calls::endpoints::{self, CallQuery};
use calls::types::{
    AuthTokens, Call, Credentials, Kpis, ListBody, Notification, Page, RefreshRequest, Reminder, UnreadCount, User,
    UserStats,
};
use calls::CallView;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::CliError;

pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Validate and normalize the API base URL (no trailing slash).
pub fn normalize_base_url(raw: &str) -> Result<String, CliError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(CliError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

/// Decode a success body; empty bodies decode as JSON `null`.
fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CliError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CliError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(base_url)?,
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<String, CliError> {
        let url = self.url(path);
        debug!(%method, %url, "request");

        let mut request = self.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if authenticated {
            let token = self.token.as_deref().ok_or(CliError::MissingToken)?;
            request = request.bearer_auth(token);
        }
        if let Some(json) = body {
            request = request.json(&json);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(%method, %url, status = status.as_u16(), bytes = text.len(), "response");
        if !status.is_success() {
            return Err(CliError::from_response(status.as_u16(), &text));
        }
        Ok(text)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        decode(&self.send(Method::GET, path, &[], None, true).await?)
    }

    async fn send_json<T: DeserializeOwned>(&self, method: Method, path: &str, body: Value) -> Result<T, CliError> {
        decode(&self.send(method, path, &[], Some(body), true).await?)
    }

    async fn send_empty(&self, method: Method, path: &str) -> Result<(), CliError> {
        self.send(method, path, &[], None, true).await.map(|_| ())
    }

    // =============================================================
    // Auth
    // =============================================================

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthTokens, CliError> {
        let body = serde_json::to_value(credentials)?;
        decode(&self.send(Method::POST, endpoints::LOGIN, &[], Some(body), false).await?)
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, CliError> {
        let body = serde_json::to_value(RefreshRequest {
            refresh_token: refresh_token.to_owned(),
        })?;
        decode(&self.send(Method::POST, endpoints::REFRESH, &[], Some(body), false).await?)
    }

    pub async fn me(&self) -> Result<User, CliError> {
        self.get(endpoints::ME).await
    }

    // =============================================================
    // Calls
    // =============================================================

    pub async fn search_calls(&self, query: &CallQuery) -> Result<Page<Call>, CliError> {
        let text = self.send(Method::GET, endpoints::CALLS, &query.to_pairs(), None, true).await?;
        decode::<ListBody<Call>>(&text).map(ListBody::into_page)
    }

    pub async fn calls_for_view(&self, view: CallView) -> Result<Vec<Call>, CliError> {
        self.get::<ListBody<Call>>(endpoints::calls_for_view(view))
            .await
            .map(ListBody::into_items)
    }

    pub async fn call(&self, id: &str) -> Result<Call, CliError> {
        self.get(&endpoints::call(id)).await
    }

    pub async fn create_call(&self, call: &NewCall) -> Result<Call, CliError> {
        self.send_json(Method::POST, endpoints::CALLS, serde_json::to_value(call)?).await
    }

    pub async fn update_call(&self, id: &str, update: &CallUpdate) -> Result<Call, CliError> {
        self.send_json(Method::PATCH, &endpoints::call(id), serde_json::to_value(update)?)
            .await
    }

    pub async fn delete_call(&self, id: &str) -> Result<(), CliError> {
        self.send_empty(Method::DELETE, &endpoints::call(id)).await
    }

    // =============================================================
    // Reminders
    // =============================================================

    pub async fn reminders(&self, all: bool) -> Result<Vec<Reminder>, CliError> {
        let path = if all { endpoints::REMINDERS } else { endpoints::REMINDERS_TODAY };
        self.get::<ListBody<Reminder>>(path).await.map(ListBody::into_items)
    }

    pub async fn reminder_done(&self, id: &str) -> Result<(), CliError> {
        self.send_empty(Method::POST, &endpoints::reminder_done(id)).await
    }

    pub async fn delete_reminder(&self, id: &str) -> Result<(), CliError> {
        self.send_empty(Method::DELETE, &endpoints::reminder(id)).await
    }

    // =============================================================
    // Notifications
    // =============================================================

    pub async fn unread_notifications(&self) -> Result<Vec<Notification>, CliError> {
        self.get::<ListBody<Notification>>(endpoints::NOTIFICATIONS_UNREAD)
            .await
            .map(ListBody::into_items)
    }

    pub async fn unread_count(&self) -> Result<u64, CliError> {
        self.get::<UnreadCount>(endpoints::NOTIFICATIONS_UNREAD_COUNT)
            .await
            .map(|c| c.count)
    }

    pub async fn mark_read(&self, id: &str) -> Result<(), CliError> {
        self.send_empty(Method::POST, &endpoints::notification_read(id)).await
    }

    pub async fn mark_all_read(&self) -> Result<(), CliError> {
        self.send_empty(Method::POST, endpoints::NOTIFICATIONS_READ_ALL).await
    }

    // =============================================================
    // Administration
    // =============================================================

    pub async fn users(&self) -> Result<Vec<User>, CliError> {
        self.get::<ListBody<User>>(endpoints::ADMIN_USERS)
            .await
            .map(ListBody::into_items)
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, CliError> {
        self.send_json(Method::POST, endpoints::ADMIN_USERS, serde_json::to_value(user)?)
            .await
    }

    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, CliError> {
        self.send_json(Method::PATCH, &endpoints::admin_user(id), serde_json::to_value(patch)?)
            .await
    }

    pub async fn deactivate_user(&self, id: &str) -> Result<(), CliError> {
        self.send_empty(Method::POST, &endpoints::admin_user_deactivate(id)).await
    }

    pub async fn reset_password(&self, id: &str) -> Result<PasswordReset, CliError> {
        let text = self
            .send(Method::POST, &endpoints::admin_user_reset_password(id), &[], None, true)
            .await?;
        decode::<Option<PasswordReset>>(&text).map(Option::unwrap_or_default)
    }

    pub async fn user_stats(&self, id: &str) -> Result<UserStats, CliError> {
        self.get(&endpoints::admin_user_stats(id)).await
    }

    pub async fn kpis(&self) -> Result<Kpis, CliError> {
        self.get(endpoints::ADMIN_KPIS).await
    }
}
