//! HTTP client for the rclone remote-control interface.
//!
//! Every call is a JSON `POST <base_url>/<path>` carrying
//! `Authorization: Basic <credential>`. Both values come from the
//! [`SessionStore`] handed to the client; nothing is read from ambient state.
//!
//! ## Auth guard
//!
//! - Missing base URL or credential: [`Error::NotAuthenticated`], nothing sent.
//! - HTTP 401: the session is cleared (memory and file) and
//!   [`Error::Unauthorized`] is returned. Later calls then fail the guard.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;

use rclonex_core::prelude::*;

use crate::protocol::daemon_error;
use crate::session::SessionStore;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// RC client configuration.
#[derive(Debug, Clone)]
pub struct RcClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for RcClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            user_agent: format!("rclonex/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl RcClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Cloneable handle; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct RcClient {
    http: reqwest::Client,
    session: SessionStore,
}

impl RcClient {
    pub fn new(session: SessionStore, config: RcClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| Error::transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { http, session })
    }

    /// POST `body` to `path` and return the decoded JSON response.
    ///
    /// # Errors
    ///
    /// - [`Error::NotAuthenticated`] when the session is incomplete.
    /// - [`Error::Unauthorized`] on HTTP 401, after clearing the session that
    ///   sent the request.
    /// - [`Error::HttpStatus`] on any other non-2xx status.
    /// - [`Error::Daemon`] when a 2xx body carries a populated `error` field.
    /// - [`Error::Transport`] for connection failures and timeouts.
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        let (base_url, credential) = self.session.credentials().ok_or_else(|| {
            debug!("Blocked {} request: no session", path);
            Error::NotAuthenticated
        })?;
        let url = endpoint_url(&base_url, path);

        trace!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Basic {credential}"))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(describe_reqwest_error(&e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            if self.session.clear_if_credential(&credential) {
                warn!("Daemon rejected credential for {}; session cleared", path);
            } else {
                debug!("Stale credential rejected for {}; session already replaced", path);
            }
            return Err(Error::Unauthorized);
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(describe_reqwest_error(&e)))?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .as_ref()
                .and_then(daemon_error)
                .unwrap_or_else(|| status_message(status, &text));
            debug!("{} failed with HTTP {}: {}", path, status.as_u16(), message);
            return Err(Error::http_status(status.as_u16(), message));
        }

        let value = if text.trim().is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str::<Value>(&text)
                .map_err(|e| Error::protocol(format!("{path} returned invalid JSON: {e}")))?
        };

        if let Some(message) = daemon_error(&value) {
            return Err(Error::daemon(message));
        }

        Ok(value)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn status_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unexpected status")
            .to_string()
    } else {
        body.chars().take(200).collect()
    }
}

fn describe_reqwest_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        format!("could not connect to daemon: {e}")
    } else {
        e.to_string()
    }
}
