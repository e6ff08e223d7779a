//! Configuration types for rclonex
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `DaemonSettings` - How the console talks to the RC interface
//! - `UiSettings` - Terminal UI preferences

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Application settings (`<config dir>/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub daemon: DaemonSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// RC interface settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DaemonSettings {
    /// URL pre-filled in the login form
    #[serde(default = "default_url")]
    pub default_url: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// `config/get` calls allowed in flight while listing remotes
    #[serde(default = "default_detail_concurrency")]
    pub detail_concurrency: usize,
}

impl Default for DaemonSettings {
    fn default() -> Self {
        Self {
            default_url: default_url(),
            request_timeout_ms: default_request_timeout_ms(),
            detail_concurrency: default_detail_concurrency(),
        }
    }
}

impl DaemonSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(1))
    }
}

fn default_url() -> String {
    "http://localhost:5572".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_detail_concurrency() -> usize {
    1
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long a toast stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Show when each remote card was fetched
    #[serde(default = "default_true")]
    pub show_fetch_time: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            show_fetch_time: true,
        }
    }
}

impl UiSettings {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn default_toast_duration_ms() -> u64 {
    3_000
}

fn default_true() -> bool {
    true
}
