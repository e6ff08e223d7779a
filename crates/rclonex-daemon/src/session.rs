//! Session store: daemon URL, Basic credential and display user.
//!
//! The store is an explicit value handed to [`crate::RcClient`]. Clones share
//! the same state, so clearing it from a background task (on a 401) is seen
//! by every other holder. When backed by a file, every change is written to
//! `session.toml` as well.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use rclonex_core::prelude::*;

/// File name of the persisted session inside the config directory.
pub const SESSION_FILENAME: &str = "session.toml";

/// Name shown when the session carries no display user.
pub const DEFAULT_DISPLAY_NAME: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub base_url: String,
    /// `base64("user:pass")`, sent as `Authorization: Basic <credential>`.
    pub credential: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<DisplayUser>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("credential", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

impl Session {
    /// Build a session from the login form.
    ///
    /// The URL must be an absolute http(s) URL; a trailing slash is dropped.
    pub fn from_login(base_url: &str, user: &str, password: &str) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let credential = STANDARD.encode(format!("{user}:{password}"));
        let user = (!user.trim().is_empty()).then(|| DisplayUser {
            name: user.trim().to_string(),
            email: None,
        });

        Ok(Self {
            base_url,
            credential,
            user,
        })
    }

    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }

    /// Both halves required to talk to the daemon are present.
    pub fn is_complete(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.credential.trim().is_empty()
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("Daemon URL is required"));
    }
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| Error::validation(format!("Invalid daemon URL '{trimmed}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::validation(format!(
            "Daemon URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

// ─────────────────────────────────────────────────────────────────
// SessionStore
// ─────────────────────────────────────────────────────────────────

/// Shared, optionally file-backed holder of the current [`Session`].
#[derive(Clone, Default)]
pub struct SessionStore {
    current: Arc<RwLock<Option<Session>>>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("path", &self.path)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    /// A store that lives only in memory.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Open the store backed by `<dir>/session.toml`, loading it if present.
    ///
    /// A file that cannot be parsed is treated as "logged out" and logged.
    pub fn open(config_dir: &Path) -> Self {
        let path = config_dir.join(SESSION_FILENAME);
        let session = match load_session_file(&path) {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                None
            }
        };

        Self {
            current: Arc::new(RwLock::new(session)),
            path: Some(path),
        }
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// `(base_url, credential)` when both are present.
    pub fn credentials(&self) -> Option<(String, String)> {
        self.current()
            .filter(Session::is_complete)
            .map(|s| (s.base_url, s.credential))
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials().is_some()
    }

    /// Replace the session, persisting it when file-backed.
    pub fn set(&self, session: Session) -> Result<()> {
        if let Some(path) = &self.path {
            save_session_file(path, &session)?;
        }
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
        Ok(())
    }

    /// Drop the session from memory and from disk.
    ///
    /// Removing the file is best-effort: the in-memory session is always
    /// cleared, so the auth guard blocks further calls either way.
    pub fn clear(&self) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = None;
        self.remove_file();
    }

    /// Clear the session only if it still holds `credential`.
    ///
    /// A rejected request must not wipe a session stored after it was sent.
    /// Returns whether anything was cleared.
    pub fn clear_if_credential(&self, credential: &str) -> bool {
        {
            let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
            if current.as_ref().map(|s| s.credential.as_str()) != Some(credential) {
                return false;
            }
            *current = None;
        }
        self.remove_file();
        true
    }

    fn remove_file(&self) {
        if let Some(path) = &self.path {
            match std::fs::remove_file(path) {
                Ok(()) => debug!("Removed session file {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => warn!("Failed to remove session file {}: {}", path.display(), e),
            }
        }
    }
}

fn load_session_file(path: &Path) -> Result<Option<Session>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let session: Session = toml::from_str(&content)?;
    Ok(Some(session))
}

fn save_session_file(path: &Path, session: &Session) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(session)
        .map_err(|e| Error::config(format!("Failed to serialize session: {e}")))?;

    // Atomic write: temp file then rename
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, content)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}
