//! Test utilities for code that depends on the daemon client.
//!
//! [`FakeRemoteApi`] is an in-memory [`RemoteApi`] that records calls, so
//! application tests can drive actions without an HTTP server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use rclonex_core::prelude::*;
use rclonex_core::{RemoteConfig, RemoteDraft};

use crate::api::RemoteApi;
use crate::session::{Session, SessionStore};

/// An in-memory store already logged in to `base_url` as `user:pass`.
pub fn logged_in_store(base_url: &str) -> SessionStore {
    let store = SessionStore::in_memory();
    if let Ok(session) = Session::from_login(base_url, "user", "pass") {
        let _ = store.set(session);
    }
    store
}

/// A remote record with the given type and string parameters.
pub fn sample_remote(name: &str, provider_type: &str, params: &[(&str, &str)]) -> RemoteConfig {
    let mut details = Map::new();
    details.insert("type".into(), Value::String(provider_type.into()));
    for (key, value) in params {
        details.insert((*key).into(), Value::String((*value).into()));
    }
    RemoteConfig::from_details(name, details)
}

/// Failure a [`FakeRemoteApi`] call can be told to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeFailure {
    Unauthorized,
    NotAuthenticated,
    Daemon(String),
}

impl FakeFailure {
    fn to_error(&self) -> Error {
        match self {
            FakeFailure::Unauthorized => Error::Unauthorized,
            FakeFailure::NotAuthenticated => Error::NotAuthenticated,
            FakeFailure::Daemon(message) => Error::daemon(message.clone()),
        }
    }
}

#[derive(Debug, Default)]
struct FakeState {
    remotes: Vec<RemoteConfig>,
    list_failure: Option<FakeFailure>,
    write_failure: Option<FakeFailure>,
    reachable: HashMap<String, bool>,
    calls: Vec<String>,
}

/// In-memory [`RemoteApi`]. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeRemoteApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeRemoteApi {
    pub fn with_remotes(remotes: Vec<RemoteConfig>) -> Self {
        let fake = Self::default();
        fake.lock().remotes = remotes;
        fake
    }

    pub fn fail_list(&self, failure: FakeFailure) {
        self.lock().list_failure = Some(failure);
    }

    pub fn fail_writes(&self, failure: FakeFailure) {
        self.lock().write_failure = Some(failure);
    }

    pub fn set_reachable(&self, name: &str, reachable: bool) {
        self.lock().reachable.insert(name.to_string(), reachable);
    }

    /// Calls made so far, as `"op:name"` strings.
    pub fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub fn remotes(&self) -> Vec<RemoteConfig> {
        self.lock().remotes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: String) -> Option<FakeFailure> {
        let mut state = self.lock();
        state.calls.push(call);
        state.write_failure.clone()
    }
}

impl RemoteApi for FakeRemoteApi {
    async fn list_names(&self) -> Result<Vec<String>> {
        let mut state = self.lock();
        state.calls.push("names".to_string());
        match &state.list_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(state.remotes.iter().map(|r| r.name.clone()).collect()),
        }
    }

    async fn list_remotes(&self) -> Result<Vec<RemoteConfig>> {
        let mut state = self.lock();
        state.calls.push("list".to_string());
        match &state.list_failure {
            Some(failure) => Err(failure.to_error()),
            None => Ok(state.remotes.clone()),
        }
    }

    async fn remote(&self, name: &str) -> Result<RemoteConfig> {
        let mut state = self.lock();
        state.calls.push(format!("get:{name}"));
        state
            .remotes
            .iter()
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| Error::daemon(format!("remote '{name}' not found")))
    }

    async fn providers(&self) -> Result<Value> {
        self.lock().calls.push("providers".to_string());
        Ok(Value::Array(Vec::new()))
    }

    async fn provider_options(&self, provider_type: &str) -> Result<Value> {
        self.lock().calls.push(format!("options:{provider_type}"));
        Ok(Value::Null)
    }

    async fn create_remote(&self, draft: &RemoteDraft) -> Result<()> {
        if let Some(failure) = self.record(format!("create:{}", draft.name)) {
            return Err(failure.to_error());
        }
        let params: Vec<(&str, &str)> = draft
            .parameters
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        let remote = sample_remote(&draft.name, &draft.provider_type, &params);
        self.lock().remotes.push(remote);
        Ok(())
    }

    async fn update_remote(&self, existing: &RemoteConfig, draft: &RemoteDraft) -> Result<()> {
        if draft.changes_identity_of(existing) {
            return Err(Error::validation(
                "A remote's name and type cannot be changed; delete it and create a new one",
            ));
        }
        if let Some(failure) = self.record(format!("update:{}", existing.name)) {
            return Err(failure.to_error());
        }
        Ok(())
    }

    async fn delete_remote(&self, name: &str) -> Result<()> {
        if let Some(failure) = self.record(format!("delete:{name}")) {
            return Err(failure.to_error());
        }
        self.lock().remotes.retain(|r| r.name != name);
        Ok(())
    }

    async fn test_remote(&self, name: &str) -> bool {
        let mut state = self.lock();
        state.calls.push(format!("test:{name}"));
        state.reachable.get(name).copied().unwrap_or(true)
    }
}
