//! Wire shapes of the rclone remote-control `config/*` endpoints.
//!
//! Requests are plain serde structs. Responses are kept as
//! `serde_json::Value` and picked apart here, because the daemon's shapes
//! vary between versions (wrapped and unwrapped dumps, `null` lists).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use rclonex_core::prelude::*;
use rclonex_core::Parameters;

// ─────────────────────────────────────────────────────────────────
// Endpoints
// ─────────────────────────────────────────────────────────────────

pub const LIST_REMOTES: &str = "config/listremotes";
pub const GET_REMOTE: &str = "config/get";
pub const DUMP: &str = "config/dump";
pub const PROVIDERS: &str = "config/providers";
pub const CREATE_REMOTE: &str = "config/create";
pub const UPDATE_REMOTE: &str = "config/update";
pub const DELETE_REMOTE: &str = "config/delete";
pub const ABOUT: &str = "operations/about";

// ─────────────────────────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct NameRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub provider_type: &'a str,
    pub parameters: &'a Parameters,
}

#[derive(Debug, Serialize)]
pub struct UpdateRequest<'a> {
    pub name: &'a str,
    pub parameters: &'a Parameters,
}

/// `operations/about` takes an fs string, `"<remote>:"` for a remote root.
#[derive(Debug, Serialize)]
pub struct AboutRequest {
    pub fs: String,
}

impl AboutRequest {
    pub fn for_remote(name: &str) -> Self {
        Self {
            fs: format!("{name}:"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct ListRemotesResponse {
    /// `null` when no remotes are configured.
    #[serde(default)]
    pub remotes: Option<Vec<String>>,
}

impl ListRemotesResponse {
    pub fn into_names(self) -> Vec<String> {
        self.remotes.unwrap_or_default()
    }
}

/// The `error` field of a response, when populated.
pub fn daemon_error(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Parameter object of a `config/get` response.
pub fn detail_map(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(Error::protocol(format!(
            "expected an object from {GET_REMOTE}, got {other}"
        ))),
    }
}

/// `name -> parameters` entries of a `config/dump` response.
///
/// The top-level object is the map itself. A lone `result` wrapper is
/// unwrapped. Entries whose value is not an object get an empty parameter map.
pub fn dump_entries(value: Value) -> Result<Vec<(String, Map<String, Value>)>> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(Error::protocol(format!(
                "expected an object from {DUMP}, got {other}"
            )))
        }
    };

    let map = unwrap_result(map);

    Ok(map
        .into_iter()
        .map(|(name, params)| match params {
            Value::Object(params) => (name, params),
            _ => (name, Map::new()),
        })
        .collect())
}

// A single remote that happens to be named "result" carries a string `type`.
fn unwrap_result(mut map: Map<String, Value>) -> Map<String, Value> {
    let is_wrapper = map.len() == 1
        && map
            .get("result")
            .is_some_and(|v| v.is_object() && !v.get("type").is_some_and(Value::is_string));
    if is_wrapper {
        if let Some(Value::Object(inner)) = map.remove("result") {
            return inner;
        }
    }
    map
}

/// `result` field when present, otherwise the whole body.
pub fn providers_payload(mut value: Value) -> Value {
    if let Some(result) = value.get_mut("result") {
        return result.take();
    }
    value
}

/// `Options` of the provider whose `Name` or `Prefix` equals `provider_type`.
///
/// Accepts either `{providers: [...]}` or a bare array. Returns `Value::Null`
/// when nothing matches.
pub fn find_provider_options(providers: &Value, provider_type: &str) -> Value {
    let list = providers
        .get("providers")
        .and_then(Value::as_array)
        .or_else(|| providers.as_array());

    list.into_iter()
        .flatten()
        .find(|p| {
            ["Name", "Prefix"].iter().any(|key| {
                p.get(key)
                    .and_then(Value::as_str)
                    .is_some_and(|v| v.eq_ignore_ascii_case(provider_type))
            })
        })
        .and_then(|p| p.get("Options"))
        .cloned()
        .unwrap_or(Value::Null)
}
