//! Core domain types for remote configurations

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provider type used when the daemon did not tell us the real one.
pub const UNKNOWN_PROVIDER: &str = "unknown";

/// Form-level parameter map: every value is the string the user typed.
pub type Parameters = BTreeMap<String, String>;

/// A remote (named storage backend definition) as held by the daemon,
/// normalized from either `config/get` or `config/dump`.
///
/// `id` always equals `name`. Neither can change after creation, and neither
/// can `provider_type`: the daemon only supports delete and re-create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteConfig {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    /// When the record was fetched. The daemon reports no creation time.
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<DateTime<Utc>>,
    /// Raw parameters exactly as returned by the daemon (includes `type`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
    /// Set when the per-remote detail fetch failed. The record is still
    /// listed, with an unknown provider type and no parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_error: Option<String>,
}

impl RemoteConfig {
    /// Build a record from a raw detail object (`{type, ...params}`).
    ///
    /// A missing or non-string `type` yields [`UNKNOWN_PROVIDER`].
    pub fn from_details(name: impl Into<String>, details: Map<String, Value>) -> Self {
        let name = name.into();
        let provider_type = details
            .get("type")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
            .unwrap_or(UNKNOWN_PROVIDER)
            .to_string();

        Self {
            id: name.clone(),
            name,
            provider_type,
            created_at: Utc::now(),
            last_used_at: None,
            config: Some(details),
            detail_error: None,
        }
    }

    /// Placeholder record for a remote whose details could not be fetched.
    pub fn unknown(name: impl Into<String>, detail_error: Option<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            provider_type: UNKNOWN_PROVIDER.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            config: None,
            detail_error,
        }
    }

    /// A single raw parameter rendered as display text.
    ///
    /// Returns `None` for missing, null, and empty-string values.
    pub fn param_text(&self, key: &str) -> Option<String> {
        let value = self.config.as_ref()?.get(key)?;
        value_to_text(value).filter(|s| !s.is_empty())
    }

    /// Raw parameters converted to strings for pre-filling an edit form.
    ///
    /// The `type` key is left out since the type is not editable, and so are
    /// null values.
    pub fn editable_parameters(&self) -> Parameters {
        self.config
            .iter()
            .flat_map(|map| map.iter())
            .filter(|(key, _)| key.as_str() != "type")
            .filter_map(|(key, value)| value_to_text(value).map(|text| (key.clone(), text)))
            .collect()
    }

    /// Case-insensitive match against the name or the provider type.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.provider_type.to_lowercase().contains(&query)
    }
}

/// What the user submitted from the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteDraft {
    pub name: String,
    pub provider_type: String,
    pub parameters: Parameters,
}

impl RemoteDraft {
    /// True when this draft would rename or retype `existing`.
    pub fn changes_identity_of(&self, existing: &RemoteConfig) -> bool {
        self.name != existing.name || self.provider_type != existing.provider_type
    }
}

fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Filter records by a search query, preserving order.
pub fn filter_remotes<'a>(remotes: &'a [RemoteConfig], query: &str) -> Vec<&'a RemoteConfig> {
    remotes.iter().filter(|r| r.matches_query(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn details(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_from_details_extracts_type() {
        let remote = RemoteConfig::from_details(
            "backup",
            details(json!({"type": "s3", "region": "us-east-1"})),
        );
        assert_eq!(remote.id, "backup");
        assert_eq!(remote.name, "backup");
        assert_eq!(remote.provider_type, "s3");
        assert_eq!(remote.param_text("region").as_deref(), Some("us-east-1"));
        assert!(remote.detail_error.is_none());
    }

    #[test]
    fn test_from_details_without_type_is_unknown() {
        let remote = RemoteConfig::from_details("odd", details(json!({"url": "x"})));
        assert_eq!(remote.provider_type, UNKNOWN_PROVIDER);
        assert!(remote.config.is_some());
    }

    #[test]
    fn test_unknown_record_has_no_parameters() {
        let remote = RemoteConfig::unknown("b", Some("timeout".into()));
        assert_eq!(remote.provider_type, UNKNOWN_PROVIDER);
        assert!(remote.config.is_none());
        assert_eq!(remote.detail_error.as_deref(), Some("timeout"));
        assert!(remote.editable_parameters().is_empty());
    }

    #[test]
    fn test_editable_parameters_stringifies_and_skips_type() {
        let remote = RemoteConfig::from_details(
            "ftp1",
            details(json!({
                "type": "ftp",
                "host": "ftp.example.com",
                "port": 21,
                "tls": true,
                "pass": null
            })),
        );
        let params = remote.editable_parameters();
        assert_eq!(params.get("host").map(String::as_str), Some("ftp.example.com"));
        assert_eq!(params.get("port").map(String::as_str), Some("21"));
        assert_eq!(params.get("tls").map(String::as_str), Some("true"));
        assert!(!params.contains_key("type"));
        assert!(!params.contains_key("pass"));
    }

    #[test]
    fn test_param_text_ignores_empty_values() {
        let remote =
            RemoteConfig::from_details("w", details(json!({"type": "webdav", "url": ""})));
        assert!(remote.param_text("url").is_none());
    }

    #[test]
    fn test_matches_query_name_or_type_case_insensitive() {
        let remote = RemoteConfig::from_details("MyBackup", details(json!({"type": "s3"})));
        assert!(remote.matches_query("backup"));
        assert!(remote.matches_query("S3"));
        assert!(remote.matches_query(""));
        assert!(!remote.matches_query("webdav"));
    }

    #[test]
    fn test_filter_remotes_preserves_order() {
        let remotes = vec![
            RemoteConfig::from_details("a-s3", details(json!({"type": "s3"}))),
            RemoteConfig::from_details("b-ftp", details(json!({"type": "ftp"}))),
            RemoteConfig::from_details("c-s3", details(json!({"type": "s3"}))),
        ];
        let names: Vec<_> = filter_remotes(&remotes, "s3")
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["a-s3", "c-s3"]);
    }

    #[test]
    fn test_draft_identity_change() {
        let existing = RemoteConfig::from_details("a", details(json!({"type": "s3"})));
        let same = RemoteDraft {
            name: "a".into(),
            provider_type: "s3".into(),
            parameters: Parameters::new(),
        };
        assert!(!same.changes_identity_of(&existing));

        let renamed = RemoteDraft {
            name: "a2".into(),
            ..same.clone()
        };
        assert!(renamed.changes_identity_of(&existing));

        let retyped = RemoteDraft {
            provider_type: "ftp".into(),
            ..same
        };
        assert!(retyped.changes_identity_of(&existing));
    }

    #[test]
    fn test_serializes_with_type_key() {
        let remote = RemoteConfig::unknown("b", None);
        let value = serde_json::to_value(&remote).unwrap();
        assert_eq!(value["id"], "b");
        assert_eq!(value["type"], "unknown");
        assert!(value.get("config").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
