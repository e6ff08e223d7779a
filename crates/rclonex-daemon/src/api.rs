//! The remote-configuration operations the console depends on.
//!
//! Implementors provide [`RemoteApi`] (the `Send` variant) so calls can run
//! inside spawned tokio tasks. Import only one of the two traits per module.

use serde_json::Value;

use rclonex_core::prelude::*;
use rclonex_core::{RemoteConfig, RemoteDraft};

/// Remote configuration operations used by the console.
///
/// The TUI and the CLI go through this trait, so application tests can swap
/// in a fake backend.
#[trait_variant::make(RemoteApi: Send)]
pub trait LocalRemoteApi {
    /// Remote names only (`config/listremotes`). Used as the login probe.
    async fn list_names(&self) -> Result<Vec<String>>;

    /// All remotes, ordered as the daemon lists them.
    async fn list_remotes(&self) -> Result<Vec<RemoteConfig>>;

    /// A single remote's details.
    async fn remote(&self, name: &str) -> Result<RemoteConfig>;

    /// Raw provider catalog.
    async fn providers(&self) -> Result<Value>;

    /// Options of one provider type, `Value::Null` when unknown.
    async fn provider_options(&self, provider_type: &str) -> Result<Value>;

    async fn create_remote(&self, draft: &RemoteDraft) -> Result<()>;

    /// Update parameters of `existing`. Renames and type changes are rejected
    /// without contacting the daemon.
    async fn update_remote(&self, existing: &RemoteConfig, draft: &RemoteDraft) -> Result<()>;

    async fn delete_remote(&self, name: &str) -> Result<()>;

    /// Whether the remote's root is reachable. Never fails.
    async fn test_remote(&self, name: &str) -> bool;
}
