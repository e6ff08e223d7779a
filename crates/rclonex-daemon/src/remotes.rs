//! Remote configuration service.
//!
//! Maps the daemon's `config/*` endpoints onto normalized [`RemoteConfig`]
//! records. Listing reconciles two endpoint shapes:
//!
//! ```text
//! config/listremotes ──ok──▶ config/get per name ──▶ Vec<RemoteConfig>
//!        │                   (failures become "unknown" placeholders)
//!        └──err──▶ config/dump ──ok──▶ Vec<RemoteConfig>
//!                       └──err──▶ original listing error
//! ```

use futures_util::stream::{self, StreamExt};
use serde_json::{json, Value};

use rclonex_core::prelude::*;
use rclonex_core::{RemoteConfig, RemoteDraft};

use crate::api::RemoteApi;
use crate::client::RcClient;
use crate::protocol::{
    self, AboutRequest, CreateRequest, ListRemotesResponse, NameRequest, UpdateRequest,
};

/// Default number of `config/get` calls in flight while listing.
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 1;

/// [`RemoteApi`] backed by the daemon's RC interface.
#[derive(Debug, Clone)]
pub struct RemoteService {
    client: RcClient,
    detail_concurrency: usize,
}

impl RemoteService {
    pub fn new(client: RcClient) -> Self {
        Self {
            client,
            detail_concurrency: DEFAULT_DETAIL_CONCURRENCY,
        }
    }

    /// Number of detail fetches allowed in flight. Zero is treated as one.
    pub fn with_detail_concurrency(mut self, concurrency: usize) -> Self {
        self.detail_concurrency = concurrency.max(1);
        self
    }

    async fn fetch_names(&self) -> Result<Vec<String>> {
        let value = self.client.post(protocol::LIST_REMOTES, &json!({})).await?;
        let parsed: ListRemotesResponse = serde_json::from_value(value).map_err(|e| {
            Error::protocol(format!("{} returned an unexpected shape: {e}", protocol::LIST_REMOTES))
        })?;
        Ok(parsed.into_names())
    }

    async fn detailed_remotes(&self, names: Vec<String>) -> Result<Vec<RemoteConfig>> {
        let results: Vec<Result<RemoteConfig>> = stream::iter(names)
            .map(|name| async move { self.remote_or_placeholder(name).await })
            .buffered(self.detail_concurrency)
            .collect()
            .await;

        results.into_iter().collect()
    }

    /// Detail fetch that degrades to an "unknown" record.
    ///
    /// Auth failures still propagate so the caller can send the user back to
    /// the login screen.
    async fn remote_or_placeholder(&self, name: String) -> Result<RemoteConfig> {
        match self.fetch_remote(&name).await {
            Ok(remote) => Ok(remote),
            Err(e) if e.is_auth_failure() => Err(e),
            Err(e) => {
                debug!("Details for remote '{}' unavailable: {}", name, e);
                Ok(RemoteConfig::unknown(name, Some(e.to_string())))
            }
        }
    }

    async fn fetch_remote(&self, name: &str) -> Result<RemoteConfig> {
        let value = self
            .client
            .post(protocol::GET_REMOTE, &NameRequest { name })
            .await?;
        let details = protocol::detail_map(value)?;
        Ok(RemoteConfig::from_details(name, details))
    }

    async fn fetch_providers(&self) -> Result<Value> {
        let value = self.client.post(protocol::PROVIDERS, &json!({})).await?;
        Ok(protocol::providers_payload(value))
    }

    async fn dumped_remotes(&self) -> Result<Vec<RemoteConfig>> {
        let value = self.client.post(protocol::DUMP, &json!({})).await?;
        let remotes = protocol::dump_entries(value)?
            .into_iter()
            .map(|(name, params)| RemoteConfig::from_details(name, params))
            .collect();
        Ok(remotes)
    }
}

impl RemoteApi for RemoteService {
    async fn list_names(&self) -> Result<Vec<String>> {
        self.fetch_names().await
    }

    async fn list_remotes(&self) -> Result<Vec<RemoteConfig>> {
        let names = match self.fetch_names().await {
            Ok(names) => names,
            Err(e) if e.is_auth_failure() => return Err(e),
            Err(list_err) => {
                warn!(
                    "{} failed ({}), falling back to {}",
                    protocol::LIST_REMOTES,
                    list_err,
                    protocol::DUMP
                );
                return match self.dumped_remotes().await {
                    Ok(remotes) => {
                        info!("Loaded {} remotes via {}", remotes.len(), protocol::DUMP);
                        Ok(remotes)
                    }
                    Err(dump_err) => {
                        warn!("{} failed as well: {}", protocol::DUMP, dump_err);
                        Err(list_err)
                    }
                };
            }
        };

        let remotes = self.detailed_remotes(names).await?;
        info!("Loaded {} remotes", remotes.len());
        Ok(remotes)
    }

    async fn remote(&self, name: &str) -> Result<RemoteConfig> {
        self.fetch_remote(name).await
    }

    async fn providers(&self) -> Result<Value> {
        self.fetch_providers().await
    }

    async fn provider_options(&self, provider_type: &str) -> Result<Value> {
        let providers = self.fetch_providers().await?;
        Ok(protocol::find_provider_options(&providers, provider_type))
    }

    async fn create_remote(&self, draft: &RemoteDraft) -> Result<()> {
        if draft.name.trim().is_empty() || draft.provider_type.trim().is_empty() {
            return Err(Error::validation("Remote name and type are required"));
        }

        self.client
            .post(
                protocol::CREATE_REMOTE,
                &CreateRequest {
                    name: &draft.name,
                    provider_type: &draft.provider_type,
                    parameters: &draft.parameters,
                },
            )
            .await?;
        info!("Created remote '{}' ({})", draft.name, draft.provider_type);
        Ok(())
    }

    async fn update_remote(&self, existing: &RemoteConfig, draft: &RemoteDraft) -> Result<()> {
        if draft.changes_identity_of(existing) {
            return Err(Error::validation(
                "A remote's name and type cannot be changed; delete it and create a new one",
            ));
        }

        self.client
            .post(
                protocol::UPDATE_REMOTE,
                &UpdateRequest {
                    name: &existing.name,
                    parameters: &draft.parameters,
                },
            )
            .await?;
        info!("Updated remote '{}'", existing.name);
        Ok(())
    }

    async fn delete_remote(&self, name: &str) -> Result<()> {
        self.client
            .post(protocol::DELETE_REMOTE, &NameRequest { name })
            .await?;
        info!("Deleted remote '{}'", name);
        Ok(())
    }

    async fn test_remote(&self, name: &str) -> bool {
        match self
            .client
            .post(protocol::ABOUT, &AboutRequest::for_remote(name))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                debug!("Connection test for '{}' failed: {}", name, e);
                false
            }
        }
    }
}
