//! Non-interactive commands and the wiring shared with the TUI

use std::path::PathBuf;

use rclonex_app::config::{init_config_dir, load_settings, Settings};
use rclonex_app::state::AppState;
use rclonex_app::Services;
use rclonex_core::prelude::*;
use rclonex_core::{key_info, provider_label, RemoteConfig};
use rclonex_daemon::{RcClient, RcClientConfig, RemoteApi, RemoteService, Session, SessionStore};

/// Everything a command needs, built once from the config directory.
#[derive(Debug, Clone)]
pub struct Context {
    pub config_dir: PathBuf,
    pub settings: Settings,
    pub session: SessionStore,
    pub remotes: RemoteService,
}

impl Context {
    /// Create the config directory if needed, load the settings and the
    /// stored session, and build the RC client from them.
    pub fn open(config_dir: PathBuf) -> Result<Self> {
        init_config_dir(&config_dir)?;
        let settings = load_settings(&config_dir);
        let session = SessionStore::open(&config_dir);

        let client = RcClient::new(
            session.clone(),
            RcClientConfig::default().with_timeout(settings.daemon.request_timeout()),
        )?;
        let remotes =
            RemoteService::new(client).with_detail_concurrency(settings.daemon.detail_concurrency);

        debug!(
            "Context ready: dir={}, authenticated={}",
            config_dir.display(),
            session.is_authenticated()
        );

        Ok(Self {
            config_dir,
            settings,
            session,
            remotes,
        })
    }

    pub fn services(&self) -> Services<RemoteService> {
        Services::new(self.remotes.clone(), self.session.clone())
    }

    /// TUI state: the console when a complete session is stored, else login.
    pub fn initial_state(&self) -> AppState {
        let session = self.session.current().filter(Session::is_complete);
        AppState::new(self.settings.clone(), session)
    }
}

/// `rclonex login`: store the session once the daemon accepts it.
pub async fn login(ctx: &Context, url: &str, user: &str, password: &str) -> Result<Session> {
    let session = rclonex_app::actions::login(&ctx.services(), url, user, password).await?;
    info!("CLI login to {}", session.base_url);
    Ok(session)
}

/// `rclonex logout`
pub fn logout(ctx: &Context) {
    ctx.session.clear();
    info!("CLI logout");
}

/// `rclonex remotes`: one aligned row per remote.
pub fn remotes_table(remotes: &[RemoteConfig]) -> String {
    if remotes.is_empty() {
        return "No remotes configured yet".to_string();
    }

    let rows: Vec<(String, String, String)> = remotes
        .iter()
        .map(|remote| {
            let details = match &remote.detail_error {
                Some(error) => format!("details unavailable: {error}"),
                None => key_info(remote)
                    .into_iter()
                    .map(|(label, value)| format!("{label}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            (
                remote.name.clone(),
                provider_label(&remote.provider_type),
                details,
            )
        })
        .collect();

    let name_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(4);
    let type_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max(4);

    let mut out = format!("{:<name_width$}  {:<type_width$}  DETAILS", "NAME", "TYPE");
    for (name, label, details) in rows {
        out.push('\n');
        out.push_str(format!("{name:<name_width$}  {label:<type_width$}  {details}").trim_end());
    }
    out
}

/// `rclonex remotes --json`: the normalized records.
pub fn remotes_json(remotes: &[RemoteConfig]) -> Result<String> {
    Ok(serde_json::to_string_pretty(remotes)?)
}

/// `rclonex remote <name>`: one freshly fetched record.
pub async fn remote_json<S: RemoteApi>(api: &S, name: &str) -> Result<String> {
    let remote = api.remote(name).await?;
    Ok(serde_json::to_string_pretty(&remote)?)
}

/// `rclonex providers [--type T]`: the daemon's provider catalog, or one
/// provider's option list, pretty-printed.
///
/// An unknown type is a validation error rather than a bare `null`.
pub async fn providers_json<S: RemoteApi>(api: &S, provider_type: Option<&str>) -> Result<String> {
    let value = match provider_type {
        None => api.providers().await?,
        Some(provider_type) => {
            let options = api.provider_options(provider_type).await?;
            if options.is_null() {
                return Err(Error::validation(format!(
                    "The daemon has no provider named '{provider_type}'"
                )));
            }
            options
        }
    };
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rclonex_daemon::test_utils::{sample_remote, FakeRemoteApi};

    #[test]
    fn test_remotes_table_aligns_columns() {
        let remotes = vec![
            sample_remote("photos", "s3", &[("provider", "AWS"), ("region", "eu-west-1")]),
            sample_remote("nas", "sftp", &[("host", "nas.local")]),
        ];

        let table = remotes_table(&remotes);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("NAME    TYPE  DETAILS"));
        assert_eq!(lines[1], "photos  S3    Provider: AWS, Region: eu-west-1");
        assert_eq!(lines[2], "nas     SFTP  Host: nas.local");
    }

    #[test]
    fn test_remotes_table_marks_detail_errors() {
        let remotes = vec![RemoteConfig::unknown("broken", Some("timeout".into()))];
        let table = remotes_table(&remotes);

        assert!(table.contains("broken  unknown  details unavailable: timeout"));
    }

    #[test]
    fn test_remotes_table_empty() {
        assert_eq!(remotes_table(&[]), "No remotes configured yet");
    }

    #[test]
    fn test_remotes_json_uses_wire_names() {
        let json = remotes_json(&[sample_remote("a", "s3", &[])]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["id"], "a");
        assert_eq!(value[0]["type"], "s3");
        assert!(value[0]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_providers_json_pretty_prints_catalog() {
        let fake = FakeRemoteApi::default();

        let json = providers_json(&fake, None).await.unwrap();

        assert_eq!(json, "[]");
        assert_eq!(fake.calls(), vec!["providers"]);
    }

    #[tokio::test]
    async fn test_providers_json_unknown_type_is_validation_error() {
        let fake = FakeRemoteApi::default();

        let err = providers_json(&fake, Some("gcs")).await.unwrap_err();

        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("'gcs'"));
        assert_eq!(fake.calls(), vec!["options:gcs"]);
    }

    #[tokio::test]
    async fn test_remote_json_fetches_one_record() {
        let fake = FakeRemoteApi::with_remotes(vec![
            sample_remote("a", "s3", &[("region", "x")]),
            sample_remote("b", "ftp", &[]),
        ]);

        let json = remote_json(&fake, "b").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["name"], "b");
        assert_eq!(value["type"], "ftp");
        assert_eq!(fake.calls(), vec!["get:b"]);
        assert!(remote_json(&fake, "missing").await.is_err());
    }
}
