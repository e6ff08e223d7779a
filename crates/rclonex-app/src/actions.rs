//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every RC call runs in its own tokio task and reports back with a
//! completion message. Nothing here touches `AppState`.

use tokio::sync::mpsc;

use rclonex_core::prelude::*;
use rclonex_daemon::{RemoteApi, Session, SessionStore};

use crate::message::{Message, TaskFailure};
use crate::UpdateAction;

/// What background tasks need: the remote API and the session store it
/// authenticates with.
#[derive(Debug, Clone)]
pub struct Services<S> {
    pub api: S,
    pub session: SessionStore,
}

impl<S> Services<S>
where
    S: RemoteApi + Clone + Send + Sync + 'static,
{
    pub fn new(api: S, session: SessionStore) -> Self {
        Self { api, session }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<S>)
where
    S: RemoteApi + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::Login {
            url,
            user,
            password,
        } => {
            let services = services.clone();
            tokio::spawn(async move {
                let result = login(&services, &url, &user, &password)
                    .await
                    .map_err(TaskFailure::from);
                let _ = msg_tx.send(Message::LoginCompleted { result }).await;
            });
        }

        UpdateAction::Logout => {
            services.session.clear();
        }

        UpdateAction::LoadRemotes { epoch } => {
            let api = services.api.clone();
            tokio::spawn(async move {
                let result = api.list_remotes().await.map_err(|e| {
                    warn!("Listing remotes failed: {}", e);
                    TaskFailure::from(e)
                });
                let _ = msg_tx.send(Message::RemotesLoaded { epoch, result }).await;
            });
        }

        UpdateAction::CreateRemote { epoch, draft } => {
            let api = services.api.clone();
            tokio::spawn(async move {
                let result = api.create_remote(&draft).await.map_err(TaskFailure::from);
                let _ = msg_tx
                    .send(Message::RemoteSaved {
                        epoch,
                        name: draft.name,
                        created: true,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::UpdateRemote {
            epoch,
            existing,
            draft,
        } => {
            let api = services.api.clone();
            tokio::spawn(async move {
                let result = api
                    .update_remote(&existing, &draft)
                    .await
                    .map_err(TaskFailure::from);
                let _ = msg_tx
                    .send(Message::RemoteSaved {
                        epoch,
                        name: existing.name,
                        created: false,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::DeleteRemote { epoch, name } => {
            let api = services.api.clone();
            tokio::spawn(async move {
                let result = api.delete_remote(&name).await.map_err(TaskFailure::from);
                let _ = msg_tx
                    .send(Message::RemoteDeleted {
                        epoch,
                        name,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::TestRemote { epoch, name } => {
            let api = services.api.clone();
            tokio::spawn(async move {
                let reachable = api.test_remote(&name).await;
                let _ = msg_tx
                    .send(Message::RemoteTested {
                        epoch,
                        name,
                        reachable,
                    })
                    .await;
            });
        }
    }
}

/// Store the session, then probe the daemon with it. A failed probe puts
/// back whatever session was stored before.
///
/// Shared by the login screen and `rclonex login`.
pub async fn login<S: RemoteApi>(
    services: &Services<S>,
    url: &str,
    user: &str,
    password: &str,
) -> Result<Session> {
    let session = Session::from_login(url, user, password)?;
    let previous = services.session.current();
    services.session.set(session.clone())?;

    match services.api.list_names().await {
        Ok(names) => {
            debug!("Login probe listed {} remotes", names.len());
            Ok(session)
        }
        Err(e) => {
            restore_session(&services.session, previous);
            Err(e)
        }
    }
}

fn restore_session(store: &SessionStore, previous: Option<Session>) {
    let Some(previous) = previous else {
        store.clear();
        return;
    };
    if let Err(e) = store.set(previous) {
        warn!("Could not restore the previous session: {}", e);
        store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rclonex_core::RemoteDraft;
    use rclonex_daemon::test_utils::{sample_remote, FakeFailure, FakeRemoteApi};

    fn services(fake: &FakeRemoteApi) -> Services<FakeRemoteApi> {
        Services::new(fake.clone(), SessionStore::in_memory())
    }

    async fn run(action: UpdateAction, services: &Services<FakeRemoteApi>) -> Message {
        let (tx, mut rx) = mpsc::channel(4);
        handle_action(action, tx, services);
        rx.recv().await.expect("action should report back")
    }

    #[tokio::test]
    async fn test_login_stores_session_on_success() {
        let fake = FakeRemoteApi::default();
        let services = services(&fake);

        let msg = run(
            UpdateAction::Login {
                url: "http://localhost:5572".into(),
                user: "admin".into(),
                password: "secret".into(),
            },
            &services,
        )
        .await;

        match msg {
            Message::LoginCompleted { result: Ok(session) } => {
                assert_eq!(session.display_name(), "admin");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(services.session.is_authenticated());
        assert_eq!(fake.calls(), vec!["names"]);
    }

    #[tokio::test]
    async fn test_login_failure_clears_session() {
        let fake = FakeRemoteApi::default();
        fake.fail_list(FakeFailure::Unauthorized);
        let services = services(&fake);

        let msg = run(
            UpdateAction::Login {
                url: "http://localhost:5572".into(),
                user: "admin".into(),
                password: "wrong".into(),
            },
            &services,
        )
        .await;

        assert!(matches!(
            msg,
            Message::LoginCompleted {
                result: Err(TaskFailure::Auth)
            }
        ));
        assert!(!services.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_failed_relogin_keeps_previous_session() {
        let fake = FakeRemoteApi::default();
        let store = rclonex_daemon::test_utils::logged_in_store("http://h:5572");
        let before = store.current();
        let services = Services::new(fake.clone(), store.clone());
        fake.fail_list(FakeFailure::Daemon("connection refused".into()));

        let result = login(&services, "http://other:5572", "admin", "x").await;

        assert!(result.is_err());
        assert!(store.is_authenticated());
        assert_eq!(store.current(), before);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_url_without_probe() {
        let fake = FakeRemoteApi::default();
        let services = services(&fake);

        let msg = run(
            UpdateAction::Login {
                url: "not a url".into(),
                user: "u".into(),
                password: "p".into(),
            },
            &services,
        )
        .await;

        assert!(matches!(
            msg,
            Message::LoginCompleted {
                result: Err(TaskFailure::Failed(_))
            }
        ));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_load_remotes_reports_epoch() {
        let fake = FakeRemoteApi::with_remotes(vec![sample_remote("a", "s3", &[])]);
        let msg = run(UpdateAction::LoadRemotes { epoch: 7 }, &services(&fake)).await;

        match msg {
            Message::RemotesLoaded {
                epoch,
                result: Ok(remotes),
            } => {
                assert_eq!(epoch, 7);
                assert_eq!(remotes.len(), 1);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_remote_reports_daemon_error() {
        let fake = FakeRemoteApi::default();
        fake.fail_writes(FakeFailure::Daemon("bad config".into()));
        let draft = RemoteDraft {
            name: "n".into(),
            provider_type: "s3".into(),
            parameters: Default::default(),
        };

        let msg = run(UpdateAction::CreateRemote { epoch: 1, draft }, &services(&fake)).await;

        match msg {
            Message::RemoteSaved {
                name,
                created,
                result: Err(TaskFailure::Failed(message)),
                ..
            } => {
                assert_eq!(name, "n");
                assert!(created);
                assert!(message.contains("bad config"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_remote_sends_update() {
        let existing = sample_remote("a", "ftp", &[("host", "h")]);
        let fake = FakeRemoteApi::with_remotes(vec![existing.clone()]);
        let draft = RemoteDraft {
            name: "a".into(),
            provider_type: "ftp".into(),
            parameters: existing.editable_parameters(),
        };

        let msg = run(
            UpdateAction::UpdateRemote {
                epoch: 1,
                existing: Box::new(existing),
                draft,
            },
            &services(&fake),
        )
        .await;

        assert!(matches!(
            msg,
            Message::RemoteSaved {
                created: false,
                result: Ok(()),
                ..
            }
        ));
        assert_eq!(fake.calls(), vec!["update:a"]);
    }

    #[tokio::test]
    async fn test_delete_and_test_remote() {
        let fake = FakeRemoteApi::with_remotes(vec![sample_remote("a", "s3", &[])]);
        fake.set_reachable("a", false);
        let services = services(&fake);

        let msg = run(UpdateAction::TestRemote { epoch: 2, name: "a".into() }, &services).await;
        assert!(matches!(
            msg,
            Message::RemoteTested {
                reachable: false,
                ..
            }
        ));

        let msg = run(UpdateAction::DeleteRemote { epoch: 2, name: "a".into() }, &services).await;
        assert!(matches!(msg, Message::RemoteDeleted { result: Ok(()), .. }));
        assert!(fake.remotes().is_empty());
    }

    #[test]
    fn test_logout_clears_store() {
        let store = rclonex_daemon::test_utils::logged_in_store("http://h:1");
        let services = Services::new(FakeRemoteApi::default(), store.clone());
        let (tx, _rx) = mpsc::channel(1);

        handle_action(UpdateAction::Logout, tx, &services);

        assert!(!store.is_authenticated());
    }
}
