//! Message processing
//!
//! Runs a message through the TEA update function, dispatches the resulting
//! actions and follows up messages until the chain ends.

use tokio::sync::mpsc;

use rclonex_daemon::RemoteApi;

use crate::actions::{handle_action, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<S>,
) where
    S: RemoteApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use crate::state::{Page, UiMode};
    use rclonex_daemon::test_utils::{logged_in_store, sample_remote, FakeRemoteApi};
    use rclonex_daemon::Session;

    fn logged_in_state() -> AppState {
        let session = Session::from_login("http://h:5572", "admin", "p").unwrap();
        AppState::new(Settings::default(), Some(session))
    }

    #[tokio::test]
    async fn test_key_chain_triggers_reload_and_result_lands() {
        let fake = FakeRemoteApi::with_remotes(vec![
            sample_remote("a", "s3", &[]),
            sample_remote("b", "ftp", &[]),
        ]);
        let services = Services::new(fake.clone(), logged_in_store("http://h:5572"));
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = logged_in_state();

        process_message(&mut state, Message::Key(InputKey::Char('r')), &tx, &services);
        assert!(state.loading);

        let loaded = rx.recv().await.unwrap();
        process_message(&mut state, loaded, &tx, &services);

        assert!(!state.loading);
        assert_eq!(state.remotes.len(), 2);
        assert_eq!(fake.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_delete_flow_reloads_after_confirmation() {
        let fake = FakeRemoteApi::with_remotes(vec![sample_remote("a", "s3", &[])]);
        let services = Services::new(fake.clone(), logged_in_store("http://h:5572"));
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = logged_in_state();
        state.remotes = fake.remotes();
        state.page = Page::Remotes;

        process_message(&mut state, Message::Key(InputKey::Char('d')), &tx, &services);
        assert_eq!(state.ui_mode, UiMode::ConfirmDialog);

        process_message(&mut state, Message::Key(InputKey::Char('y')), &tx, &services);
        assert_eq!(state.ui_mode, UiMode::Normal);
        // Local list is untouched until the daemon confirms
        assert_eq!(state.remotes.len(), 1);

        let deleted = rx.recv().await.unwrap();
        process_message(&mut state, deleted, &tx, &services);
        assert!(state.loading);

        let loaded = rx.recv().await.unwrap();
        process_message(&mut state, loaded, &tx, &services);
        assert!(state.remotes.is_empty());
        assert_eq!(fake.calls(), vec!["delete:a", "list"]);
    }
}
