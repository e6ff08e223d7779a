//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, login, remotes, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.toasts.prune(Instant::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::ShowPage(page) => remotes::handle_show_page(state, page),
        Message::NextPage => {
            let page = state.page.next();
            remotes::handle_show_page(state, page)
        }
        Message::SelectNext => remotes::handle_select_next(state),
        Message::SelectPrevious => remotes::handle_select_previous(state),

        // ─────────────────────────────────────────────────────────
        // Login
        // ─────────────────────────────────────────────────────────
        Message::LoginInput(c) => login::handle_login_input(state, c),
        Message::LoginBackspace => login::handle_login_backspace(state),
        Message::LoginNextField => login::handle_login_next_field(state),
        Message::LoginPreviousField => login::handle_login_previous_field(state),
        Message::SubmitLogin => login::handle_submit_login(state),
        Message::LoginCompleted { result } => login::handle_login_completed(state, result),
        Message::Logout => login::handle_logout(state),

        // ─────────────────────────────────────────────────────────
        // Remote list
        // ─────────────────────────────────────────────────────────
        Message::ReloadRemotes => remotes::handle_reload(state),
        Message::RemotesLoaded { epoch, result } => {
            remotes::handle_remotes_loaded(state, epoch, result)
        }

        // ─────────────────────────────────────────────────────────
        // Search
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => remotes::handle_start_search(state),
        Message::SearchInput(c) => remotes::handle_search_input(state, c),
        Message::SearchBackspace => remotes::handle_search_backspace(state),
        Message::ConfirmSearch => remotes::handle_confirm_search(state),
        Message::ClearSearch => remotes::handle_clear_search(state),

        // ─────────────────────────────────────────────────────────
        // Remote form
        // ─────────────────────────────────────────────────────────
        Message::OpenAddForm => remotes::handle_open_add_form(state),
        Message::OpenEditForm => remotes::handle_open_edit_form(state),
        Message::FormInput(c) => remotes::handle_form_input(state, c),
        Message::FormBackspace => remotes::handle_form_backspace(state),
        Message::FormNextField => remotes::handle_form_next_field(state),
        Message::FormPreviousField => remotes::handle_form_previous_field(state),
        Message::FormCycleChoice { forward } => remotes::handle_form_cycle_choice(state, forward),
        Message::SubmitForm => remotes::handle_submit_form(state),
        Message::CancelForm => remotes::handle_cancel_form(state),
        Message::RemoteSaved {
            epoch,
            name,
            created,
            result,
        } => remotes::handle_remote_saved(state, epoch, name, created, result),

        // ─────────────────────────────────────────────────────────
        // Delete / test
        // ─────────────────────────────────────────────────────────
        Message::RequestDelete => remotes::handle_request_delete(state),
        Message::ConfirmDelete { name } => remotes::handle_confirm_delete(state, name),
        Message::CancelDialog => remotes::handle_cancel_dialog(state),
        Message::RemoteDeleted {
            epoch,
            name,
            result,
        } => remotes::handle_remote_deleted(state, epoch, name, result),
        Message::TestSelected => remotes::handle_test_selected(state),
        Message::RemoteTested {
            epoch,
            name,
            reachable,
        } => remotes::handle_remote_tested(state, epoch, name, reachable),
    }
}
