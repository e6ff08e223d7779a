//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Page, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Login => handle_key_login(state, key),
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::SearchInput => handle_key_search_input(key),
        UiMode::RemoteForm => handle_key_remote_form(state, key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(state, key),
    }
}

fn handle_key_login(state: &AppState, key: InputKey) -> Option<Message> {
    if state.login.submitting {
        return None;
    }

    match key {
        InputKey::Esc => Some(Message::Quit),
        InputKey::Tab | InputKey::Down => Some(Message::LoginNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::LoginPreviousField),
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Pages
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::NextPage),
        InputKey::Char('1') => Some(Message::ShowPage(Page::Dashboard)),
        InputKey::Char('2') => Some(Message::ShowPage(Page::Remotes)),

        // ─────────────────────────────────────────────────────────
        // Global actions
        // ─────────────────────────────────────────────────────────
        InputKey::Char('r') => Some(Message::ReloadRemotes),
        InputKey::Char('a') => Some(Message::OpenAddForm),
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('L') => Some(Message::Logout),

        _ if state.page == Page::Remotes => handle_key_remote_list(state, key),
        _ => None,
    }
}

/// Keys that act on the selected remote
fn handle_key_remote_list(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('j') | InputKey::Down => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('e') | InputKey::Enter => Some(Message::OpenEditForm),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDelete),
        InputKey::Char('t') => Some(Message::TestSelected),
        InputKey::Esc if !state.search_query.is_empty() => Some(Message::ClearSearch),
        _ => None,
    }
}

/// Handle key events in search input mode
fn handle_key_search_input(key: InputKey) -> Option<Message> {
    match key {
        // Drop the query
        InputKey::Esc => Some(Message::ClearSearch),

        // Keep query, exit input mode
        InputKey::Enter => Some(Message::ConfirmSearch),

        InputKey::Backspace => Some(Message::SearchBackspace),
        InputKey::Down => Some(Message::SelectNext),
        InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char(c) => Some(Message::SearchInput(c)),
        _ => None,
    }
}

fn handle_key_remote_form(state: &AppState, key: InputKey) -> Option<Message> {
    if state.remote_form.as_ref().is_some_and(|f| f.saving) {
        return None;
    }

    match key {
        InputKey::Esc => Some(Message::CancelForm),
        InputKey::Enter => Some(Message::SubmitForm),
        InputKey::Tab | InputKey::Down => Some(Message::FormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::FormPreviousField),
        InputKey::Left => Some(Message::FormCycleChoice { forward: false }),
        InputKey::Right => Some(Message::FormCycleChoice { forward: true }),
        InputKey::Backspace => Some(Message::FormBackspace),
        InputKey::Char(c) => Some(Message::FormInput(c)),
        _ => None,
    }
}

fn handle_key_confirm_dialog(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => state
            .confirm_dialog
            .as_ref()
            .and_then(|dialog| dialog.confirm_message()),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDialog),
        _ => None,
    }
}
