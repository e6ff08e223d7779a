//! Login, logout and auth-failure handlers

use rclonex_core::prelude::*;
use rclonex_daemon::Session;

use crate::message::{Message, TaskFailure, TaskResult};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_login_input(state: &mut AppState, c: char) -> UpdateResult {
    state.login.input_char(c);
    UpdateResult::none()
}

pub fn handle_login_backspace(state: &mut AppState) -> UpdateResult {
    state.login.backspace();
    UpdateResult::none()
}

pub fn handle_login_next_field(state: &mut AppState) -> UpdateResult {
    state.login.focus = state.login.focus.next();
    UpdateResult::none()
}

pub fn handle_login_previous_field(state: &mut AppState) -> UpdateResult {
    state.login.focus = state.login.focus.previous();
    UpdateResult::none()
}

pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    if state.login.submitting {
        return UpdateResult::none();
    }
    if state.login.url.trim().is_empty() {
        state.login.error = Some("Daemon URL is required".to_string());
        return UpdateResult::none();
    }

    state.login.submitting = true;
    state.login.error = None;
    UpdateResult::action(UpdateAction::Login {
        url: state.login.url.trim().to_string(),
        user: state.login.user.clone(),
        password: state.login.password.clone(),
    })
}

pub fn handle_login_completed(state: &mut AppState, result: TaskResult<Session>) -> UpdateResult {
    state.login.submitting = false;

    match result {
        Ok(session) => {
            info!("Logged in to {} as {}", session.base_url, session.display_name());
            state
                .toasts
                .success(format!("Connected to {}", session.base_url));
            state.enter_console(session);
            UpdateResult::message(Message::ReloadRemotes)
        }
        Err(failure) => {
            let reason = match &failure {
                TaskFailure::Auth => "the daemon rejected the credential",
                TaskFailure::Failed(message) => message.as_str(),
            };
            warn!("Login failed: {}", reason);
            state.login.error = Some(reason.to_string());
            state.login.reset_secret();
            state.toasts.error(format!("Login failed: {reason}"));
            UpdateResult::none()
        }
    }
}

pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    if !state.is_logged_in() {
        return UpdateResult::none();
    }
    info!("Logging out");
    state.return_to_login();
    state.toasts.info("Logged out");
    UpdateResult::action(UpdateAction::Logout)
}

/// A background call reported an auth failure: the session is gone.
pub fn handle_auth_failure(state: &mut AppState) -> UpdateResult {
    warn!("Session rejected by the daemon, returning to login");
    state.return_to_login();
    state.toasts.error(TaskFailure::Auth.message());
    UpdateResult::action(UpdateAction::Logout)
}
