//! Remote list, form, delete and test handlers
//!
//! Local state only changes after the daemon confirms a write: every
//! successful create, update or delete is followed by a full reload.

use chrono::Local;

use rclonex_core::prelude::*;
use rclonex_core::RemoteConfig;

use crate::confirm_dialog::ConfirmDialogState;
use crate::message::{Message, TaskFailure, TaskResult};
use crate::remote_form::{FormMode, RemoteFormState};
use crate::state::{AppState, Page, UiMode};

use super::login::handle_auth_failure;
use super::{UpdateAction, UpdateResult};

/// Results from an older session epoch are dropped.
fn is_stale(state: &AppState, epoch: u64) -> bool {
    if epoch != state.session_epoch {
        debug!(
            "Dropping result from epoch {} (current {})",
            epoch, state.session_epoch
        );
        return true;
    }
    false
}

// ─────────────────────────────────────────────────────────────────
// List
// ─────────────────────────────────────────────────────────────────

pub fn handle_reload(state: &mut AppState) -> UpdateResult {
    if !state.is_logged_in() {
        return UpdateResult::none();
    }
    if state.loading {
        debug!("Reload ignored: a fetch is already in flight");
        return UpdateResult::none();
    }

    state.loading = true;
    UpdateResult::action(UpdateAction::LoadRemotes {
        epoch: state.session_epoch,
    })
}

pub fn handle_remotes_loaded(
    state: &mut AppState,
    epoch: u64,
    result: TaskResult<Vec<RemoteConfig>>,
) -> UpdateResult {
    if is_stale(state, epoch) {
        return UpdateResult::none();
    }
    state.loading = false;

    match result {
        Ok(remotes) => {
            let count = remotes.len();
            state.remotes = remotes;
            state.loaded_at = Some(Local::now());
            state.clamp_selection();
            if count == 0 {
                state.toasts.info("No remotes configured yet");
            } else {
                state.toasts.success(format!("Loaded {count} remotes"));
            }
            UpdateResult::none()
        }
        Err(TaskFailure::Auth) => handle_auth_failure(state),
        Err(TaskFailure::Failed(message)) => {
            state
                .toasts
                .error(format!("Failed to load remotes: {message}"));
            UpdateResult::none()
        }
    }
}

pub fn handle_show_page(state: &mut AppState, page: Page) -> UpdateResult {
    state.page = page;
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    state.select_next();
    UpdateResult::none()
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    state.select_previous();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────

pub fn handle_start_search(state: &mut AppState) -> UpdateResult {
    state.page = Page::Remotes;
    state.ui_mode = UiMode::SearchInput;
    UpdateResult::none()
}

pub fn handle_search_input(state: &mut AppState, c: char) -> UpdateResult {
    state.search_query.push(c);
    state.selected = 0;
    UpdateResult::none()
}

pub fn handle_search_backspace(state: &mut AppState) -> UpdateResult {
    state.search_query.pop();
    state.clamp_selection();
    UpdateResult::none()
}

pub fn handle_confirm_search(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_clear_search(state: &mut AppState) -> UpdateResult {
    state.search_query.clear();
    state.ui_mode = UiMode::Normal;
    state.clamp_selection();
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────────────

pub fn handle_open_add_form(state: &mut AppState) -> UpdateResult {
    state.page = Page::Remotes;
    state.remote_form = Some(RemoteFormState::new_add());
    state.ui_mode = UiMode::RemoteForm;
    UpdateResult::none()
}

pub fn handle_open_edit_form(state: &mut AppState) -> UpdateResult {
    let Some(remote) = state.selected_remote() else {
        return UpdateResult::none();
    };
    if remote.detail_error.is_some() {
        let message = format!(
            "Details for '{}' are unavailable; reload before editing",
            remote.name
        );
        state.toasts.error(message);
        return UpdateResult::none();
    }
    let form = RemoteFormState::new_edit(remote);
    state.remote_form = Some(form);
    state.ui_mode = UiMode::RemoteForm;
    UpdateResult::none()
}

/// Apply `f` to the open form, if any
fn with_form(state: &mut AppState, f: impl FnOnce(&mut RemoteFormState)) -> UpdateResult {
    if let Some(form) = state.remote_form.as_mut() {
        f(form);
    }
    UpdateResult::none()
}

pub fn handle_form_input(state: &mut AppState, c: char) -> UpdateResult {
    with_form(state, |form| form.input_char(c))
}

pub fn handle_form_backspace(state: &mut AppState) -> UpdateResult {
    with_form(state, RemoteFormState::backspace)
}

pub fn handle_form_next_field(state: &mut AppState) -> UpdateResult {
    with_form(state, RemoteFormState::focus_next)
}

pub fn handle_form_previous_field(state: &mut AppState) -> UpdateResult {
    with_form(state, RemoteFormState::focus_previous)
}

pub fn handle_form_cycle_choice(state: &mut AppState, forward: bool) -> UpdateResult {
    with_form(state, |form| form.cycle_choice(forward))
}

pub fn handle_cancel_form(state: &mut AppState) -> UpdateResult {
    state.remote_form = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_submit_form(state: &mut AppState) -> UpdateResult {
    let epoch = state.session_epoch;
    let Some(form) = state.remote_form.as_mut() else {
        return UpdateResult::none();
    };
    if form.saving {
        return UpdateResult::none();
    }

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(message) => {
            form.error = Some(message);
            return UpdateResult::none();
        }
    };

    let action = match &form.mode {
        FormMode::Add => UpdateAction::CreateRemote { epoch, draft },
        FormMode::Edit { original } => {
            if draft.changes_identity_of(original) {
                form.error = Some(
                    "A remote's name and type cannot be changed; delete it and create a new one"
                        .to_string(),
                );
                return UpdateResult::none();
            }
            UpdateAction::UpdateRemote {
                epoch,
                existing: Box::new(original.clone()),
                draft,
            }
        }
    };

    form.saving = true;
    form.error = None;
    UpdateResult::action(action)
}

pub fn handle_remote_saved(
    state: &mut AppState,
    epoch: u64,
    name: String,
    created: bool,
    result: TaskResult<()>,
) -> UpdateResult {
    if is_stale(state, epoch) {
        return UpdateResult::none();
    }

    match result {
        Ok(()) => {
            let verb = if created { "created" } else { "updated" };
            info!("Remote '{}' {}", name, verb);
            state.toasts.success(format!("Remote '{name}' {verb}"));
            state.remote_form = None;
            if state.ui_mode == UiMode::RemoteForm {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::message(Message::ReloadRemotes)
        }
        Err(TaskFailure::Auth) => handle_auth_failure(state),
        Err(TaskFailure::Failed(message)) => {
            let verb = if created { "create" } else { "update" };
            state
                .toasts
                .error(format!("Failed to {verb} remote: {message}"));
            if let Some(form) = state.remote_form.as_mut() {
                form.saving = false;
                form.error = Some(message);
            }
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────

pub fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    if state.deleting.is_some() {
        return UpdateResult::none();
    }
    let Some(dialog) = state
        .selected_remote()
        .map(|remote| ConfirmDialogState::delete_remote(&remote.name))
    else {
        return UpdateResult::none();
    };
    state.confirm_dialog = Some(dialog);
    state.ui_mode = UiMode::ConfirmDialog;
    UpdateResult::none()
}

pub fn handle_cancel_dialog(state: &mut AppState) -> UpdateResult {
    state.confirm_dialog = None;
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

pub fn handle_confirm_delete(state: &mut AppState, name: String) -> UpdateResult {
    state.confirm_dialog = None;
    state.ui_mode = UiMode::Normal;
    if state.deleting.is_some() {
        return UpdateResult::none();
    }

    state.deleting = Some(name.clone());
    UpdateResult::action(UpdateAction::DeleteRemote {
        epoch: state.session_epoch,
        name,
    })
}

pub fn handle_remote_deleted(
    state: &mut AppState,
    epoch: u64,
    name: String,
    result: TaskResult<()>,
) -> UpdateResult {
    if is_stale(state, epoch) {
        return UpdateResult::none();
    }
    state.deleting = None;

    match result {
        Ok(()) => {
            info!("Remote '{}' deleted", name);
            state.toasts.success(format!("Remote '{name}' deleted"));
            UpdateResult::message(Message::ReloadRemotes)
        }
        Err(TaskFailure::Auth) => handle_auth_failure(state),
        Err(TaskFailure::Failed(message)) => {
            state
                .toasts
                .error(format!("Failed to delete '{name}': {message}"));
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Connection test
// ─────────────────────────────────────────────────────────────────

pub fn handle_test_selected(state: &mut AppState) -> UpdateResult {
    if state.testing.is_some() {
        return UpdateResult::none();
    }
    let Some(name) = state.selected_remote().map(|r| r.name.clone()) else {
        return UpdateResult::none();
    };

    state.testing = Some(name.clone());
    state.toasts.info(format!("Testing '{name}'..."));
    UpdateResult::action(UpdateAction::TestRemote {
        epoch: state.session_epoch,
        name,
    })
}

pub fn handle_remote_tested(
    state: &mut AppState,
    epoch: u64,
    name: String,
    reachable: bool,
) -> UpdateResult {
    if is_stale(state, epoch) {
        return UpdateResult::none();
    }
    state.testing = None;

    if reachable {
        state.toasts.success(format!("'{name}' is reachable"));
    } else {
        state.toasts.error(format!("Could not reach '{name}'"));
    }
    UpdateResult::none()
}
