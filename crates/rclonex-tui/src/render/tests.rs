//! Full-screen rendering tests for each UI mode

use super::view;
use crate::test_utils::{console_state, login_state, TestTerminal};
use chrono::Local;
use rclonex_app::confirm_dialog::ConfirmDialogState;
use rclonex_app::remote_form::RemoteFormState;
use rclonex_app::state::{AppState, Page, UiMode};
use rclonex_daemon::test_utils::sample_remote;

fn render_screen(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

fn with_remotes() -> AppState {
    let mut state = console_state();
    state.remotes = vec![
        sample_remote("photos", "s3", &[("provider", "AWS"), ("region", "eu-west-1")]),
        sample_remote("nas", "sftp", &[("host", "nas.local")]),
    ];
    state.loaded_at = Some(Local::now());
    state
}

#[test]
fn test_login_screen_without_session() {
    let term = render_screen(&login_state());

    assert!(term.buffer_contains("Connect to an rclone remote-control daemon"));
    assert!(term.buffer_contains("http://localhost:5572"));
    assert!(!term.buffer_contains("Dashboard"));
}

#[test]
fn test_login_screen_shows_toasts() {
    let mut state = login_state();
    state.toasts.error("Login failed: nope");

    let term = render_screen(&state);

    assert!(term.buffer_contains("Login failed: nope"));
}

#[test]
fn test_dashboard_page() {
    let term = render_screen(&with_remotes());

    assert!(term.buffer_contains("1 Dashboard"));
    assert!(term.buffer_contains("Connection"));
    assert!(term.buffer_contains("Remotes by type"));
    assert!(term.buffer_contains("SFTP"));
    assert!(term.buffer_contains("L logout"));
}

#[test]
fn test_remotes_page() {
    let mut state = with_remotes();
    state.page = Page::Remotes;

    let term = render_screen(&state);

    assert!(term.buffer_contains("Remotes (2)"));
    assert!(term.buffer_contains("photos"));
    assert!(term.buffer_contains("Provider: AWS · Region: eu-west-1"));
    assert!(term.buffer_contains("Host: nas.local"));
    assert!(term.buffer_contains("d delete"));
}

#[test]
fn test_form_overlay() {
    let mut state = with_remotes();
    state.page = Page::Remotes;
    state.remote_form = Some(RemoteFormState::new_add());
    state.ui_mode = UiMode::RemoteForm;

    let term = render_screen(&state);

    assert!(term.buffer_contains("Add remote"));
    assert!(term.buffer_contains("Esc cancel"));
}

#[test]
fn test_confirm_overlay() {
    let mut state = with_remotes();
    state.page = Page::Remotes;
    state.confirm_dialog = Some(ConfirmDialogState::delete_remote("photos"));
    state.ui_mode = UiMode::ConfirmDialog;

    let term = render_screen(&state);

    assert!(term.buffer_contains("Delete remote?"));
    assert!(term.buffer_contains("[y] Delete"));
}

#[test]
fn test_toast_over_console() {
    let mut state = with_remotes();
    state.toasts.success("Loaded 2 remotes");

    let term = render_screen(&state);

    assert!(term.buffer_contains("✓ Loaded 2 remotes"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut state = with_remotes();
    state.page = Page::Remotes;
    state.remote_form = Some(RemoteFormState::new_add());
    state.ui_mode = UiMode::RemoteForm;
    state.toasts.info("hello");

    let mut term = TestTerminal::with_size(12, 5);
    term.draw_with(|frame| view(frame, &state));

    let mut term = TestTerminal::with_size(12, 5);
    term.draw_with(|frame| view(frame, &login_state()));
}
