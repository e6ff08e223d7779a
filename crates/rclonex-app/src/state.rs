//! Application state (Model in TEA pattern)

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use rclonex_core::{filter_remotes, RemoteConfig};
use rclonex_daemon::Session;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::login_form::LoginFormState;
use crate::remote_form::RemoteFormState;
use crate::toast::Toasts;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// No session: only the login form is shown
    #[default]
    Login,

    /// Console with the page tabs
    Normal,

    /// Capturing text for the remote search
    SearchInput,

    /// Add/edit remote modal
    RemoteForm,

    /// Confirmation dialog (delete)
    ConfirmDialog,
}

/// Console page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Remotes,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::Remotes];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Remotes => "Remotes",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Page::Dashboard => Page::Remotes,
            Page::Remotes => Page::Dashboard,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub ui_mode: UiMode,
    pub page: Page,
    pub settings: Settings,

    /// Snapshot of the logged-in session (URL and display user)
    pub session: Option<Session>,
    /// Bumped on every login and logout. Background results tagged with an
    /// older epoch are dropped.
    pub session_epoch: u64,
    pub login: LoginFormState,

    /// Remotes in daemon listing order
    pub remotes: Vec<RemoteConfig>,
    /// When `remotes` was last replaced
    pub loaded_at: Option<DateTime<Local>>,
    /// A list fetch is in flight
    pub loading: bool,

    pub search_query: String,
    /// Index into [`AppState::visible_remotes`]
    pub selected: usize,

    pub remote_form: Option<RemoteFormState>,
    pub confirm_dialog: Option<ConfirmDialogState>,
    /// Remote whose delete call is in flight
    pub deleting: Option<String>,
    /// Remote whose connection test is in flight
    pub testing: Option<String>,

    pub toasts: Toasts,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: Settings, session: Option<Session>) -> Self {
        let login = LoginFormState::with_url(settings.daemon.default_url.clone());
        let toasts = Toasts::new(settings.ui.toast_duration());
        let ui_mode = if session.is_some() {
            UiMode::Normal
        } else {
            UiMode::Login
        };

        Self {
            ui_mode,
            page: Page::default(),
            settings,
            session,
            session_epoch: 0,
            login,
            remotes: Vec::new(),
            loaded_at: None,
            loading: false,
            search_query: String::new(),
            selected: 0,
            remote_form: None,
            confirm_dialog: None,
            deleting: None,
            testing: None,
            toasts,
            should_quit: false,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// Remotes matching the search query, in listing order
    pub fn visible_remotes(&self) -> Vec<&RemoteConfig> {
        filter_remotes(&self.remotes, &self.search_query)
    }

    pub fn selected_remote(&self) -> Option<&RemoteConfig> {
        self.visible_remotes().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let count = self.visible_remotes().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.visible_remotes().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Keep the selection inside the visible list
    pub fn clamp_selection(&mut self) {
        let count = self.visible_remotes().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Remote count per provider type, sorted by type
    pub fn provider_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for remote in &self.remotes {
            *counts.entry(remote.provider_type.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Start a new session epoch with the given session.
    pub fn enter_console(&mut self, session: Session) {
        self.session = Some(session);
        self.session_epoch += 1;
        self.ui_mode = UiMode::Normal;
        self.page = Page::Dashboard;
        self.login.reset_secret();
        self.login.error = None;
    }

    /// Drop everything tied to the session and show the login form.
    pub fn return_to_login(&mut self) {
        self.session = None;
        self.session_epoch += 1;
        self.ui_mode = UiMode::Login;
        self.remotes.clear();
        self.loaded_at = None;
        self.loading = false;
        self.search_query.clear();
        self.selected = 0;
        self.remote_form = None;
        self.confirm_dialog = None;
        self.deleting = None;
        self.testing = None;
        self.login.reset_secret();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rclonex_daemon::test_utils::sample_remote;

    fn state_with(names: &[(&str, &str)]) -> AppState {
        let mut state = AppState::new(Settings::default(), None);
        state.remotes = names
            .iter()
            .map(|(name, t)| sample_remote(name, t, &[]))
            .collect();
        state
    }

    #[test]
    fn test_new_without_session_starts_at_login() {
        let state = AppState::new(Settings::default(), None);
        assert_eq!(state.ui_mode, UiMode::Login);
        assert_eq!(state.login.url, "http://localhost:5572");
    }

    #[test]
    fn test_new_with_session_starts_in_console() {
        let session = Session::from_login("http://h:1", "u", "p").unwrap();
        let state = AppState::new(Settings::default(), Some(session));
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.is_logged_in());
    }

    #[test]
    fn test_selection_follows_filter() {
        let mut state = state_with(&[("a", "s3"), ("b", "ftp"), ("c", "s3")]);
        state.search_query = "s3".into();
        state.select_next();
        assert_eq!(state.selected_remote().map(|r| r.name.as_str()), Some("c"));
        state.select_next();
        assert_eq!(state.selected_remote().map(|r| r.name.as_str()), Some("a"));
        state.select_previous();
        assert_eq!(state.selected_remote().map(|r| r.name.as_str()), Some("c"));
    }

    #[test]
    fn test_clamp_selection() {
        let mut state = state_with(&[("a", "s3"), ("b", "ftp")]);
        state.selected = 5;
        state.clamp_selection();
        assert_eq!(state.selected, 1);

        state.remotes.clear();
        state.clamp_selection();
        assert_eq!(state.selected, 0);
        assert!(state.selected_remote().is_none());
    }

    #[test]
    fn test_provider_counts() {
        let state = state_with(&[("a", "s3"), ("b", "ftp"), ("c", "s3")]);
        let counts = state.provider_counts();
        assert_eq!(counts.get("s3"), Some(&2));
        assert_eq!(counts.get("ftp"), Some(&1));
    }

    #[test]
    fn test_return_to_login_bumps_epoch_and_clears() {
        let mut state = state_with(&[("a", "s3")]);
        state.enter_console(Session::from_login("http://h:1", "u", "p").unwrap());
        let epoch = state.session_epoch;
        state.loading = true;

        state.return_to_login();

        assert_eq!(state.ui_mode, UiMode::Login);
        assert_eq!(state.session_epoch, epoch + 1);
        assert!(state.remotes.is_empty());
        assert!(!state.loading);
        assert!(state.session.is_none());
    }
}
