//! Message types for the application (TEA pattern)

use rclonex_core::{Error, RemoteConfig};
use rclonex_daemon::Session;

use crate::input_key::InputKey;
use crate::state::Page;

/// Outcome of a failed background call, as seen by the update function.
///
/// Auth failures are kept apart because they send the user back to the
/// login screen instead of raising an error toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFailure {
    /// No session, or the daemon answered 401
    Auth,
    /// Anything else, carrying the message shown to the user
    Failed(String),
}

impl TaskFailure {
    pub fn message(&self) -> &str {
        match self {
            TaskFailure::Auth => "Session expired, please log in again",
            TaskFailure::Failed(message) => message,
        }
    }
}

impl From<Error> for TaskFailure {
    fn from(e: Error) -> Self {
        if e.is_auth_failure() {
            TaskFailure::Auth
        } else {
            TaskFailure::Failed(e.to_string())
        }
    }
}

/// Result type carried by completion messages
pub type TaskResult<T> = std::result::Result<T, TaskFailure>;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Switch to a page
    ShowPage(Page),
    /// Cycle to the next page
    NextPage,
    /// Move the remote selection down
    SelectNext,
    /// Move the remote selection up
    SelectPrevious,

    // ─────────────────────────────────────────────────────────
    // Login
    // ─────────────────────────────────────────────────────────
    LoginInput(char),
    LoginBackspace,
    LoginNextField,
    LoginPreviousField,
    /// Probe the daemon with the entered URL and credential
    SubmitLogin,
    /// Probe finished; `Ok` carries the session that was stored
    LoginCompleted { result: TaskResult<Session> },
    /// Clear the session and return to the login screen
    Logout,

    // ─────────────────────────────────────────────────────────
    // Remote list
    // ─────────────────────────────────────────────────────────
    /// Fetch the remote list (ignored while a fetch is in flight)
    ReloadRemotes,
    RemotesLoaded {
        epoch: u64,
        result: TaskResult<Vec<RemoteConfig>>,
    },

    // ─────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Keep the query and return to the list
    ConfirmSearch,
    /// Drop the query and return to the list
    ClearSearch,

    // ─────────────────────────────────────────────────────────
    // Remote form
    // ─────────────────────────────────────────────────────────
    OpenAddForm,
    /// Edit the selected remote
    OpenEditForm,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPreviousField,
    /// Cycle the focused choice (or the type selector)
    FormCycleChoice { forward: bool },
    SubmitForm,
    CancelForm,
    RemoteSaved {
        epoch: u64,
        name: String,
        created: bool,
        result: TaskResult<()>,
    },

    // ─────────────────────────────────────────────────────────
    // Delete / test
    // ─────────────────────────────────────────────────────────
    /// Ask for confirmation before deleting the selected remote
    RequestDelete,
    ConfirmDelete { name: String },
    /// Close whatever dialog is open
    CancelDialog,
    RemoteDeleted {
        epoch: u64,
        name: String,
        result: TaskResult<()>,
    },
    /// Test the selected remote's connection
    TestSelected,
    RemoteTested {
        epoch: u64,
        name: String,
        reachable: bool,
    },
}
