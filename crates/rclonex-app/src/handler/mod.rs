//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `login`: Login/logout and auth-failure handling
//! - `remotes`: Remote list, form, delete and test handlers

pub(crate) mod keys;
pub(crate) mod login;
pub(crate) mod remotes;
pub(crate) mod update;


use rclonex_core::{RemoteConfig, RemoteDraft};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Store a session built from the login form and probe the daemon with it
    Login {
        url: String,
        user: String,
        password: String,
    },

    /// Clear the stored session (memory and file)
    Logout,

    /// Fetch the normalized remote list
    LoadRemotes { epoch: u64 },

    CreateRemote { epoch: u64, draft: RemoteDraft },

    UpdateRemote {
        epoch: u64,
        existing: Box<RemoteConfig>,
        draft: RemoteDraft,
    },

    DeleteRemote { epoch: u64, name: String },

    TestRemote { epoch: u64, name: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
