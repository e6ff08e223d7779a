//! rclonex-app - Application state and orchestration for the rclonex console
//!
//! This crate implements the TEA (The Elm Architecture) pattern: [`AppState`]
//! is the model, [`Message`] the events, [`handler::update`] the pure state
//! transition and [`actions::handle_action`] the side effects, which run the
//! RC calls in tokio tasks and report back with messages.
//!
//! Terminal specifics stay out of this crate; keys arrive as [`InputKey`].

pub mod actions;
pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod login_form;
pub mod message;
pub mod process;
pub mod remote_form;
pub mod state;
pub mod toast;

// Re-export primary types
pub use actions::Services;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, TaskFailure};
pub use state::{AppState, Page, UiMode};
