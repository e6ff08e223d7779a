//! rclonex-tui - Terminal UI for the rclonex console
//!
//! This crate provides the ratatui-based terminal interface on top of
//! rclonex-app: terminal setup, event polling, the main loop and the widgets
//! for the login screen, the dashboard, the remote list and its modals.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
