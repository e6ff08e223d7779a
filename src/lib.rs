//! rclonex - a terminal console for an rclone remote-control daemon
//!
//! The binary either runs the TUI from `rclonex-tui` or one of the
//! non-interactive commands in [`commands`]. Both share the wiring in
//! [`Context`]: settings, the session store and the remote service.

pub mod commands;

pub use commands::Context;
