//! Configuration module for rclonex
//!
//! Handles loading and saving of:
//! - `config.toml` - Global settings (daemon timeouts, UI preferences)
//!
//! The session file lives next to it but is owned by `rclonex_daemon::SessionStore`.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, CONFIG_FILENAME};
pub use types::{DaemonSettings, Settings, UiSettings};
