//! Location of the console's own files (settings and session).

use std::path::PathBuf;

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "RCLONEX_CONFIG_DIR";

const APP_DIR: &str = "rclonex";

/// Directory holding `config.toml` and `session.toml`.
///
/// `$RCLONEX_CONFIG_DIR` wins when set and non-empty, otherwise
/// `<platform config dir>/rclonex`.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
