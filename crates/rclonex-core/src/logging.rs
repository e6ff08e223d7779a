//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_PREFIX: &str = "rclonex.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/rclonex/logs/` because the TUI owns
/// stdout. Log level is controlled by the `RCLONEX_LOG` environment variable.
///
/// # Examples
/// ```bash
/// RCLONEX_LOG=debug rclonex
/// RCLONEX_LOG=rclonex_daemon=trace rclonex remotes
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    // Default to info for our crates, allow override via RCLONEX_LOG
    let env_filter = EnvFilter::try_from_env("RCLONEX_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("rclonex starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn default_filter() -> &'static str {
    "rclonex=info,rclonex_core=info,rclonex_daemon=info,rclonex_app=info,rclonex_tui=info,warn"
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("rclonex").join("logs")
}
