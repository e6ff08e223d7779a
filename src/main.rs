//! rclonex - a terminal console for an rclone remote-control daemon
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rclonex::commands::{self, Context};
use rclonex_core::paths::config_dir;
use rclonex_daemon::RemoteApi;

/// rclonex - administer an rclone remote-control daemon from the terminal
#[derive(Parser, Debug)]
#[command(name = "rclonex", version)]
#[command(about = "A terminal console for an rclone remote-control daemon", long_about = None)]
struct Args {
    /// Run one command instead of the TUI
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the credential against the daemon and store the session
    Login {
        /// Daemon base URL, e.g. http://localhost:5572
        #[arg(long)]
        url: String,
        #[arg(long, default_value = "")]
        user: String,
        #[arg(long, default_value = "")]
        pass: String,
    },
    /// Forget the stored session
    Logout,
    /// List the configured remotes
    Remotes {
        /// Print the normalized records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one remote, fetched fresh from the daemon, as JSON
    Remote { name: String },
    /// Print the daemon's provider catalog as JSON
    Providers {
        /// Only print the options of this provider type
        #[arg(long = "type", value_name = "TYPE")]
        provider_type: Option<String>,
    },
    /// Check that a remote is reachable; exits 1 when it is not
    Test { name: String },
}

#[tokio::main]
async fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    rclonex_core::logging::init()?;
    tracing::info!("rclonex {} starting", env!("CARGO_PKG_VERSION"));
    let ctx = Context::open(config_dir())?;

    let Some(command) = args.command else {
        rclonex_tui::run(ctx.services(), ctx.initial_state())?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Command::Login { url, user, pass } => {
            let session = commands::login(&ctx, &url, &user, &pass).await?;
            println!(
                "Logged in to {} as {}",
                session.base_url,
                session.display_name()
            );
        }
        Command::Logout => {
            commands::logout(&ctx);
            println!("Logged out");
        }
        Command::Remotes { json } => {
            let remotes = ctx.remotes.list_remotes().await?;
            if json {
                println!("{}", commands::remotes_json(&remotes)?);
            } else {
                println!("{}", commands::remotes_table(&remotes));
            }
        }
        Command::Remote { name } => {
            println!("{}", commands::remote_json(&ctx.remotes, &name).await?);
        }
        Command::Providers { provider_type } => {
            let json = commands::providers_json(&ctx.remotes, provider_type.as_deref()).await?;
            println!("{json}");
        }
        Command::Test { name } => {
            if ctx.remotes.test_remote(&name).await {
                println!("'{name}' is reachable");
            } else {
                eprintln!("Could not reach '{name}'");
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
