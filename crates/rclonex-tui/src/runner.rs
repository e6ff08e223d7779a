//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use rclonex_app::message::Message;
use rclonex_app::process::process_message;
use rclonex_app::state::AppState;
use rclonex_app::Services;
use rclonex_core::prelude::*;
use rclonex_daemon::RemoteApi;

use super::{event, render, terminal};

/// Run the console until the user quits.
///
/// Must be called from inside a tokio runtime: RC calls and the signal
/// handler are spawned onto it.
pub fn run<S>(services: Services<S>, mut state: AppState) -> Result<()>
where
    S: RemoteApi + Clone + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified message channel for task results and shutdown signals
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    spawn_shutdown_listener(msg_tx.clone());

    // A stored session goes straight to the console
    if state.is_logged_in() {
        info!("Resuming stored session");
        process_message(&mut state, Message::ReloadRemotes, &msg_tx, &services);
    }

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &services);

    ratatui::restore();
    info!("Console closed");
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<S>,
) -> Result<()>
where
    S: RemoteApi + Clone + Send + Sync + 'static,
{
    while !state.should_quit {
        // Task results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, services);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, services);
        }
    }

    Ok(())
}

/// Turn SIGINT/SIGTERM (Ctrl+C on Windows) into `Message::Quit`.
///
/// In raw mode Ctrl+C arrives as a key event; this covers signals sent from
/// outside the terminal.
fn spawn_shutdown_listener(msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("{} received, quitting", name);
                let _ = msg_tx.send(Message::Quit).await;
            }
            Err(e) => warn!("Shutdown signals unavailable: {}", e),
        }
    });
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        res = tokio::signal::ctrl_c() => res.map(|()| "SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|()| "Ctrl+C")
}
