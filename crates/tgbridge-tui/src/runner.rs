//! Main TUI runner - entry point and event loop

use tgbridge_app::{signals, AppState, Message, Settings};
use tgbridge_core::prelude::*;
use tgbridge_core::AppPhase;
use tokio::sync::mpsc;

use crate::{event, process, render, terminal};

/// Run the dashboard until the user quits or a signal arrives
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut state = AppState::with_settings(settings);
    info!(
        "Dashboard starting with {} channels, {} notifications",
        state.channels.len(),
        state.notifications.len()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Signal handler sends Message::Quit on SIGINT/SIGTERM
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    state.phase = AppPhase::Running;
    let result = run_loop(&mut term, &mut state, msg_rx);

    ratatui::restore();
    info!("Dashboard stopped");
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // External messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process::process_message(state, msg);
        }

        terminal
            .draw(|frame| render::view(frame, state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message);
        }
    }

    Ok(())
}
