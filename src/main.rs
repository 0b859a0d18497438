//! tgbridge - Discord to Telegram bridge
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tgbridge::StatusSnapshot;
use tgbridge_app::{load_settings, load_settings_required, AppState, Settings};
use tgbridge_core::logging;
use tgbridge_core::prelude::*;

/// Discord to Telegram bridge: channel dashboard and webhook relay
#[derive(Parser, Debug)]
#[command(name = "tgbridge", version)]
#[command(about = "Forward Discord channel messages to Telegram", long_about = None)]
struct Args {
    /// Settings file (default: .tgbridge/config.toml in the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the terminal dashboard (default)
    Dashboard,

    /// Run the webhook relay
    Serve {
        /// Listen address, overrides relay.bind
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Print channels, aggregates and notifications as JSON
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    match args.command.unwrap_or(Command::Dashboard) {
        Command::Dashboard => {
            // The TUI owns the terminal, so logs go to a file
            logging::init()?;
            let settings = settings(args.config)?;
            tgbridge::run_dashboard(settings).await
        }
        Command::Serve { bind } => {
            logging::init_stderr();
            let settings = settings(args.config)?;
            tgbridge::run_relay(&settings.relay, bind.as_deref()).await
        }
        Command::Status => {
            logging::init_stderr();
            let state = AppState::with_settings(settings(args.config)?);
            println!("{}", StatusSnapshot::from_state(&state).to_json()?);
            Ok(())
        }
    }
}

fn settings(config: Option<PathBuf>) -> Result<Settings> {
    match config {
        Some(path) => load_settings_required(&path),
        None => {
            let project_path = std::env::current_dir()?;
            Ok(load_settings(&project_path))
        }
    }
}
