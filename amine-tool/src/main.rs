//! Terminal item manager.

mod config;
mod error;
mod logging;
mod replay;
mod text_field;
mod tui;

use std::path::PathBuf;

use amine_core::ItemManager;
use clap::{Parser, Subcommand};

use crate::config::{default_log_path, load_config};
use crate::replay::OutputFormat;

#[derive(Parser)]
#[command(name = "am")]
#[command(about = "Add, list and delete categorized items", long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive item table (default)
    Run {
        /// Show category labels instead of icons
        #[arg(long)]
        no_icons: bool,
    },

    /// Apply a JSON list of add/delete actions and print the result
    Replay {
        /// Script file: [{"add": {"name", "category", "price"}}, {"delete": 1}, ...]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show category labels instead of icons
        #[arg(long)]
        no_icons: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let log_path = config.log.path.clone().unwrap_or_else(default_log_path);
    if let Err(e) = logging::init(&log_path, config.log.filter.as_deref()) {
        eprintln!("warning: {}", e);
    }

    match cli.command.unwrap_or(Command::Run { no_icons: false }) {
        Command::Run { no_icons } => {
            tui::run(config.display.icons && !no_icons)?;
        }
        Command::Replay {
            file,
            format,
            no_icons,
        } => {
            let actions = replay::load_script(&file)?;
            let mut manager = ItemManager::new();
            replay::apply(&mut manager, &actions);

            let output = replay::render(&manager, format, config.display.icons && !no_icons)?;
            print!("{}", output);
        }
    }

    Ok(())
}
