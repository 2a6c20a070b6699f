//! cueme CLI
//!
//! Injects the human agent protocol into editor prompt files and manages
//! the `cueme` shell integration.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: cannot initialize logging: {}", "warning".yellow(), e);
    }
    tracing::debug!(config = ?cli.config, platform = ?cli.platform, "starting");

    match cli.command {
        Commands::Proto { action } => {
            commands::run_proto(action, cli.config.as_deref(), cli.platform)
        }
        Commands::Cli { action } => commands::run_shell(action),
        Commands::Completions { shell } => {
            commands::run_completions(shell);
            Ok(())
        }
    }
}
