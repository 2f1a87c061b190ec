//! Schema Mirror CLI
//!
//! The command-line interface for synchronizing the local schema mirror
//! against a published upstream release.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

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

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Sync {
            release,
            root,
            json,
        }) => commands::run_sync(&root, &release, json),
        Some(Commands::Status { root, json }) => commands::run_status(&root, json),
        None => {
            println!("{} Schema Mirror CLI", "schema-mirror".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "schema-mirror --help".cyan()
            );
            Ok(())
        }
    }
}
