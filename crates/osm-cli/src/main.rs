//! Vault Settings Manager CLI
//!
//! Selects settings files from a source vault and copies or compares them
//! against other vaults.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    // The built-in config needs no loading.
    if let Commands::DefaultConfig { format } = cli.command {
        return commands::run_default_config(format.into());
    }
    let config = commands::load_config(cli.config.as_deref(), cli.tolerant)?;

    match cli.command {
        Commands::Select {
            root,
            directives,
            trace,
            json,
            ignore_case,
        } => commands::run_select(
            &config,
            &root,
            directives.as_deref(),
            commands::SelectOutput {
                trace,
                json,
                ignore_case,
            },
        ),
        Commands::Sync {
            source,
            dest,
            dry_run,
            remove_stale,
            json,
        } => commands::run_sync(&config, &source, &dest, dry_run, remove_stale, json),
        Commands::Diff {
            source,
            dest,
            patch,
            json,
        } => commands::run_diff(&config, &source, &dest, patch, json),
        Commands::DefaultConfig { .. } => Ok(()),
    }
}

/// Log to stderr: everything at DEBUG with `--verbose`, otherwise warnings only.
fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");
    Ok(())
}
