//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use osm_core::ConfigFormat;
use std::path::PathBuf;

/// Vault Settings Manager - Share settings files between vaults
#[derive(Parser, Debug)]
#[command(name = "osm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (.json, .toml, .yaml or .yml)
    #[arg(short, long, global = true, env = "OSM_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Skip invalid directives with a warning instead of failing
    #[arg(long, global = true)]
    pub tolerant: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the files the directives select under a vault
    ///
    /// Examples:
    ///   osm select ~/notes/.obsidian
    ///   osm select ~/notes/.obsidian --trace
    ///   osm select . --directives directives.txt
    Select {
        /// Vault settings directory to resolve against
        root: PathBuf,

        /// Read "Include: <pattern>" / "Exclude: <pattern>" lines from a file
        /// instead of the configuration
        #[arg(short, long)]
        directives: Option<PathBuf>,

        /// Show which files each directive matched
        #[arg(long)]
        trace: bool,

        /// Output as JSON for scripting
        #[arg(long, conflicts_with = "trace")]
        json: bool,

        /// Sort the listing without regard to case
        #[arg(short = 'i', long)]
        ignore_case: bool,
    },

    /// Copy the selected files from one vault into others
    Sync {
        /// Vault settings directory to copy from
        source: PathBuf,

        /// Vault settings directories to copy into
        #[arg(required = true)]
        dest: Vec<PathBuf>,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Delete selected destination files the source no longer has
        #[arg(long)]
        remove_stale: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Preview what sync would change
    Diff {
        /// Vault settings directory to compare from
        source: PathBuf,

        /// Vault settings directories to compare against
        #[arg(required = true)]
        dest: Vec<PathBuf>,

        /// Show a unified diff for each modified text file
        #[arg(long)]
        patch: bool,

        /// Output as JSON for scripting
        #[arg(long, conflicts_with = "patch")]
        json: bool,
    },

    /// Print the built-in configuration
    DefaultConfig {
        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: FormatArg,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Toml,
    Yaml,
}

impl From<FormatArg> for ConfigFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => ConfigFormat::Json,
            FormatArg::Toml => ConfigFormat::Toml,
            FormatArg::Yaml => ConfigFormat::Yaml,
        }
    }
}
