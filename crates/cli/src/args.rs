//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and validate the Atlas API configuration.
#[derive(Parser, Debug)]
#[command(name = "atlas-cli", version, about)]
pub struct Cli {
    /// Override file(s) to load instead of the default `.env`/`.env.local`
    /// chain. Repeatable; earlier files win per key.
    #[arg(long = "env-file", global = true, value_name = "PATH")]
    pub env_files: Vec<PathBuf>,

    /// Skip override files entirely.
    #[arg(long, global = true, conflicts_with = "env_files")]
    pub no_env_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and validate the configuration, reporting any warnings.
    Check,
    /// Print the resolved configuration as redacted JSON.
    Show {
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}
