//! CLI command definitions.

use std::path::PathBuf;

use clap::Subcommand;

/// Configuration inspection commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the default configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate (defaults to the standard path)
        file: Option<PathBuf>,
    },
}
