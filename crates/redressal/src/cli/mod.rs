//! Command-line interface for redressal.
//!
//! This module provides the CLI structure for the `redressal` binary. With
//! no subcommand the binary starts the interactive shell; subcommands cover
//! configuration inspection.

mod commands;
pub mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::ConfigCommand;
pub use shell::Shell;

/// redressal - Student grievance redressal cell
///
/// An interactive, in-memory grievance registry: students register and file
/// grievances, administrators triage them and report on the backlog. All
/// records live for the process lifetime only.
#[derive(Debug, Parser)]
#[command(name = "redressal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "redressal");
    }

    #[test]
    fn test_parse_no_command_defaults_to_shell() {
        let cli = Cli::try_parse_from(["redressal"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["redressal", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Show { json: false }))
        ));
    }

    #[test]
    fn test_parse_config_show_json() {
        let cli = Cli::try_parse_from(["redressal", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Config(ConfigCommand::Show { json: true }))
        ));
    }

    #[test]
    fn test_parse_with_config_path() {
        let cli = Cli::try_parse_from(["redressal", "-c", "/custom/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["redressal", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["redressal", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);

        let cli = Cli::try_parse_from(["redressal", "-q"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);

        let cli = Cli::try_parse_from(["redressal"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }
}
