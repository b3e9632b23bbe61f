//! `redressal` - CLI for the student grievance redressal cell
//!
//! With no subcommand this binary starts the interactive shell over an empty
//! registry (seeded with the configured default admin). Subcommands inspect
//! configuration.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use redressal::cli::{Cli, Command, ConfigCommand, Shell};
use redressal::{init_logging, Config, Registry};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Execute the command
    match cli.command {
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
        None => run_shell(&config),
    }
}

fn run_shell(config: &Config) -> anyhow::Result<()> {
    let mut registry = Registry::new();
    if config.bootstrap.seed_default_admin {
        registry.register_admin(
            config.bootstrap.admin_username.clone(),
            config.bootstrap.admin_password.clone(),
            config.bootstrap.admin_email.clone(),
            config.bootstrap.admin_phone.clone(),
        );
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(registry, stdin.lock(), stdout.lock());
    shell.run().context("running interactive shell")?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Bootstrap]");
                println!(
                    "  Seed default admin: {}",
                    config.bootstrap.seed_default_admin
                );
                println!("  Admin username:     {}", config.bootstrap.admin_username);
                println!("  Admin email:        {}", config.bootstrap.admin_email);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
