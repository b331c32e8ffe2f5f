//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Default band count for decode (4 or 5)
    #[arg(long, value_name = "COUNT")]
    default_bands: Option<u8>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    display: DisplayOutput,
}

#[derive(Serialize, Debug)]
struct DisplayOutput {
    default_bands: u8,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e}")))?;

        if self.json {
            let output = ConfigOutput {
                display: DisplayOutput {
                    default_bands: config.display.default_bands,
                },
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&output)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{APP_NAME} Configuration");
            println!("=====================");
            println!();
            println!("Display:");
            println!("  Default Bands: {}", config.display.default_bands);
            println!();
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        let Some(default_bands) = self.default_bands else {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-bands",
            ));
        };

        if !matches!(default_bands, 4 | 5) {
            return Err(CliError::validation(
                "Invalid band count. Must be 4 or 5".to_string(),
            ));
        }

        let mut config = Config::load().unwrap_or_else(|_| Config::default());
        config.display.default_bands = default_bands;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}
