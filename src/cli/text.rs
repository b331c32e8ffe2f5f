//! Text-codec commands: parse and format resistance strings.

use crate::cli::common::{CliError, CliResult};
use crate::codec;
use clap::Args;
use serde::Serialize;

/// Parse a resistance string into ohms
#[derive(Debug, Clone, Args)]
pub struct ParseArgs {
    /// Resistance text, e.g. "4.7k", "470Ω", "1M"
    #[arg(short, long, value_name = "TEXT")]
    pub text: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ParseResult {
    input: String,
    ohms: f64,
    formatted: String,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> CliResult<()> {
        let ohms = codec::parse_resistance(&self.text)
            .ok_or_else(|| CliError::invalid_input("Invalid resistance value"))?;

        let result = ParseResult {
            input: self.text.clone(),
            ohms,
            formatted: codec::format_resistance(ohms),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{}", result.ohms);
        }

        Ok(())
    }
}

/// Format a resistance in ohms as a human-readable string
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Resistance in ohms
    #[arg(short, long, value_name = "OHMS")]
    pub ohms: f64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FormatResult {
    ohms: f64,
    formatted: String,
}

impl FormatArgs {
    /// Execute the format command
    pub fn execute(&self) -> CliResult<()> {
        let result = FormatResult {
            ohms: self.ohms,
            formatted: codec::format_resistance(self.ohms),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("{}", result.formatted);
        }

        Ok(())
    }
}
