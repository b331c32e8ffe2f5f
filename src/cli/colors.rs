//! Color taxonomy listing command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{BandColor, BandPalette};
use clap::Args;
use serde::Serialize;

/// List the band color taxonomy (digits, multipliers, tolerances, display hex)
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ColorRow {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    digit: Option<u8>,
    multiplier: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    tolerance_percent: Option<f64>,
    hex: String,
    dark: bool,
    /// Readable text color (black or white) on top of the swatch
    text_color: String,
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let palette = BandPalette::load()
            .map_err(|e| CliError::io(format!("Failed to load band palette: {e}")))?;

        let rows: Vec<ColorRow> = BandColor::ALL
            .iter()
            .map(|&color| {
                let entry = palette
                    .entry(color)
                    .map_err(|e| CliError::io(e.to_string()))?;
                let swatch = entry.rgb().map_err(|e| CliError::io(e.to_string()))?;
                Ok(ColorRow {
                    name: color.name(),
                    digit: color.digit(),
                    multiplier: color.multiplier(),
                    tolerance_percent: color.tolerance(),
                    hex: entry.hex.clone(),
                    dark: entry.dark,
                    text_color: swatch.contrast_text().to_hex(),
                })
            })
            .collect::<CliResult<_>>()?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!(
                "{:<8} {:>5} {:>13} {:>10}  {:<7}",
                "COLOR", "DIGIT", "MULTIPLIER", "TOLERANCE", "HEX"
            );
            for row in &rows {
                let digit = row.digit.map_or(String::from("-"), |d| d.to_string());
                let tolerance = row
                    .tolerance_percent
                    .map_or(String::from("-"), |t| format!("±{t}%"));
                println!(
                    "{:<8} {:>5} {:>13} {:>10}  {:<7}",
                    row.name, digit, row.multiplier, tolerance, row.hex
                );
            }
        }

        Ok(())
    }
}
