//! Band-colors → resistance command.

use crate::cli::common::{CliError, CliResult};
use crate::codec;
use crate::models::{BandColor, BandMode};
use clap::Args;
use serde::Serialize;

/// Compute the resistance encoded by a list of band colors
#[derive(Debug, Clone, Args)]
pub struct EncodeArgs {
    /// Comma-separated band colors, e.g. "brown,black,red,gold" (4 or 5 bands)
    #[arg(short, long, value_name = "COLORS", value_delimiter = ',')]
    pub bands: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct EncodeResult {
    bands: Vec<BandColor>,
    mode: String,
    resistance_ohms: f64,
    tolerance_percent: f64,
    standard: bool,
    formatted: String,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> CliResult<()> {
        let mode = BandMode::from_band_count(self.bands.len())
            .map_err(|e| CliError::invalid_input(e.to_string()))?;

        let bands = self
            .bands
            .iter()
            .map(|name| name.parse::<BandColor>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CliError::invalid_input(e.to_string()))?;

        let measurement = codec::encode(mode, &bands);

        let result = EncodeResult {
            bands,
            mode: mode.to_string(),
            resistance_ohms: measurement.ohms,
            tolerance_percent: measurement.tolerance_percent,
            standard: measurement.standard,
            formatted: codec::format_resistance(measurement.ohms),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Resistance: {}", result.formatted);
            println!("Tolerance:  ±{}%", result.tolerance_percent);
            if result.standard {
                println!("Standard:   ✓ E12 series value");
            } else {
                println!("Standard:   {}", measurement.warning());
            }
        }

        Ok(())
    }
}
