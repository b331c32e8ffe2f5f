//! Resistance → band-colors command.

use crate::cli::common::{CliError, CliResult};
use crate::codec;
use crate::config::Config;
use crate::constants::{MAX_OHMS, MIN_OHMS};
use crate::models::{BandColor, BandMode};
use clap::Args;
use serde::Serialize;

/// Find the band colors for a target resistance
#[derive(Debug, Clone, Args)]
pub struct DecodeArgs {
    /// Target resistance, e.g. "4700", "4.7k", "1M"
    #[arg(short, long, value_name = "VALUE")]
    pub ohms: String,

    /// Band count (4 or 5); defaults to the configured layout
    #[arg(short, long, value_name = "COUNT")]
    pub bands: Option<u8>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DecodeResult {
    requested_ohms: f64,
    bands: Vec<BandColor>,
    mode: String,
    resistance_ohms: f64,
    tolerance_percent: f64,
    formatted: String,
    /// Set when the snap moved the value by more than 1%
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<String>,
}

impl DecodeArgs {
    /// Execute the decode command
    pub fn execute(&self) -> CliResult<()> {
        let mode = self.resolve_mode()?;

        // The codec does not re-validate range; both failure kinds are
        // caught here at the boundary, as user-facing messages.
        let ohms = codec::parse_resistance(&self.ohms)
            .ok_or_else(|| CliError::invalid_input("Invalid resistance value"))?;

        if !(MIN_OHMS..=MAX_OHMS).contains(&ohms) {
            return Err(CliError::invalid_input(
                "Value out of range (0.1Ω - 999MΩ)",
            ));
        }

        let bands = codec::decode(ohms, mode);

        // Re-run the forward codec: the snap may have moved the value.
        let measurement = codec::encode(mode, &bands);
        let formatted = codec::format_resistance(measurement.ohms);

        let notice = if (measurement.ohms - ohms).abs() / ohms > 0.01 {
            Some(format!("Closest standard value: {formatted}"))
        } else {
            None
        };

        let result = DecodeResult {
            requested_ohms: ohms,
            bands,
            mode: mode.to_string(),
            resistance_ohms: measurement.ohms,
            tolerance_percent: measurement.tolerance_percent,
            formatted,
            notice,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let names: Vec<&str> = result.bands.iter().map(|color| color.name()).collect();
            println!("Bands:      {}", names.join(" "));
            println!("Resistance: {}", result.formatted);
            println!("Tolerance:  ±{}%", result.tolerance_percent);
            if let Some(notice) = &result.notice {
                println!("{notice}");
            }
        }

        Ok(())
    }

    /// Band mode from `--bands`, falling back to the configured default.
    fn resolve_mode(&self) -> CliResult<BandMode> {
        if let Some(count) = self.bands {
            return BandMode::from_band_count(usize::from(count))
                .map_err(|e| CliError::invalid_input(e.to_string()));
        }

        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;
        config
            .display
            .default_mode()
            .map_err(|e| CliError::io(format!("Invalid configured band count: {e}")))
    }
}
