//! 4↔5 band layout conversion command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{BandColor, BandMode};
use crate::session::relayout;
use clap::Args;
use serde::Serialize;

/// Convert a color sequence between 4- and 5-band layouts
#[derive(Debug, Clone, Args)]
pub struct RelayoutArgs {
    /// Comma-separated band colors in the current layout
    #[arg(short, long, value_name = "COLORS", value_delimiter = ',')]
    pub bands: Vec<String>,

    /// Target band count (4 or 5)
    #[arg(short, long, value_name = "COUNT")]
    pub to: u8,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RelayoutResult {
    bands: Vec<BandColor>,
    mode: String,
}

impl RelayoutArgs {
    /// Execute the relayout command
    pub fn execute(&self) -> CliResult<()> {
        // The input must itself be a valid 4- or 5-band sequence
        BandMode::from_band_count(self.bands.len())
            .map_err(|e| CliError::invalid_input(e.to_string()))?;

        let target = BandMode::from_band_count(usize::from(self.to))
            .map_err(|e| CliError::invalid_input(e.to_string()))?;

        let bands = self
            .bands
            .iter()
            .map(|name| name.parse::<BandColor>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CliError::invalid_input(e.to_string()))?;

        let converted = relayout(&bands, target);

        let result = RelayoutResult {
            bands: converted,
            mode: target.to_string(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            let names: Vec<&str> = result.bands.iter().map(|color| color.name()).collect();
            println!("{}", names.join(" "));
        }

        Ok(())
    }
}
