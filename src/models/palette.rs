//! Display palette for the twelve band colors.
//!
//! This module provides the display metadata the band swatches are drawn
//! with: hex color, a precomputed dark-background flag, and the digit value
//! (with the −1/−2 sentinels for gold and silver). The table is embedded as
//! JSON and loaded with serde.

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{BandColor, RgbColor};

/// Display metadata for one band color.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteEntry {
    /// Color name (matches [`BandColor`] names).
    pub name: String,
    /// Digit value 0–9, or the sentinels −1 (gold) / −2 (silver).
    pub digit: i8,
    /// Hex color code (e.g., "#FFD700").
    pub hex: String,
    /// Precomputed dark-background flag for swatch styling.
    pub dark: bool,
}

impl PaletteEntry {
    /// Parses the entry's hex code into an [`RgbColor`].
    pub fn rgb(&self) -> Result<RgbColor> {
        RgbColor::from_hex(&self.hex)
            .context(format!("Invalid hex for palette entry '{}'", self.name))
    }
}

/// The complete band-color display palette.
#[derive(Debug, Clone, Deserialize)]
pub struct BandPalette {
    /// One entry per band color, in digit order followed by gold and silver.
    pub colors: Vec<PaletteEntry>,
}

impl BandPalette {
    /// Loads the palette from embedded JSON data.
    ///
    /// # Errors
    /// Returns an error if the JSON data cannot be parsed.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("../data/band_palette.json");
        let palette: Self =
            serde_json::from_str(json_data).context("Failed to parse embedded band palette")?;
        Ok(palette)
    }

    /// Looks up an entry by color name.
    ///
    /// Unknown names fail explicitly rather than defaulting.
    pub fn get(&self, name: &str) -> Result<&PaletteEntry> {
        let wanted = name.trim().to_lowercase();
        self.colors
            .iter()
            .find(|entry| entry.name == wanted)
            .context(format!("Unknown band color '{name}'"))
    }

    /// Looks up the entry for a typed band color.
    ///
    /// The palette always carries all twelve colors, so this cannot miss.
    pub fn entry(&self, color: BandColor) -> Result<&PaletteEntry> {
        self.get(color.name())
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette is empty (never, for the embedded table).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
