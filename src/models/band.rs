//! Band colors, band roles, and the 4/5-band layouts.
//!
//! The three lookup tables (digit value, decade multiplier, tolerance) live
//! here as const methods on [`BandColor`], so the codec never allocates or
//! fails while reading them.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the twelve colors that can appear as a band on a resistor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandColor {
    /// Digit 0, multiplier ×1
    Black,
    /// Digit 1, multiplier ×10, tolerance ±1%
    Brown,
    /// Digit 2, multiplier ×100, tolerance ±2%
    Red,
    /// Digit 3, multiplier ×1k
    Orange,
    /// Digit 4, multiplier ×10k
    Yellow,
    /// Digit 5, multiplier ×100k, tolerance ±0.5%
    Green,
    /// Digit 6, multiplier ×1M, tolerance ±0.25%
    Blue,
    /// Digit 7, multiplier ×10M, tolerance ±0.1%
    Violet,
    /// Digit 8, multiplier ×100M, tolerance ±0.05%
    Gray,
    /// Digit 9, multiplier ×1G
    White,
    /// Multiplier ×0.1, tolerance ±5%
    Gold,
    /// Multiplier ×0.01, tolerance ±10%
    Silver,
}

impl BandColor {
    /// All twelve band colors, in digit order followed by gold and silver.
    pub const ALL: [Self; 12] = [
        Self::Black,
        Self::Brown,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Violet,
        Self::Gray,
        Self::White,
        Self::Gold,
        Self::Silver,
    ];

    /// Colors valid in a digit position, indexed by digit value.
    pub const DIGIT_COLORS: [Self; 10] = [
        Self::Black,
        Self::Brown,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Violet,
        Self::Gray,
        Self::White,
    ];

    /// Colors valid in the multiplier position (all twelve).
    pub const MULTIPLIER_COLORS: [Self; 12] = Self::ALL;

    /// Colors valid in the tolerance position.
    pub const TOLERANCE_COLORS: [Self; 8] = [
        Self::Brown,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Violet,
        Self::Gray,
        Self::Gold,
        Self::Silver,
    ];

    /// Significant-digit value of this color.
    ///
    /// Returns 0–9 for the ten digit colors; gold and silver carry the
    /// sentinels −1 and −2 from the classic color table, marking them as
    /// unusable in a digit position.
    #[must_use]
    pub const fn digit_value(self) -> i8 {
        match self {
            Self::Black => 0,
            Self::Brown => 1,
            Self::Red => 2,
            Self::Orange => 3,
            Self::Yellow => 4,
            Self::Green => 5,
            Self::Blue => 6,
            Self::Violet => 7,
            Self::Gray => 8,
            Self::White => 9,
            Self::Gold => -1,
            Self::Silver => -2,
        }
    }

    /// Digit value if this color is legal in a digit position.
    #[must_use]
    pub const fn digit(self) -> Option<u8> {
        let value = self.digit_value();
        if value >= 0 {
            Some(value as u8)
        } else {
            None
        }
    }

    /// Decade multiplier applied to the digit mantissa.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Black => 1.0,
            Self::Brown => 10.0,
            Self::Red => 100.0,
            Self::Orange => 1_000.0,
            Self::Yellow => 10_000.0,
            Self::Green => 100_000.0,
            Self::Blue => 1_000_000.0,
            Self::Violet => 10_000_000.0,
            Self::Gray => 100_000_000.0,
            Self::White => 1_000_000_000.0,
            Self::Gold => 0.1,
            Self::Silver => 0.01,
        }
    }

    /// Tolerance half-width in percent, if this color is a valid tolerance band.
    #[must_use]
    pub const fn tolerance(self) -> Option<f64> {
        match self {
            Self::Brown => Some(1.0),
            Self::Red => Some(2.0),
            Self::Green => Some(0.5),
            Self::Blue => Some(0.25),
            Self::Violet => Some(0.1),
            Self::Gray => Some(0.05),
            Self::Gold => Some(5.0),
            Self::Silver => Some(10.0),
            _ => None,
        }
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Gray => "gray",
            Self::White => "white",
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }
}

impl fmt::Display for BandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BandColor {
    type Err = anyhow::Error;

    /// Parses a color from its (case-insensitive) name.
    ///
    /// Unknown names fail explicitly; the codec's fallback policy applies to
    /// positional role mismatches, never to misspelled names.
    fn from_str(s: &str) -> Result<Self> {
        let color = match s.trim().to_lowercase().as_str() {
            "black" => Self::Black,
            "brown" => Self::Brown,
            "red" => Self::Red,
            "orange" => Self::Orange,
            "yellow" => Self::Yellow,
            "green" => Self::Green,
            "blue" => Self::Blue,
            "violet" | "purple" => Self::Violet,
            "gray" | "grey" => Self::Gray,
            "white" => Self::White,
            "gold" => Self::Gold,
            "silver" => Self::Silver,
            other => bail!("Unknown band color '{other}'"),
        };
        Ok(color)
    }
}

/// Semantic role of a band position within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    /// Significant digit
    Digit,
    /// Decade multiplier
    Multiplier,
    /// Tolerance half-width
    Tolerance,
}

/// Band layout: 4-band (two digits) or 5-band (three digits).
///
/// The layout fixes both the band count and the role of every position:
/// the last band is always tolerance, the second-to-last is always the
/// multiplier, and everything before is a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BandMode {
    /// digit, digit, multiplier, tolerance
    #[default]
    Four,
    /// digit, digit, digit, multiplier, tolerance
    Five,
}

impl BandMode {
    /// Total number of bands in this layout.
    #[must_use]
    pub const fn band_count(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Five => 5,
        }
    }

    /// Number of significant-digit bands.
    #[must_use]
    pub const fn digit_count(self) -> usize {
        self.band_count() - 2
    }

    /// Role of the band at `index` (0-based).
    ///
    /// Indices past the end of the layout keep the digit role; callers are
    /// expected to stay within `band_count()`.
    #[must_use]
    pub const fn role_at(self, index: usize) -> BandRole {
        if index + 1 == self.band_count() {
            BandRole::Tolerance
        } else if index + 2 == self.band_count() {
            BandRole::Multiplier
        } else {
            BandRole::Digit
        }
    }

    /// Builds a mode from a band count (4 or 5).
    pub fn from_band_count(count: usize) -> Result<Self> {
        match count {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            other => bail!("Unsupported band count {other}; expected 4 or 5"),
        }
    }
}

impl fmt::Display for BandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-band", self.band_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_values() {
        assert_eq!(BandColor::Black.digit_value(), 0);
        assert_eq!(BandColor::White.digit_value(), 9);
        assert_eq!(BandColor::Gold.digit_value(), -1);
        assert_eq!(BandColor::Silver.digit_value(), -2);

        // DIGIT_COLORS is indexed by digit value
        for (value, color) in BandColor::DIGIT_COLORS.iter().enumerate() {
            assert_eq!(color.digit(), Some(value as u8));
        }
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(BandColor::Black.multiplier(), 1.0);
        assert_eq!(BandColor::Orange.multiplier(), 1_000.0);
        assert_eq!(BandColor::White.multiplier(), 1_000_000_000.0);
        assert_eq!(BandColor::Gold.multiplier(), 0.1);
        assert_eq!(BandColor::Silver.multiplier(), 0.01);
    }

    #[test]
    fn test_tolerances() {
        assert_eq!(BandColor::Gold.tolerance(), Some(5.0));
        assert_eq!(BandColor::Silver.tolerance(), Some(10.0));
        assert_eq!(BandColor::Brown.tolerance(), Some(1.0));
        assert_eq!(BandColor::Gray.tolerance(), Some(0.05));
        assert_eq!(BandColor::Black.tolerance(), None);
        assert_eq!(BandColor::Orange.tolerance(), None);

        for color in BandColor::TOLERANCE_COLORS {
            assert!(color.tolerance().is_some());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("brown".parse::<BandColor>().unwrap(), BandColor::Brown);
        assert_eq!("  GOLD ".parse::<BandColor>().unwrap(), BandColor::Gold);
        assert_eq!("grey".parse::<BandColor>().unwrap(), BandColor::Gray);
        assert!("mauve".parse::<BandColor>().is_err());
        assert!("".parse::<BandColor>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for color in BandColor::ALL {
            let parsed: BandColor = color.to_string().parse().unwrap();
            assert_eq!(parsed, color);
        }
    }

    #[test]
    fn test_mode_roles() {
        assert_eq!(BandMode::Four.role_at(0), BandRole::Digit);
        assert_eq!(BandMode::Four.role_at(1), BandRole::Digit);
        assert_eq!(BandMode::Four.role_at(2), BandRole::Multiplier);
        assert_eq!(BandMode::Four.role_at(3), BandRole::Tolerance);

        assert_eq!(BandMode::Five.role_at(2), BandRole::Digit);
        assert_eq!(BandMode::Five.role_at(3), BandRole::Multiplier);
        assert_eq!(BandMode::Five.role_at(4), BandRole::Tolerance);
    }

    #[test]
    fn test_mode_from_band_count() {
        assert_eq!(BandMode::from_band_count(4).unwrap(), BandMode::Four);
        assert_eq!(BandMode::from_band_count(5).unwrap(), BandMode::Five);
        assert!(BandMode::from_band_count(3).is_err());
        assert!(BandMode::from_band_count(6).is_err());
    }
}
