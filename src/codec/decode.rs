//! Inverse codec: target resistance → band colors.

use crate::codec::series;
use crate::models::{BandColor, BandMode};

/// Ordered powers of ten selectable by a multiplier band during decoding.
const MULTIPLIER_VALUES: [f64; 10] = [
    1.0,
    10.0,
    100.0,
    1_000.0,
    10_000.0,
    100_000.0,
    1_000_000.0,
    10_000_000.0,
    100_000_000.0,
    1_000_000_000.0,
];

/// Converts a target resistance into the band colors of the nearest
/// standard-series value.
///
/// The target is snapped to the nearest E12 value, rounded to whole ohms
/// (sub-integer standard values are not representable by this path), and
/// decomposed into a 2-digit (4-band) or 3-digit (5-band) mantissa plus a
/// power-of-ten multiplier color.
///
/// The tolerance band is always `gold` (±5%), regardless of any tolerance
/// the caller had in mind; re-selecting tolerance afterward is up to the
/// user. Callers should re-run [`encode`](crate::codec::encode) on the
/// result to learn the actual snapped resistance, which can differ from the
/// requested target by more than 1% when the target is off-series.
///
/// Range validation (0.1 Ω – 999 MΩ) happens upstream; this function does
/// not re-check it.
///
/// # Examples
///
/// ```
/// use ohmcode::codec::decode;
/// use ohmcode::models::{BandColor, BandMode};
///
/// let bands = decode(4700.0, BandMode::Four);
/// assert_eq!(
///     bands,
///     vec![BandColor::Yellow, BandColor::Violet, BandColor::Red, BandColor::Gold],
/// );
/// ```
#[must_use]
pub fn decode(ohms: f64, mode: BandMode) -> Vec<BandColor> {
    let standard = series::nearest_standard(ohms);

    // Integer ohms after snapping; the mantissa digits come out of this.
    let mut value = standard.round().max(0.0) as u64;

    let mantissa_limit = match mode {
        BandMode::Four => 100,
        BandMode::Five => 1000,
    };

    let mut mult_index = 0;
    while value >= mantissa_limit && mult_index < MULTIPLIER_VALUES.len() - 1 {
        value /= 10;
        mult_index += 1;
    }

    let multiplier_color = multiplier_color_for(MULTIPLIER_VALUES[mult_index]);

    let mut bands = Vec::with_capacity(mode.band_count());
    match mode {
        BandMode::Four => {
            bands.push(digit_color((value / 10) % 10));
            bands.push(digit_color(value % 10));
        }
        BandMode::Five => {
            bands.push(digit_color((value / 100) % 10));
            bands.push(digit_color((value / 10) % 10));
            bands.push(digit_color(value % 10));
        }
    }
    bands.push(multiplier_color);
    bands.push(BandColor::Gold);

    bands
}

/// Digit color for a single digit value.
fn digit_color(digit: u64) -> BandColor {
    BandColor::DIGIT_COLORS
        .get(digit as usize)
        .copied()
        .unwrap_or(BandColor::Black)
}

/// Reverse lookup of a multiplier value in the color table.
///
/// Scans the twelve colors in table order and takes the first match; no two
/// colors share a multiplier, so the scan is unambiguous.
fn multiplier_color_for(multiplier: f64) -> BandColor {
    BandColor::MULTIPLIER_COLORS
        .iter()
        .copied()
        .find(|color| color.multiplier() == multiplier)
        .unwrap_or(BandColor::Black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BandColor::{Black, Brown, Gold, Gray, Green, Red, Violet, White, Yellow};

    #[test]
    fn test_decode_four_band() {
        assert_eq!(decode(4700.0, BandMode::Four), vec![Yellow, Violet, Red, Gold]);
        assert_eq!(decode(1000.0, BandMode::Four), vec![Brown, Black, Red, Gold]);
        assert_eq!(decode(47.0, BandMode::Four), vec![Yellow, Violet, Black, Gold]);
    }

    #[test]
    fn test_decode_five_band() {
        // 4700 = 470 x 10
        assert_eq!(
            decode(4700.0, BandMode::Five),
            vec![Yellow, Violet, Black, Brown, Gold],
        );
        // 47 = 047 x 1
        assert_eq!(
            decode(47.0, BandMode::Five),
            vec![Black, Yellow, Violet, Black, Gold],
        );
    }

    #[test]
    fn test_decode_snaps_off_series_targets() {
        // 1050 is off-series; nearest standard is 1000
        assert_eq!(decode(1050.0, BandMode::Four), vec![Brown, Black, Red, Gold]);
        // 4650 snaps up to 4700
        assert_eq!(decode(4650.0, BandMode::Four), vec![Yellow, Violet, Red, Gold]);
    }

    #[test]
    fn test_decode_large_values() {
        // 999 MOhm snaps to 820 MOhm = 82 x 10^7
        assert_eq!(
            decode(999_000_000.0, BandMode::Four),
            vec![Gray, Red, Violet, Gold],
        );
        // 1 GOhm decomposes as 10 x 10^8 against the gray multiplier
        assert_eq!(
            decode(1_000_000_000.0, BandMode::Four),
            vec![Brown, Black, Gray, Gold],
        );
        // 82 GOhm is the first decomposition to reach the white (x10^9) band
        assert_eq!(
            decode(82_000_000_000.0, BandMode::Four),
            vec![Gray, Red, White, Gold],
        );
    }

    #[test]
    fn test_decode_sub_ten_targets_round_to_whole_ohms() {
        // 4.7 is a standard value but not an integer: rounds to 5 ohm
        assert_eq!(decode(4.7, BandMode::Four), vec![Black, Green, Black, Gold]);
    }

    #[test]
    fn test_tolerance_band_is_always_gold() {
        for ohms in [12.0, 390.0, 5600.0, 820_000.0] {
            assert_eq!(*decode(ohms, BandMode::Four).last().unwrap(), Gold);
            assert_eq!(*decode(ohms, BandMode::Five).last().unwrap(), Gold);
        }
    }
}
