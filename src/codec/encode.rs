//! Forward codec: band colors → resistance and tolerance.

use crate::codec::series;
use crate::models::{BandColor, BandMode, Measurement};

/// Default tolerance applied when the tolerance band is missing or not a
/// valid tolerance color.
const DEFAULT_TOLERANCE_PERCENT: f64 = 5.0;

/// Computes the resistance encoded by `bands` under the given layout.
///
/// This is a total function: it always produces a measurement, so a live
/// preview can render while the user is mid-edit. A missing position, or a
/// color that is not valid for the position's role, falls back to digit 0,
/// multiplier ×1, or tolerance ±5% respectively.
///
/// # Examples
///
/// ```
/// use ohmcode::codec::encode;
/// use ohmcode::models::{BandColor, BandMode};
///
/// let m = encode(
///     BandMode::Four,
///     &[BandColor::Brown, BandColor::Black, BandColor::Red, BandColor::Gold],
/// );
/// assert_eq!(m.ohms, 1000.0);
/// assert_eq!(m.tolerance_percent, 5.0);
/// assert!(m.standard);
/// ```
#[must_use]
pub fn encode(mode: BandMode, bands: &[BandColor]) -> Measurement {
    let digit_count = mode.digit_count();

    let mut mantissa = 0.0;
    for index in 0..digit_count {
        let digit = bands
            .get(index)
            .and_then(|color| color.digit())
            .unwrap_or(0);
        mantissa = mantissa * 10.0 + f64::from(digit);
    }

    let multiplier = bands
        .get(digit_count)
        .map_or(1.0, |color| color.multiplier());

    let tolerance_percent = bands
        .get(digit_count + 1)
        .and_then(|color| color.tolerance())
        .unwrap_or(DEFAULT_TOLERANCE_PERCENT);

    let ohms = mantissa * multiplier;

    Measurement {
        ohms,
        tolerance_percent,
        standard: series::is_standard_value(ohms),
    }
}
