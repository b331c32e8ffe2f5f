//! E12 standard series and the standard-value classifier.
//!
//! A resistance is normalized to a two-digit mantissa on a power-of-ten
//! scale, snapped to the nearest series entry, and classified as standard
//! when it sits within 1% of the snapped value.

use crate::constants::STANDARD_VALUE_TOLERANCE;

/// One decade of the E12 series: twelve two-digit values in [10, 100),
/// strictly increasing, approximately geometrically spaced.
pub const E12_SERIES: [u32; 12] = [10, 12, 15, 18, 22, 27, 33, 39, 47, 56, 68, 82];

/// Normalizes a positive resistance to a mantissa in [10, 100).
///
/// Returns `(mantissa, magnitude)` such that `mantissa × magnitude`
/// reproduces the input, with `magnitude` the net power of ten applied.
#[must_use]
pub fn normalize(ohms: f64) -> (f64, f64) {
    debug_assert!(ohms > 0.0, "normalize requires a positive resistance");

    let mut mantissa = ohms;
    let mut magnitude = 1.0;

    while mantissa >= 100.0 {
        mantissa /= 10.0;
        magnitude *= 10.0;
    }
    while mantissa < 10.0 {
        mantissa *= 10.0;
        magnitude /= 10.0;
    }

    (mantissa, magnitude)
}

/// Series entry closest to `mantissa`.
///
/// Ties break toward the earlier (smaller) entry: the series is scanned in
/// increasing order and only a strictly smaller distance replaces the
/// current candidate.
#[must_use]
pub fn closest_entry(mantissa: f64) -> u32 {
    let mut closest = E12_SERIES[0];
    for &entry in &E12_SERIES[1..] {
        if (f64::from(entry) - mantissa).abs() < (f64::from(closest) - mantissa).abs() {
            closest = entry;
        }
    }
    closest
}

/// Nearest standard-series value at the same decade as `ohms`.
///
/// Requires a positive input; non-positive resistances have no decade to
/// normalize into and are reported as 0 (callers treat them as off-series).
#[must_use]
pub fn nearest_standard(ohms: f64) -> f64 {
    if ohms <= 0.0 {
        return 0.0;
    }
    let (mantissa, magnitude) = normalize(ohms);
    f64::from(closest_entry(mantissa)) * magnitude
}

/// Whether `ohms` lies within 1% relative error of a standard series value.
#[must_use]
pub fn is_standard_value(ohms: f64) -> bool {
    if ohms <= 0.0 {
        return false;
    }
    let standard = nearest_standard(ohms);
    (ohms - standard).abs() / standard <= STANDARD_VALUE_TOLERANCE
}
