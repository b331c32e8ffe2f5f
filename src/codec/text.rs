//! Text codec: human-readable resistance strings ↔ ohms.

/// Parses a user-entered resistance string into ohms.
///
/// Accepts an optional ohm symbol and an optional trailing magnitude letter:
/// `k` multiplies by 1 000 and `m` by 1 000 000 (case-insensitive). The
/// remaining text must parse as a finite, strictly positive number.
///
/// # Examples
///
/// ```
/// use ohmcode::codec::parse_resistance;
///
/// assert_eq!(parse_resistance("4.7k"), Some(4700.0));
/// assert_eq!(parse_resistance("470"), Some(470.0));
/// assert_eq!(parse_resistance("1M"), Some(1_000_000.0));
/// assert_eq!(parse_resistance("abc"), None);
/// ```
#[must_use]
pub fn parse_resistance(input: &str) -> Option<f64> {
    // Lowercasing first also folds Ω (U+03A9) and the ohm sign (U+2126)
    // into ω, so a single strip covers every ohm-symbol spelling.
    let lowered = input.trim().to_lowercase();
    let stripped: String = lowered.chars().filter(|&c| c != 'ω').collect();
    let text = stripped.trim();

    let (number_text, multiplier) = if let Some(rest) = text.strip_suffix('m') {
        (rest, 1_000_000.0)
    } else if let Some(rest) = text.strip_suffix('k') {
        (rest, 1_000.0)
    } else {
        (text, 1.0)
    };

    let value: f64 = number_text.trim().parse().ok()?;
    if !value.is_finite() || value <= 0.0 {
        return None;
    }

    Some(value * multiplier)
}

/// Formats a resistance in ohms as a compact human-readable string.
///
/// Picks the unit by magnitude (MΩ from 10⁶, kΩ from 10³, Ω below) and
/// prints whole scaled values without decimals, fractional ones with up to
/// two decimal places.
///
/// The output is display-lossy: feeding it back through
/// [`parse_resistance`] works only because the unit suffix is re-attached
/// here; editors that strip the suffix must re-attach it themselves.
///
/// # Examples
///
/// ```
/// use ohmcode::codec::format_resistance;
///
/// assert_eq!(format_resistance(1_500_000.0), "1.5 MΩ");
/// assert_eq!(format_resistance(4700.0), "4.7 kΩ");
/// assert_eq!(format_resistance(470.0), "470 Ω");
/// ```
#[must_use]
pub fn format_resistance(ohms: f64) -> String {
    if ohms >= 1_000_000.0 {
        format!("{} MΩ", format_scaled(ohms / 1_000_000.0))
    } else if ohms >= 1_000.0 {
        format!("{} kΩ", format_scaled(ohms / 1_000.0))
    } else {
        format!("{} Ω", format_scaled(ohms))
    }
}

/// Renders a scaled value: no decimals when whole, otherwise two decimal
/// places with trailing zeros trimmed.
fn format_scaled(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let rendered = format!("{value:.2}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
