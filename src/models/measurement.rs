//! Derived measurement produced by the forward codec.

use serde::Serialize;

/// Resistance reading derived from a set of band colors.
///
/// Recomputed on every band change; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    /// Resistance in ohms. May be fractional when the multiplier band is
    /// gold (×0.1) or silver (×0.01).
    pub ohms: f64,
    /// Tolerance half-width in percent.
    pub tolerance_percent: f64,
    /// Whether the resistance sits on the standard series (within 1%).
    pub standard: bool,
}

impl Measurement {
    /// Warning text for off-series values, empty otherwise.
    #[must_use]
    pub fn warning(&self) -> &'static str {
        if self.standard {
            ""
        } else {
            "⚠ Non-standard value"
        }
    }
}
