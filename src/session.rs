//! Mutable "current encoding" state for interactive front-ends.
//!
//! The codec itself is stateless; a front-end (TUI, web form, REPL) owns one
//! [`Session`] and mutates it as the user clicks bands or submits a target
//! value. The session re-runs the forward codec after every mutation so the
//! cached [`Measurement`] is always current. A single logical actor owns the
//! session; nothing here is shared or synchronized.

use crate::codec;
use crate::models::{BandColor, BandMode, Measurement};

/// Current band layout, chosen colors, and the measurement derived from them.
#[derive(Debug, Clone)]
pub struct Session {
    mode: BandMode,
    bands: Vec<BandColor>,
    measurement: Measurement,
}

impl Session {
    /// Creates a session with the classic starting encoding:
    /// 4-band `brown black red gold` (1 kΩ ±5%).
    #[must_use]
    pub fn new() -> Self {
        let mode = BandMode::Four;
        let bands = vec![
            BandColor::Brown,
            BandColor::Black,
            BandColor::Red,
            BandColor::Gold,
        ];
        let measurement = codec::encode(mode, &bands);
        Self {
            mode,
            bands,
            measurement,
        }
    }

    /// Active band layout.
    #[must_use]
    pub fn mode(&self) -> BandMode {
        self.mode
    }

    /// Current band colors, in band order.
    #[must_use]
    pub fn bands(&self) -> &[BandColor] {
        &self.bands
    }

    /// Measurement derived from the current bands.
    #[must_use]
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// Sets the color of one band and recomputes the measurement.
    ///
    /// Indices outside the current layout are ignored.
    pub fn set_band(&mut self, index: usize, color: BandColor) {
        if index < self.mode.band_count() {
            self.bands[index] = color;
            self.recompute();
        }
    }

    /// Switches between 4- and 5-band layouts, carrying the colors across
    /// with [`relayout`], and recomputes the measurement.
    pub fn set_mode(&mut self, mode: BandMode) {
        if mode == self.mode {
            return;
        }
        self.bands = relayout(&self.bands, mode);
        self.mode = mode;
        self.recompute();
    }

    /// Replaces the bands with the encoding of the nearest standard value to
    /// `ohms`, then recomputes.
    ///
    /// Returns the resulting measurement; the caller compares it against the
    /// requested target to decide whether a "closest standard value" notice
    /// is warranted.
    pub fn apply_target(&mut self, ohms: f64) -> Measurement {
        self.bands = codec::decode(ohms, self.mode);
        self.recompute();
        self.measurement
    }

    fn recompute(&mut self) {
        self.measurement = codec::encode(self.mode, &self.bands);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-layout convenience transform between 4- and 5-band color sequences.
///
/// This is a UI-level helper, not part of the codec: switching to 5 bands
/// inserts a `black` digit next to the multiplier band, switching to 4 bands
/// drops the digit next to the multiplier band. Digit bands are otherwise
/// preserved, and the transform is lossy in the 5→4 direction.
#[must_use]
pub fn relayout(bands: &[BandColor], target: BandMode) -> Vec<BandColor> {
    let get = |index: usize| bands.get(index).copied().unwrap_or(BandColor::Black);

    match (bands.len(), target) {
        // 5 -> 4: drop the third digit
        (5, BandMode::Four) => vec![get(0), get(1), get(3), get(4)],
        // 4 -> 5: insert a black digit before the multiplier
        (4, BandMode::Five) => vec![get(0), get(1), BandColor::Black, get(2), get(3)],
        // Already in the target layout
        _ => bands.to_vec(),
    }
}
