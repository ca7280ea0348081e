//! Peak decoding
//!
//! Peaks arrive as a compact string with one character per sample, using a
//! 64-symbol alphabet: `A-Z` (0-25), `a-z` (26-51), `0-9` (52-61), `+` (62)
//! and `/` (63, the terminal symbol). Characters outside the alphabet are
//! dropped, so malformed input degrades to a shorter sequence.

use serde::{Deserialize, Serialize};

/// Highest symbol value, used to normalize peaks into `0.0..=1.0`
pub const MAX_SYMBOL: u8 = 63;

fn symbol_value(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a' + 26),
        '0'..='9' => Some(c as u8 - b'0' + 52),
        '+' => Some(62),
        '/' => Some(MAX_SYMBOL),
        _ => None,
    }
}

/// Decode an encoded peak string into symbol values in `0..=63`
pub fn decode(encoded: &str) -> Vec<u8> {
    encoded.chars().filter_map(symbol_value).collect()
}

/// Normalized amplitude samples of one track
///
/// Built once from the encoded string and never mutated; rendering at a new
/// width resamples it instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeakSequence {
    peaks: Vec<f64>,
}

impl PeakSequence {
    /// Decode and normalize an encoded peak string
    pub fn decode(encoded: &str) -> Self {
        Self {
            peaks: decode(encoded)
                .into_iter()
                .map(|symbol| f64::from(symbol) / f64::from(MAX_SYMBOL))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.peaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peaks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.peaks.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.peaks
    }

    /// Peak at a position between 0 (first peak) and 1 (last peak)
    ///
    /// Positions between two peaks are linearly interpolated. The fraction is
    /// clamped, and `None` is returned for an empty sequence.
    pub fn sample(&self, fraction: f64) -> Option<f64> {
        let last = self.peaks.len().checked_sub(1)?;
        let float_index = fraction.clamp(0.0, 1.0) * last as f64;
        let previous = float_index.floor() as usize;
        let next = (float_index.ceil() as usize).min(last);

        if previous == next {
            return Some(self.peaks[previous]);
        }

        let bias = float_index - previous as f64;
        Some(self.peaks[previous] * (1.0 - bias) + self.peaks[next] * bias)
    }
}
