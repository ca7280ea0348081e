//! Page model handed over by the static-site generator

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One track container on the page
///
/// Mirrors the data attributes and child elements the generator emits for
/// each `.track` element, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTrack {
    /// Display number (e.g. "3."), absent on single-track pages
    #[serde(default)]
    pub number: Option<String>,

    /// Track title
    pub title: String,

    /// Pre-rendered artist list, if the track credits artists
    #[serde(default)]
    pub artists: Option<String>,

    /// Duration in seconds
    pub duration: f64,

    /// Encoded peak string from the waveform svg (`data-peaks`)
    #[serde(default)]
    pub peaks: Option<String>,
}

impl PageTrack {
    /// Create a track with only a title and duration
    pub fn new(title: impl Into<String>, duration: f64) -> Self {
        Self {
            number: None,
            title: title.into(),
            artists: None,
            duration,
            peaks: None,
        }
    }

    /// Attach an encoded peak string
    pub fn with_peaks(mut self, peaks: impl Into<String>) -> Self {
        self.peaks = Some(peaks.into());
        self
    }

    /// Attach a display number
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }
}

/// Everything the interactivity layer reads from one rendered page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Tracks in document order
    pub tracks: Vec<PageTrack>,

    /// Set when the page carries `data-disable-relative-waveforms`
    #[serde(default)]
    pub disable_relative_waveforms: bool,
}

impl Page {
    /// Parse a page manifest from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Duration of the longest track (`data-longest-duration`), 0 for an empty page
    pub fn longest_duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(|track| track.duration)
            .fold(0.0, f64::max)
    }
}

/// Resolve the preselected track from a `?<n>` query string
///
/// Only a query consisting of `?` followed by ASCII digits is honored. `?n`
/// selects the n-th track (one-based), `?0` behaves like `?1`. Returns `None`
/// when the query does not match or points past the last track, in which
/// case the first track stays preselected.
pub fn preselect_index(query: &str, track_count: usize) -> Option<usize> {
    let digits = query.strip_prefix('?')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let number: usize = digits.parse().ok()?;
    let index = number.saturating_sub(1);
    (index < track_count).then_some(index)
}
