/// ID types for Wavedock entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Tracks are numbered in document order when the page loads and keep that
/// index for the lifetime of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(usize);

impl TrackId {
    /// Create a track ID from its document-order index
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the document-order index
    pub fn index(self) -> usize {
        self.0
    }

    /// One-based position, as used in element ids and query strings
    pub fn number(self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for TrackId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}
