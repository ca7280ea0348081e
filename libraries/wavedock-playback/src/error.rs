//! Error types for playback management

use thiserror::Error;
use wavedock_core::TrackId;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Track index not present on the page
    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    /// Operation needs a mounted track
    #[error("No active track")]
    NoActiveTrack,

    /// Preference storage backend failed
    #[error("Preference store error: {0}")]
    Store(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Preference file could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
