/// Core error types for Wavedock
use thiserror::Error;

use crate::types::TrackId;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Wavedock
#[derive(Error, Debug)]
pub enum CoreError {
    /// A track index that the page does not contain
    #[error("Unknown track: {0}")]
    UnknownTrack(TrackId),

    /// Page or string table could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
