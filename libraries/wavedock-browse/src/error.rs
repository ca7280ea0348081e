/// Browse error types
use thiserror::Error;

/// Result type alias using `BrowseError`
pub type Result<T> = std::result::Result<T, BrowseError>;

#[derive(Error, Debug)]
pub enum BrowseError {
    /// The catalog literal is not valid JSON or misses required fields
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
