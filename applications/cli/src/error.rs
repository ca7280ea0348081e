/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid page manifest: {0}")]
    Manifest(#[from] wavedock_core::CoreError),

    #[error(transparent)]
    Playback(#[from] wavedock_playback::PlaybackError),

    #[error(transparent)]
    Browse(#[from] wavedock_browse::BrowseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
