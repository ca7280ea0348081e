//! Wavedock CLI Library
//!
//! Terminal front end for the Wavedock libraries: decode peak strings, render
//! waveform SVGs from a page manifest, preview browse queries and manage the
//! persisted volume.
//!
//! This library exposes the commands for testing purposes.

pub mod commands;
pub mod config;
pub mod error;

pub use commands::VolumeAction;
pub use config::Settings;
pub use error::{CliError, Result};
