//! Wavedock - Waveforms
//!
//! Decodes the compact peak strings emitted by the site generator and renders
//! them as SVG outlines sized to the page.
//!
//! This crate provides:
//! - Peak decoding into immutable, normalized peak sequences
//! - Layout of per-track widths (optionally relative to track duration)
//! - Resampling with linear interpolation and path generation
//! - Resize debouncing through a tolerance band
//! - Gradient stop offsets for the playback and seek overlays
//! - Standalone SVG markup
//!
//! # Example
//!
//! ```rust
//! use wavedock_core::{Page, PageTrack};
//! use wavedock_waveform::{WaveformConfig, WaveformRenderer};
//!
//! let page = Page {
//!     tracks: vec![PageTrack::new("Intro", 61.0).with_peaks("AEIMQUYcgkosw048")],
//!     disable_relative_waveforms: false,
//! };
//!
//! let mut renderer = WaveformRenderer::new(&page, WaveformConfig::default());
//! let rendered = renderer.render(&[720.0], &page).unwrap();
//! assert!(rendered[0].path.starts_with("M 0.00,"));
//!
//! // Small resizes are ignored
//! assert!(renderer.render(&[730.0], &page).is_none());
//! ```

#![forbid(unsafe_code)]

pub mod peaks;
pub mod render;
pub mod svg;

pub use peaks::{decode, PeakSequence};
pub use render::{
    path_data, resample, GradientStops, Point, RenderState, RenderedWaveform, WaveformConfig,
    WaveformLayout, WaveformRenderer,
};
