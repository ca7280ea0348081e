//! Wavedock Core
//!
//! Platform-agnostic building blocks shared by every Wavedock crate.
//!
//! The static-site generator renders the page markup; this crate models what
//! that markup hands to the interactivity layer:
//! - **Page Model**: `Page`, `PageTrack`, `TrackId` and query-string preselection
//! - **Formatting**: clock-style and written-out playback times
//! - **Localized Strings**: externally supplied message templates
//! - **Clipboard**: copy-button content resolution and feedback timing
//! - **Error Handling**: `CoreError` and `Result`
//!
//! # Example
//!
//! ```rust
//! use wavedock_core::{format_time, Page, PageTrack};
//!
//! let page = Page {
//!     tracks: vec![PageTrack::new("Intro", 83.4), PageTrack::new("Outro", 241.0)],
//!     disable_relative_waveforms: false,
//! };
//!
//! assert_eq!(page.longest_duration(), 241.0);
//! assert_eq!(format_time(241.0), "4:01");
//! ```

#![forbid(unsafe_code)]

pub mod clipboard;
pub mod error;
pub mod strings;
pub mod time;
pub mod types;

pub use error::{CoreError, Result};
pub use strings::{fill, Strings};
pub use time::{format_time, format_time_written_out};
pub use types::{preselect_index, Page, PageTrack, TrackId};
