//! Wavedock - Playback
//!
//! Platform-agnostic playback control for statically generated music pages.
//!
//! This crate provides:
//! - One page-level controller owning every track and the docked player
//! - Per-track states (idle, loading, seeking, playing, paused)
//! - Seeking that waits for the target to become seekable
//! - Deferred track switches that wait for the previous track's pause
//! - Playhead refresh and screen reader announcements
//! - Volume control with mute/restore and persistence
//! - Keyboard mapping for tracks, waveforms and the docked player
//!
//! # Architecture
//!
//! `wavedock-playback` never touches the DOM:
//! - Media elements are driven through the [`MediaElement`] trait
//! - Asynchronous media notifications come in as [`MediaEvent`]s
//! - Time comes in through [`PagePlayer::advance`]
//! - Visible changes go out as [`PlayerEvent`]s
//!
//! The browser bindings live behind the `wasm` feature. They also cover the
//! browse overlay and the copy buttons, so a page loads one module.
//!
//! # Example
//!
//! ```rust
//! use wavedock_core::{PageTrack, Strings, TrackId};
//! use wavedock_playback::{
//!     MediaElement, MediaEvent, MemoryStore, PagePlayer, PlayerConfig, TimeRange, TrackState,
//! };
//!
//! struct Silent { paused: bool, time: f64 }
//!
//! impl MediaElement for Silent {
//!     fn play(&mut self) { self.paused = false; }
//!     fn pause(&mut self) { self.paused = true; }
//!     fn is_paused(&self) -> bool { self.paused }
//!     fn current_time(&self) -> f64 { self.time }
//!     fn set_current_time(&mut self, seconds: f64) { self.time = seconds; }
//!     fn seekable(&self) -> Vec<TimeRange> { vec![TimeRange::new(0.0, 180.0)] }
//!     fn set_volume(&mut self, _level: f64) {}
//!     fn ensure_preloaded(&mut self) {}
//! }
//!
//! let mut player = PagePlayer::new(
//!     vec![(PageTrack::new("Intro", 180.0), Silent { paused: true, time: 0.0 })],
//!     None,
//!     Box::new(MemoryStore::new()),
//!     Strings::default(),
//!     PlayerConfig::default(),
//! );
//!
//! player.listen().unwrap();
//! player.handle_media_event(TrackId::new(0), MediaEvent::Play).unwrap();
//! assert_eq!(player.track_state(TrackId::new(0)), Some(TrackState::Playing));
//!
//! for event in player.drain_events() {
//!     // apply to the page
//!     let _ = event;
//! }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod input;
pub mod media;
pub mod store;
pub mod task;
pub mod track;
pub mod volume;

// WASM bindings (only compiled when wasm feature is enabled)
#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::PlayerConfig;
pub use controller::{PagePlayer, PendingSwitch};
pub use error::{PlaybackError, Result};
pub use events::{PlaybackIcon, PlayerEvent};
pub use input::{key_action, Key, KeyAction, KeyTarget};
pub use media::{MediaElement, MediaEvent, TimeRange};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use task::IntervalTask;
pub use track::{SeekRequest, Track, TrackState};
pub use volume::{ring_segment, Volume, VolumeView};
