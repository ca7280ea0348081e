//! Media element abstraction
//!
//! Each track owns one platform media element (an `<audio>` element in the
//! browser). The controller drives it through this trait and learns about
//! asynchronous state changes through [`MediaEvent`]s the host forwards.

use serde::{Deserialize, Serialize};

/// A seekable time range reported by a media element, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

/// Platform media element
///
/// `play` and `pause` only request a transition; completion is reported
/// later via [`MediaEvent::Play`] and [`MediaEvent::Pause`]. `is_paused`
/// reflects the requested state immediately.
pub trait MediaElement {
    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Playback position in seconds
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    /// Seekable ranges, ordered by start time
    fn seekable(&self) -> Vec<TimeRange>;

    /// Volume level in `0.0..=1.0`
    fn set_volume(&mut self, level: f64);

    /// Switch the element to full preloading, if it is not already
    fn ensure_preloaded(&mut self);
}

/// Asynchronous notifications from a media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaEvent {
    /// Playback was requested and is starting
    Play,
    /// Playback actually started or resumed after buffering
    Playing,
    /// Playback paused
    Pause,
    /// Playback stalled waiting for data
    Waiting,
    /// Playback reached the end
    Ended,
}

impl MediaEvent {
    /// Map a DOM media event name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "play" => Some(Self::Play),
            "playing" => Some(Self::Playing),
            "pause" => Some(Self::Pause),
            "waiting" => Some(Self::Waiting),
            "ended" => Some(Self::Ended),
            _ => None,
        }
    }
}
