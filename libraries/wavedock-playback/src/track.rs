//! Tracks and seek requests

use serde::{Deserialize, Serialize};
use wavedock_core::{PageTrack, TrackId};

use crate::media::MediaElement;
use crate::task::IntervalTask;

/// Playback state of one track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackState {
    /// Not mounted in the docked player
    Idle,
    /// Mounted, playback requested but not yet started
    Loading,
    /// Mounted, waiting for the seek target to become seekable
    Seeking,
    /// Mounted and audibly playing
    Playing,
    /// Mounted and paused
    Paused,
}

/// A seek waiting for its target to become seekable
///
/// Owns its polling task, so dropping the request cancels the polling.
#[derive(Debug, Clone, PartialEq)]
pub struct SeekRequest {
    to: f64,
    closest_performed: f64,
    task: IntervalTask,
}

impl SeekRequest {
    pub fn new(to: f64, task: IntervalTask) -> Self {
        Self {
            to,
            closest_performed: 0.0,
            task,
        }
    }

    /// Target position in seconds
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Point the request at a new target, keeping its polling task
    pub fn redirect(&mut self, to: f64) {
        self.to = to;
    }

    /// Furthest partial seek performed while waiting
    pub fn closest_performed(&self) -> f64 {
        self.closest_performed
    }

    pub fn task(&self) -> &IntervalTask {
        &self.task
    }

    pub(crate) fn task_mut(&mut self) -> &mut IntervalTask {
        &mut self.task
    }

    pub(crate) fn record_partial(&mut self, position: f64) {
        self.closest_performed = position;
    }
}

/// One track on the page with its media element
#[derive(Debug)]
pub struct Track<M> {
    id: TrackId,
    title: String,
    artists: Option<String>,
    number: Option<String>,
    duration: f64,
    media: M,
    next: Option<TrackId>,
    has_waveform: bool,
    highlighted: bool,
    playing: bool,
    seek: Option<SeekRequest>,
}

impl<M: MediaElement> Track<M> {
    pub fn new(id: TrackId, page_track: PageTrack, media: M) -> Self {
        Self {
            id,
            has_waveform: page_track.peaks.is_some(),
            title: page_track.title,
            artists: page_track.artists,
            number: page_track.number,
            duration: page_track.duration,
            media,
            next: None,
            highlighted: false,
            playing: false,
            seek: None,
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artists(&self) -> Option<&str> {
        self.artists.as_deref()
    }

    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Following track in document order
    pub fn next(&self) -> Option<TrackId> {
        self.next
    }

    pub fn has_waveform(&self) -> bool {
        self.has_waveform
    }

    /// Highlighted as the active or preselected track
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn seek(&self) -> Option<&SeekRequest> {
        self.seek.as_ref()
    }

    /// Current state, given whether this track is the active one
    pub fn state(&self, active: bool) -> TrackState {
        if self.seek.is_some() {
            TrackState::Seeking
        } else if !active {
            TrackState::Idle
        } else if self.media.is_paused() {
            TrackState::Paused
        } else if self.playing {
            TrackState::Playing
        } else {
            TrackState::Loading
        }
    }

    /// Playback progress in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.media.current_time() / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub(crate) fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub(crate) fn set_next(&mut self, next: Option<TrackId>) {
        self.next = next;
    }

    pub(crate) fn set_style(&mut self, highlighted: bool, playing: bool) {
        self.highlighted = highlighted;
        self.playing = playing;
    }

    pub(crate) fn seek_mut(&mut self) -> Option<&mut SeekRequest> {
        self.seek.as_mut()
    }

    pub(crate) fn set_seek(&mut self, seek: Option<SeekRequest>) -> Option<SeekRequest> {
        std::mem::replace(&mut self.seek, seek)
    }
}
