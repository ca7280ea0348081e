//! Player Events
//!
//! The controller never touches the page directly. Every visible change is
//! queued as a [`PlayerEvent`] and drained by the host, which applies it to
//! the markup:
//! - Track highlighting and playback icons
//! - Docked player contents and the player status for assistive technology
//! - Playhead position (continuous) and position announcements (discrete)
//! - Seek preview overlay on waveform hover
//! - Volume dial state

use serde::{Deserialize, Serialize};
use wavedock_core::TrackId;
use wavedock_waveform::GradientStops;

use crate::volume::VolumeView;

/// Icon shown in a playback button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackIcon {
    Play,
    Pause,
    Loading,
}

/// Events emitted by the page player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Track container classes changed
    TrackStyle {
        track: TrackId,
        /// Highlighted as the active or preselected track
        active: bool,
        /// Audibly playing
        playing: bool,
    },

    /// Playback button icons changed
    ///
    /// Always applies to the track's own button. When `docked` is set it also
    /// applies to the docked playback button and the listen button, whose
    /// label becomes `listen_label`.
    Icons {
        track: TrackId,
        icon: PlaybackIcon,
        docked: bool,
        listen_label: String,
    },

    /// A track was mounted into the docked player
    DockedMounted {
        track: TrackId,
        title: String,
        artists: Option<String>,
        number: Option<String>,
        current_time: String,
        total_time: String,
        duration: f64,
        next_enabled: bool,
    },

    /// Player opened or closed, with the status label for assistive technology
    PlayerStatus { open: bool, label: String },

    /// Playhead moved
    ///
    /// `stops` is present for tracks with a waveform. When `docked` is set the
    /// docked timeline shows the same position.
    Playhead {
        track: TrackId,
        docked: bool,
        factor: f64,
        current_time: f64,
        text: String,
        stops: Option<GradientStops>,
    },

    /// Accessible playhead value text changed
    PlayheadAnnounced {
        track: TrackId,
        docked: bool,
        value_text: String,
    },

    /// Seek preview overlay on a waveform; `None` hides it
    SeekPreview {
        track: TrackId,
        stops: Option<GradientStops>,
    },

    /// Volume level changed
    VolumeChanged { view: VolumeView },
}

impl PlayerEvent {
    /// Track the event concerns, if any
    pub fn track(&self) -> Option<TrackId> {
        match self {
            Self::TrackStyle { track, .. }
            | Self::Icons { track, .. }
            | Self::DockedMounted { track, .. }
            | Self::Playhead { track, .. }
            | Self::PlayheadAnnounced { track, .. }
            | Self::SeekPreview { track, .. } => Some(*track),
            Self::PlayerStatus { .. } | Self::VolumeChanged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_variant_tag() {
        let event = PlayerEvent::TrackStyle {
            track: TrackId::new(1),
            active: true,
            playing: false,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"TrackStyle":{"track":1,"active":true,"playing":false}}"#);
    }

    #[test]
    fn global_events_have_no_track() {
        let event = PlayerEvent::PlayerStatus {
            open: false,
            label: "Player closed".to_string(),
        };
        assert_eq!(event.track(), None);
    }
}
