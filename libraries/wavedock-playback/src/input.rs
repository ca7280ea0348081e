//! Keyboard input mapping

use serde::{Deserialize, Serialize};
use wavedock_core::TrackId;

/// Keys the player reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Enter,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            " " => Self::Space,
            "Enter" => Self::Enter,
            _ => Self::Other,
        }
    }
}

/// Element that received the key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "track")]
pub enum KeyTarget {
    /// A track container (including its playback button)
    Track(TrackId),
    /// The range input layered over a track's waveform
    Waveform(TrackId),
    /// The docked player outside its timeline and volume inputs
    Docked,
    /// The docked player's timeline input
    DockedTimeline,
    /// The docked player's volume slider
    VolumeInput,
}

/// What a key press asks the player to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    /// Seek a track by a signed number of scrub steps
    Scrub { track: TrackId, direction: f64 },
    /// Scrub the active track
    ScrubActive { direction: f64 },
    /// Toggle a track
    Toggle(TrackId),
    /// Toggle the active track
    ToggleActive,
    /// Step the volume up (+1) or down (-1)
    VolumeStep(f64),
}

/// Resolve a key press to an action, or `None` to let the host handle it
pub fn key_action(target: KeyTarget, key: Key) -> Option<KeyAction> {
    let direction = match key {
        Key::ArrowLeft => Some(-1.0),
        Key::ArrowRight => Some(1.0),
        _ => None,
    };

    match target {
        KeyTarget::Track(track) => direction.map(|direction| KeyAction::Scrub { track, direction }),
        KeyTarget::Waveform(track) => match key {
            Key::Space | Key::Enter => Some(KeyAction::Toggle(track)),
            _ => direction.map(|direction| KeyAction::Scrub { track, direction }),
        },
        KeyTarget::Docked => direction.map(|direction| KeyAction::ScrubActive { direction }),
        KeyTarget::DockedTimeline => match key {
            Key::Space | Key::Enter => Some(KeyAction::ToggleActive),
            _ => direction.map(|direction| KeyAction::ScrubActive { direction }),
        },
        KeyTarget::VolumeInput => match key {
            Key::ArrowLeft | Key::ArrowDown => Some(KeyAction::VolumeStep(-1.0)),
            Key::ArrowRight | Key::ArrowUp => Some(KeyAction::VolumeStep(1.0)),
            _ => None,
        },
    }
}
