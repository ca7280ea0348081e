//! Volume control
//!
//! A linear level in `0.0..=1.0` that survives reloads through a
//! [`PreferenceStore`]. Muting zeroes the level and remembers the previous
//! one; any other change forgets it, so unmuting after dragging to zero
//! restores full volume.

use serde::{Deserialize, Serialize};
use tracing::warn;
use wavedock_core::Strings;

use crate::error::Result;
use crate::store::PreferenceStore;

/// Radius of the volume dial in its 64x64 viewBox
pub const DIAL_RADIUS: f64 = 32.0;

const DIAL_INNER_RADIUS: f64 = DIAL_RADIUS * 0.8;
const DIAL_BEGIN_ANGLE: f64 = -135.0;
const DIAL_SWEEP: f64 = 270.0;

fn clamp_level(level: f64) -> f64 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

/// Volume state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    level: f64,
    restore_level: Option<f64>,
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Volume {
    pub fn new(level: f64) -> Self {
        Self {
            level: clamp_level(level),
            restore_level: None,
        }
    }

    /// Load the persisted level
    ///
    /// Falls back to full volume when nothing is stored, the stored value is
    /// not a number in `0.0..=1.0`, or the store cannot be read.
    pub fn load(store: &dyn PreferenceStore, key: &str) -> Self {
        let stored = match store.get(key) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(key, error = %e, "Failed to read persisted volume");
                None
            }
        };

        let level = stored.and_then(|value| match value.trim().parse::<f64>() {
            Ok(level) if (0.0..=1.0).contains(&level) => Some(level),
            _ => {
                warn!(key, value = %value, "Ignoring persisted volume outside 0..=1");
                None
            }
        });

        Self::new(level.unwrap_or(1.0))
    }

    /// Persist the level as a decimal string
    pub fn persist(&self, store: &mut dyn PreferenceStore, key: &str) -> Result<()> {
        store.set(key, &self.level.to_string())
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// Level to return to when unmuting, if muted through the mute toggle
    pub fn restore_level(&self) -> Option<f64> {
        self.restore_level
    }

    pub fn is_muted(&self) -> bool {
        self.level == 0.0
    }

    /// Set an absolute level, e.g. from dragging the slider
    pub fn set_level(&mut self, level: f64) {
        self.level = clamp_level(level);
        self.restore_level = None;
    }

    /// Change the level by a delta, e.g. from arrow keys or the wheel
    pub fn adjust(&mut self, delta: f64) {
        self.set_level(self.level + delta);
    }

    /// Mute, remembering the current level, or restore
    pub fn toggle_mute(&mut self) {
        if self.level > 0.0 {
            self.restore_level = Some(self.level);
            self.level = 0.0;
        } else {
            self.level = self.restore_level.take().unwrap_or(1.0);
        }
    }
}

/// Everything the volume dial and slider display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeView {
    pub level: f64,
    pub muted: bool,
    /// Title of the mute button ("Mute" or "Unmute")
    pub button_title: String,
    /// Rotation of the knob around the dial center, in degrees
    pub knob_angle: f64,
    /// Path data of the filled part of the ring, empty at level 0
    pub active_range: String,
    /// Path data of the unfilled part of the ring, empty at level 1
    pub inactive_range: String,
    /// Accessible value text of the slider
    pub value_text: String,
}

impl VolumeView {
    pub fn new(volume: &Volume, strings: &Strings) -> Self {
        let level = volume.level();
        let arc = level * DIAL_SWEEP;

        Self {
            level,
            muted: volume.is_muted(),
            button_title: if level > 0.0 {
                strings.mute.clone()
            } else {
                strings.unmute.clone()
            },
            knob_angle: DIAL_BEGIN_ANGLE + arc,
            active_range: if level > 0.0 {
                ring_segment(DIAL_BEGIN_ANGLE, arc)
            } else {
                String::new()
            },
            inactive_range: if level < 1.0 {
                ring_segment(DIAL_BEGIN_ANGLE + arc, DIAL_SWEEP - arc)
            } else {
                String::new()
            },
            value_text: format!("{} {}%", strings.volume, format_percent(level)),
        }
    }

    /// `transform` attribute for the knob
    pub fn knob_transform(&self) -> String {
        format!("rotate({} {} {})", self.knob_angle, DIAL_RADIUS, DIAL_RADIUS)
    }
}

/// Percentage with one decimal when the fractional part is noticeable
fn format_percent(level: f64) -> String {
    // Snap away float noise such as 28.999999999999996
    let percent = (level * 100.0 * 1e6).round() / 1e6;

    if percent % 1.0 > 0.1 {
        format!("{}", (percent * 10.0).trunc() / 10.0)
    } else {
        format!("{}", percent.trunc())
    }
}

/// Path data of a ring segment of the dial
///
/// Angles are in degrees, clockwise from 12 o'clock.
pub fn ring_segment(begin_angle: f64, arc_angle: f64) -> String {
    let large_arc = u8::from(arc_angle >= 180.0);

    let begin = begin_angle.to_radians();
    let end = (begin_angle + arc_angle).to_radians();
    let (begin_x, begin_y) = (begin.sin(), -begin.cos());
    let (end_x, end_y) = (end.sin(), -end.cos());

    let at = |radius: f64, x: f64, y: f64| {
        format!("{:.3},{:.3}", DIAL_RADIUS + x * radius, DIAL_RADIUS + y * radius)
    };

    format!(
        "M {} A {r} {r} 0 {large} 1 {} L {} A {ri} {ri} 0 {large} 0 {} Z",
        at(DIAL_RADIUS, begin_x, begin_y),
        at(DIAL_RADIUS, end_x, end_y),
        at(DIAL_INNER_RADIUS, end_x, end_y),
        at(DIAL_INNER_RADIUS, begin_x, begin_y),
        r = DIAL_RADIUS,
        ri = DIAL_INNER_RADIUS,
        large = large_arc,
    )
}
