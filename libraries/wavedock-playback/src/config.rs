//! Player tunables

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playback configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Step for arrow-key seeking, in seconds
    pub scrub_seconds: f64,

    /// How often a pending seek checks the seekable ranges
    pub seek_poll_interval_ms: u64,

    /// Playhead refreshes per second while playing
    pub playhead_refresh_hz: u32,

    /// Volume change per arrow key press on the volume slider
    pub volume_key_step: f64,

    /// Volume change per unit of wheel delta
    pub wheel_sensitivity: f64,

    /// Preference key holding the persisted volume level
    pub volume_storage_key: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            scrub_seconds: 5.0,
            seek_poll_interval_ms: 30,
            playhead_refresh_hz: 24,
            volume_key_step: 0.02,
            wheel_sensitivity: 0.0001,
            volume_storage_key: "wavedockVolume".to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn seek_poll_interval(&self) -> Duration {
        Duration::from_millis(self.seek_poll_interval_ms.max(1))
    }

    pub fn playhead_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.playhead_refresh_hz.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intervals() {
        let config = PlayerConfig::default();
        assert_eq!(config.seek_poll_interval(), Duration::from_millis(30));
        assert_eq!(config.playhead_interval().as_micros(), 41_666);
    }

    #[test]
    fn zero_values_do_not_produce_zero_periods() {
        let config = PlayerConfig {
            seek_poll_interval_ms: 0,
            playhead_refresh_hz: 0,
            ..PlayerConfig::default()
        };
        assert_eq!(config.seek_poll_interval(), Duration::from_millis(1));
        assert_eq!(config.playhead_interval(), Duration::from_secs(1));
    }
}
