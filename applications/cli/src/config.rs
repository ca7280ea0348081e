/// CLI settings
///
/// Layered from an optional TOML file and `WAVEDOCK_` environment variables,
/// e.g. `WAVEDOCK_PLAYER__SCRUB_SECONDS=10`.
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wavedock_core::Strings;
use wavedock_playback::PlayerConfig;
use wavedock_waveform::WaveformConfig;

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "WAVEDOCK";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub waveform: WaveformConfig,

    #[serde(default)]
    pub player: PlayerConfig,

    #[serde(default)]
    pub strings: Strings,

    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// JSON file holding persisted preferences
    #[serde(default = "default_preferences_path")]
    pub preferences_path: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            preferences_path: default_preferences_path(),
        }
    }
}

impl Settings {
    /// Load settings from `config_path` (or the default location) and the
    /// process environment
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with(
            config_path,
            config::Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Load settings with an explicit environment source
    ///
    /// An explicit `config_path` must exist; the default location is optional.
    pub fn load_with(config_path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        builder = match config_path {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => match default_config_path() {
                Some(path) => builder.add_source(config::File::from(path).required(false)),
                None => builder,
            },
        };

        builder = builder.add_source(
            environment
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(preferences = ?settings.storage.preferences_path, "Settings loaded");
        Ok(settings)
    }

    /// Reject values the libraries cannot work with
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.waveform.font_size_px) {
            return Err(CliError::Config(format!(
                "waveform.font_size_px must be positive, got {}",
                self.waveform.font_size_px
            )));
        }

        if !is_positive(self.waveform.samples_per_px) {
            return Err(CliError::Config(format!(
                "waveform.samples_per_px must be positive, got {}",
                self.waveform.samples_per_px
            )));
        }

        if self.player.seek_poll_interval_ms == 0 {
            return Err(CliError::Config(
                "player.seek_poll_interval_ms must be at least 1".to_string(),
            ));
        }

        if self.player.playhead_refresh_hz == 0 {
            return Err(CliError::Config(
                "player.playhead_refresh_hz must be at least 1".to_string(),
            ));
        }

        if self.player.volume_storage_key.is_empty() {
            return Err(CliError::Config(
                "player.volume_storage_key must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// `$XDG_CONFIG_HOME/wavedock/config.toml` or the platform equivalent
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wavedock").join("config.toml"))
}

fn default_preferences_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("wavedock")
        .join("preferences.json")
}
