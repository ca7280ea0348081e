//! CLI command tests against temporary manifests, catalogs and stores

use std::fs;

use tempfile::TempDir;
use wavedock_cli::commands::{self, VolumeAction};
use wavedock_cli::{CliError, Settings};
use wavedock_core::Strings;
use wavedock_playback::PlayerConfig;
use wavedock_waveform::WaveformConfig;

// ===== Test Helpers =====

const MANIFEST: &str = r#"{
    "tracks": [
        { "number": "1.", "title": "Intro", "duration": 60.0, "peaks": "AEIMQUYcgkosw048" },
        { "number": "2.", "title": "Interlude", "duration": 30.0 },
        { "number": "3.", "title": "Naseeb", "duration": 120.0, "peaks": "/+9876543210zyxw" }
    ]
}"#;

const CATALOG: &str = r#"{
    "root_prefix": "../",
    "releases": [
        {
            "title": "Elevator Music",
            "url": "elevator-music/",
            "tracks": [
                { "number": "1.", "title": "Intro", "url": "elevator-music/1/" },
                { "number": "5.", "title": "Naseeb", "url": "elevator-music/5/" }
            ]
        }
    ]
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ===== Render =====

#[test]
fn test_render_skips_tracks_without_peaks() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.json", MANIFEST);

    let files = commands::render_manifest(&manifest, &[720.0], &WaveformConfig::default()).unwrap();

    let numbers: Vec<usize> = files.iter().map(|file| file.number).collect();
    assert_eq!(numbers, vec![1, 3]);
    assert_eq!(files[1].title, "Naseeb");
    assert!(files[0].markup.starts_with("<svg"));
}

#[test]
fn test_render_writes_svg_files() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.json", MANIFEST);
    let out = dir.path().join("out").join("waveforms");

    let files = commands::render_manifest(&manifest, &[1200.0, 900.0], &WaveformConfig::default())
        .unwrap();
    let written = commands::write_waveforms(&out, &files).unwrap();

    assert_eq!(written, vec![out.join("waveform-1.svg"), out.join("waveform-3.svg")]);
    assert_eq!(fs::read_to_string(&written[0]).unwrap(), files[0].markup);
}

#[test]
fn test_render_rejects_malformed_manifest() {
    let dir = TempDir::new().unwrap();
    let manifest = write(&dir, "page.json", "{ \"tracks\": [ { \"title\": \"x\" } ] }");

    let result = commands::render_manifest(&manifest, &[720.0], &WaveformConfig::default());
    assert!(matches!(result, Err(CliError::Manifest(_))));
}

// ===== Search =====

#[test]
fn test_search_lists_matching_rows() {
    let dir = TempDir::new().unwrap();
    let catalog = write(&dir, "catalog.json", CATALOG);

    let report = commands::search_catalog(&catalog, Some("nase"), &Strings::default()).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Showing 1 results for 'nase'");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("5. Naseeb"));
    assert!(lines[1].ends_with("../elevator-music/5/"));
}

#[test]
fn test_search_without_query_shows_featured() {
    let dir = TempDir::new().unwrap();
    let catalog = write(&dir, "catalog.json", CATALOG);

    let report = commands::search_catalog(&catalog, None, &Strings::default()).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Showing featured items");
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Elevator Music"));
}

#[test]
fn test_search_nothing_found() {
    let dir = TempDir::new().unwrap();
    let catalog = write(&dir, "catalog.json", CATALOG);

    let report = commands::search_catalog(&catalog, Some("zzz"), &Strings::default()).unwrap();
    assert_eq!(report, "Nothing found for 'zzz'\n");
}

// ===== Volume =====

#[test]
fn test_volume_defaults_to_full() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("preferences.json");

    let report = commands::volume(
        VolumeAction::Get,
        &prefs,
        &PlayerConfig::default(),
        &Strings::default(),
    )
    .unwrap();

    assert_eq!(report, "Volume 100% (Mute)");
    assert!(!prefs.exists());
}

#[test]
fn test_volume_changes_persist() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("nested").join("preferences.json");
    let config = PlayerConfig::default();
    let strings = Strings::default();

    commands::volume(VolumeAction::Set(0.5), &prefs, &config, &strings).unwrap();
    let report = commands::volume(VolumeAction::Up, &prefs, &config, &strings).unwrap();
    assert_eq!(report, "Volume 52% (Mute)");

    let report = commands::volume(VolumeAction::Mute, &prefs, &config, &strings).unwrap();
    assert_eq!(report, "Volume 0% (Unmute)");

    // The restore level is not persisted
    let report = commands::volume(VolumeAction::Mute, &prefs, &config, &strings).unwrap();
    assert_eq!(report, "Volume 100% (Mute)");
}

#[test]
fn test_volume_set_clamps() {
    let dir = TempDir::new().unwrap();
    let prefs = dir.path().join("preferences.json");

    let report = commands::volume(
        VolumeAction::Set(3.0),
        &prefs,
        &PlayerConfig::default(),
        &Strings::default(),
    )
    .unwrap();
    assert_eq!(report, "Volume 100% (Mute)");
}

// ===== Settings =====

fn environment(vars: &[(&str, &str)]) -> config::Environment {
    let map = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    config::Environment::with_prefix("WAVEDOCK").source(Some(map))
}

#[test]
fn test_settings_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "config.toml",
        r#"
[waveform]
relative_waveforms = false

[player]
scrub_seconds = 10.0

[strings]
listen = "Anhören"

[storage]
preferences_path = "/tmp/wavedock-prefs.json"
"#,
    );

    let settings = Settings::load_with(Some(path.as_path()), environment(&[])).unwrap();

    assert!(!settings.waveform.relative_waveforms);
    assert_eq!(settings.waveform.font_size_px, 16.0);
    assert_eq!(settings.player.scrub_seconds, 10.0);
    assert_eq!(settings.player.seek_poll_interval_ms, 30);
    assert_eq!(settings.strings.listen, "Anhören");
    assert_eq!(settings.strings.pause, "Pause");
    assert_eq!(
        settings.storage.preferences_path,
        std::path::PathBuf::from("/tmp/wavedock-prefs.json")
    );
}

#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "config.toml", "[player]\nscrub_seconds = 10.0\n");

    let settings = Settings::load_with(
        Some(path.as_path()),
        environment(&[
            ("WAVEDOCK_PLAYER__SCRUB_SECONDS", "2.5"),
            ("WAVEDOCK_PLAYER__PLAYHEAD_REFRESH_HZ", "60"),
        ]),
    )
    .unwrap();

    assert_eq!(settings.player.scrub_seconds, 2.5);
    assert_eq!(settings.player.playhead_refresh_hz, 60);
    settings.validate().unwrap();
}

#[test]
fn test_missing_explicit_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load_with(Some(dir.path().join("missing.toml").as_path()), environment(&[]));
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[test]
fn test_invalid_settings_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "config.toml", "[player]\nseek_poll_interval_ms = 0\n");

    let settings = Settings::load_with(Some(path.as_path()), environment(&[])).unwrap();
    assert!(matches!(settings.validate(), Err(CliError::Config(_))));
}
