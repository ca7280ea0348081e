//! Command implementations
//!
//! Each command returns the text to print so the binary stays a thin shell
//! around argument parsing.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use wavedock_browse::{Browser, BrowseTrigger, Catalog};
use wavedock_core::{Page, Strings};
use wavedock_playback::{FileStore, PlayerConfig, Volume, VolumeView};
use wavedock_waveform::{decode, svg, WaveformConfig, WaveformRenderer};

use crate::error::Result;

/// Decoded symbol values of a peak string, space separated
pub fn decode_peaks(encoded: &str) -> String {
    decode(encoded)
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One rendered waveform as standalone SVG
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformFile {
    /// One-based track number
    pub number: usize,
    pub title: String,
    pub markup: String,
}

impl WaveformFile {
    pub fn file_name(&self) -> String {
        format!("waveform-{}.svg", self.number)
    }
}

/// Lay out and render every waveform of a page manifest
///
/// `container_widths_px` is one batch of observed container widths; the
/// narrowest one determines the layout.
pub fn render_manifest(
    manifest: &Path,
    container_widths_px: &[f64],
    config: &WaveformConfig,
) -> Result<Vec<WaveformFile>> {
    let page = Page::from_json(&fs::read_to_string(manifest)?)?;
    let mut renderer = WaveformRenderer::new(&page, config.clone());

    let rendered = renderer
        .render(container_widths_px, &page)
        .unwrap_or_default();

    Ok(rendered
        .iter()
        .map(|waveform| WaveformFile {
            number: waveform.track.number(),
            title: page.tracks[waveform.track.index()].title.clone(),
            markup: svg::markup(waveform),
        })
        .collect())
}

/// Write rendered waveforms into `dir`, returning the written paths
pub fn write_waveforms(dir: &Path, files: &[WaveformFile]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(file.file_name());
        fs::write(&path, &file.markup)?;
        info!(track = file.number, path = %path.display(), "Wrote waveform");
        written.push(path);
    }

    Ok(written)
}

/// Run a browse query against a catalog, as the overlay would show it
///
/// Prints the status line followed by one line per visible row.
pub fn search_catalog(catalog: &Path, query: Option<&str>, strings: &Strings) -> Result<String> {
    let catalog = Catalog::load(catalog)?;
    let mut browser = Browser::new(&catalog, strings.clone());
    browser.open(BrowseTrigger::Header);
    browser.set_query(query.unwrap_or_default());

    let status = browser.status();
    let mut out = status
        .aria_label
        .clone()
        .unwrap_or_else(|| status.text.clone());
    out.push('\n');

    for row in browser.visible_rows() {
        let title = match &row.number {
            Some(number) => format!("{} {}", number, row.title),
            None => row.title.clone(),
        };
        // Writing to a String cannot fail
        let _ = writeln!(out, "  {:<40} {}", title, row.href);
    }

    Ok(out)
}

/// Change to the persisted volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeAction {
    Get,
    Set(f64),
    Up,
    Down,
    Mute,
}

/// Apply a volume action to the file preference store
///
/// Only the level is persisted, so unmuting from the command line restores
/// full volume.
pub fn volume(
    action: VolumeAction,
    preferences: &Path,
    config: &PlayerConfig,
    strings: &Strings,
) -> Result<String> {
    let mut store = FileStore::new(preferences);
    let mut volume = Volume::load(&store, &config.volume_storage_key);

    match action {
        VolumeAction::Get => {}
        VolumeAction::Set(level) => volume.set_level(level),
        VolumeAction::Up => volume.adjust(config.volume_key_step),
        VolumeAction::Down => volume.adjust(-config.volume_key_step),
        VolumeAction::Mute => volume.toggle_mute(),
    }

    if action != VolumeAction::Get {
        volume.persist(&mut store, &config.volume_storage_key)?;
        info!(level = volume.level(), "Volume saved");
    }

    let view = VolumeView::new(&volume, strings);
    Ok(format!("{} ({})", view.value_text, view.button_title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_prints_symbol_values() {
        assert_eq!(decode_peaks("AZaz09+/"), "0 25 26 51 52 61 62 63");
        assert_eq!(decode_peaks(""), "");
    }

    #[test]
    fn waveform_file_names_are_one_based() {
        let file = WaveformFile {
            number: 3,
            title: "Enthusiasm".to_string(),
            markup: String::new(),
        };
        assert_eq!(file.file_name(), "waveform-3.svg");
    }
}
