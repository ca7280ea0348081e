//! Waveform layout and path rendering
//!
//! The renderer turns each track's peak sequence into one SVG path outline
//! sized to the available container width. The same geometry is used for
//! the base outline and for the playback and seek overlays, whose visible
//! extent is controlled through gradient stops.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use wavedock_core::{Page, TrackId};

use crate::peaks::PeakSequence;

/// Height of a track row, in em
pub const TRACK_HEIGHT_EM: f64 = 1.5;

/// Space above and below the outline, in em
pub const WAVEFORM_PADDING_EM: f64 = 0.3;

/// Vertical extent of the outline itself, in em
pub const WAVEFORM_HEIGHT_EM: f64 = TRACK_HEIGHT_EM - WAVEFORM_PADDING_EM * 2.0;

/// Offset of the second playback/seek gradient stop before any progress
pub const INITIAL_SECOND_STOP: f64 = 0.000_001;

/// Distance between the two stops of a hard gradient edge
const STOP_GAP: f64 = 0.0001;

/// Waveform rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveformConfig {
    /// Root font size used to convert between px and rem
    pub font_size_px: f64,

    /// Space reserved next to the waveform, in rem
    pub width_padding_rem: f64,

    /// Width changes inside this band do not trigger a re-render
    pub width_tolerance_rem: f64,

    /// Below this width every track gets the full width
    pub reduced_breakpoint_rem: f64,

    /// Preferred number of path points per horizontal pixel
    pub samples_per_px: f64,

    /// Scale widths by track duration relative to the longest track
    pub relative_waveforms: bool,
}

impl Default for WaveformConfig {
    fn default() -> Self {
        Self {
            font_size_px: 16.0,
            width_padding_rem: 5.0,
            width_tolerance_rem: 2.5,
            reduced_breakpoint_rem: 20.0,
            samples_per_px: 0.75,
            relative_waveforms: true,
        }
    }
}

/// Target widths for all tracks at one container size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveformLayout {
    /// Width available to the longest track, in rem
    pub max_width_rem: f64,

    /// Whether widths are proportional to track duration
    pub relative: bool,

    /// Width per track in document order, in rem
    pub track_widths_rem: Vec<f64>,
}

impl WaveformLayout {
    /// Lay out all tracks of `page` for a batch of observed container widths
    ///
    /// A batch of resize observations is coalesced into one layout sized by
    /// the narrowest container. Returns `None` for an empty batch.
    pub fn compute(
        container_widths_px: &[f64],
        page: &Page,
        config: &WaveformConfig,
    ) -> Option<Self> {
        let narrowest = container_widths_px
            .iter()
            .copied()
            .filter(|width| width.is_finite())
            .reduce(f64::min)?;

        let max_width_rem =
            (narrowest / config.font_size_px - config.width_padding_rem).max(0.0);
        let relative = max_width_rem > config.reduced_breakpoint_rem
            && config.relative_waveforms
            && !page.disable_relative_waveforms;

        let longest = page.longest_duration();
        let track_widths_rem = page
            .tracks
            .iter()
            .map(|track| {
                if relative && longest > 0.0 {
                    max_width_rem * (track.duration / longest)
                } else {
                    max_width_rem
                }
            })
            .collect();

        Some(Self {
            max_width_rem,
            relative,
            track_widths_rem,
        })
    }
}

/// One vertex of a waveform outline, in em
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

fn peak_to_y(peak: f64) -> f64 {
    WAVEFORM_PADDING_EM + (1.0 - peak) * WAVEFORM_HEIGHT_EM
}

/// Number of points for an outline of the given width
///
/// Prefers `samples_per_px` points per pixel but never more than there are
/// peaks.
pub fn sample_count(peak_count: usize, width_rem: f64, font_size_px: f64, samples_per_px: f64) -> usize {
    let preferred = (samples_per_px * width_rem * font_size_px).round();
    if preferred.is_finite() && preferred > 0.0 {
        (preferred as usize).min(peak_count)
    } else {
        0
    }
}

/// Resample peaks into outline points spanning `0..=width_rem`
pub fn resample(
    peaks: &PeakSequence,
    width_rem: f64,
    font_size_px: f64,
    samples_per_px: f64,
) -> Vec<Point> {
    let count = sample_count(peaks.len(), width_rem, font_size_px, samples_per_px);

    if count == 1 {
        return peaks
            .get(0)
            .map(|peak| Point { x: 0.0, y: peak_to_y(peak) })
            .into_iter()
            .collect();
    }

    let last = count.saturating_sub(1) as f64;
    (0..count)
        .filter_map(|sample| {
            let factor = sample as f64 / last;
            peaks.sample(factor).map(|peak| Point {
                x: factor * width_rem,
                y: peak_to_y(peak),
            })
        })
        .collect()
}

/// SVG path data for an outline
///
/// Coordinates are written with two decimals. A point whose rounded y equals
/// the previous one gets a trailing `1` (+0.001 em); some renderers drop a
/// gradient stroke whose points all lie on one horizontal line.
pub fn path_data(points: &[Point]) -> String {
    let mut d = String::with_capacity(points.len() * 14);
    let mut previous_y: Option<String> = None;

    for (index, point) in points.iter().enumerate() {
        let x = format!("{:.2}", point.x);
        let y = format!("{:.2}", point.y);

        if index == 0 {
            d.push_str(&format!("M {},{}", x, y));
        } else {
            let jitter = if previous_y.as_deref() == Some(y.as_str()) { "1" } else { "" };
            d.push_str(&format!(" L {},{}{}", x, y, jitter));
        }

        previous_y = Some(y);
    }

    d
}

/// Stop offsets of a playback or seek overlay gradient
///
/// The overlay is drawn up to `first` and transparent from `second` on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStops {
    pub first: f64,
    pub second: f64,
}

impl GradientStops {
    /// Stops for an overlay covering `fraction` of the waveform
    pub fn at(fraction: f64) -> Self {
        Self {
            first: fraction,
            second: fraction + STOP_GAP,
        }
    }

    /// Stops of a freshly created, fully transparent overlay
    pub fn initial() -> Self {
        Self {
            first: 0.0,
            second: INITIAL_SECOND_STOP,
        }
    }
}

impl Default for GradientStops {
    fn default() -> Self {
        Self::initial()
    }
}

/// Last rendered width, used to skip re-renders inside the tolerance band
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub width_rem: Option<f64>,
    pub initialized: bool,
}

/// Geometry of one track waveform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedWaveform {
    pub track: TrackId,
    pub width_rem: f64,

    /// Shared by the base, playback and seek paths
    pub path: String,

    /// `viewBox` attribute value
    pub view_box: String,

    /// Set on the first render, when gradients and strokes must be created
    pub initialize: bool,
}

/// Renders all waveforms of a page and debounces resize-driven re-renders
#[derive(Debug, Clone)]
pub struct WaveformRenderer {
    config: WaveformConfig,
    state: RenderState,
    /// Decoded peaks per track in document order, `None` without a waveform
    peaks: Vec<Option<PeakSequence>>,
}

impl WaveformRenderer {
    /// Decode the peaks of every track once
    pub fn new(page: &Page, config: WaveformConfig) -> Self {
        let peaks = page
            .tracks
            .iter()
            .map(|track| track.peaks.as_deref().map(PeakSequence::decode))
            .collect();

        Self {
            config,
            state: RenderState::default(),
            peaks,
        }
    }

    pub fn config(&self) -> &WaveformConfig {
        &self.config
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn peaks(&self, track: TrackId) -> Option<&PeakSequence> {
        self.peaks.get(track.index()).and_then(Option::as_ref)
    }

    /// Render for a batch of observed container widths
    ///
    /// Returns `None` when the batch is empty or the resulting width lies
    /// within the tolerance band around the last rendered width.
    pub fn render(&mut self, container_widths_px: &[f64], page: &Page) -> Option<Vec<RenderedWaveform>> {
        let layout = WaveformLayout::compute(container_widths_px, page, &self.config)?;

        if let Some(last) = self.state.width_rem {
            if (layout.max_width_rem - last).abs() <= self.config.width_tolerance_rem {
                trace!(
                    width_rem = layout.max_width_rem,
                    last_rem = last,
                    "Waveform width within tolerance, skipping render"
                );
                return None;
            }
        }

        debug!(
            width_rem = layout.max_width_rem,
            relative = layout.relative,
            "Rendering waveforms"
        );

        let initialize = !self.state.initialized;
        let rendered = self
            .peaks
            .iter()
            .zip(&layout.track_widths_rem)
            .enumerate()
            .filter_map(|(index, (peaks, &width_rem))| {
                let peaks = peaks.as_ref()?;
                let points = resample(
                    peaks,
                    width_rem,
                    self.config.font_size_px,
                    self.config.samples_per_px,
                );

                Some(RenderedWaveform {
                    track: TrackId::new(index),
                    width_rem,
                    path: path_data(&points),
                    view_box: format!("0 0 {} {}", width_rem, TRACK_HEIGHT_EM),
                    initialize,
                })
            })
            .collect();

        self.state = RenderState {
            width_rem: Some(layout.max_width_rem),
            initialized: true,
        };

        Some(rendered)
    }
}
