//! SVG markup for rendered waveforms

use std::fmt::Write;

use crate::render::{GradientStops, RenderedWaveform, TRACK_HEIGHT_EM};

pub const SVG_XMLNS: &str = "http://www.w3.org/2000/svg";

const PLAYBACK_COLOR: &str = "var(--fg-1)";
const SEEK_COLOR: &str = "var(--fg-3)";
const TRANSPARENT: &str = "hsla(0, 0%, 0%, 0)";

/// Element id of a track's playback gradient
pub fn playback_gradient_id(track_number: usize) -> String {
    format!("gradient_playback_{}", track_number)
}

/// Element id of a track's seek preview gradient
pub fn seek_gradient_id(track_number: usize) -> String {
    format!("gradient_seek_{}", track_number)
}

fn gradient(out: &mut String, class: &str, id: &str, color: &str, stops: GradientStops) {
    let _ = write!(
        out,
        r#"<linearGradient class="{class}" id="{id}"><stop offset="{first}" stop-color="{color}"/><stop offset="{second}" stop-color="{transparent}"/></linearGradient>"#,
        class = class,
        id = id,
        first = stops.first,
        second = stops.second,
        color = color,
        transparent = TRANSPARENT,
    );
}

/// Standalone `<svg>` element for one rendered waveform
///
/// Contains the two overlay gradients and the `base`, `playback` and `seek`
/// paths sharing the rendered geometry.
pub fn markup(rendered: &RenderedWaveform) -> String {
    let number = rendered.track.number();
    let playback_id = playback_gradient_id(number);
    let seek_id = seek_gradient_id(number);

    let mut out = String::with_capacity(rendered.path.len() * 3 + 640);
    let _ = write!(
        out,
        r#"<svg xmlns="{}" viewBox="{}" width="{}em" height="{}em">"#,
        SVG_XMLNS, rendered.view_box, rendered.width_rem, TRACK_HEIGHT_EM
    );

    out.push_str("<defs>");
    gradient(&mut out, "playback", &playback_id, PLAYBACK_COLOR, GradientStops::initial());
    gradient(&mut out, "seek", &seek_id, SEEK_COLOR, GradientStops::initial());
    out.push_str("</defs>");

    let _ = write!(out, r#"<path class="base" d="{}"/>"#, rendered.path);
    let _ = write!(
        out,
        r#"<path class="playback" d="{}" stroke="url(#{})"/>"#,
        rendered.path, playback_id
    );
    let _ = write!(
        out,
        r#"<path class="seek" d="{}" stroke="url(#{})"/>"#,
        rendered.path, seek_id
    );

    out.push_str("</svg>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavedock_core::TrackId;

    #[test]
    fn markup_contains_gradients_and_paths() {
        let rendered = RenderedWaveform {
            track: TrackId::new(2),
            width_rem: 12.5,
            path: "M 0.00,0.30 L 12.50,1.20".to_string(),
            view_box: "0 0 12.5 1.5".to_string(),
            initialize: true,
        };

        let svg = markup(&rendered);
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 12.5 1.5" width="12.5em" height="1.5em">"#
        ));
        assert!(svg.contains(
            r#"<linearGradient class="playback" id="gradient_playback_3"><stop offset="0" stop-color="var(--fg-1)"/><stop offset="0.000001" stop-color="hsla(0, 0%, 0%, 0)"/></linearGradient>"#
        ));
        assert!(svg.contains(r#"id="gradient_seek_3""#));
        assert!(svg.contains(r#"<path class="base" d="M 0.00,0.30 L 12.50,1.20"/>"#));
        assert!(svg.contains(r#"stroke="url(#gradient_playback_3)""#));
        assert!(svg.contains(r#"stroke="url(#gradient_seek_3)""#));
        assert!(svg.ends_with("</svg>"));
    }
}
