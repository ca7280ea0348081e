//! Property-based tests for decoding and resampling

use proptest::prelude::*;
use wavedock_waveform::{decode, path_data, resample, PeakSequence};

proptest! {
    #[test]
    fn decode_is_deterministic(input in ".*") {
        prop_assert_eq!(decode(&input), decode(&input));
    }

    #[test]
    fn decode_never_grows_and_stays_in_range(input in ".*") {
        let decoded = decode(&input);
        prop_assert!(decoded.len() <= input.chars().count());
        prop_assert!(decoded.iter().all(|&symbol| symbol <= 63));
    }

    #[test]
    fn decode_keeps_every_alphabet_symbol(input in "[A-Za-z0-9+/]{0,200}") {
        prop_assert_eq!(decode(&input).len(), input.len());
    }

    #[test]
    fn resample_point_count(
        encoded in "[A-Za-z0-9+/]{0,400}",
        width_rem in 0.0f64..120.0,
    ) {
        let peaks = PeakSequence::decode(&encoded);
        let points = resample(&peaks, width_rem, 16.0, 0.75);

        let preferred = (0.75 * width_rem * 16.0).round() as usize;
        prop_assert_eq!(points.len(), preferred.min(peaks.len()));
    }

    #[test]
    fn resample_x_strictly_increasing(
        encoded in "[A-Za-z0-9+/]{2,400}",
        width_rem in 1.0f64..120.0,
    ) {
        let peaks = PeakSequence::decode(&encoded);
        let points = resample(&peaks, width_rem, 16.0, 0.75);

        prop_assert!(points.windows(2).all(|pair| pair[0].x < pair[1].x));
        if let Some(last) = points.last() {
            prop_assert!((last.x - width_rem).abs() < 1e-9);
        }
    }

    #[test]
    fn resample_y_inside_track(encoded in "[A-Za-z0-9+/]{1,200}", width_rem in 1.0f64..60.0) {
        let peaks = PeakSequence::decode(&encoded);
        for point in resample(&peaks, width_rem, 16.0, 0.75) {
            prop_assert!(point.y >= 0.3 - 1e-9 && point.y <= 1.2 + 1e-9);
        }
    }

    #[test]
    fn path_has_one_command_per_point(encoded in "[A-Za-z0-9+/]{1,200}", width_rem in 1.0f64..60.0) {
        let peaks = PeakSequence::decode(&encoded);
        let points = resample(&peaks, width_rem, 16.0, 0.75);
        let d = path_data(&points);

        prop_assert_eq!(d.matches('M').count(), 1);
        prop_assert_eq!(d.matches('L').count(), points.len() - 1);
    }
}
