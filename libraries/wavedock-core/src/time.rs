//! Playback time formatting
//!
//! Clock-style text for the visible time display and written-out text for
//! screen reader position announcements.

use crate::strings::Strings;

/// Whole seconds, treating negative and non-finite input as zero
fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    }
}

/// Format seconds as `0:SS`, `M:SS` or `H:MM:SS`
pub fn format_time(seconds: f64) -> String {
    let total = whole_seconds(seconds);
    let secs = total % 60;

    if total < 60 {
        format!("0:{:02}", secs)
    } else if total < 3600 {
        format!("{}:{:02}", total / 60, secs)
    } else {
        format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, secs)
    }
}

/// Format seconds as localized words, e.g. "3 minutes 7 seconds"
pub fn format_time_written_out(seconds: f64, strings: &Strings) -> String {
    let total = whole_seconds(seconds);
    let secs = strings.seconds(total % 60);

    if total < 60 {
        secs
    } else if total < 3600 {
        format!("{} {}", strings.minutes(total / 60), secs)
    } else {
        format!(
            "{} {} {}",
            strings.hours(total / 3600),
            strings.minutes((total % 3600) / 60),
            secs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_format_ranges() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.99), "0:09");
        assert_eq!(format_time(59.5), "0:59");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(754.2), "12:34");
        assert_eq!(format_time(3600.0), "1:00:00");
        assert_eq!(format_time(3725.0), "1:02:05");
    }

    #[test]
    fn clock_format_degenerate_input() {
        assert_eq!(format_time(-4.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn written_out_format() {
        let strings = Strings::default();
        assert_eq!(format_time_written_out(42.7, &strings), "42 seconds");
        assert_eq!(format_time_written_out(187.0, &strings), "3 minutes 7 seconds");
        assert_eq!(
            format_time_written_out(3723.0, &strings),
            "1 hours 2 minutes 3 seconds"
        );
    }

    #[test]
    fn written_out_uses_supplied_templates() {
        let strings = Strings {
            xxx_minutes: "{xxx} Minuten".to_string(),
            xxx_seconds: "{xxx} Sekunden".to_string(),
            ..Strings::default()
        };
        assert_eq!(format_time_written_out(65.0, &strings), "1 Minuten 5 Sekunden");
    }
}
