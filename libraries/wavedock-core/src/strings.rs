//! Localized message templates
//!
//! The string table is supplied by the site generator for the page locale and
//! consumed read-only. Templates use `{name}` placeholders which are filled in
//! at the call site (count, query, title, duration components).

use serde::{Deserialize, Serialize};

/// Message templates for the player and the browse overlay
///
/// Missing keys fall back to English when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    // Player
    pub listen: String,
    pub mute: String,
    pub pause: String,
    pub playback_position: String,
    pub player_closed: String,
    /// Placeholder: `{title}`
    pub player_open_playing_xxx: String,
    pub unmute: String,
    pub volume: String,
    /// Placeholder: `{xxx}`
    pub xxx_hours: String,
    /// Placeholder: `{xxx}`
    pub xxx_minutes: String,
    /// Placeholder: `{xxx}`
    pub xxx_seconds: String,

    // Browser
    /// Placeholder: `{query}`
    pub nothing_found_for_xxx: String,
    pub showing_featured_items: String,
    /// Placeholders: `{count}`, `{query}`
    pub showing_xxx_results_for_xxx: String,
    /// Placeholders: `{xxx}`, `{others_link}`
    pub xxx_and_others: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            listen: "Listen".to_string(),
            mute: "Mute".to_string(),
            pause: "Pause".to_string(),
            playback_position: "Playback position".to_string(),
            player_closed: "Player closed".to_string(),
            player_open_playing_xxx: "Player open, playing {title}".to_string(),
            unmute: "Unmute".to_string(),
            volume: "Volume".to_string(),
            xxx_hours: "{xxx} hours".to_string(),
            xxx_minutes: "{xxx} minutes".to_string(),
            xxx_seconds: "{xxx} seconds".to_string(),
            nothing_found_for_xxx: "Nothing found for '{query}'".to_string(),
            showing_featured_items: "Showing featured items".to_string(),
            showing_xxx_results_for_xxx: "Showing {count} results for '{query}'".to_string(),
            xxx_and_others: "{xxx} and <a href=\"{others_link}\">others</a>".to_string(),
        }
    }
}

impl Strings {
    pub fn player_open_playing(&self, title: &str) -> String {
        fill(&self.player_open_playing_xxx, &[("title", title)])
    }

    pub fn hours(&self, hours: u64) -> String {
        fill(&self.xxx_hours, &[("xxx", &hours.to_string())])
    }

    pub fn minutes(&self, minutes: u64) -> String {
        fill(&self.xxx_minutes, &[("xxx", &minutes.to_string())])
    }

    pub fn seconds(&self, seconds: u64) -> String {
        fill(&self.xxx_seconds, &[("xxx", &seconds.to_string())])
    }

    pub fn nothing_found_for(&self, query: &str) -> String {
        fill(&self.nothing_found_for_xxx, &[("query", query)])
    }

    pub fn showing_results_for(&self, count: usize, query: &str) -> String {
        fill(
            &self.showing_xxx_results_for_xxx,
            &[("count", &count.to_string()), ("query", query)],
        )
    }

    /// `artists` is already rendered markup, `others_link` an href
    pub fn and_others(&self, artists: &str, others_link: &str) -> String {
        fill(
            &self.xxx_and_others,
            &[("xxx", artists), ("others_link", others_link)],
        )
    }
}

/// Replace every `{name}` placeholder in `template` with its value
///
/// Placeholders without a matching entry are left untouched. Values are
/// inserted verbatim and never re-scanned for placeholders.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_replaces_named_placeholders() {
        assert_eq!(
            fill("Showing {count} results for '{query}'", &[("count", "3"), ("query", "elev")]),
            "Showing 3 results for 'elev'"
        );
    }

    #[test]
    fn fill_keeps_unknown_placeholders() {
        assert_eq!(fill("{a} and {b}", &[("a", "x")]), "x and {b}");
        assert_eq!(fill("no close {brace", &[("brace", "x")]), "no close {brace");
    }

    #[test]
    fn fill_does_not_rescan_values() {
        assert_eq!(fill("{title}", &[("title", "{title}")]), "{title}");
    }

    #[test]
    fn fill_replaces_repeated_placeholder() {
        assert_eq!(fill("{x}-{x}", &[("x", "1")]), "1-1");
    }

    #[test]
    fn english_defaults() {
        let strings = Strings::default();
        assert_eq!(strings.player_open_playing("Naseeb"), "Player open, playing Naseeb");
        assert_eq!(strings.seconds(7), "7 seconds");
        assert_eq!(strings.nothing_found_for("zzz"), "Nothing found for 'zzz'");
        assert_eq!(
            strings.and_others("<a href=\"/a/\">A</a>", "/release/"),
            "<a href=\"/a/\">A</a> and <a href=\"/release/\">others</a>"
        );
    }

    #[test]
    fn partial_table_falls_back_to_english() {
        let strings: Strings = serde_json::from_str(r#"{ "listen": "Anhören" }"#).unwrap();
        assert_eq!(strings.listen, "Anhören");
        assert_eq!(strings.pause, "Pause");
    }
}
