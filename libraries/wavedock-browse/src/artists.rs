//! Artist list markup for browse rows

use serde::{Deserialize, Serialize};
use wavedock_core::Strings;

/// Character budget of a rendered artist list
pub const MAX_ARTIST_CHARS: usize = 40;

/// Separator between linked artist names
const SEPARATOR: &str = ", ";

/// An artist credited on a release or track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistLink {
    pub name: String,
    /// Page URL relative to the site root
    pub url: String,
}

impl ArtistLink {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    fn char_count(&self) -> usize {
        self.name.chars().count()
    }

    fn anchor(&self, root_prefix: &str) -> String {
        format!(
            "<a href=\"{}{}\">{}</a>",
            escape_html(root_prefix),
            escape_html(&self.url),
            escape_html(&self.name)
        )
    }
}

/// Render a list of linked artist names, truncated to fit the row
///
/// Lists of more than two artists that exceed [`MAX_ARTIST_CHARS`] (names
/// plus separators) end in an "and others" link to `others_link`:
/// - label mode keeps the first artist, then more while the running name
///   total stays below the budget
/// - artist mode keeps only the first artist, which is the catalog artist
pub fn truncate_artist_list(
    artists: &[ArtistLink],
    others_link: &str,
    root_prefix: &str,
    label_mode: bool,
    strings: &Strings,
) -> String {
    let name_chars: usize = artists.iter().map(ArtistLink::char_count).sum();
    let separator_chars = artists.len().saturating_sub(1) * SEPARATOR.len();

    if artists.len() <= 2 || name_chars + separator_chars <= MAX_ARTIST_CHARS {
        return join_anchors(artists, root_prefix);
    }

    let kept = if label_mode {
        let mut chars_used = 0;
        let count = artists
            .iter()
            .take_while(|artist| {
                let first = chars_used == 0;
                chars_used += artist.char_count();
                first || chars_used < MAX_ARTIST_CHARS
            })
            .count();
        &artists[..count]
    } else {
        &artists[..1]
    };

    strings.and_others(&join_anchors(kept, root_prefix), &escape_html(others_link))
}

fn join_anchors(artists: &[ArtistLink], root_prefix: &str) -> String {
    artists
        .iter()
        .map(|artist| artist.anchor(root_prefix))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
