//! Browse catalog and its rows
//!
//! The site generator embeds the catalog as a JSON literal. Every release
//! becomes one row followed by rows for its tracks (hidden until a search
//! matches them), then every catalog artist becomes one row.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wavedock_core::Strings;

use crate::artists::{truncate_artist_list, ArtistLink};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTrack {
    /// Display number, e.g. "3."
    pub number: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub artists: Option<Vec<ArtistLink>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub title: String,
    pub url: String,
    /// Cover image path relative to the release URL
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub artists: Option<Vec<ArtistLink>>,
    #[serde(default)]
    pub tracks: Vec<CatalogTrack>,
}

/// Everything the browse overlay can show
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Label sites list several artists before truncating credits
    pub label_mode: bool,
    /// Relative path from the current page to the site root
    pub root_prefix: String,
    pub artists: Vec<ArtistLink>,
    pub releases: Vec<Release>,
}

/// Kind of entry a row stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowKind {
    Release,
    Track,
    Artist,
}

/// Thumbnail of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowImage {
    Cover(String),
    Placeholder,
}

/// One pre-rendered result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub kind: RowKind,
    /// Title text matched against the search query
    pub title: String,
    pub href: String,
    pub image: RowImage,
    /// Track number, only on track rows
    pub number: Option<String>,
    /// Artist list markup, if the entry credits artists
    pub artists_html: Option<String>,
}

impl Row {
    /// Rows shown while no query is entered
    pub fn is_featured(&self) -> bool {
        self.kind != RowKind::Track
    }
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build the result rows in display order
    pub fn rows(&self, strings: &Strings) -> Vec<Row> {
        let mut rows = Vec::new();

        for release in &self.releases {
            let href = format!("{}{}", self.root_prefix, release.url);
            let image = match &release.cover {
                Some(cover) => RowImage::Cover(format!("{}{}", href, cover)),
                None => RowImage::Placeholder,
            };

            rows.push(Row {
                kind: RowKind::Release,
                title: release.title.clone(),
                image: image.clone(),
                number: None,
                artists_html: self.artists_html(release.artists.as_deref(), &href, strings),
                href,
            });

            for track in &release.tracks {
                let href = format!("{}{}", self.root_prefix, track.url);
                rows.push(Row {
                    kind: RowKind::Track,
                    title: track.title.clone(),
                    image: image.clone(),
                    number: Some(track.number.clone()),
                    artists_html: self.artists_html(track.artists.as_deref(), &href, strings),
                    href,
                });
            }
        }

        rows.extend(self.artists.iter().map(|artist| Row {
            kind: RowKind::Artist,
            title: artist.name.clone(),
            href: format!("{}{}", self.root_prefix, artist.url),
            image: RowImage::Placeholder,
            number: None,
            artists_html: None,
        }));

        rows
    }

    fn artists_html(
        &self,
        artists: Option<&[ArtistLink]>,
        others_link: &str,
        strings: &Strings,
    ) -> Option<String> {
        artists.map(|artists| {
            truncate_artist_list(
                artists,
                others_link,
                &self.root_prefix,
                self.label_mode,
                strings,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "root_prefix": "../",
        "artists": [ { "name": "Ayesha", "url": "ayesha/" } ],
        "releases": [
            {
                "title": "Elevator Music",
                "url": "elevator-music/",
                "cover": "cover_160.jpg?TFTPdOeDZeE",
                "tracks": [
                    { "number": "1.", "title": "Intro", "url": "elevator-music/1/" },
                    {
                        "number": "2.",
                        "title": "Elevator Music",
                        "url": "elevator-music/2/",
                        "artists": [ { "name": "Ayesha", "url": "ayesha/" } ]
                    }
                ]
            },
            { "title": "Demos", "url": "demos/", "tracks": [] }
        ]
    }"#;

    #[test]
    fn rows_follow_display_order() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let rows = catalog.rows(&Strings::default());

        let kinds: Vec<RowKind> = rows.iter().map(|row| row.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::Release,
                RowKind::Track,
                RowKind::Track,
                RowKind::Release,
                RowKind::Artist
            ]
        );
    }

    #[test]
    fn track_rows_share_release_cover() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let rows = catalog.rows(&Strings::default());

        let cover = RowImage::Cover("../elevator-music/cover_160.jpg?TFTPdOeDZeE".to_string());
        assert_eq!(rows[0].image, cover);
        assert_eq!(rows[1].image, cover);
        assert_eq!(rows[1].href, "../elevator-music/1/");
        assert_eq!(rows[1].number.as_deref(), Some("1."));
        assert_eq!(rows[3].image, RowImage::Placeholder);
    }

    #[test]
    fn credited_artists_are_rendered() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let rows = catalog.rows(&Strings::default());

        assert_eq!(rows[1].artists_html, None);
        assert_eq!(
            rows[2].artists_html.as_deref(),
            Some("<a href=\"../ayesha/\">Ayesha</a>")
        );
        assert_eq!(rows[4].href, "../ayesha/");
    }

    #[test]
    fn only_tracks_are_hidden_by_default() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let featured: Vec<bool> = catalog
            .rows(&Strings::default())
            .iter()
            .map(Row::is_featured)
            .collect();
        assert_eq!(featured, vec![true, false, false, true, true]);
    }

    #[test]
    fn empty_catalog_parses() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.rows(&Strings::default()).is_empty());
        assert!(!catalog.label_mode);
    }

    #[test]
    fn release_without_title_is_rejected() {
        let result = Catalog::from_json(r#"{ "releases": [ { "url": "x/" } ] }"#);
        assert!(matches!(result, Err(crate::BrowseError::Catalog(_))));
    }
}
