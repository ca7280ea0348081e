//! Wavedock - Browse
//!
//! The browse/search overlay: a static list of releases, their tracks and
//! catalog artists, filtered by title as the visitor types.
//!
//! # Example
//!
//! ```rust
//! use wavedock_browse::{BrowseTrigger, Browser, Catalog};
//! use wavedock_core::Strings;
//!
//! let catalog = Catalog::from_json(r#"{
//!     "releases": [ {
//!         "title": "Elevator Music",
//!         "url": "elevator-music/",
//!         "tracks": [ { "number": "1.", "title": "Intro", "url": "elevator-music/1/" } ]
//!     } ]
//! }"#).unwrap();
//!
//! let mut browser = Browser::new(&catalog, Strings::default());
//! browser.open(BrowseTrigger::Header);
//!
//! assert_eq!(browser.set_query("intro"), 1);
//! assert_eq!(
//!     browser.status().aria_label.as_deref(),
//!     Some("Showing 1 results for 'intro'")
//! );
//! ```

#![forbid(unsafe_code)]

pub mod artists;
pub mod browser;
pub mod catalog;
pub mod error;

pub use artists::{escape_html, truncate_artist_list, ArtistLink, MAX_ARTIST_CHARS};
pub use browser::{BrowseStatus, BrowseTrigger, Browser, FocusTarget};
pub use catalog::{Catalog, CatalogTrack, Release, Row, RowImage, RowKind};
pub use error::{BrowseError, Result};
