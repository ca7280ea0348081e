//! Property-based tests for browse filtering

use proptest::prelude::*;
use wavedock_browse::{truncate_artist_list, ArtistLink, Browser, Catalog, CatalogTrack, Release};
use wavedock_core::Strings;

fn arbitrary_catalog() -> impl Strategy<Value = Catalog> {
    let track = "[A-Za-z ]{1,16}".prop_map(|title| CatalogTrack {
        number: "1.".to_string(),
        url: "t/".to_string(),
        title,
        artists: None,
    });
    let release = ("[A-Za-z ]{1,16}", prop::collection::vec(track, 0..6)).prop_map(
        |(title, tracks)| Release {
            title,
            url: "r/".to_string(),
            cover: None,
            artists: None,
            tracks,
        },
    );

    prop::collection::vec(release, 0..8).prop_map(|releases| Catalog {
        releases,
        ..Catalog::default()
    })
}

proptest! {
    /// Property: The reported count matches the visible rows
    #[test]
    fn status_count_matches_visible_rows(catalog in arbitrary_catalog(), query in "[A-Za-z]{1,3}") {
        let mut browser = Browser::new(&catalog, Strings::default());
        let shown = browser.set_query(&query);

        prop_assert_eq!(shown, browser.visible_rows().count());
        if shown == 0 {
            prop_assert!(browser.status().aria_label.is_none());
        } else {
            let expected = format!("Showing {} results for '{}'", shown, query);
            prop_assert_eq!(browser.status().aria_label.as_deref(), Some(expected.as_str()));
        }
    }

    /// Property: Every visible row contains the query, ignoring case
    #[test]
    fn visible_rows_contain_query(catalog in arbitrary_catalog(), query in "[A-Za-z]{1,3}") {
        let mut browser = Browser::new(&catalog, Strings::default());
        browser.set_query(&query);

        let needle = query.to_lowercase();
        for (row, &visible) in browser.rows().iter().zip(browser.visible()) {
            prop_assert_eq!(visible, row.title.to_lowercase().contains(&needle));
        }
    }

    /// Property: Truncated artist lists always keep the first artist
    #[test]
    fn truncation_keeps_first_artist(
        names in prop::collection::vec("[A-Za-z]{1,20}", 1..8),
        label_mode in any::<bool>(),
    ) {
        let artists: Vec<ArtistLink> = names
            .iter()
            .map(|name| ArtistLink::new(name.clone(), format!("{}/", name)))
            .collect();
        let list = truncate_artist_list(&artists, "r/", "", label_mode, &Strings::default());

        let first = format!("<a href=\"{}/\">{}</a>", names[0], names[0]);
        prop_assert!(list.starts_with(&first));
    }
}
