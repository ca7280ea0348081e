//! Browse overlay scenarios over a three-release catalog

use std::path::PathBuf;

use tempfile::TempDir;
use wavedock_browse::{
    BrowseError, BrowseStatus, BrowseTrigger, Browser, Catalog, FocusTarget, RowKind,
};
use wavedock_core::Strings;

// ===== Test Helpers =====

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

fn open_browser() -> Browser {
    let catalog = Catalog::load(fixture_path()).unwrap();
    let mut browser = Browser::new(&catalog, Strings::default());
    browser.open(BrowseTrigger::Footer);
    browser
}

fn visible_titles(browser: &Browser) -> Vec<&str> {
    browser.visible_rows().map(|row| row.title.as_str()).collect()
}

// ===== Tests =====

#[test]
fn test_default_view_shows_releases_only() {
    let browser = open_browser();

    assert_eq!(browser.rows().len(), 16);
    assert_eq!(
        visible_titles(&browser),
        vec!["Chor Bazaar", "Elevator Music", "Ganand Mein Aandhi"]
    );
    assert!(browser
        .visible_rows()
        .all(|row| row.kind == RowKind::Release));
}

#[test]
fn test_query_matches_releases_and_tracks() {
    let mut browser = open_browser();

    assert_eq!(browser.set_query("elev"), 2);
    assert_eq!(visible_titles(&browser), vec!["Elevator Music", "Elevator Music"]);
    assert_eq!(
        browser.status(),
        &BrowseStatus {
            aria_label: Some("Showing 2 results for 'elev'".to_string()),
            text: String::new(),
        }
    );
}

#[test]
fn test_query_is_trimmed_and_case_insensitive() {
    let mut browser = open_browser();

    assert_eq!(browser.set_query("  NASEEB "), 1);
    assert_eq!(browser.query(), "NASEEB");
    assert_eq!(
        browser.status().aria_label.as_deref(),
        Some("Showing 1 results for 'NASEEB'")
    );
}

#[test]
fn test_nothing_found() {
    let mut browser = open_browser();

    assert_eq!(browser.set_query("zzz"), 0);
    assert_eq!(
        browser.status(),
        &BrowseStatus {
            aria_label: None,
            text: "Nothing found for 'zzz'".to_string(),
        }
    );
    assert_eq!(browser.visible_rows().count(), 0);
}

#[test]
fn test_clearing_query_restores_default_view() {
    let mut browser = open_browser();
    browser.set_query("a");

    assert_eq!(browser.set_query("   "), 3);
    assert_eq!(
        browser.status().aria_label.as_deref(),
        Some("Showing featured items")
    );
    assert_eq!(browser.status().text, "");
}

#[test]
fn test_escape_resets_and_refocuses_trigger() {
    let mut browser = open_browser();
    browser.set_query("intro");

    assert_eq!(
        browser.handle_escape(),
        FocusTarget::Trigger(BrowseTrigger::Footer)
    );
    assert!(!browser.is_open());
    assert_eq!(browser.query(), "");
    assert_eq!(browser.status(), &BrowseStatus::default());
    assert_eq!(visible_titles(&browser).len(), 3);
}

#[test]
fn test_localized_status() {
    let strings = Strings {
        showing_xxx_results_for_xxx: "{count} Treffer für „{query}“".to_string(),
        ..Strings::default()
    };
    let catalog = Catalog::load(fixture_path()).unwrap();
    let mut browser = Browser::new(&catalog, strings);
    browser.open(BrowseTrigger::Header);

    browser.set_query("death");
    assert_eq!(
        browser.status().aria_label.as_deref(),
        Some("1 Treffer für „death“")
    );
}

#[test]
fn test_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let result = Catalog::load(dir.path().join("missing.json"));
    assert!(matches!(result, Err(BrowseError::Io(_))));
}

#[test]
fn test_malformed_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ \"releases\": [ { \"title\": 3 } ] }").unwrap();

    assert!(matches!(Catalog::load(&path), Err(BrowseError::Catalog(_))));
}

#[test]
fn test_host_facing_values_serialize_plainly() {
    let mut browser = open_browser();

    assert_eq!(
        serde_json::to_string(&browser.close()).unwrap(),
        r#"{"Trigger":"Footer"}"#
    );
    assert_eq!(
        serde_json::to_string(&FocusTarget::SearchField).unwrap(),
        r#""SearchField""#
    );
    assert_eq!(
        serde_json::from_str::<BrowseTrigger>(r#""Header""#).unwrap(),
        BrowseTrigger::Header
    );
    assert_eq!(
        serde_json::to_string(&BrowseStatus::default()).unwrap(),
        r#"{"aria_label":null,"text":""}"#
    );
}
