//! Browse/search overlay state
//!
//! The overlay is opened from one of two browse buttons and filters the
//! catalog rows by a literal, case-insensitive match on their titles. The
//! host applies `visible()` and `status()` to the markup and moves focus to
//! whatever the operations return.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use wavedock_core::Strings;

use crate::catalog::{Catalog, Row};

/// Browse button that opened the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrowseTrigger {
    Header,
    Footer,
}

/// Where the host should move focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusTarget {
    SearchField,
    Trigger(BrowseTrigger),
}

/// Contents of the overlay's status element
///
/// Result counts go into the aria label only; "nothing found" is visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseStatus {
    pub aria_label: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Browser {
    rows: Vec<Row>,
    visible: Vec<bool>,
    expanded: Option<BrowseTrigger>,
    query: String,
    status: BrowseStatus,
    strings: Strings,
}

impl Browser {
    pub fn new(catalog: &Catalog, strings: Strings) -> Self {
        let rows = catalog.rows(&strings);
        let visible = rows.iter().map(Row::is_featured).collect();

        Self {
            rows,
            visible,
            expanded: None,
            query: String::new(),
            status: BrowseStatus::default(),
            strings,
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Visibility flag per row, parallel to `rows()`
    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows
            .iter()
            .zip(&self.visible)
            .filter_map(|(row, &visible)| visible.then_some(row))
    }

    pub fn is_open(&self) -> bool {
        self.expanded.is_some()
    }

    /// Button whose `aria-expanded` is set
    pub fn expanded(&self) -> Option<BrowseTrigger> {
        self.expanded
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &BrowseStatus {
        &self.status
    }

    pub fn open(&mut self, trigger: BrowseTrigger) -> FocusTarget {
        debug!(?trigger, "Opening browser");
        self.expanded = Some(trigger);
        self.status = self.featured_status();
        FocusTarget::SearchField
    }

    /// Close and reset the overlay, returning focus to the button that opened it
    pub fn close(&mut self) -> FocusTarget {
        let trigger = self.expanded.take().unwrap_or(BrowseTrigger::Header);
        debug!(?trigger, "Closing browser");

        self.query.clear();
        self.status = BrowseStatus::default();
        self.show_featured();

        FocusTarget::Trigger(trigger)
    }

    /// Apply the search field's value
    ///
    /// Returns the number of visible rows.
    pub fn set_query(&mut self, query: &str) -> usize {
        let query = query.trim();
        self.query = query.to_string();

        if query.is_empty() {
            self.show_featured();
            self.status = self.featured_status();
            return self.visible_rows().count();
        }

        let needle = query.to_lowercase();
        for (row, visible) in self.rows.iter().zip(self.visible.iter_mut()) {
            *visible = row.title.to_lowercase().contains(&needle);
        }

        let shown = self.visible.iter().filter(|&&visible| visible).count();
        trace!(query, shown, "Filtered browse rows");

        self.status = if shown == 0 {
            BrowseStatus {
                aria_label: None,
                text: self.strings.nothing_found_for(query),
            }
        } else {
            BrowseStatus {
                aria_label: Some(self.strings.showing_results_for(shown, query)),
                text: String::new(),
            }
        };

        shown
    }

    /// Escape pressed inside the overlay
    pub fn handle_escape(&mut self) -> FocusTarget {
        self.close()
    }

    /// Focus left an element of the overlay
    ///
    /// `related_inside` describes the element receiving focus: `None` when
    /// focus leaves the page, otherwise whether it lies inside the overlay.
    /// Moving focus to another element on the page closes the overlay.
    pub fn focus_out(&mut self, related_inside: Option<bool>) -> Option<FocusTarget> {
        match related_inside {
            Some(false) if self.is_open() => Some(self.close()),
            _ => None,
        }
    }

    /// Focus entered an element of the page
    ///
    /// While open, focus returning to the page from outside (e.g. the address
    /// bar) is pulled back into the overlay.
    pub fn focus_in(&self, inside: bool) -> Option<FocusTarget> {
        (self.is_open() && !inside).then_some(FocusTarget::SearchField)
    }

    fn show_featured(&mut self) {
        for (row, visible) in self.rows.iter().zip(self.visible.iter_mut()) {
            *visible = row.is_featured();
        }
    }

    fn featured_status(&self) -> BrowseStatus {
        BrowseStatus {
            aria_label: Some(self.strings.showing_featured_items.clone()),
            text: String::new(),
        }
    }
}
