//! Copy-to-clipboard buttons
//!
//! Buttons carry either fixed content or a URL relative to the current page.
//! After a copy attempt the button icon shows success or failure for a few
//! seconds; starting another copy ends the running feedback early. Clipboard
//! failures never propagate beyond the failure icon.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the success/failure icon stays visible
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(3000);

/// Icon shown inside a copy button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyIcon {
    Copy,
    Success,
    Failed,
}

/// Result of a clipboard write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// Outcome of a clipboard promise that resolved (`true`) or rejected
    pub fn from_copied(copied: bool) -> Self {
        if copied {
            Self::Copied
        } else {
            Self::Failed
        }
    }
}

impl From<CopyOutcome> for CopyIcon {
    fn from(outcome: CopyOutcome) -> Self {
        match outcome {
            CopyOutcome::Copied => CopyIcon::Success,
            CopyOutcome::Failed => CopyIcon::Failed,
        }
    }
}

/// Whether the host exposes a clipboard at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipboardSupport {
    Available,
    Unavailable,
}

impl ClipboardSupport {
    /// Whether `navigator.clipboard` exists
    pub fn from_available(available: bool) -> Self {
        if available {
            Self::Available
        } else {
            Self::Unavailable
        }
    }
}

/// What to do with a copy button at page load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    /// Wire up the click handler
    Bind,
    /// Remove the button from the page
    Remove,
}

/// Buttons are useless without a clipboard, so they are removed entirely
pub fn button_action(support: ClipboardSupport) -> ButtonAction {
    match support {
        ClipboardSupport::Available => ButtonAction::Bind,
        ClipboardSupport::Unavailable => ButtonAction::Remove,
    }
}

/// Resolve what a button copies
///
/// `dynamic_url` mirrors `data-dynamic-url`: `None` means the button copies
/// `static_content`, `Some("")` copies the page URL, and `Some(suffix)`
/// appends the suffix to the page URL. The URL fragment is always discarded.
pub fn copy_content(page_url: &str, dynamic_url: Option<&str>, static_content: &str) -> String {
    let Some(suffix) = dynamic_url else {
        return static_content.to_string();
    };

    let this_page = page_url.split('#').next().unwrap_or_default();

    if suffix.is_empty() {
        this_page.to_string()
    } else if this_page.ends_with('/') {
        format!("{}{}", this_page, suffix)
    } else {
        format!("{}/{}", this_page, suffix)
    }
}

#[derive(Debug, Clone)]
struct RunningFeedback<K> {
    button: K,
    ends_at: Duration,
}

/// Timed icon feedback shared by all copy buttons on a page
///
/// `K` identifies a button's icon container. At most one feedback runs at a
/// time.
#[derive(Debug, Clone)]
pub struct CopyFeedback<K> {
    running: Option<RunningFeedback<K>>,
}

impl<K> Default for CopyFeedback<K> {
    fn default() -> Self {
        Self { running: None }
    }
}

impl<K: Clone> CopyFeedback<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the outcome icon on `button`
    ///
    /// Returns the icon updates in the order they must be applied: restoring
    /// the copy icon of a feedback that is ended early, then the new icon.
    pub fn show(&mut self, button: K, outcome: CopyOutcome, now: Duration) -> Vec<(K, CopyIcon)> {
        let mut updates = Vec::with_capacity(2);

        if let Some(previous) = self.running.take() {
            updates.push((previous.button, CopyIcon::Copy));
        }

        updates.push((button.clone(), outcome.into()));
        self.running = Some(RunningFeedback {
            button,
            ends_at: now + FEEDBACK_DURATION,
        });

        updates
    }

    /// Restore the copy icon once the feedback period has elapsed
    pub fn advance(&mut self, now: Duration) -> Option<(K, CopyIcon)> {
        match &self.running {
            Some(running) if now >= running.ends_at => self
                .running
                .take()
                .map(|running| (running.button, CopyIcon::Copy)),
            _ => None,
        }
    }

    /// When the running feedback ends, if any
    pub fn deadline(&self) -> Option<Duration> {
        self.running.as_ref().map(|running| running.ends_at)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_content_is_copied_verbatim() {
        assert_eq!(
            copy_content("https://example.com/a/#x", None, "embed code"),
            "embed code"
        );
    }

    #[test]
    fn dynamic_url_discards_fragment() {
        assert_eq!(
            copy_content("https://example.com/album/#top", Some(""), ""),
            "https://example.com/album/"
        );
    }

    #[test]
    fn dynamic_url_joins_with_single_slash() {
        assert_eq!(
            copy_content("https://example.com/album/", Some("3/"), ""),
            "https://example.com/album/3/"
        );
        assert_eq!(
            copy_content("https://example.com/album", Some("3/"), ""),
            "https://example.com/album/3/"
        );
    }

    #[test]
    fn missing_clipboard_removes_buttons() {
        assert_eq!(button_action(ClipboardSupport::Available), ButtonAction::Bind);
        assert_eq!(button_action(ClipboardSupport::Unavailable), ButtonAction::Remove);
    }

    #[test]
    fn host_flags_map_to_outcomes() {
        assert_eq!(CopyIcon::from(CopyOutcome::from_copied(true)), CopyIcon::Success);
        assert_eq!(CopyIcon::from(CopyOutcome::from_copied(false)), CopyIcon::Failed);
        assert_eq!(
            button_action(ClipboardSupport::from_available(false)),
            ButtonAction::Remove
        );
    }

    #[test]
    fn feedback_updates_serialize_as_pairs() {
        let mut feedback = CopyFeedback::new();
        feedback.show(0u32, CopyOutcome::Failed, Duration::ZERO);
        let updates = feedback.show(2u32, CopyOutcome::Copied, Duration::from_secs(1));

        let json = serde_json::to_string(&updates).unwrap();
        assert_eq!(json, r#"[[0,"Copy"],[2,"Success"]]"#);
    }

    #[test]
    fn feedback_expires_after_three_seconds() {
        let mut feedback = CopyFeedback::new();
        let updates = feedback.show("share", CopyOutcome::Copied, Duration::from_secs(10));
        assert_eq!(updates, vec![("share", CopyIcon::Success)]);

        assert_eq!(feedback.advance(Duration::from_millis(12_999)), None);
        assert_eq!(
            feedback.advance(Duration::from_secs(13)),
            Some(("share", CopyIcon::Copy))
        );
        assert!(!feedback.is_running());
        assert_eq!(feedback.advance(Duration::from_secs(20)), None);
    }

    #[test]
    fn new_copy_ends_running_feedback_early() {
        let mut feedback = CopyFeedback::new();
        feedback.show("embed", CopyOutcome::Failed, Duration::ZERO);

        let updates = feedback.show("share", CopyOutcome::Copied, Duration::from_secs(1));
        assert_eq!(
            updates,
            vec![("embed", CopyIcon::Copy), ("share", CopyIcon::Success)]
        );
        assert_eq!(feedback.deadline(), Some(Duration::from_secs(4)));
    }
}
