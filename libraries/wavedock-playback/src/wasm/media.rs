//! `MediaElement` over an HTML media element

use web_sys::HtmlMediaElement;

use crate::media::{MediaElement, TimeRange};

/// A track's `<audio>` element
#[derive(Debug, Clone)]
pub struct WebMedia {
    element: HtmlMediaElement,
}

impl WebMedia {
    pub fn new(element: HtmlMediaElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlMediaElement {
        &self.element
    }
}

impl MediaElement for WebMedia {
    fn play(&mut self) {
        // Rejections (e.g. blocked autoplay) surface as a missing play event
        let _ = self.element.play();
    }

    fn pause(&mut self) {
        let _ = self.element.pause();
    }

    fn is_paused(&self) -> bool {
        self.element.paused()
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn seekable(&self) -> Vec<TimeRange> {
        let ranges = self.element.seekable();
        (0..ranges.length())
            .filter_map(|index| {
                let start = ranges.start(index).ok()?;
                let end = ranges.end(index).ok()?;
                Some(TimeRange::new(start, end))
            })
            .collect()
    }

    fn set_volume(&mut self, level: f64) {
        self.element.set_volume(level);
    }

    fn ensure_preloaded(&mut self) {
        if self.element.preload() != "auto" {
            self.element.set_preload("auto");
            self.element.load();
        }
    }
}
