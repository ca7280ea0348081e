//! WASM-compatible PagePlayer wrapper

use js_sys::Function;
use wasm_bindgen::prelude::*;
use wavedock_core::{preselect_index, Page, PageTrack, Strings, TrackId};
use wavedock_waveform::{WaveformConfig, WaveformRenderer};
use web_sys::HtmlMediaElement;

use super::media::WebMedia;
use super::storage::LocalStorage;
use super::{from_optional, host_time};
use crate::{Key, KeyTarget, MediaEvent, MemoryStore, PagePlayer, PlaybackError, PlayerConfig, PreferenceStore};

fn to_js(error: PlaybackError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// WASM-compatible page player
///
/// Wraps the core `PagePlayer` with a JavaScript-friendly API. The page
/// script forwards media events and a timer tick, and applies the resulting
/// events to the markup, either from an `onEvents` callback or by calling
/// `drainEvents`.
#[wasm_bindgen]
pub struct WasmPagePlayer {
    inner: PagePlayer<WebMedia>,
    page: Page,
    waveform_config: WaveformConfig,
    renderer: Option<WaveformRenderer>,

    // Event callback
    on_events: Option<Function>,
}

#[wasm_bindgen]
impl WasmPagePlayer {
    /// Create a player
    ///
    /// `strings`, `config` and `waveform_config` are optional objects; missing
    /// fields use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(strings: JsValue, config: JsValue, waveform_config: JsValue) -> Result<WasmPagePlayer, JsValue> {
        // Enable panic hooks for better error messages in console
        console_error_panic_hook::set_once();

        let strings: Strings = from_optional(strings)?;
        let config: PlayerConfig = from_optional(config)?;
        let waveform_config: WaveformConfig = from_optional(waveform_config)?;

        let store: Box<dyn PreferenceStore> = match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "Volume will not persist: {}",
                    e
                )));
                Box::new(MemoryStore::new())
            }
        };

        Ok(Self {
            inner: PagePlayer::empty(store, strings, config),
            page: Page::default(),
            waveform_config,
            renderer: None,
            on_events: None,
        })
    }

    /// Register the next track in document order, returns its index
    #[wasm_bindgen(js_name = addTrack)]
    pub fn add_track(&mut self, track: JsValue, audio: HtmlMediaElement) -> Result<usize, JsValue> {
        let track: PageTrack = serde_wasm_bindgen::from_value(track)?;
        self.page.tracks.push(track.clone());
        Ok(self.inner.add_track(track, WebMedia::new(audio)).index())
    }

    /// Finish setup once all tracks are added
    ///
    /// `query` is `location.search`, used for preselection.
    pub fn start(&mut self, query: &str, disable_relative_waveforms: bool) {
        self.page.disable_relative_waveforms = disable_relative_waveforms;
        self.renderer = Some(WaveformRenderer::new(&self.page, self.waveform_config.clone()));
        self.inner.start(preselect_index(query, self.page.tracks.len()));
        self.notify();
    }

    // ===== Playback Control =====

    #[wasm_bindgen(js_name = togglePlayback)]
    pub fn toggle_playback(&mut self, track: usize, seek_to: Option<f64>) -> Result<(), JsValue> {
        let result = self.inner.toggle_playback(TrackId::new(track), seek_to);
        self.flush(result)
    }

    pub fn listen(&mut self) -> Result<(), JsValue> {
        let result = self.inner.listen();
        self.flush(result)
    }

    #[wasm_bindgen(js_name = dockedToggle)]
    pub fn docked_toggle(&mut self) -> Result<(), JsValue> {
        let result = self.inner.docked_toggle();
        self.flush(result)
    }

    #[wasm_bindgen(js_name = nextTrack)]
    pub fn next_track(&mut self) -> Result<(), JsValue> {
        let result = self.inner.next_track();
        self.flush(result)
    }

    #[wasm_bindgen(js_name = seekToFraction)]
    pub fn seek_to_fraction(&mut self, track: usize, fraction: f64) -> Result<(), JsValue> {
        let result = self.inner.seek_to_fraction(TrackId::new(track), fraction);
        self.flush(result)
    }

    /// Seek the active track from a click on the docked timeline
    #[wasm_bindgen(js_name = seekActiveToFraction)]
    pub fn seek_active_to_fraction(&mut self, fraction: f64) -> Result<(), JsValue> {
        let result = match self.inner.active() {
            Some(active) => self.inner.seek_to_fraction(active, fraction),
            None => Ok(()),
        };
        self.flush(result)
    }

    // ===== Waveforms =====

    #[wasm_bindgen(js_name = hoverWaveform)]
    pub fn hover_waveform(&mut self, track: usize, fraction: f64) -> Result<(), JsValue> {
        let result = self.inner.hover_waveform(TrackId::new(track), fraction);
        self.flush(result)
    }

    #[wasm_bindgen(js_name = leaveWaveform)]
    pub fn leave_waveform(&mut self, track: usize) -> Result<(), JsValue> {
        let result = self.inner.leave_waveform(TrackId::new(track));
        self.flush(result)
    }

    #[wasm_bindgen(js_name = focusWaveform)]
    pub fn focus_waveform(&mut self, track: usize) -> Result<(), JsValue> {
        let result = self.inner.focus_waveform(TrackId::new(track));
        self.flush(result)
    }

    /// Render waveforms for one batch of resize observations
    ///
    /// Returns `null` when the width change is within the tolerance band.
    #[wasm_bindgen(js_name = renderWaveforms)]
    pub fn render_waveforms(&mut self, container_widths_px: Vec<f64>) -> Result<JsValue, JsValue> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Err(JsValue::from_str("start() must be called before rendering"));
        };

        match renderer.render(&container_widths_px, &self.page) {
            Some(rendered) => Ok(serde_wasm_bindgen::to_value(&rendered)?),
            None => Ok(JsValue::NULL),
        }
    }

    // ===== Input =====

    /// Forward a DOM media event; unknown event names are ignored
    #[wasm_bindgen(js_name = mediaEvent)]
    pub fn media_event(&mut self, track: usize, name: &str) -> Result<(), JsValue> {
        let result = match MediaEvent::from_name(name) {
            Some(event) => self.inner.handle_media_event(TrackId::new(track), event),
            None => Ok(()),
        };
        self.flush(result)
    }

    /// Forward a key press, returns whether to prevent the default action
    ///
    /// `target` is e.g. `{ kind: "Waveform", track: 2 }` or `{ kind: "Docked" }`.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, target: JsValue, key: &str) -> Result<bool, JsValue> {
        let target: KeyTarget = serde_wasm_bindgen::from_value(target)?;
        let result = self.inner.handle_key(target, Key::from_key_name(key));
        self.flush(result)
    }

    /// Run due tasks; `now_ms` is e.g. `performance.now()`
    pub fn advance(&mut self, now_ms: f64) {
        self.inner.advance(host_time(now_ms));
        self.notify();
    }

    /// When `advance` should be called next, in milliseconds
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.inner
            .next_deadline()
            .map(|deadline| deadline.as_secs_f64() * 1000.0)
    }

    // ===== Volume Control =====

    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: f64) {
        self.inner.set_volume(level);
        self.notify();
    }

    #[wasm_bindgen(js_name = adjustVolume)]
    pub fn adjust_volume(&mut self, delta: f64) {
        self.inner.adjust_volume(delta);
        self.notify();
    }

    #[wasm_bindgen(js_name = wheelVolume)]
    pub fn wheel_volume(&mut self, delta_y: f64) {
        self.inner.wheel_volume(delta_y);
        self.notify();
    }

    #[wasm_bindgen(js_name = toggleMute)]
    pub fn toggle_mute(&mut self) {
        self.inner.toggle_mute();
        self.notify();
    }

    #[wasm_bindgen(js_name = getVolume)]
    pub fn get_volume(&self) -> f64 {
        self.inner.volume().level()
    }

    // ===== Events =====

    /// Drain pending events as an array of plain objects
    #[wasm_bindgen(js_name = drainEvents)]
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events = self.inner.drain_events();
        Ok(serde_wasm_bindgen::to_value(&events)?)
    }

    /// Register a callback receiving each batch of events as an array
    ///
    /// Without a callback, events queue up until `drainEvents`.
    #[wasm_bindgen(js_name = onEvents)]
    pub fn on_events(&mut self, callback: Function) {
        self.on_events = Some(callback);
    }

    // ===== Internal Event Emitters =====

    fn notify(&mut self) {
        let Some(ref cb) = self.on_events else {
            return;
        };
        if !self.inner.has_pending_events() {
            return;
        }

        let events = self.inner.drain_events();
        match serde_wasm_bindgen::to_value(&events) {
            Ok(value) => {
                cb.call1(&JsValue::NULL, &value).ok();
            }
            Err(e) => web_sys::console::error_1(&e.into()),
        }
    }

    fn flush<T>(&mut self, result: crate::Result<T>) -> Result<T, JsValue> {
        self.notify();
        result.map_err(to_js)
    }
}
