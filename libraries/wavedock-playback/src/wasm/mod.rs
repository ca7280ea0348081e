//! WASM bindings for wavedock-playback
//!
//! Binds the page player to `<audio>` elements and `localStorage`, and
//! exposes it to the page script with a JavaScript-friendly API. The browse
//! overlay and the copy buttons are bound here too, so a page loads a single
//! module.

pub mod browser;
pub mod clipboard;
pub mod media;
pub mod player;
pub mod storage;

pub use browser::WasmBrowser;
pub use clipboard::WasmCopyFeedback;
pub use media::WebMedia;
pub use player::WasmPagePlayer;
pub use storage::LocalStorage;

use std::time::Duration;

use wasm_bindgen::JsValue;

/// Deserialize an optional options object, defaulting when it is absent
fn from_optional<T: Default + serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        Ok(T::default())
    } else {
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}

/// Host clock reading in milliseconds, e.g. `performance.now()`
///
/// Negative and non-finite readings count as zero.
fn host_time(now_ms: f64) -> Duration {
    Duration::try_from_secs_f64(now_ms.max(0.0) / 1000.0).unwrap_or_default()
}
