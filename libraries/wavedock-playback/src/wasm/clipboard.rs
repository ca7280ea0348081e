//! WASM bindings for the copy-to-clipboard buttons

use wasm_bindgen::prelude::*;
use wavedock_core::clipboard::{
    button_action, copy_content, ClipboardSupport, CopyFeedback, CopyOutcome,
};

use super::host_time;

/// Resolve what a copy button writes to the clipboard
///
/// `dynamic_url` is the button's `data-dynamic-url`, or `undefined` when the
/// attribute is absent.
#[wasm_bindgen(js_name = copyContent)]
pub fn js_copy_content(page_url: &str, dynamic_url: Option<String>, static_content: &str) -> String {
    copy_content(page_url, dynamic_url.as_deref(), static_content)
}

/// `"Bind"` or `"Remove"` for every copy button on the page
#[wasm_bindgen(js_name = copyButtonAction)]
pub fn js_copy_button_action(clipboard_available: bool) -> Result<JsValue, JsValue> {
    let action = button_action(ClipboardSupport::from_available(clipboard_available));
    Ok(serde_wasm_bindgen::to_value(&action)?)
}

/// Success/failure icons of the page's copy buttons
///
/// Buttons are identified by an index the page script chooses. Icon updates
/// come back as `[button, icon]` pairs, with icon one of `"Copy"`,
/// `"Success"` or `"Failed"`.
#[wasm_bindgen]
pub struct WasmCopyFeedback {
    inner: CopyFeedback<u32>,
}

#[wasm_bindgen]
impl WasmCopyFeedback {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCopyFeedback {
        Self {
            inner: CopyFeedback::new(),
        }
    }

    /// Show the result of a clipboard write on `button`
    pub fn show(&mut self, button: u32, copied: bool, now_ms: f64) -> Result<JsValue, JsValue> {
        let updates = self
            .inner
            .show(button, CopyOutcome::from_copied(copied), host_time(now_ms));
        Ok(serde_wasm_bindgen::to_value(&updates)?)
    }

    /// Restore the copy icon once due; returns `undefined` otherwise
    pub fn advance(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        match self.inner.advance(host_time(now_ms)) {
            Some(update) => Ok(serde_wasm_bindgen::to_value(&update)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// When the running feedback ends, in host milliseconds
    #[wasm_bindgen(getter)]
    pub fn deadline(&self) -> Option<f64> {
        self.inner
            .deadline()
            .map(|deadline| deadline.as_secs_f64() * 1000.0)
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.is_running()
    }
}

impl Default for WasmCopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}
