//! WASM-compatible Browser wrapper

use wasm_bindgen::prelude::*;
use wavedock_browse::{BrowseTrigger, Browser, Catalog};
use wavedock_core::Strings;

use super::from_optional;

/// WASM-compatible browse overlay
///
/// Built from the catalog JSON. Triggers are passed as `"Header"` or
/// `"Footer"`; focus targets come back as `"SearchField"` or
/// `{ Trigger: "Header" }`, and `undefined` where focus stays.
#[wasm_bindgen]
pub struct WasmBrowser {
    inner: Browser,
}

#[wasm_bindgen]
impl WasmBrowser {
    /// Create the overlay state; `strings` is an optional object
    #[wasm_bindgen(constructor)]
    pub fn new(catalog_json: &str, strings: JsValue) -> Result<WasmBrowser, JsValue> {
        console_error_panic_hook::set_once();

        let strings: Strings = from_optional(strings)?;
        let catalog =
            Catalog::from_json(catalog_json).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner: Browser::new(&catalog, strings),
        })
    }

    // ===== State =====

    /// All rows in display order, as plain objects
    pub fn rows(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.rows())?)
    }

    /// One visibility flag per row
    pub fn visible(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.visible())?)
    }

    /// `{ aria_label, text }` for the status element
    pub fn status(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(self.inner.status())?)
    }

    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.is_open()
    }

    /// Trigger whose `aria-expanded` is set, if any
    #[wasm_bindgen(getter)]
    pub fn expanded(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.expanded())?)
    }

    #[wasm_bindgen(getter)]
    pub fn query(&self) -> String {
        self.inner.query().to_string()
    }

    // ===== Operations =====

    pub fn open(&mut self, trigger: JsValue) -> Result<JsValue, JsValue> {
        let trigger: BrowseTrigger = serde_wasm_bindgen::from_value(trigger)?;
        Ok(serde_wasm_bindgen::to_value(&self.inner.open(trigger))?)
    }

    pub fn close(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.close())?)
    }

    /// Filter the rows, returns the number of matches
    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: &str) -> usize {
        self.inner.set_query(query)
    }

    #[wasm_bindgen(js_name = handleEscape)]
    pub fn handle_escape(&mut self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.handle_escape())?)
    }

    /// `related_inside` is `undefined` when focus left the page
    #[wasm_bindgen(js_name = focusOut)]
    pub fn focus_out(&mut self, related_inside: Option<bool>) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(
            &self.inner.focus_out(related_inside),
        )?)
    }

    #[wasm_bindgen(js_name = focusIn)]
    pub fn focus_in(&self, inside: bool) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.focus_in(inside))?)
    }
}
