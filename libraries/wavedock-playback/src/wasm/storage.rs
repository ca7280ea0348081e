//! `PreferenceStore` over `window.localStorage`

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::{PlaybackError, Result};
use crate::store::PreferenceStore;

fn store_error(context: &str, error: &JsValue) -> PlaybackError {
    PlaybackError::Store(format!("{}: {:?}", context, error))
}

/// Browser local storage
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Open the window's local storage
    ///
    /// Fails outside a window context or when storage is disabled.
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| PlaybackError::Store("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| store_error("localStorage unavailable", &e))?
            .ok_or_else(|| PlaybackError::Store("localStorage disabled".to_string()))?;

        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| store_error("getItem failed", &e))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| store_error("setItem failed", &e))
    }
}
