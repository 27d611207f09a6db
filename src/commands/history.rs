//! History Commands
//!
//! Path-based navigation over the browser History API.

use wasm_bindgen::JsValue;
use tracing::warn;

/// Path of the current location, `/` if it cannot be read
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Add a history entry for `path`
pub fn push_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
        warn!(path, ?err, "pushState failed");
    }
}

/// Rewrite the current history entry to `path`
pub fn replace_path(path: &str) {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(path)) {
        warn!(path, ?err, "replaceState failed");
    }
}
