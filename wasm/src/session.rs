//! Session state: selected store and API key
//!
//! Both values live in the header controls and are mirrored to
//! `localStorage` so they survive reloads. The API key is read from the
//! input field at call time, so an edited key takes effect on the very
//! next request.

use web_sys::Storage;

use crate::dom;

pub const STORE_KEY: &str = "selectedStoreId";
pub const API_KEY_KEY: &str = "apiKey";

/// Demo key the backend seeds for the first store
pub const DEFAULT_API_KEY: &str = "store1_api_key";

pub const STORE_SELECTOR: &str = "storeSelector";
pub const API_KEY_INPUT: &str = "apiKeyInput";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// API key attached to every request
pub fn api_key() -> String {
    dom::input_value(API_KEY_INPUT)
        .filter(|v| !v.is_empty())
        .or_else(|| get(API_KEY_KEY))
        .unwrap_or_default()
}

/// Drop the persisted key after an auth failure
pub fn clear_api_key() {
    remove(API_KEY_KEY);
}

/// Currently selected store, if any
pub fn selected_store_id() -> Option<i64> {
    dom::select_value(STORE_SELECTOR)
        .filter(|v| !v.is_empty())
        .or_else(|| get(STORE_KEY))?
        .parse()
        .ok()
}
