//! `localStorage` persistence for per-browser preferences.
//!
//! Values are stored as JSON under a fixed key. A stored value that no
//! longer decodes (an older shape, hand edits) is dropped and the caller
//! falls back to defaults. Outside the csr build nothing is stored.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read and decode the value stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        let raw = storage.get_item(key).ok().flatten()?;
        let decoded = decode(key, &raw);
        if decoded.is_none() {
            let _ = storage.remove_item(key);
        }
        decoded
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Encode `value` and store it under `key`. Failures are logged, never
/// surfaced: losing a preference is not worth interrupting the user.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(error) => {
            log::warn!("preference `{key}` not saved: {error}");
            return;
        }
    };
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("preference `{key}` not saved: storage rejected the write");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = raw;
    }
}

#[cfg(any(test, feature = "csr"))]
fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            log::debug!("discarding stored preference `{key}`: {error}");
            None
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
