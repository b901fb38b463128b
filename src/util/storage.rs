//! Browser localStorage helpers for JSON-valued keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! Preferences and the post draft share one synchronous key-value substrate.
//! These helpers centralize the browser-only read/write behavior so the rest
//! of the crate never touches web-sys storage glue directly.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here raises. A missing window/storage, a quota failure, or a
//! malformed stored value degrades to `None`/no-op; malformed values and
//! write failures are logged as warnings.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON value from `localStorage` for `key`.
///
/// Returns `None` when the key is absent or the stored text does not parse
/// as `T`; a parse failure is logged and otherwise treated as absence.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("discarding malformed stored value for {key}: {err}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Load a JSON value for `key`, falling back to `default` when absent or
/// malformed.
pub fn get_or_default<T: DeserializeOwned>(key: &str, default: T) -> T {
    load_json(key).unwrap_or(default)
}

/// Load the raw stored text for `key` without JSON parsing.
///
/// Only the preference migration paths want this; new writes always go
/// through [`save_json`].
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`, overwriting any prior value.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("failed to serialize value for {key}: {err}");
                return;
            }
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("failed to persist {key} (storage unavailable or quota exceeded)");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Remove `key` from `localStorage`. No-op when the key is absent.
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
    }
}
