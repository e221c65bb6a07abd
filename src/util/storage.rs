//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Persisted identity credentials and the consent popup hand-off both go
//! through here so callers never repeat the web-sys glue. Native builds see an
//! empty store.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::debug!("storage: localStorage unavailable: {e:?}");
            None
        }
    }
}

/// Read the raw string stored under `key`.
pub fn load_text(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        match local_storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("storage: could not read {key}: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("storage: {key} unavailable outside the browser");
        None
    }
}

/// Store a raw string under `key`. Returns `false` if storage is unavailable.
pub fn save_text(key: &str, value: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return false;
        };
        storage.set_item(key, value).is_ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("storage: {key} ({} bytes) not saved outside the browser", value.len());
        false
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(Err(e)) = local_storage().map(|storage| storage.remove_item(key)) {
            log::debug!("storage: could not remove {key}: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("storage: {key} unavailable outside the browser");
    }
}

/// Load a JSON value for `key`; malformed entries read as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_text(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("storage: ignoring malformed {key}: {e}");
            None
        }
    }
}

/// Save a JSON value for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => {
            if !save_text(key, &raw) {
                log::debug!("storage: could not persist {key}");
            }
        }
        Err(e) => log::warn!("storage: failed to encode {key}: {e}"),
    }
}
