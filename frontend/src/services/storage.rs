use shared::{FlagStore, StoreError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::services::logging::Logger;

/// Usage flags persisted in `window.localStorage`.
///
/// Local storage can be missing (privacy modes, sandboxed iframes). The store
/// still opens and every call then reports `StoreError::Unavailable`.
pub struct LocalFlagStore {
    storage: Option<Storage>,
}

impl LocalFlagStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                Logger::warn_with_component("storage", &format!("localStorage access denied: {}", js_reason(&e)));
                None
            }
        });

        if storage.is_none() {
            Logger::warn_with_component("storage", "localStorage unavailable, usage flags will not persist");
        }

        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("window.localStorage is not available".to_string()))
    }
}

impl FlagStore for LocalFlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}

/// Readable text for a thrown JS value
pub fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
