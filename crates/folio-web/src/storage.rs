//! `window.localStorage` as a [`PreferenceStore`].

use folio_core::{PreferenceStore, StorageError};
use wasm_bindgen::JsValue;

/// Browser local storage. Private browsing modes may deny access, in
/// which case every call reports [`StorageError::Unavailable`].
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage is not available; preferences will not persist");
        }
        Self { storage }
    }

    fn storage(&self) -> Result<&web_sys::Storage, StorageError> {
        self.storage.as_ref().ok_or(StorageError::Unavailable)
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn access_error(value: JsValue) -> StorageError {
    StorageError::Access(format!("{value:?}"))
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(access_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(access_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(access_error)
    }
}
