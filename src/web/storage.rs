//! `localStorage`-backed preference store.

use super::describe_js_error;
use crate::domain::error::{DirectoryError, Result};
use crate::storage::PreferenceStore;

/// Preference store over the window's `localStorage`.
///
/// If storage is unavailable (disabled, sandboxed frame) reads return nothing
/// and writes fail.
pub struct LocalStoragePreferences {
    storage: Option<web_sys::Storage>,
}

impl LocalStoragePreferences {
    #[must_use]
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable, theme will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalStoragePreferences {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| DirectoryError::Storage(describe_js_error(&e))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| DirectoryError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| DirectoryError::Storage(describe_js_error(&e)))
    }
}
