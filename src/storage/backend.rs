//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStore`] trait that abstracts over the
//! client-local key-value storage the page persists its theme in. The page only
//! ever needs string get/set; nothing is ever deleted.

use crate::domain::error::Result;
use std::collections::HashMap;

/// Client-local key-value storage for page preferences.
///
/// # Implementations
///
/// - [`MemoryPreferences`]: Process-local map, used by tests and the headless host
/// - [`crate::storage::JsonPreferences`]: JSON file with atomic writes
/// - `LocalStoragePreferences`: Browser `localStorage` (wasm32 only)
///
/// # Examples
///
/// ```
/// use directory_listing::storage::{MemoryPreferences, PreferenceStore};
///
/// let mut store = MemoryPreferences::default();
/// store.set("bs-theme", "dark")?;
/// assert_eq!(store.get("bs-theme")?.as_deref(), Some("dark"));
/// # Ok::<(), directory_listing::DirectoryError>(())
/// ```
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preference store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Creates a store pre-populated with one value.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
