//! JSON file-based preference store.
//!
//! This module provides a simple, human-readable preference store using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) to prevent
//! corruption on crashes. Used by the headless host, where there is no browser
//! `localStorage`.

use crate::domain::error::{DirectoryError, Result};
use crate::storage::backend::PreferenceStore;
use crate::storage::models::PreferenceRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the storage format for future migrations.
    version: u32,

    #[serde(default)]
    preferences: BTreeMap<String, PreferenceRecord>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            preferences: BTreeMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// The whole file is loaded on creation and rewritten on every `set`.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "preferences": {
///     "bs-theme": { "value": "dark", "updated_at": 1735689600 }
///   }
/// }
/// ```
///
/// # Examples
///
/// ```no_run
/// use directory_listing::storage::{JsonPreferences, PreferenceStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonPreferences::new(PathBuf::from("/tmp/preferences.json"))?;
/// store.set("bs-theme", "dark")?;
/// # Ok::<(), directory_listing::DirectoryError>(())
/// ```
#[derive(Debug)]
pub struct JsonPreferences {
    file_path: PathBuf,
    data: PreferenceData,
}

impl JsonPreferences {
    /// Creates or opens a JSON preference store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty; nothing is
    /// written until the first `set`. Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty preference store");
            PreferenceData::default()
        };

        tracing::debug!(preference_count = data.preferences.len(), "preference store opened");

        Ok(Self { file_path, data })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| DirectoryError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, "loaded preference data");
        Ok(data)
    }

    /// Writes to a temporary file first, then renames it over the target path.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DirectoryError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.preferences.get(key).map(|record| record.value.clone()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key, value = %value).entered();

        self.data
            .preferences
            .insert(key.to_string(), PreferenceRecord::new(value));
        self.save_to_file()
    }
}

#[cfg(test)]
mod tests {
    use super::JsonPreferences;
    use crate::domain::{DirectoryError, Result};
    use crate::storage::PreferenceStore;

    #[test]
    fn values_survive_reopen() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("nested").join("preferences.json");

        let mut store = JsonPreferences::new(path.clone())?;
        assert_eq!(store.get("bs-theme")?, None);
        store.set("bs-theme", "dark")?;

        let reopened = JsonPreferences::new(path)?;
        assert_eq!(reopened.get("bs-theme")?.as_deref(), Some("dark"));
        Ok(())
    }

    #[test]
    fn no_file_is_written_before_first_set() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("preferences.json");
        let store = JsonPreferences::new(path.clone())?;
        assert_eq!(store.path(), path.as_path());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn temp_file_does_not_linger() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("preferences.json");
        let mut store = JsonPreferences::new(path.clone())?;
        store.set("bs-theme", "light")?;
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        Ok(())
    }

    #[test]
    fn corrupt_file_is_a_storage_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("preferences.json");
        std::fs::write(&path, "not json")?;

        let err = JsonPreferences::new(path).unwrap_err();
        assert!(matches!(err, DirectoryError::Storage(_)));
        Ok(())
    }
}
