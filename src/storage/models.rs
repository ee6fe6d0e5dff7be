//! Storage record models for the file-backed preference store.
//!
//! Records are kept separate from the plain string values exposed through
//! [`crate::storage::PreferenceStore`] so the on-disk format can carry metadata.

use serde::{Deserialize, Serialize};

/// One persisted preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    /// The stored string value.
    pub value: String,

    /// Unix timestamp of the last write.
    pub updated_at: i64,
}

impl PreferenceRecord {
    /// Creates a record stamped with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            updated_at: chrono::Utc::now().timestamp(),
        }
    }
}
