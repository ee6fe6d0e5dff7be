//! Storage layer for persisted page preferences.
//!
//! The page persists exactly one value, the theme mode, under a fixed key. This
//! module provides the key-value abstraction and the non-browser backends.
//!
//! # Modules
//!
//! - `backend`: Storage trait abstraction and the in-memory backend
//! - `json`: JSON file-based backend with atomic writes
//! - `models`: On-disk record types

pub mod backend;
pub mod json;
pub mod models;

pub use backend::{MemoryPreferences, PreferenceStore};
pub use json::JsonPreferences;
pub use models::PreferenceRecord;
