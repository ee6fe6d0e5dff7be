//! Infrastructure layer for filesystem interactions.
//!
//! This module provides the path handling the headless host needs to stand in
//! for a web server: resolving resource paths under a static root and locating
//! the preference file.

pub mod paths;

pub use paths::{preferences_path, resolve_resource, PREFERENCES_FILE};
