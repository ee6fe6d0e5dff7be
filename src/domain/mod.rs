//! Domain layer for the directory page.
//!
//! This module contains the core domain types, independent of the browser, the
//! filesystem, or any other host capability.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Dataset entry model and its derived fields
//! - [`theme`]: Persisted light/dark theme mode
//!
//! # Examples
//!
//! ```
//! use directory_listing::domain::{Entry, Result};
//!
//! fn parse_dataset(body: &str) -> Result<Vec<Entry>> {
//!     Ok(serde_json::from_str(body)?)
//! }
//!
//! let entries = parse_dataset(r#"[{"name": "Acme", "cat": "tools", "bullets": []}]"#)?;
//! assert_eq!(entries.len(), 1);
//! # Ok::<(), directory_listing::DirectoryError>(())
//! ```

pub mod entry;
pub mod error;
pub mod theme;

pub use entry::Entry;
pub use error::{DirectoryError, Result};
pub use theme::ThemeMode;
