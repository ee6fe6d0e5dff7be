//! Dataset loading.
//!
//! The page's only asynchronous work: one GET for the static JSON dataset at
//! startup. No retries, no timeout, no cancellation.
//!
//! # Modules
//!
//! - [`source`]: Transport abstraction and the non-browser transports
//! - [`store`]: Fetch-and-parse plus the in-memory entry list

pub mod source;
pub mod store;

pub use source::{DatasetSource, FetchResponse, FileSource, StaticSource};
pub use store::{fetch_entries, EntryStore};
