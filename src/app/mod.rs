//! Application layer coordinating the document, the dataset and user input.
//!
//! # Architecture
//!
//! ```text
//! startup:  theme init → dataset fetch → render → filter pass
//! input:    Event → handle_event → filter pass | theme apply
//! ```
//!
//! # Modules
//!
//! - [`page`]: The page controller owning entries and cards
//! - [`filter`]: Query/category matching and visibility toggling
//! - [`handler`]: Event type and dispatch

pub mod filter;
pub mod handler;
pub mod page;

pub use filter::{FilterEngine, FilterState, ALL_CATEGORIES};
pub use handler::{handle_event, Event};
pub use page::{DirectoryPage, LOAD_ERROR_NOTICE};
