//! Event dispatch for user input.
//!
//! Hosts translate their native events (DOM `change`/`input` events, or calls
//! from a test) into [`Event`] values and pass them to [`handle_event`]. Control
//! values are not carried in the event: the page reads them from the document,
//! which is the single source of truth for filter and toggle state.
//!
//! # Example
//!
//! ```rust
//! use directory_listing::app::{handle_event, DirectoryPage, Event};
//! use directory_listing::storage::MemoryPreferences;
//! use directory_listing::ui::HeadlessDocument;
//! use directory_listing::Config;
//!
//! let mut page = DirectoryPage::new(Config::default(), HeadlessDocument::new(), MemoryPreferences::default());
//! page.document_mut().input_search("acme");
//! handle_event(&mut page, &Event::SearchInput);
//! ```

use crate::app::page::DirectoryPage;
use crate::storage::PreferenceStore;
use crate::ui::Document;

/// User input the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The theme toggle changed.
    ThemeToggled,
    /// A keystroke changed the search input.
    SearchInput,
    /// The category selector changed.
    CategoryChanged,
}

/// Routes an event to the page.
///
/// Search and category events run a filter pass over the existing cards; they
/// never re-fetch or re-render.
pub fn handle_event<D: Document, S: PreferenceStore>(page: &mut DirectoryPage<D, S>, event: &Event) {
    tracing::debug!(event = ?event, "handling event");

    match event {
        Event::ThemeToggled => {
            page.toggle_theme();
        }
        Event::SearchInput | Event::CategoryChanged => {
            page.apply_filters();
        }
    }
}
