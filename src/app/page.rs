//! The page controller.
//!
//! [`DirectoryPage`] owns everything the page mutates: the document handle,
//! the preference store, the loaded entries and the current card handle set.
//! Entries and cards are private and only ever replaced wholesale.

use crate::app::filter::FilterEngine;
use crate::dataset::{fetch_entries, DatasetSource, EntryStore};
use crate::domain::{Entry, Result, ThemeMode};
use crate::storage::PreferenceStore;
use crate::ui::{CardItem, CardRenderer, Document, ListView, ThemePreference};
use crate::Config;

/// Markup shown in place of the list when the dataset cannot be loaded.
pub const LOAD_ERROR_NOTICE: &str =
    r#"<div class="alert alert-danger mb-0" role="alert">Failed to load directory data.</div>"#;

/// Controller for one directory page.
///
/// # Lifecycle
///
/// 1. [`DirectoryPage::initialize_theme`] applies the saved or default theme
/// 2. [`DirectoryPage::load`] fetches the dataset once, then renders and filters
/// 3. Input events call [`DirectoryPage::apply_filters`] or
///    [`DirectoryPage::toggle_theme`]; nothing is fetched or rendered again
///
/// # Example
///
/// ```
/// use directory_listing::app::DirectoryPage;
/// use directory_listing::dataset::{FetchResponse, StaticSource};
/// use directory_listing::storage::MemoryPreferences;
/// use directory_listing::ui::HeadlessDocument;
/// use directory_listing::Config;
/// use futures_util::FutureExt;
///
/// let config = Config::default();
/// let source = StaticSource::default().with(
///     config.dataset_path.clone(),
///     FetchResponse::ok(r#"[{"name": "Acme", "cat": "tools", "bullets": ["Anvils"]}]"#),
/// );
///
/// let mut page = DirectoryPage::new(config, HeadlessDocument::new(), MemoryPreferences::default());
/// page.initialize_theme();
/// assert_eq!(page.load(&source).now_or_never(), Some(true));
/// assert_eq!(page.document().visible_count(), 1);
/// ```
#[derive(Debug)]
pub struct DirectoryPage<D, S> {
    document: D,
    store: S,
    dataset_path: String,
    theme: ThemePreference,
    list: ListView,
    filter: FilterEngine,
    entries: EntryStore,
    items: Vec<CardItem>,
}

impl<D: Document, S: PreferenceStore> DirectoryPage<D, S> {
    #[must_use]
    pub fn new(config: Config, document: D, store: S) -> Self {
        Self {
            document,
            store,
            theme: ThemePreference::from_config(&config),
            list: ListView::new(CardRenderer::from_config(&config)),
            filter: FilterEngine,
            entries: EntryStore::default(),
            items: Vec::new(),
            dataset_path: config.dataset_path,
        }
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Mutable document access, for hosts that feed control state in.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn dataset_path(&self) -> &str {
        &self.dataset_path
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        self.entries.entries()
    }

    /// Card handle set of the last render, in display order.
    #[must_use]
    pub fn items(&self) -> &[CardItem] {
        &self.items
    }

    /// Applies the persisted theme, defaulting to light.
    pub fn initialize_theme(&mut self) -> ThemeMode {
        self.theme.initialize(&mut self.document, &mut self.store)
    }

    /// Handles a change of the theme toggle.
    pub fn toggle_theme(&mut self) -> Option<ThemeMode> {
        self.theme.on_toggle(&mut self.document, &mut self.store)
    }

    /// Runs the startup sequence: theme first, then the dataset load.
    pub async fn start<F: DatasetSource + ?Sized>(&mut self, source: &F) -> bool {
        let theme = self.initialize_theme();
        tracing::debug!(theme = %theme, dataset = %self.dataset_path, "page starting");
        self.load(source).await
    }

    /// Fetches the dataset and renders it.
    ///
    /// Returns whether the dataset loaded. Failures are handled here, see
    /// [`DirectoryPage::complete_load`].
    pub async fn load<F: DatasetSource + ?Sized>(&mut self, source: &F) -> bool {
        let path = self.dataset_path.clone();
        let result = fetch_entries(source, &path).await;
        self.complete_load(result)
    }

    /// Finishes a load with the outcome of the dataset fetch.
    ///
    /// Split from [`DirectoryPage::load`] so hosts that share the page across
    /// event handlers can await the fetch without holding the page.
    ///
    /// On success the entries are stored and rendered. On failure the error is
    /// logged, the list container shows [`LOAD_ERROR_NOTICE`], and entries and
    /// cards are emptied. There is no retry.
    pub fn complete_load(&mut self, result: Result<Vec<Entry>>) -> bool {
        match result {
            Ok(entries) => {
                tracing::debug!(entry_count = entries.len(), "entries loaded");
                self.entries.replace(entries);
                self.render();
                true
            }
            Err(e) => {
                tracing::error!(path = %self.dataset_path, error = %e, "Failed to load entries");
                self.document.replace_list(LOAD_ERROR_NOTICE);
                self.entries.clear();
                self.items.clear();
                false
            }
        }
    }

    /// Renders all entries and runs one filter pass.
    ///
    /// A page without a list container keeps its previous cards.
    pub fn render(&mut self) {
        if let Some(items) = self.list.render(self.entries.entries(), &mut self.document) {
            self.items = items;
            self.apply_filters();
        }
    }

    /// Runs one filter pass over the current cards.
    ///
    /// Returns the visible count, `None` if the page lacks a filter control.
    pub fn apply_filters(&mut self) -> Option<usize> {
        self.filter.apply(&mut self.document, &self.items)
    }
}
