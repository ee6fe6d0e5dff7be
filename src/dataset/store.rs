//! In-memory entry list and the dataset load.

use crate::dataset::source::DatasetSource;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::Entry;

/// Fetches and parses the dataset at `path`.
///
/// # Errors
///
/// - [`DirectoryError::Fetch`] if the request does not complete
/// - [`DirectoryError::HttpStatus`] for a status outside 2xx
/// - [`DirectoryError::Parse`] if the body is not a JSON array of entries
pub async fn fetch_entries(source: &(impl DatasetSource + ?Sized), path: &str) -> Result<Vec<Entry>> {
    let response = source.fetch(path).await?;
    if !response.is_success() {
        return Err(DirectoryError::HttpStatus(response.status));
    }

    let entries: Vec<Entry> = serde_json::from_str(&response.body)?;
    tracing::debug!(path = %path, entry_count = entries.len(), "dataset parsed");
    Ok(entries)
}

/// Holds the entries of the last load.
///
/// Replaced wholesale on every load; never patched.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn replace(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{fetch_entries, EntryStore};
    use crate::dataset::{FetchResponse, StaticSource};
    use crate::domain::{DirectoryError, Entry, Result};
    use futures_util::FutureExt;

    const PATH: &str = "/static/js/entries.json";

    fn load(source: &StaticSource) -> Result<Vec<Entry>> {
        fetch_entries(source, PATH)
            .now_or_never()
            .unwrap_or_else(|| Err(DirectoryError::Fetch("pending".into())))
    }

    #[test]
    fn parses_a_successful_body() -> Result<()> {
        let source = StaticSource::default().with(
            PATH,
            FetchResponse::ok(r#"[{"name": "Acme", "cat": "tools", "bullets": ["Anvils"]}]"#),
        );
        let entries = load(&source)?;
        assert_eq!(entries, vec![Entry::new("Acme", "tools", vec!["Anvils".into()])]);
        Ok(())
    }

    #[test]
    fn non_success_status_is_an_error_even_with_a_valid_body() {
        let source = StaticSource::default().with(PATH, FetchResponse::with_status(500, "[]"));
        assert!(matches!(load(&source), Err(DirectoryError::HttpStatus(500))));
    }

    #[test]
    fn body_that_is_not_an_entry_list_is_a_parse_error() {
        let source = StaticSource::default().with(PATH, FetchResponse::ok(r#"{"name": "Acme"}"#));
        assert!(matches!(load(&source), Err(DirectoryError::Parse(_))));
    }

    #[test]
    fn store_replaces_wholesale() {
        let mut store = EntryStore::default();
        store.replace(vec![Entry::new("A", "x", vec![]), Entry::new("B", "x", vec![])]);
        store.replace(vec![Entry::new("C", "y", vec![])]);
        assert_eq!(store.entries().len(), 1);
        assert_eq!(store.entries()[0].name, "C");
        store.clear();
        assert!(store.entries().is_empty());
    }
}
