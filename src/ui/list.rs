//! Full-list rendering.
//!
//! [`ListView`] turns the entry list into container markup and rebuilds the
//! card handle set from what it rendered. Filtering is the caller's next step.

use crate::domain::Entry;
use crate::ui::card::CardRenderer;
use crate::ui::document::{CardItem, Document};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    static ROOT_COLLATOR: Option<Collator> = Collator::try_new(&Default::default(), CollatorOptions::new())
        .map_err(|e| tracing::warn!(error = ?e, "root collator unavailable, names sort by code point"))
        .ok();
}

/// Orders two names with the root-locale collator at its default strength.
///
/// Accents and case only break ties between otherwise equal letters, and
/// lowercase sorts before uppercase.
///
/// # Example
///
/// ```
/// use directory_listing::ui::list::locale_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(locale_cmp("alpha", "Beta"), Ordering::Less);
/// assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
/// assert_eq!(locale_cmp("Émile", "Zed"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// Renders the whole list into the document.
#[derive(Debug, Clone)]
pub struct ListView {
    renderer: CardRenderer,
}

impl ListView {
    #[must_use]
    pub fn new(renderer: CardRenderer) -> Self {
        Self { renderer }
    }

    #[must_use]
    pub fn renderer(&self) -> &CardRenderer {
        &self.renderer
    }

    /// Returns `entries` ordered by name, stable for equal names.
    #[must_use]
    pub fn sorted<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        let mut sorted: Vec<&Entry> = entries.iter().collect();
        sorted.sort_by(|a, b| locale_cmp(&a.name, &b.name));
        sorted
    }

    /// Renders `entries` into the list container and scans the result.
    ///
    /// Returns `None` without touching the document if the container is absent,
    /// otherwise the fresh card handle set in display order.
    pub fn render<D: Document + ?Sized>(&self, entries: &[Entry], document: &mut D) -> Option<Vec<CardItem>> {
        let _span = tracing::debug_span!("list_render", entry_count = entries.len()).entered();

        let markup: String = self
            .sorted(entries)
            .into_iter()
            .map(|entry| self.renderer.render(entry))
            .collect();

        if !document.replace_list(&markup) {
            tracing::debug!("list container absent, skipping render");
            return None;
        }

        let items = document.scan_cards();
        tracing::debug!(card_count = items.len(), "list rendered");
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::{locale_cmp, ListView};
    use crate::domain::Entry;
    use crate::ui::{CardRenderer, Document, HeadlessDocument};
    use std::cmp::Ordering;

    fn view() -> ListView {
        ListView::new(CardRenderer::new("/placeholder.png", "/index.html"))
    }

    #[test]
    fn comparison_ignores_case_first() {
        assert_eq!(locale_cmp("Beta", "alpha"), Ordering::Greater);
        assert_eq!(locale_cmp("beta", "Beta"), Ordering::Less);
        assert_eq!(locale_cmp("Beta", "Beta"), Ordering::Equal);
        assert_eq!(locale_cmp("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        assert_eq!(locale_cmp("Émile", "Zed"), Ordering::Less);
        assert_eq!(locale_cmp("école", "eve"), Ordering::Less);
        assert_eq!(locale_cmp("Ångström", "Bravo"), Ordering::Less);
        assert_eq!(locale_cmp("e", "é"), Ordering::Less);

        let entries = vec![
            Entry::new("Zed", "x", vec![]),
            Entry::new("Émile", "x", vec![]),
            Entry::new("eve", "x", vec![]),
            Entry::new("école", "x", vec![]),
        ];
        let view = view();
        let names: Vec<&str> = view.sorted(&entries).iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["école", "Émile", "eve", "Zed"]);
    }

    #[test]
    fn sort_is_case_insensitive_and_stable() {
        let mut first = Entry::new("Same", "x", vec![]);
        first.keywords = Some("first".into());
        let mut second = Entry::new("Same", "x", vec![]);
        second.keywords = Some("second".into());
        let entries = vec![
            Entry::new("Beta", "x", vec!["b".into()]),
            first,
            Entry::new("alpha", "y", vec!["a".into()]),
            second,
        ];

        let view = view();
        let sorted = view.sorted(&entries);
        let names: Vec<&str> = sorted.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha", "Beta", "Same", "Same"]);
        assert_eq!(sorted[2].keywords.as_deref(), Some("first"));
        assert_eq!(sorted[3].keywords.as_deref(), Some("second"));
    }

    #[test]
    fn render_returns_items_in_display_order() {
        let entries = vec![
            Entry::new("Beta", "x", vec!["b".into()]),
            Entry::new("alpha", "y", vec!["a".into()]),
        ];
        let mut doc = HeadlessDocument::new();

        let items = view().render(&entries, &mut doc).unwrap_or_default();
        let categories: Vec<&str> = items.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, ["y", "x"]);
        assert_eq!(items[0].text, "alpha a");
    }

    #[test]
    fn render_is_a_no_op_without_container() {
        let mut doc = HeadlessDocument::new().without_list();
        assert!(view().render(&[Entry::new("A", "x", vec![])], &mut doc).is_none());
        assert!(doc.scan_cards().is_empty());
    }

    #[test]
    fn rerender_replaces_the_handle_set() {
        let mut doc = HeadlessDocument::new();
        let view = view();
        view.render(&[Entry::new("A", "x", vec![]), Entry::new("B", "x", vec![])], &mut doc);
        let items = view.render(&[Entry::new("C", "y", vec![])], &mut doc).unwrap_or_default();
        assert_eq!(items.len(), 1);
        assert_eq!(doc.cards().len(), 1);
    }
}
