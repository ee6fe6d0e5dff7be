//! Text and category filtering over rendered cards.
//!
//! Filtering never touches entries or re-renders cards; it only flips card
//! visibility and the "no results" indicator. Every keystroke runs a full pass,
//! which is fine for directory-sized lists.

use crate::ui::document::{CardItem, Document};

/// Category selector value that matches every card.
pub const ALL_CATEGORIES: &str = "all";

/// Query and category as read from the controls for one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    category: String,
}

impl FilterState {
    /// Normalizes raw control values: the query is trimmed and lowercased, the
    /// category is taken as is.
    ///
    /// # Example
    ///
    /// ```
    /// use directory_listing::app::filter::FilterState;
    /// use directory_listing::ui::CardItem;
    ///
    /// let state = FilterState::new("  ACME ", "tools");
    /// assert!(state.matches(&CardItem::new("tools", "acme anvils")));
    /// assert!(!state.matches(&CardItem::new("food", "acme anvils")));
    /// ```
    #[must_use]
    pub fn new(query: &str, category: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            category: category.to_string(),
        }
    }

    /// Reads both controls. `None` if either is absent.
    pub fn from_document<D: Document + ?Sized>(document: &D) -> Option<Self> {
        Some(Self::new(&document.search_value()?, &document.category_value()?))
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Category match AND (empty query OR substring of the card text).
    #[must_use]
    pub fn matches(&self, item: &CardItem) -> bool {
        let category_ok = self.category == ALL_CATEGORIES || item.category == self.category;
        category_ok && (self.query.is_empty() || item.text.to_lowercase().contains(&self.query))
    }
}

/// Applies the current control state to the card set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine;

impl FilterEngine {
    /// Runs one filter pass and returns the number of visible cards.
    ///
    /// Returns `None`, changing nothing, if the search input, the category
    /// selector or the "no results" indicator is missing.
    pub fn apply<D: Document + ?Sized>(&self, document: &mut D, items: &[CardItem]) -> Option<usize> {
        if !document.has_no_results_indicator() {
            return None;
        }
        let state = FilterState::from_document(document)?;

        let mut visible = 0;
        for (index, item) in items.iter().enumerate() {
            let show = state.matches(item);
            document.set_card_visible(index, show);
            if show {
                visible += 1;
            }
        }

        document.set_no_results_visible(visible == 0);
        tracing::debug!(
            query = %state.query,
            category = %state.category,
            visible = visible,
            total = items.len(),
            "filters applied"
        );
        Some(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterEngine, FilterState};
    use crate::ui::{CardItem, Document, HeadlessDocument};

    fn cards() -> Vec<CardItem> {
        vec![
            CardItem::new("y", "alpha a"),
            CardItem::new("x", "beta b"),
        ]
    }

    fn document_with(items: &[CardItem]) -> HeadlessDocument {
        let markup: String = items
            .iter()
            .map(|item| {
                format!(
                    r#"<article class="group-item" data-cat="{}" data-text="{}"></article>"#,
                    item.category, item.text
                )
            })
            .collect();
        let mut doc = HeadlessDocument::new();
        doc.replace_list(&markup);
        doc.scan_cards();
        doc
    }

    #[test]
    fn empty_query_and_all_shows_everything() {
        let items = cards();
        let mut doc = document_with(&items);
        assert_eq!(FilterEngine.apply(&mut doc, &items), Some(2));
        assert_eq!(doc.no_results_visible(), Some(false));
    }

    #[test]
    fn no_cards_reveals_the_indicator() {
        let mut doc = HeadlessDocument::new();
        assert_eq!(FilterEngine.apply(&mut doc, &[]), Some(0));
        assert_eq!(doc.no_results_visible(), Some(true));
    }

    #[test]
    fn category_is_an_exact_match() {
        let items = cards();
        let mut doc = document_with(&items);

        doc.select_category("x");
        assert_eq!(FilterEngine.apply(&mut doc, &items), Some(1));
        assert!(!doc.cards()[0].visible);
        assert!(doc.cards()[1].visible);
        assert_eq!(doc.no_results_visible(), Some(false));

        doc.select_category("X");
        assert_eq!(FilterEngine.apply(&mut doc, &items), Some(0));
        assert_eq!(doc.no_results_visible(), Some(true));
    }

    #[test]
    fn query_is_trimmed_case_insensitive_substring() {
        let items = cards();
        let mut doc = document_with(&items);

        doc.input_search("  ETA B ");
        assert_eq!(FilterEngine.apply(&mut doc, &items), Some(1));
        assert!(doc.cards()[1].visible);

        doc.input_search("b a");
        assert_eq!(FilterEngine.apply(&mut doc, &items), Some(0));
    }

    #[test]
    fn whitespace_query_matches_all() {
        let state = FilterState::new("   ", "all");
        assert_eq!(state.query(), "");
        assert_eq!(state.category(), "all");
        assert!(state.matches(&CardItem::new("", "")));
    }

    #[test]
    fn missing_controls_make_the_pass_a_no_op() {
        let items = cards();
        for mut doc in [
            document_with(&items).without_search(),
            document_with(&items).without_category(),
            document_with(&items).without_no_results_indicator(),
        ] {
            doc.set_card_visible(0, false);
            assert_eq!(FilterEngine.apply(&mut doc, &items), None);
            assert!(!doc.cards()[0].visible);
        }
    }
}
