//! The document touchpoints the page reads and writes.
//!
//! [`Document`] is the contract with the rendering substrate. It names the
//! controls and regions the page uses, not how they are found: the browser host
//! looks elements up by id, the headless host keeps them in memory.
//!
//! Optional elements are modelled as `Option` reads and no-op writes. A page
//! without a search box simply never filters; that is not an error.

/// A rendered card as the filter sees it.
///
/// Read back from the card's `data-cat` and `data-text` attributes, unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub category: String,
    pub text: String,
}

impl CardItem {
    #[must_use]
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }
}

/// Read/write access to the page's document.
pub trait Document {
    /// Sets the document-level theme attribute.
    fn set_theme_attribute(&mut self, name: &str, value: &str);

    /// Checked state of the theme toggle, `None` if the toggle is absent.
    fn theme_toggle(&self) -> Option<bool>;

    /// Sets the theme toggle's checked state. No-op if absent.
    fn set_theme_toggle(&mut self, checked: bool);

    /// Replaces the list container's content with `markup`.
    ///
    /// Returns `false`, leaving everything untouched, if the container is absent.
    fn replace_list(&mut self, markup: &str) -> bool;

    /// Scans the list container for rendered cards, in document order.
    ///
    /// The returned positions are the handles accepted by
    /// [`Document::set_card_visible`] until the next `replace_list`.
    fn scan_cards(&mut self) -> Vec<CardItem>;

    /// Shows or hides the card at `index` of the last scan.
    fn set_card_visible(&mut self, index: usize, visible: bool);

    /// Current value of the search input, `None` if absent.
    fn search_value(&self) -> Option<String>;

    /// Current value of the category selector, `None` if absent.
    fn category_value(&self) -> Option<String>;

    /// Whether the "no results" indicator exists.
    fn has_no_results_indicator(&self) -> bool;

    /// Shows or hides the "no results" indicator. No-op if absent.
    fn set_no_results_visible(&mut self, visible: bool);
}
