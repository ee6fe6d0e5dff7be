//! In-memory document for hosts without a browser.
//!
//! [`HeadlessDocument`] keeps the page's controls as plain values and the list
//! container as a markup string. Scanning parses that markup with `scraper`, so
//! cards are found and attributes decoded the way a browser DOM would.

use crate::ui::card::CARD_CLASS;
use crate::ui::document::{CardItem, Document};
use crate::ui::fallback::LogoImage;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

/// A scanned card with its transient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessCard {
    pub item: CardItem,
    pub visible: bool,
    pub logo: Option<LogoImage>,
}

/// In-memory page document.
///
/// # Example
///
/// ```
/// use directory_listing::ui::{Document, HeadlessDocument};
///
/// let mut doc = HeadlessDocument::new();
/// doc.replace_list(r#"<article class="card group-item" data-cat="x" data-text="acme"></article>"#);
/// assert_eq!(doc.scan_cards().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct HeadlessDocument {
    root_attributes: BTreeMap<String, String>,
    theme_toggle: Option<bool>,
    list: Option<String>,
    cards: Vec<HeadlessCard>,
    search: Option<String>,
    category: Option<String>,
    no_results: Option<bool>,
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessDocument {
    /// A document with every control present: unchecked toggle, empty list,
    /// empty search, category `all`, hidden "no results" indicator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root_attributes: BTreeMap::new(),
            theme_toggle: Some(false),
            list: Some(String::new()),
            cards: Vec::new(),
            search: Some(String::new()),
            category: Some("all".to_string()),
            no_results: Some(false),
        }
    }

    /// A document with none of the page's elements.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            root_attributes: BTreeMap::new(),
            theme_toggle: None,
            list: None,
            cards: Vec::new(),
            search: None,
            category: None,
            no_results: None,
        }
    }

    #[must_use]
    pub fn without_theme_toggle(mut self) -> Self {
        self.theme_toggle = None;
        self
    }

    #[must_use]
    pub fn without_list(mut self) -> Self {
        self.list = None;
        self
    }

    #[must_use]
    pub fn without_search(mut self) -> Self {
        self.search = None;
        self
    }

    #[must_use]
    pub fn without_category(mut self) -> Self {
        self.category = None;
        self
    }

    #[must_use]
    pub fn without_no_results_indicator(mut self) -> Self {
        self.no_results = None;
        self
    }

    /// Types into the search input, replacing its value. Ignored if absent.
    pub fn input_search(&mut self, value: &str) {
        if let Some(search) = self.search.as_mut() {
            *search = value.to_string();
        }
    }

    /// Picks a category in the selector. Ignored if absent.
    pub fn select_category(&mut self, value: &str) {
        if let Some(category) = self.category.as_mut() {
            *category = value.to_string();
        }
    }

    /// Clicks the theme toggle to the given state. Ignored if absent.
    pub fn click_theme_toggle(&mut self, checked: bool) {
        if let Some(toggle) = self.theme_toggle.as_mut() {
            *toggle = checked;
        }
    }

    #[must_use]
    pub fn theme_attribute(&self, name: &str) -> Option<&str> {
        self.root_attributes.get(name).map(String::as_str)
    }

    /// List container markup, `None` if the container is absent.
    #[must_use]
    pub fn list_markup(&self) -> Option<&str> {
        self.list.as_deref()
    }

    /// Number of alert elements in the list container.
    #[must_use]
    pub fn error_notices(&self) -> usize {
        self.list
            .as_deref()
            .map_or(0, |markup| markup.matches(r#"role="alert""#).count())
    }

    /// Cards from the last scan.
    #[must_use]
    pub fn cards(&self) -> &[HeadlessCard] {
        &self.cards
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| card.visible).count()
    }

    /// Whether the "no results" indicator is showing, `None` if absent.
    #[must_use]
    pub fn no_results_visible(&self) -> Option<bool> {
        self.no_results
    }

    /// Reports a load failure for the logo of the card at `index`.
    ///
    /// Returns the substituted source, or `None` if the card has no logo or its
    /// fallback already fired.
    pub fn fail_logo(&mut self, index: usize) -> Option<&str> {
        self.cards
            .get_mut(index)
            .and_then(|card| card.logo.as_mut())
            .and_then(LogoImage::on_load_error)
    }

    fn parse_cards(markup: &str) -> Vec<HeadlessCard> {
        let card_query = format!(".{CARD_CLASS}");
        let (Ok(card_selector), Ok(img_selector)) = (Selector::parse(&card_query), Selector::parse("img")) else {
            tracing::warn!(selector = %card_query, "invalid card selector, no cards scanned");
            return Vec::new();
        };

        let fragment = Html::parse_fragment(markup);
        fragment
            .select(&card_selector)
            .map(|card| {
                let element = card.value();
                let item = CardItem::new(
                    element.attr("data-cat").unwrap_or_default(),
                    element.attr("data-text").unwrap_or_default(),
                );
                let logo = card.select(&img_selector).next().and_then(|img| {
                    let src = img.value().attr("src")?;
                    let fallback = img.value().attr("onerror").and_then(fallback_source)?;
                    Some(LogoImage::new(src, fallback))
                });

                HeadlessCard {
                    item,
                    visible: true,
                    logo,
                }
            })
            .collect()
    }
}

impl Document for HeadlessDocument {
    fn set_theme_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes.insert(name.to_string(), value.to_string());
    }

    fn theme_toggle(&self) -> Option<bool> {
        self.theme_toggle
    }

    fn set_theme_toggle(&mut self, checked: bool) {
        self.click_theme_toggle(checked);
    }

    fn replace_list(&mut self, markup: &str) -> bool {
        match self.list.as_mut() {
            Some(list) => {
                *list = markup.to_string();
                true
            }
            None => false,
        }
    }

    fn scan_cards(&mut self) -> Vec<CardItem> {
        self.cards = self.list.as_deref().map(Self::parse_cards).unwrap_or_default();
        self.cards.iter().map(|card| card.item.clone()).collect()
    }

    fn set_card_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get_mut(index) {
            card.visible = visible;
        }
    }

    fn search_value(&self) -> Option<String> {
        self.search.clone()
    }

    fn category_value(&self) -> Option<String> {
        self.category.clone()
    }

    fn has_no_results_indicator(&self) -> bool {
        self.no_results.is_some()
    }

    fn set_no_results_visible(&mut self, visible: bool) {
        if let Some(indicator) = self.no_results.as_mut() {
            *indicator = visible;
        }
    }
}


/// Extracts the substituted source from an inline `this.src='...'` handler.
fn fallback_source(handler: &str) -> Option<String> {
    const MARKER: &str = "this.src='";
    let start = handler.find(MARKER)? + MARKER.len();
    let end = handler[start..].find('\'')? + start;
    Some(handler[start..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::HeadlessDocument;
    use crate::domain::Entry;
    use crate::ui::{CardRenderer, Document};

    #[test]
    fn scan_decodes_entities_and_accepts_any_quoting() {
        let mut doc = HeadlessDocument::new();
        doc.replace_list(
            r#"<article class="group-item" data-cat="a&#38;b" data-text="x&#39;y"></article><article class='card group-item' data-cat='c' data-text=plain></article>"#,
        );
        let items = doc.scan_cards();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, "a&b");
        assert_eq!(items[0].text, "x'y");
        assert_eq!(items[1].category, "c");
        assert_eq!(items[1].text, "plain");
    }

    #[test]
    fn scan_reads_rendered_cards_back() {
        let renderer = CardRenderer::new("/placeholder.png", "/index.html");
        let mut entry = Entry::new(r#"A&"B""#, "x<y", vec!["one".into()]);
        entry.logo = Some("/logo.png".into());

        let mut doc = HeadlessDocument::new();
        assert!(doc.replace_list(&renderer.render(&entry)));
        let items = doc.scan_cards();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "x<y");
        assert_eq!(items[0].text, r#"a&"b" one"#);
        let logo = doc.cards()[0].logo.as_ref().map(|logo| logo.src().to_string());
        assert_eq!(logo.as_deref(), Some("/logo.png"));
        assert!(doc.cards()[0].logo.as_ref().is_some_and(|logo| logo.has_fallback()));
    }

    #[test]
    fn image_without_error_handler_has_no_fallback() {
        let mut doc = HeadlessDocument::new();
        doc.replace_list(r#"<article class="group-item"><img src="/a.png"></article>"#);
        doc.scan_cards();
        assert_eq!(doc.cards()[0].logo, None);
        assert_eq!(doc.fail_logo(0), None);
    }

    #[test]
    fn elements_without_the_card_class_are_ignored() {
        let mut doc = HeadlessDocument::new();
        doc.replace_list(
            r#"<article class="card" data-cat="x"></article><article class="card group-item" data-cat="y"></article>"#,
        );
        let items = doc.scan_cards();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, "y");
        assert_eq!(items[0].text, "");
    }

    #[test]
    fn absent_elements_ignore_writes() {
        let mut doc = HeadlessDocument::bare();
        assert!(!doc.replace_list("<p>x</p>"));
        doc.set_theme_toggle(true);
        doc.set_no_results_visible(true);
        doc.input_search("q");
        assert_eq!(doc.theme_toggle(), None);
        assert_eq!(doc.no_results_visible(), None);
        assert_eq!(doc.search_value(), None);
        assert!(doc.scan_cards().is_empty());
        assert_eq!(doc.error_notices(), 0);
    }
}
