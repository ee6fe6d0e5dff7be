//! Browser implementation of the document contract.

use crate::ui::{CardItem, Document};
use crate::{Config, ElementIds};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};

/// Live DOM document.
///
/// Elements are looked up by id on every access, so controls added or removed
/// after startup are picked up. Card handles are the elements found by the
/// last scan.
pub struct BrowserDocument {
    document: web_sys::Document,
    ids: ElementIds,
    hidden_class: String,
    cards: Vec<Element>,
}

impl BrowserDocument {
    #[must_use]
    pub fn new(document: web_sys::Document, config: &Config) -> Self {
        Self {
            document,
            ids: config.elements.clone(),
            hidden_class: config.hidden_class.clone(),
            cards: Vec::new(),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.element(id)?.dyn_into::<HtmlInputElement>().ok()
    }

    fn set_hidden(&self, element: &Element, hidden: bool) {
        if let Err(e) = element.class_list().toggle_with_force(&self.hidden_class, hidden) {
            tracing::debug!(error = ?e, "failed to toggle hidden class");
        }
    }
}

impl Document for BrowserDocument {
    fn set_theme_attribute(&mut self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(e) = root.set_attribute(name, value) {
                tracing::debug!(error = ?e, "failed to set theme attribute");
            }
        }
    }

    fn theme_toggle(&self) -> Option<bool> {
        self.input(&self.ids.theme_switch).map(|toggle| toggle.checked())
    }

    fn set_theme_toggle(&mut self, checked: bool) {
        if let Some(toggle) = self.input(&self.ids.theme_switch) {
            toggle.set_checked(checked);
        }
    }

    fn replace_list(&mut self, markup: &str) -> bool {
        match self.element(&self.ids.list) {
            Some(list) => {
                list.set_inner_html(markup);
                self.cards.clear();
                true
            }
            None => false,
        }
    }

    fn scan_cards(&mut self) -> Vec<CardItem> {
        let selector = format!(".{}", crate::ui::card::CARD_CLASS);
        let nodes = self
            .element(&self.ids.list)
            .and_then(|list| list.query_selector_all(&selector).ok());

        self.cards = nodes
            .map(|nodes| {
                (0..nodes.length())
                    .filter_map(|i| nodes.item(i))
                    .filter_map(|node| node.dyn_into::<Element>().ok())
                    .collect()
            })
            .unwrap_or_default();

        self.cards
            .iter()
            .map(|card| {
                CardItem::new(
                    card.get_attribute("data-cat").unwrap_or_default(),
                    card.get_attribute("data-text").unwrap_or_default(),
                )
            })
            .collect()
    }

    fn set_card_visible(&mut self, index: usize, visible: bool) {
        if let Some(card) = self.cards.get(index) {
            self.set_hidden(card, !visible);
        }
    }

    fn search_value(&self) -> Option<String> {
        self.input(&self.ids.search).map(|search| search.value())
    }

    fn category_value(&self) -> Option<String> {
        let element = self.element(&self.ids.category)?;
        match element.dyn_into::<HtmlSelectElement>() {
            Ok(select) => Some(select.value()),
            Err(element) => element
                .dyn_into::<HtmlInputElement>()
                .ok()
                .map(|input| input.value()),
        }
    }

    fn has_no_results_indicator(&self) -> bool {
        self.element(&self.ids.no_results).is_some()
    }

    fn set_no_results_visible(&mut self, visible: bool) {
        if let Some(indicator) = self.element(&self.ids.no_results) {
            self.set_hidden(&indicator, !visible);
        }
    }
}
