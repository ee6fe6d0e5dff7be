//! Browser host.
//!
//! Boots the page inside a real document:
//!
//! 1. Read configuration overrides from `data-*` attributes on `<body>`
//! 2. Initialize tracing to the developer console
//! 3. Apply the saved theme
//! 4. Bind the toggle `change`, search `input` and category `change` listeners
//! 5. Fetch the dataset, then render and filter
//!
//! The page lives in an `Rc<RefCell<_>>` shared with the listeners. The fetch
//! is awaited without holding the borrow, so input during the fetch is handled
//! (against an empty card set) instead of being dropped.

mod dom;
mod fetch;
mod storage;

pub use dom::BrowserDocument;
pub use fetch::BrowserFetch;
pub use storage::LocalStoragePreferences;

use crate::app::{handle_event, DirectoryPage, Event};
use crate::dataset::fetch_entries;
use crate::observability::init_tracing;
use crate::Config;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// The page as hosted in the browser.
pub type BrowserPage = DirectoryPage<BrowserDocument, LocalStoragePreferences>;

/// Starts the page in the current window. Does nothing outside a document.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let config = config_from_body(&document);
    init_tracing(&config);
    tracing::debug!(config = ?config, "starting directory page");

    let page: Rc<RefCell<BrowserPage>> = Rc::new(RefCell::new(DirectoryPage::new(
        config.clone(),
        BrowserDocument::new(document.clone(), &config),
        LocalStoragePreferences::new(),
    )));

    page.borrow_mut().initialize_theme();

    bind(&document, &config.elements.theme_switch, "change", Event::ThemeToggled, &page);
    bind(&document, &config.elements.search, "input", Event::SearchInput, &page);
    bind(&document, &config.elements.category, "change", Event::CategoryChanged, &page);

    let path = config.dataset_path;
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_entries(&BrowserFetch, &path).await;
        page.borrow_mut().complete_load(result);
    });
}

/// Routes a DOM event on the element `id` to the page. Missing elements are
/// skipped.
fn bind(document: &web_sys::Document, id: &str, event_type: &str, event: Event, page: &Rc<RefCell<BrowserPage>>) {
    let Some(target) = document.get_element_by_id(id) else {
        tracing::debug!(id = %id, "element absent, listener not bound");
        return;
    };

    let page = Rc::clone(page);
    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        match page.try_borrow_mut() {
            Ok(mut page) => handle_event(&mut *page, &event),
            Err(_) => tracing::warn!(event = ?event, "page busy, event dropped"),
        }
    });

    if let Err(e) = target.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref()) {
        tracing::warn!(id = %id, error = %describe_js_error(&e), "failed to bind listener");
    }
    // The listener lives as long as the page.
    listener.forget();
}

/// Reads `data-dataset-path`, `data-trace-level` and the other
/// [`Config::MAP_KEYS`] from `<body>`.
fn config_from_body(document: &web_sys::Document) -> Config {
    let Some(body) = document.body() else {
        return Config::default();
    };

    let map: BTreeMap<String, String> = Config::MAP_KEYS
        .iter()
        .filter_map(|key| {
            let attribute = format!("data-{}", key.replace('_', "-"));
            body.get_attribute(&attribute).map(|value| ((*key).to_string(), value))
        })
        .collect();

    Config::from_map(&map)
}

/// Best-effort message for a rejected promise or thrown value.
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
