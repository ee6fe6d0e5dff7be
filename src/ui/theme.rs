//! Persisted light/dark theme preference.
//!
//! The theme lives in three places kept in step by [`ThemePreference::apply`]:
//! the document-level theme attribute, the preference store, and the toggle
//! control's checked state.
//!
//! # Example
//!
//! ```
//! use directory_listing::storage::MemoryPreferences;
//! use directory_listing::ui::{HeadlessDocument, ThemePreference};
//! use directory_listing::{Config, ThemeMode};
//!
//! let preference = ThemePreference::from_config(&Config::default());
//! let mut doc = HeadlessDocument::new();
//! let mut store = MemoryPreferences::with_value("bs-theme", "dark");
//!
//! assert_eq!(preference.initialize(&mut doc, &mut store), ThemeMode::Dark);
//! assert_eq!(doc.theme_attribute("data-bs-theme"), Some("dark"));
//! ```

use crate::domain::ThemeMode;
use crate::storage::PreferenceStore;
use crate::ui::document::Document;
use crate::Config;

/// Reads, applies and persists the theme.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    storage_key: String,
    attribute: String,
}

impl ThemePreference {
    #[must_use]
    pub fn new(storage_key: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
            attribute: attribute.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.theme_key.clone(), config.theme_attribute.clone())
    }

    /// Reads the stored theme and applies it.
    ///
    /// Only a stored `dark` selects dark. A read failure counts as nothing
    /// stored.
    pub fn initialize<D, S>(&self, document: &mut D, store: &mut S) -> ThemeMode
    where
        D: Document + ?Sized,
        S: PreferenceStore + ?Sized,
    {
        let stored = store.get(&self.storage_key).unwrap_or_else(|e| {
            tracing::warn!(key = %self.storage_key, error = %e, "failed to read theme preference");
            None
        });
        let theme = ThemeMode::from_stored(stored.as_deref());
        tracing::debug!(stored = ?stored, theme = %theme, "initializing theme");

        self.apply(theme, document, store);
        theme
    }

    /// Sets the document attribute, persists the value and syncs the toggle.
    ///
    /// A failed write is logged and otherwise ignored; the document still shows
    /// the chosen theme.
    pub fn apply<D, S>(&self, theme: ThemeMode, document: &mut D, store: &mut S)
    where
        D: Document + ?Sized,
        S: PreferenceStore + ?Sized,
    {
        document.set_theme_attribute(&self.attribute, theme.as_str());

        if let Err(e) = store.set(&self.storage_key, theme.as_str()) {
            tracing::warn!(key = %self.storage_key, error = %e, "failed to persist theme preference");
        }

        document.set_theme_toggle(theme.is_dark());
    }

    /// Handles a change of the toggle control.
    ///
    /// Returns the applied theme, or `None` if the page has no toggle.
    pub fn on_toggle<D, S>(&self, document: &mut D, store: &mut S) -> Option<ThemeMode>
    where
        D: Document + ?Sized,
        S: PreferenceStore + ?Sized,
    {
        let theme = ThemeMode::from_checked(document.theme_toggle()?);
        tracing::debug!(theme = %theme, "theme toggled");
        self.apply(theme, document, store);
        Some(theme)
    }
}
