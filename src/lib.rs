//! Directory listing: a filterable directory page driven from Rust.
//!
//! The page provides:
//! - A static JSON dataset fetched once and rendered as cards
//! - Live text search and category filtering over the rendered cards
//! - A light/dark theme persisted in client-local storage
//! - A one-shot placeholder fallback for broken logos

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Hosts: browser (web/, wasm32) | headless (main.rs) │  ← Entry points
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Page controller
//! │  - Startup sequence                                 │  ← Filtering
//! │  - Event dispatch                                   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Dataset Layer │
//! │ (ui/)         │   │ (storage/)    │   │ (dataset/)    │
//! │ - Cards       │   │ - Preferences │   │ - Transport   │
//! │ - Theme       │   │ - JSON file   │   │ - Entry list  │
//! │ - Document    │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Static root paths (infrastructure/)              │
//! │  - Error types (domain/error)                       │
//! │  - Entry and theme models (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, stderr or developer console  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Page controller, filtering, event dispatch
//! - [`dataset`]: Dataset transport and entry list
//! - [`domain`]: Core domain types (Entry, ThemeMode, errors)
//! - [`infrastructure`]: Static root path resolution
//! - [`storage`]: Preference persistence
//! - [`ui`]: Card markup, list rendering, theme, document contract
//! - [`observability`]: Tracing setup
//! - `web`: Browser host (wasm32 only)
//!
//! # Configuration
//!
//! Every touchpoint name has a default matching the stock page markup. A TOML
//! file may override any of them:
//!
//! ```toml
//! dataset_path = "/static/js/entries.json"
//! placeholder_logo = "/static/images/placeholder.png"
//! trace_level = "debug"
//!
//! [elements]
//! list = "list"
//! no_results = "noResults"
//! ```
//!
//! # Example
//!
//! ```rust
//! use directory_listing::app::{handle_event, DirectoryPage, Event};
//! use directory_listing::dataset::{FetchResponse, StaticSource};
//! use directory_listing::storage::MemoryPreferences;
//! use directory_listing::ui::HeadlessDocument;
//! use directory_listing::Config;
//! use futures_util::FutureExt;
//!
//! let config = Config::default();
//! let source = StaticSource::default().with(
//!     config.dataset_path.clone(),
//!     FetchResponse::ok(r#"[
//!         {"name": "Beta", "cat": "x", "bullets": ["b"]},
//!         {"name": "alpha", "cat": "y", "bullets": ["a"]}
//!     ]"#),
//! );
//!
//! let mut page = DirectoryPage::new(config, HeadlessDocument::new(), MemoryPreferences::default());
//! page.start(&source).now_or_never();
//!
//! page.document_mut().select_category("x");
//! handle_event(&mut page, &Event::CategoryChanged);
//! assert_eq!(page.document().visible_count(), 1);
//! ```

pub mod app;
pub mod dataset;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use app::{handle_event, DirectoryPage, Event};
pub use domain::{DirectoryError, Entry, Result, ThemeMode};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Ids of the page elements the controller touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub theme_switch: String,
    pub list: String,
    pub search: String,
    pub category: String,
    pub no_results: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_switch: "themeSwitch".to_string(),
            list: "list".to_string(),
            search: "search".to_string(),
            category: "category".to_string(),
            no_results: "noResults".to_string(),
        }
    }
}

/// Page configuration.
///
/// Defaults match the stock page; every field can be overridden from TOML or
/// from flat key/value pairs. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-absolute path of the JSON dataset. Default: `/static/js/entries.json`
    pub dataset_path: String,

    /// Logo shown when an entry has none or its logo fails to load.
    ///
    /// Default: `/static/images/placeholder.png`
    pub placeholder_logo: String,

    /// Link target for entries without a website. Default: `/index.html`
    pub fallback_website: String,

    /// Preference store key of the theme. Default: `bs-theme`
    pub theme_key: String,

    /// Document-level attribute carrying the theme. Default: `data-bs-theme`
    pub theme_attribute: String,

    /// Class that hides an element. Default: `d-none`
    pub hidden_class: String,

    pub elements: ElementIds,

    /// `EnvFilter` directive for logging. Default: `"info"` when unset.
    pub trace_level: Option<String>,

    /// Directory the headless host serves resource paths from. Default: `.`
    pub static_root: PathBuf,

    /// Directory the headless host keeps its preference file in.
    ///
    /// Default: `.directory-listing`
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: "/static/js/entries.json".to_string(),
            placeholder_logo: "/static/images/placeholder.png".to_string(),
            fallback_website: "/index.html".to_string(),
            theme_key: "bs-theme".to_string(),
            theme_attribute: "data-bs-theme".to_string(),
            hidden_class: "d-none".to_string(),
            elements: ElementIds::default(),
            trace_level: None,
            static_root: PathBuf::from("."),
            data_dir: PathBuf::from(".directory-listing"),
        }
    }
}

impl Config {
    /// Keys understood by [`Config::from_map`].
    pub const MAP_KEYS: [&'static str; 7] = [
        "dataset_path",
        "placeholder_logo",
        "fallback_website",
        "theme_key",
        "theme_attribute",
        "hidden_class",
        "trace_level",
    ];

    /// Parses a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] if the document is not valid TOML or a
    /// value has the wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use directory_listing::Config;
    ///
    /// let config = Config::from_toml_str("dataset_path = \"/data.json\"\n[elements]\nlist = \"cards\"\n")?;
    /// assert_eq!(config.dataset_path, "/data.json");
    /// assert_eq!(config.elements.list, "cards");
    /// assert_eq!(config.elements.search, "search");
    /// # Ok::<(), directory_listing::DirectoryError>(())
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| DirectoryError::Config(e.to_string()))
    }

    /// Loads a TOML configuration file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = ?path, "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
            .map_err(|e| DirectoryError::Config(format!("{}: {e}", path.display())))
    }

    /// Builds a configuration from flat string pairs.
    ///
    /// Only the keys in [`Config::MAP_KEYS`] are read; empty values are ignored.
    /// The browser host feeds this from `data-*` attributes on `<body>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use directory_listing::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dataset_path".to_string(), "/api/entries.json".to_string());
    /// map.insert("trace_level".to_string(), "".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.dataset_path, "/api/entries.json");
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let defaults = Self::default();
        Self {
            dataset_path: get("dataset_path").unwrap_or(defaults.dataset_path),
            placeholder_logo: get("placeholder_logo").unwrap_or(defaults.placeholder_logo),
            fallback_website: get("fallback_website").unwrap_or(defaults.fallback_website),
            theme_key: get("theme_key").unwrap_or(defaults.theme_key),
            theme_attribute: get("theme_attribute").unwrap_or(defaults.theme_attribute),
            hidden_class: get("hidden_class").unwrap_or(defaults.hidden_class),
            trace_level: get("trace_level"),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DirectoryError};
    use std::collections::BTreeMap;

    #[test]
    fn empty_toml_is_the_default_config() -> super::Result<()> {
        assert_eq!(Config::from_toml_str("")?, Config::default());
        Ok(())
    }

    #[test]
    fn wrong_types_are_config_errors() {
        let err = Config::from_toml_str("dataset_path = 3").unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
    }

    #[test]
    fn load_reads_files_and_tolerates_missing_ones() -> super::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("directory.toml");
        assert_eq!(Config::load(&path)?, Config::default());

        std::fs::write(&path, "trace_level = \"debug\"\nstatic_root = \"public\"\n")?;
        let config = Config::load(&path)?;
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.static_root, std::path::PathBuf::from("public"));
        Ok(())
    }

    #[test]
    fn unparsable_file_names_the_path() -> super::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("directory.toml");
        std::fs::write(&path, "[elements\n")?;
        let message = Config::load(&path).unwrap_err().to_string();
        assert!(message.contains("directory.toml"), "{message}");
        Ok(())
    }

    #[test]
    fn map_ignores_unknown_keys() {
        let mut map = BTreeMap::new();
        map.insert("theme_key".to_string(), " site-theme ".to_string());
        map.insert("static_root".to_string(), "/etc".to_string());
        let config = Config::from_map(&map);
        assert_eq!(config.theme_key, "site-theme");
        assert_eq!(config.static_root, Config::default().static_root);
    }
}
