//! Directory entry model.
//!
//! An [`Entry`] is one record of the static JSON dataset. Entries are read-only
//! after loading: the page never edits or persists them.

use serde::{Deserialize, Deserializer};

/// One directory record as it appears in the dataset.
///
/// `name` and `bullets` are required; deserializing a record without them fails,
/// which fails the whole dataset load. A missing or `null` `cat` reads as the
/// empty key, and `null` optional fields read as absent.
///
/// # Examples
///
/// ```
/// use directory_listing::Entry;
///
/// let entry: Entry = serde_json::from_str(
///     r#"{"name": "Acme", "cat": "tools", "bullets": ["Anvils", "Rockets"]}"#,
/// )?;
/// assert_eq!(entry.search_text(), "acme anvils rockets");
/// assert_eq!(entry.website_or("/index.html"), "/index.html");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cat: String,
    pub bullets: Vec<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}

impl Entry {
    /// Creates an entry with the required fields and no optional ones.
    #[must_use]
    pub fn new(name: impl Into<String>, cat: impl Into<String>, bullets: Vec<String>) -> Self {
        Self {
            name: name.into(),
            website: None,
            logo: None,
            cat: cat.into(),
            bullets,
            keywords: None,
        }
    }

    /// Returns the link target, or `fallback` when `website` is absent or empty.
    #[must_use]
    pub fn website_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        non_empty(self.website.as_deref()).unwrap_or(fallback)
    }

    /// Returns the logo URL, or `placeholder` when `logo` is absent or empty.
    #[must_use]
    pub fn logo_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        non_empty(self.logo.as_deref()).unwrap_or(placeholder)
    }

    /// Lowercased text the search query is matched against.
    ///
    /// Uses `keywords` when present and non-empty, otherwise the name followed by
    /// every bullet, space separated.
    #[must_use]
    pub fn search_text(&self) -> String {
        match non_empty(self.keywords.as_deref()) {
            Some(keywords) => keywords.to_lowercase(),
            None => format!("{} {}", self.name, self.bullets.join(" ")).to_lowercase(),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
