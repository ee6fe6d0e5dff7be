//! Card markup for a single directory entry.
//!
//! # Trust boundary
//!
//! Only attribute values are escaped, with the minimal attribute-context
//! escaper [`escape_attr`]. The entry name and bullets are also placed in
//! element content, and there they are emitted verbatim. The dataset is assumed
//! to come from a trusted source; an entry with markup in its name or bullets
//! will inject that markup into the page.

use crate::domain::Entry;
use crate::Config;

/// Class marking a rendered card; the filter scans the container for it.
pub const CARD_CLASS: &str = "group-item";

/// Escapes a value for a double-quoted markup attribute.
///
/// Replaces `&`, `"`, `<` and `>` with their entities, ampersand first so the
/// entities introduced by later replacements are not escaped again.
///
/// # Example
///
/// ```
/// use directory_listing::ui::card::escape_attr;
///
/// assert_eq!(escape_attr(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
#[must_use]
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Renders entries into card fragments.
#[derive(Debug, Clone)]
pub struct CardRenderer {
    placeholder_logo: String,
    fallback_website: String,
}

impl CardRenderer {
    #[must_use]
    pub fn new(placeholder_logo: impl Into<String>, fallback_website: impl Into<String>) -> Self {
        Self {
            placeholder_logo: placeholder_logo.into(),
            fallback_website: fallback_website.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.placeholder_logo.clone(), config.fallback_website.clone())
    }

    #[must_use]
    pub fn placeholder_logo(&self) -> &str {
        &self.placeholder_logo
    }

    /// Renders one entry as a self-contained `<article>` card.
    ///
    /// The card carries `data-cat` and `data-text` so filtering never needs the
    /// entry again. The logo image swaps to the placeholder on its first load
    /// error and then clears its own error handler.
    ///
    /// # Example
    ///
    /// ```
    /// use directory_listing::ui::CardRenderer;
    /// use directory_listing::Entry;
    ///
    /// let renderer = CardRenderer::new("/placeholder.png", "/index.html");
    /// let card = renderer.render(&Entry::new("Acme", "tools", vec!["Anvils".into()]));
    /// assert!(card.contains(r#"data-cat="tools""#));
    /// assert!(card.contains(r#"data-text="acme anvils""#));
    /// assert!(card.contains("<li>Anvils</li>"));
    /// ```
    #[must_use]
    pub fn render(&self, entry: &Entry) -> String {
        let website = escape_attr(entry.website_or(&self.fallback_website));
        let logo = escape_attr(entry.logo_or(&self.placeholder_logo));
        let placeholder = escape_attr(&self.placeholder_logo);
        let category = escape_attr(&entry.cat);
        let text = escape_attr(&entry.search_text());
        let alt = escape_attr(&entry.name);

        let bullets: String = entry.bullets.iter().map(|bullet| format!("<li>{bullet}</li>")).collect();

        format!(
            r#"
        <article class="card shadow-sm {CARD_CLASS}" data-cat="{category}" data-text="{text}">
          <div class="card-body">
            <div class="row g-3 align-items-start">
              <div class="col-auto">
                <a class="d-inline-block ratio ratio-1x1 logo-wrapper" href="{website}">
                  <img
                    class="w-100 h-100 img-fluid logo-img rounded-3 border"
                    src="{logo}"
                    alt="{alt}"
                    loading="lazy"
                    onerror="this.onerror=null;this.src='{placeholder}';"
                  />
                </a>
              </div>
              <div class="col">
                <h2 class="h6 mb-1">
                  <a class="text-decoration-none" href="{website}">{name}</a>
                </h2>
                <ul class="small mb-0 mt-2 ps-3">
                  {bullets}
                </ul>
              </div>
            </div>
          </div>
        </article>
      "#,
            name = entry.name,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_attr, CardRenderer};
    use crate::domain::Entry;

    fn renderer() -> CardRenderer {
        CardRenderer::new("/static/images/placeholder.png", "/index.html")
    }

    fn attribute<'a>(card: &'a str, name: &str) -> &'a str {
        let marker = format!(r#"{name}=""#);
        let start = card.find(&marker).map(|i| i + marker.len()).unwrap_or(0);
        let end = card[start..].find('"').map_or(card.len(), |i| start + i);
        &card[start..end]
    }

    fn parsed_attribute(card: &str, name: &str) -> Option<String> {
        let fragment = scraper::Html::parse_fragment(card);
        let selector = scraper::Selector::parse("article").ok()?;
        fragment.select(&selector).next()?.value().attr(name).map(str::to_string)
    }

    #[test]
    fn ampersand_is_escaped_first() {
        assert_eq!(escape_attr("&lt;"), "&amp;lt;");
        assert_eq!(escape_attr("\"<>&"), "&quot;&lt;&gt;&amp;");
    }

    #[test]
    fn data_attributes_hold_no_raw_special_characters() {
        let mut entry = Entry::new(
            r#"Tom & "Jerry" <Co>"#,
            r#"a&b"<c>"#,
            vec!["<b>bold</b>".into(), "x & y".into()],
        );
        let card = renderer().render(&entry);
        for name in ["data-cat", "data-text"] {
            let value = attribute(&card, name);
            assert!(!value.contains(['"', '<', '>']), "{name}: {value}");
            let bare = ["&amp;", "&quot;", "&lt;", "&gt;"]
                .iter()
                .fold(value.to_string(), |acc, entity| acc.replace(entity, ""));
            assert!(!bare.contains('&'), "{name}: {value}");
        }
        assert_eq!(parsed_attribute(&card, "data-cat").as_deref(), Some(entry.cat.as_str()));
        assert_eq!(parsed_attribute(&card, "data-text"), Some(entry.search_text()));

        entry.keywords = Some(r#"K&"<>"#.into());
        let card = renderer().render(&entry);
        assert_eq!(attribute(&card, "data-text"), "k&amp;&quot;&lt;&gt;");
    }

    #[test]
    fn content_text_is_emitted_verbatim() {
        let entry = Entry::new("<em>Acme</em>", "x", vec!["<b>bold</b>".into()]);
        let card = renderer().render(&entry);
        assert!(card.contains(r#"href="/index.html"><em>Acme</em></a>"#));
        assert!(card.contains("<li><b>bold</b></li>"));
        assert!(card.contains(r#"alt="&lt;em&gt;Acme&lt;/em&gt;""#));
    }

    #[test]
    fn links_and_logo_fall_back() {
        let card = renderer().render(&Entry::new("Acme", "x", vec![]));
        assert_eq!(attribute(&card, "href"), "/index.html");
        assert_eq!(attribute(&card, "src"), "/static/images/placeholder.png");
        assert!(card.contains("this.onerror=null;this.src='/static/images/placeholder.png';"));
    }

    #[test]
    fn bullets_keep_their_order() {
        let mut entry = Entry::new("Acme", "x", vec!["one".into(), "two".into(), "three".into()]);
        entry.website = Some("https://acme.test/?a=1&b=2".into());
        entry.logo = Some("https://acme.test/logo.png".into());
        let card = renderer().render(&entry);
        assert!(card.contains("<li>one</li><li>two</li><li>three</li>"));
        assert_eq!(attribute(&card, "href"), "https://acme.test/?a=1&amp;b=2");
        assert_eq!(attribute(&card, "src"), "https://acme.test/logo.png");
    }

    #[test]
    fn no_bullets_renders_an_empty_list() {
        let card = renderer().render(&Entry::new("Acme", "x", vec![]));
        assert!(!card.contains("<li>"));
        assert!(card.contains("<ul class=\"small mb-0 mt-2 ps-3\">"));
    }
}
