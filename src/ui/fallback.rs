//! One-shot image fallback.
//!
//! On its first load failure an image swaps to an alternate source and drops
//! its failure handler. A failing alternate is left alone, so a broken
//! placeholder cannot loop.

/// A card logo with its one-shot fallback.
///
/// # Example
///
/// ```
/// use directory_listing::ui::LogoImage;
///
/// let mut logo = LogoImage::new("https://acme.test/logo.png", "/placeholder.png");
/// assert_eq!(logo.on_load_error(), Some("/placeholder.png"));
/// assert_eq!(logo.on_load_error(), None);
/// assert_eq!(logo.src(), "/placeholder.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoImage {
    src: String,
    fallback: Option<String>,
}

impl LogoImage {
    #[must_use]
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            fallback: Some(fallback.into()),
        }
    }

    /// Currently displayed source.
    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Whether the failure handler is still registered.
    #[must_use]
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Handles a load failure of the current source.
    ///
    /// Returns the substituted source the first time, `None` on every later call.
    pub fn on_load_error(&mut self) -> Option<&str> {
        let fallback = self.fallback.take()?;
        tracing::debug!(failed = %self.src, fallback = %fallback, "logo failed to load, using fallback");
        self.src = fallback;
        Some(&self.src)
    }
}

#[cfg(test)]
mod tests {
    use super::LogoImage;

    #[test]
    fn fallback_fires_exactly_once() {
        let mut logo = LogoImage::new("/broken.png", "/placeholder.png");
        assert!(logo.has_fallback());
        assert_eq!(logo.on_load_error(), Some("/placeholder.png"));
        assert!(!logo.has_fallback());
        for _ in 0..3 {
            assert_eq!(logo.on_load_error(), None);
        }
        assert_eq!(logo.src(), "/placeholder.png");
    }

    #[test]
    fn logo_already_on_placeholder_still_gets_one_retry() {
        let mut logo = LogoImage::new("/placeholder.png", "/placeholder.png");
        assert_eq!(logo.on_load_error(), Some("/placeholder.png"));
        assert_eq!(logo.on_load_error(), None);
    }
}
