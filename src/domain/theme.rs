//! Theme mode persisted between visits.

use std::fmt;

/// Light or dark page theme.
///
/// Serialized as the literal strings `light` and `dark`, both in the preference
/// store and in the document-level theme attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Interprets a stored preference value.
    ///
    /// Only the exact literal `dark` selects [`ThemeMode::Dark`]. Missing,
    /// corrupt or unexpected values all read as [`ThemeMode::Light`].
    ///
    /// # Example
    ///
    /// ```
    /// use directory_listing::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
    /// assert_eq!(ThemeMode::from_stored(Some("Dark")), ThemeMode::Light);
    /// assert_eq!(ThemeMode::from_stored(None), ThemeMode::Light);
    /// ```
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("dark") {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Maps a checkbox state onto a theme: checked means dark.
    #[must_use]
    pub const fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Dark
        } else {
            Self::Light
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeMode;

    #[test]
    fn unexpected_values_default_to_light() {
        for value in ["", "light", "DARK", " dark", "dark ", "night"] {
            assert_eq!(ThemeMode::from_stored(Some(value)), ThemeMode::Light, "{value:?}");
        }
    }

    #[test]
    fn checkbox_state_round_trips_through_is_dark() {
        assert!(ThemeMode::from_checked(true).is_dark());
        assert!(!ThemeMode::from_checked(false).is_dark());
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }
}
