//! Path utilities for the headless host.
//!
//! The browser resolves resource paths like `/static/js/entries.json` against
//! the site origin. Off the browser, the same paths are resolved against a
//! static root directory on disk, and preferences live in a data directory.

use std::path::{Component, Path, PathBuf};

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Maps a site-absolute resource path onto a file below `static_root`.
///
/// Query strings and fragments are dropped. Returns `None` for paths that try to
/// leave the root through `..` segments.
///
/// # Examples
///
/// ```
/// use directory_listing::infrastructure::resolve_resource;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(
///     resolve_resource(Path::new("/srv/site"), "/static/js/entries.json?v=2"),
///     Some(PathBuf::from("/srv/site/static/js/entries.json")),
/// );
/// assert_eq!(resolve_resource(Path::new("/srv/site"), "/../etc/passwd"), None);
/// ```
#[must_use]
pub fn resolve_resource(static_root: &Path, resource: &str) -> Option<PathBuf> {
    let path = resource
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_start_matches('/');

    let relative = Path::new(path);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }

    Some(static_root.join(relative))
}

/// Location of the preference store file inside `data_dir`.
#[must_use]
pub fn preferences_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFERENCES_FILE)
}

#[cfg(test)]
mod tests {
    use super::{preferences_path, resolve_resource};
    use std::path::{Path, PathBuf};

    #[test]
    fn strips_fragment_and_leading_slashes() {
        assert_eq!(
            resolve_resource(Path::new("site"), "//static/js/entries.json#top"),
            Some(PathBuf::from("site/static/js/entries.json"))
        );
    }

    #[test]
    fn rejects_parent_segments_anywhere() {
        assert_eq!(resolve_resource(Path::new("site"), "/static/../../secret"), None);
    }

    #[test]
    fn preferences_live_in_data_dir() {
        assert_eq!(
            preferences_path(Path::new("/var/lib/dir")),
            PathBuf::from("/var/lib/dir/preferences.json")
        );
    }
}
