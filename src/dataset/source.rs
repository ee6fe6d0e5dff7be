//! Dataset transport abstraction.
//!
//! The page issues a single GET for its dataset. [`DatasetSource`] is that
//! request, reduced to what the page looks at: a status code and a text body.
//! Futures are `LocalBoxFuture` because the page is single-threaded and the
//! browser transport is not `Send`.

use crate::domain::error::{DirectoryError, Result};
use crate::infrastructure::paths::resolve_resource;
use futures_util::future::{self, FutureExt, LocalBoxFuture};
use std::collections::HashMap;
use std::path::PathBuf;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    #[must_use]
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs GET requests for site resources.
///
/// An `Err` means the request never completed (network failure, unreadable
/// file). A completed request with a bad status is an `Ok` response; callers
/// decide what statuses they accept.
pub trait DatasetSource {
    /// Requests the resource at `path`.
    fn fetch<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<FetchResponse>>;
}

/// Fixed in-memory responses keyed by path.
///
/// Unknown paths answer 404. Futures are immediately ready, so callers can
/// drive them with [`FutureExt::now_or_never`].
///
/// # Examples
///
/// ```
/// use directory_listing::dataset::{DatasetSource, FetchResponse, StaticSource};
/// use futures_util::FutureExt;
///
/// let source = StaticSource::default().with("/data.json", FetchResponse::ok("[]"));
/// let response = source.fetch("/data.json").now_or_never().unwrap()?;
/// assert!(response.is_success());
/// # Ok::<(), directory_listing::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    responses: HashMap<String, FetchResponse>,
    unreachable: bool,
}

impl StaticSource {
    /// Adds a canned response for `path`.
    #[must_use]
    pub fn with(mut self, path: impl Into<String>, response: FetchResponse) -> Self {
        self.responses.insert(path.into(), response);
        self
    }

    /// A source whose every request fails before producing a response.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            responses: HashMap::new(),
            unreachable: true,
        }
    }
}

impl DatasetSource for StaticSource {
    fn fetch<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<FetchResponse>> {
        let result = if self.unreachable {
            Err(DirectoryError::Fetch(format!("{path}: network unreachable")))
        } else {
            Ok(self
                .responses
                .get(path)
                .cloned()
                .unwrap_or_else(|| FetchResponse::with_status(404, "Not Found")))
        };
        future::ready(result).boxed_local()
    }
}

/// Serves resource paths from a directory on disk, the way a static web server
/// would.
///
/// Missing files answer 404 and paths escaping the root answer 403. Other I/O
/// failures are transport errors.
#[derive(Debug, Clone)]
pub struct FileSource {
    static_root: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(static_root: impl Into<PathBuf>) -> Self {
        Self {
            static_root: static_root.into(),
        }
    }

    fn read(&self, path: &str) -> Result<FetchResponse> {
        let Some(file) = resolve_resource(&self.static_root, path) else {
            tracing::debug!(path = %path, "resource path escapes static root");
            return Ok(FetchResponse::with_status(403, "Forbidden"));
        };

        tracing::debug!(path = %path, file = ?file, "reading static resource");
        match std::fs::read_to_string(&file) {
            Ok(body) => Ok(FetchResponse::ok(body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(FetchResponse::with_status(404, "Not Found"))
            }
            Err(e) => Err(DirectoryError::Fetch(format!("{}: {e}", file.display()))),
        }
    }
}

impl DatasetSource for FileSource {
    fn fetch<'a>(&'a self, path: &'a str) -> LocalBoxFuture<'a, Result<FetchResponse>> {
        future::ready(self.read(path)).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::{DatasetSource, FetchResponse, FileSource, StaticSource};
    use crate::domain::{DirectoryError, Result};
    use futures_util::FutureExt;

    fn fetch_now(source: &impl DatasetSource, path: &str) -> Result<FetchResponse> {
        source
            .fetch(path)
            .now_or_never()
            .unwrap_or_else(|| Err(DirectoryError::Fetch("pending".into())))
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(FetchResponse::with_status(204, "").is_success());
        assert!(!FetchResponse::with_status(199, "").is_success());
        assert!(!FetchResponse::with_status(301, "").is_success());
        assert!(!FetchResponse::with_status(500, "").is_success());
    }

    #[test]
    fn static_source_answers_404_for_unknown_paths() -> Result<()> {
        let source = StaticSource::default();
        assert_eq!(fetch_now(&source, "/missing")?.status, 404);
        Ok(())
    }

    #[test]
    fn unreachable_source_fails_the_transport() {
        let err = fetch_now(&StaticSource::unreachable(), "/x").unwrap_err();
        assert!(matches!(err, DirectoryError::Fetch(_)));
    }

    #[test]
    fn file_source_serves_files_under_root() -> Result<()> {
        let temp = tempfile::tempdir()?;
        std::fs::create_dir_all(temp.path().join("static/js"))?;
        std::fs::write(temp.path().join("static/js/entries.json"), "[]")?;

        let source = FileSource::new(temp.path());
        assert_eq!(fetch_now(&source, "/static/js/entries.json")?, FetchResponse::ok("[]"));
        assert_eq!(fetch_now(&source, "/static/js/other.json")?.status, 404);
        assert_eq!(fetch_now(&source, "/../outside.json")?.status, 403);
        Ok(())
    }
}
