//! Error types for the directory page.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors never escape the page controller as user-facing failures: a dataset
//! error becomes the error notice in the list container, a storage error becomes
//! a log line.

use thiserror::Error;

/// The main error type for directory page operations.
///
/// # Examples
///
/// ```
/// use directory_listing::DirectoryError;
///
/// fn fetch_dataset(status: u16) -> Result<(), DirectoryError> {
///     Err(DirectoryError::HttpStatus(status))
/// }
///
/// assert_eq!(fetch_dataset(404).unwrap_err().to_string(), "HTTP 404");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The dataset request could not be completed.
    ///
    /// Covers transport failures (network error, unreadable file, rejected
    /// promise in the browser). The string describes what went wrong.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The dataset request completed with a status outside the 2xx range.
    #[error("HTTP {0}")]
    HttpStatus(u16),

    /// The dataset body is not a JSON array of entries.
    ///
    /// Also raised when an entry lacks a required field such as `name` or
    /// `bullets`.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing the preference store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value or unreadable configuration file.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience result alias using [`DirectoryError`].
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::DirectoryError;

    #[test]
    fn parse_errors_convert_from_serde() {
        let err: DirectoryError = serde_json::from_str::<Vec<u8>>("{")
            .map_err(DirectoryError::from)
            .unwrap_err();
        assert!(matches!(err, DirectoryError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error:"));
    }

    #[test]
    fn status_errors_name_the_code() {
        assert_eq!(DirectoryError::HttpStatus(503).to_string(), "HTTP 503");
    }
}
