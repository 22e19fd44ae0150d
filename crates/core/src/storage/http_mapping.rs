//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `Configuration` -> 500 (Internal Server Error)
/// - `BackendUnavailable` -> 503 (Service Unavailable)
/// - `MalformedKey` -> 500 (Internal Server Error)
/// - `MalformedItem` -> 500 (Internal Server Error)
/// - `BackendRequestFailure` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use todos_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::BackendUnavailable("timeout".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::Configuration(_) => 500,
        RepositoryError::BackendUnavailable(_) => 503,
        RepositoryError::MalformedKey { .. } => 500,
        RepositoryError::MalformedItem(_) => 500,
        RepositoryError::BackendRequestFailure(_) => 500,
    }
}
