use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
    #[error("Malformed key {key:?}: {reason}")]
    MalformedKey { key: String, reason: String },
    #[error("Malformed item: {0}")]
    MalformedItem(String),
    #[error("Backend request failed: {0}")]
    BackendRequestFailure(String),
}

impl RepositoryError {
    /// Builds a `MalformedKey` error for the given raw key.
    pub fn malformed_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
