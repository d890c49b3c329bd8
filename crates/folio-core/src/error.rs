//! Error types for the folio site

use thiserror::Error;

/// Top-level error type for the folio site
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),
}

/// Errors raised while loading embedded configuration or content
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {source_name}: {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Errors from the repository listing request
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// The static message shown to visitors, regardless of the cause.
    pub fn user_message(&self) -> &'static str {
        "Error fetching GitHub repositories"
    }
}

/// Errors related to preference storage
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("Preference storage is unavailable")]
    Unavailable,

    #[error("Preference storage access failed: {0}")]
    Access(String),
}

/// Errors related to theme names
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("Unknown theme: {0}")]
    Unknown(String),
}

/// Errors from contact form validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Result alias for folio operations
pub type FolioResult<T> = Result<T, FolioError>;
