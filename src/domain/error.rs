//! Error types for the zshelf plugin.
//!
//! This module defines the centralized error type [`ShelfError`] and a type alias
//! [`Result`] used throughout the plugin. Only the initial product fetch can fail
//! in a way the user sees; every other error is logged and degraded gracefully.

use thiserror::Error;

/// The main error type for zshelf operations.
///
/// # Examples
///
/// ```
/// use zshelf::ShelfError;
///
/// fn fetch() -> Result<(), ShelfError> {
///     Err(ShelfError::Fetch("upstream returned status 503".to_string()))
/// }
///
/// assert!(fetch().unwrap_err().to_string().contains("503"));
/// ```
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The product listing could not be obtained from the upstream endpoint.
    ///
    /// Covers transport failures and non-success HTTP statuses. The dataset is
    /// all-or-nothing, so there is no partial variant.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The response body was not a valid product listing.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zshelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;
