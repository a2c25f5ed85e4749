//! Error types for the lift_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for lift_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Referenced exercise or program does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate exercise name on add
    #[error("conflict: {0}")]
    Conflict(String),

    /// Malformed input (empty name, invalid weight, negative duration)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Backing document unreadable, unwritable, or corrupt
    #[error("store error: {0}")]
    Store(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
