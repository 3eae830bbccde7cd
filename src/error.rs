//! Error types for algovision.

use thiserror::Error;

/// Result type alias for algovision operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for algovision.
#[derive(Error, Debug)]
pub enum Error {
    /// Grid construction rejected the requested shape or markers.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A configuration value failed validation.
    #[error("invalid config: {0}")]
    Config(String),

    /// An ASCII layout could not be parsed into a grid.
    #[error("bad layout at line {line}: {reason}")]
    Layout { line: usize, reason: String },

    /// Hash table constructed with no slots.
    #[error("hash table size must be at least 1")]
    TableSize,

    /// The explanation collaborator failed to produce text.
    ///
    /// Callers normally never see this; `explain_or_fallback` converts it
    /// to a fixed user-presentable string at the boundary.
    #[error("explanation unavailable: {0}")]
    Explanation(String),

    /// IO error (layout file loading in the binary).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error (grid config files).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
