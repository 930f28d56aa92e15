//! Error types for hot spot detection.

use thiserror::Error;

/// Errors raised while constructing a detector or exporting its result.
///
/// All input validation happens at construction time; `process` itself
/// cannot fail.
#[derive(Debug, Error)]
pub enum MthsError {
    /// The points argument was not a sequence, or one of its entries was not
    /// a usable coordinate.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Fewer than two points were supplied.
    #[error("At least two points are required to form a circle, got {found}")]
    InsufficientPoints { found: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(String),
}

pub type Result<T> = std::result::Result<T, MthsError>;
