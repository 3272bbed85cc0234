//! Error types for Podium

use thiserror::Error;

/// Main error type for Podium operations.
///
/// Engine computations never fail on bad data (unparsable marks, missing
/// history); these variants cover the fallible boundaries around them.
#[derive(Debug, Error)]
pub enum PodiumError {
    /// Error in meet configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input data could not be interpreted
    #[error("Data error: {0}")]
    Data(String),

    /// Request is not answerable in the current state (e.g. missing filters)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Record collection is not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Record collection could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Podium operations
pub type Result<T> = std::result::Result<T, PodiumError>;
