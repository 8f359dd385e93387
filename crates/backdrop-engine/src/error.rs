//! Error types for the engine's host-facing surface
//!
//! Steady-state animation has no recoverable errors; only setup paths
//! (config load) are fallible.

use thiserror::Error;

/// Result type for engine setup operations
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
