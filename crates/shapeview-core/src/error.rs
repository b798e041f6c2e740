//! Error types for canvas operations.

use thiserror::Error;

/// Errors reported by index-based canvas operations.
///
/// Calls made in the wrong editing state are not errors; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    #[error("Item index {index} out of range (canvas has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for canvas operations.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
