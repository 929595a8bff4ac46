// Crate-wide error type for store and settings I/O, JSON and host validation.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid host: {0:?}")]
    InvalidHost(String),
}

/// Convenience type alias for Results with BrowserError
pub type Result<T> = std::result::Result<T, BrowserError>;
