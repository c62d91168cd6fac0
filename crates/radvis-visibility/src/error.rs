//! Error types for visibility computation.

use thiserror::Error;

/// Errors that can occur while building, reading or writing a matrix.
///
/// The visibility test itself never fails; these come from settings,
/// the worker pool, and matrix I/O.
#[derive(Error, Debug)]
pub enum VisibilityError {
    /// I/O error reading or writing a matrix.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid build settings.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// The worker pool could not be started.
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A serialized matrix is not a square, symmetric 0/1 grid.
    #[error("malformed visibility matrix at line {line}: {message}")]
    MalformedMatrix {
        /// Line number (1-indexed).
        line: usize,
        /// Error message.
        message: String,
    },
}

impl VisibilityError {
    /// Create a malformed matrix error.
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedMatrix {
            line,
            message: message.into(),
        }
    }
}

/// Result type for visibility operations.
pub type Result<T> = std::result::Result<T, VisibilityError>;
