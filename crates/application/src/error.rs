//! Application-level errors
//!
//! Only errors from stages the policy table marks `Abort` ever surface out
//! of a pipeline; everything else is converted to a degraded artifact at
//! the stage boundary.

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// CLI arguments did not match the expected shape
    #[error("Usage error: {0}")]
    Usage(String),

    /// An input file could not be read
    #[error("Cannot read {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The result file could not be written
    #[error("Cannot write {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Inference/AI error
    #[error("Inference error: {0}")]
    Inference(String),

    /// HTML rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Wrap a failed input read
    pub fn input_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::InputRead {
            path: path.into(),
            source,
        }
    }

    /// Wrap a failed output write
    pub fn output_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }
}
