//! Error types for input handling and shared helpers

use thiserror::Error;

/// Error type for the shared puzzle helpers
#[derive(Debug, Error)]
pub enum CommonError {
    /// Arguments are out of the accepted range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// An element was required from an empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
    /// A line of input could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// IO error while reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommonError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
