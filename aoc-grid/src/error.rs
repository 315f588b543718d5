//! Error types for the grid toolkit

use thiserror::Error;

/// Error type for grid construction and traversal
///
/// Coordinate lookups never produce an error: an out-of-bounds position is
/// reported as `None` by the accessor instead.
#[derive(Debug, Error)]
pub enum GridError {
    /// Construction or call arguments are malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// A row does not have the same number of values as the first row
    #[error("Ragged row {row}: expected {expected} values, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Node state does not allow the operation to continue
    #[error("Invalid state: {0}")]
    InvalidState(String),
    /// An element was required from an empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
    /// IO error while writing rendered output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
