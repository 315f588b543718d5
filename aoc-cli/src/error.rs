//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Grid construction or traversal error
    #[error("Grid error: {0}")]
    Grid(#[from] aoc_grid::GridError),

    /// Input reading error
    #[error("Input error: {0}")]
    Common(#[from] aoc_common::CommonError),
}
