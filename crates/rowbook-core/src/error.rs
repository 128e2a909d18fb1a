//! Error types for rowbook-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rowbook-core
#[derive(Debug, Error)]
pub enum Error {
    /// Cell address with a zero row or column (addressing is 1-based)
    #[error("Invalid cell address ({0}, {1}): rows and columns are 1-based")]
    InvalidAddress(u32, u16),

    /// Row index past the end of the sheet
    #[error("Row {0} out of bounds (sheet has {1} rows)")]
    RowOutOfBounds(u32, u32),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),
}
