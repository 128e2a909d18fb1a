//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV catalog operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A file whose stem is not a usable sheet name
    #[error("Invalid sheet file name: {0}")]
    InvalidSheetFile(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] rowbook_core::Error),
}
