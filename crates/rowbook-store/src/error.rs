//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Sheet name does not resolve in the catalog
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Update/delete called on a record without an `id` field
    #[error("Record has no id field")]
    MissingId,

    /// The target sheet's header has no `id` column
    #[error("Sheet '{0}' has no id column")]
    NoIdColumn(String),

    /// No data row matches the record's `id`
    #[error("No record with id '{id}' in sheet '{sheet}'")]
    RecordNotFound {
        /// The id that matched no row
        id: String,
        /// The sheet that was scanned
        sheet: String,
    },

    /// Storage collaborator fault, propagated unmodified
    #[error("Sheet error: {0}")]
    Sheet(#[from] rowbook_core::Error),
}
