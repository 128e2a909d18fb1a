//! # rowbook
//!
//! A record store that uses header-driven tabular sheets as its persistence
//! medium: row 1 of a sheet holds field names, every later row holds one
//! record, and the `id` field acts as the primary key.
//!
//! The store owns key generation, `createdOn`/`modifiedOn` bookkeeping, and
//! the read/modify/write protocol for create, read, update and delete. Sheets
//! come from a [`SheetCatalog`]: an in-memory [`Workbook`], a
//! directory-of-CSVs [`CsvCatalog`], or any other backend implementing the
//! catalog and [`TabularSheet`] traits.
//!
//! ## Example
//!
//! ```rust
//! use rowbook::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! workbook
//!     .add_sheet(Sheet::with_header(
//!         "people",
//!         ["id", "name", "createdOn", "modifiedOn"],
//!     ))
//!     .unwrap();
//!
//! let mut store = RecordStore::new(workbook);
//!
//! let created = store
//!     .create_item(Record::new().with("name", "Ada"), "people")
//!     .unwrap();
//! let id = created.field(FIELD_ID).unwrap().to_string();
//!
//! let found = store.get_item_by_id(&id, "people").unwrap().unwrap();
//! assert_eq!(found.field("name").unwrap().as_str(), Some("Ada"));
//! ```

pub mod prelude;

// Re-export core types
pub use rowbook_core::{
    CellValue, Error, Result, SharedString, Sheet, SheetCatalog, TabularSheet, Workbook,
};

// Re-export store types
pub use rowbook_store::{
    Record, RecordStore, StoreError, StoreResult, FIELD_CREATED_ON, FIELD_ID, FIELD_MODIFIED_ON,
};

// Re-export CSV catalog types
pub use rowbook_csv::{
    CsvCatalog, CsvError, CsvReadOptions, CsvResult, CsvWriteOptions, LineTerminator, SheetReader,
    SheetWriter,
};

use std::path::Path;

/// Extension trait wiring a [`RecordStore`] to the CSV catalog backend
pub trait StoreExt: Sized {
    /// Open a store over a directory of CSV sheet files
    fn open<P: AsRef<Path>>(dir: P) -> CsvResult<Self>;

    /// Write the store's sheets back to their files
    fn save(&self) -> CsvResult<()>;
}

impl StoreExt for RecordStore<CsvCatalog> {
    fn open<P: AsRef<Path>>(dir: P) -> CsvResult<Self> {
        Ok(RecordStore::new(CsvCatalog::open(dir)?))
    }

    fn save(&self) -> CsvResult<()> {
        self.catalog().save()
    }
}
