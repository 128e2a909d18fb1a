//! Prelude module - common imports for rowbook users
//!
//! ```rust
//! use rowbook::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,
    // CSV catalog types
    CsvCatalog,
    CsvReadOptions,
    CsvWriteOptions,

    // Error types
    Error,
    Record,
    RecordStore,
    Result,

    // Main types
    Sheet,
    SheetCatalog,
    StoreError,

    // Extension traits
    StoreExt,
    TabularSheet,
    Workbook,

    // Reserved field names
    FIELD_CREATED_ON,
    FIELD_ID,
    FIELD_MODIFIED_ON,
};
