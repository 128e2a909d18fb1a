//! # rowbook-core
//!
//! Core data structures for the rowbook record store.
//!
//! This crate provides the tabular substrate that the store crates build on:
//! - [`CellValue`] - Scalar cell values (strings, numbers, booleans, timestamps)
//! - [`TabularSheet`] and [`SheetCatalog`] - The collaborator traits a storage
//!   backend implements
//! - [`Sheet`] and [`Workbook`] - In-memory implementations of both
//!
//! ## Example
//!
//! ```rust
//! use rowbook_core::{CellValue, Sheet, SheetCatalog, TabularSheet, Workbook};
//!
//! let mut sheet = Sheet::with_header("people", ["id", "name"]);
//! sheet.append_row(vec![CellValue::from("p-1"), CellValue::from("Ada")]).unwrap();
//!
//! // Rows and columns are 1-based; row 1 is the header
//! assert_eq!(sheet.read_cell(2, 2).unwrap().as_str(), Some("Ada"));
//!
//! let mut workbook = Workbook::new();
//! workbook.add_sheet(sheet).unwrap();
//! assert!(workbook.sheet("people").is_some());
//! ```

pub mod error;
pub mod sheet;
pub mod value;
pub mod workbook;

// Re-exports for convenience
pub use error::{Error, Result};
pub use sheet::{Sheet, TabularSheet};
pub use value::{CellValue, SharedString};
pub use workbook::{SheetCatalog, Workbook};
