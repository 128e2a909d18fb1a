//! # rowbook-store
//!
//! CRUD semantics over header-driven tabular sheets.
//!
//! A sheet's first row holds field names; every later row is one record. The
//! [`RecordStore`] maps between that flat shape and [`Record`] values, owning
//! primary key generation (`id`), timestamp bookkeeping (`createdOn`,
//! `modifiedOn`) and the read/modify/write protocol for create, read, update
//! and delete.
//!
//! ## Example
//!
//! ```rust
//! use rowbook_core::{Sheet, Workbook};
//! use rowbook_store::{Record, RecordStore, FIELD_ID};
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
//! let created = store
//!     .create_item(Record::new().with("name", "Ada"), "people")
//!     .unwrap();
//!
//! let id = created.field(FIELD_ID).unwrap().to_string();
//! let found = store.get_item_by_id(&id, "people").unwrap().unwrap();
//! assert_eq!(found.field("name").unwrap().as_str(), Some("Ada"));
//! ```

pub mod error;
pub mod record;
pub mod store;

// Re-exports for convenience
pub use error::{StoreError, StoreResult};
pub use record::{Record, FIELD_CREATED_ON, FIELD_ID, FIELD_MODIFIED_ON};
pub use store::RecordStore;
