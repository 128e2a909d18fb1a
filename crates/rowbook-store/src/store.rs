//! The record store: CRUD over a sheet catalog

use chrono::Utc;
use rowbook_core::{CellValue, SheetCatalog, TabularSheet};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::record::{Record, FIELD_CREATED_ON, FIELD_ID, FIELD_MODIFIED_ON};

/// Offset from a 0-based data-row index to its 1-based sheet row.
/// Row 1 is the header, so data row `i` lives at sheet row `i + 2`.
const DATA_ROW_OFFSET: u32 = 2;

/// Translates between header-driven sheets and ordered key-value records.
///
/// The store holds a single catalog (the workbook-like container) and no
/// other state. Nothing is cached across calls: every operation re-reads the
/// header and rows fresh, so each call observes the sheet as committed at
/// call time.
#[derive(Debug)]
pub struct RecordStore<C> {
    catalog: C,
}

impl<C> RecordStore<C> {
    /// Create a store over a catalog
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Borrow the underlying catalog
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Borrow the underlying catalog mutably
    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }

    /// Consume the store, returning the catalog
    pub fn into_catalog(self) -> C {
        self.catalog
    }
}

impl<C: SheetCatalog> RecordStore<C> {
    /// Get every record in a sheet, in sheet row order.
    ///
    /// An empty sheet body yields an empty list; an unknown sheet name is
    /// [`StoreError::SheetNotFound`].
    pub fn get_items(&self, sheet_name: &str) -> StoreResult<Vec<Record>> {
        let sheet = self.sheet(sheet_name)?;
        let SheetData { fields, rows } = schema_and_rows(sheet)?;
        Ok(rows
            .into_iter()
            .map(|row| materialize(&fields, row))
            .collect())
    }

    /// Get the first record whose `id` field equals `id` exactly.
    ///
    /// Returns `Ok(None)` when no record matches.
    pub fn get_item_by_id(&self, id: &str, sheet_name: &str) -> StoreResult<Option<Record>> {
        let items = self.get_items(sheet_name)?;
        Ok(items
            .into_iter()
            .find(|item| item.field(FIELD_ID).and_then(CellValue::as_str) == Some(id)))
    }

    /// Create a record: append one row built from the sheet's header fields.
    ///
    /// A missing `id` is synthesized (UUID v4) and a missing `createdOn` is
    /// stamped with the current time. The returned record is the row as
    /// actually written: every header field present, input fields outside the
    /// header silently dropped.
    pub fn create_item(&mut self, record: Record, sheet_name: &str) -> StoreResult<Record> {
        let mut record = record;
        let sheet = self.sheet_mut(sheet_name)?;
        let SheetData { fields, .. } = schema_and_rows(&*sheet)?;

        if record.field(FIELD_ID).is_none() {
            record.set(FIELD_ID, Uuid::new_v4().to_string());
        }
        if record.field(FIELD_CREATED_ON).is_none() {
            record.set(FIELD_CREATED_ON, Utc::now());
        }

        let mut created = Record::new();
        let mut row = Vec::with_capacity(fields.len());
        for field in &fields {
            let value = record.field(field).cloned().unwrap_or(CellValue::Empty);
            created.set(field.clone(), value.clone());
            row.push(value);
        }
        sheet.append_row(row)?;
        Ok(created)
    }

    /// Update the row matching the record's `id`, merging in stored values.
    ///
    /// `modifiedOn` is always stamped with the current time, overwriting any
    /// caller-supplied value. Per header field: a supplied value is written
    /// to that one cell, an unsupplied one is read back from storage instead,
    /// so the returned record is a full post-update snapshot. Failed
    /// preconditions perform no writes.
    pub fn update_item(&mut self, record: Record, sheet_name: &str) -> StoreResult<Record> {
        let sheet = self.sheet_mut(sheet_name)?;
        let id = required_id(&record)?;
        let SheetData { fields, rows } = schema_and_rows(&*sheet)?;
        let row_idx = locate(&fields, &rows, &id, sheet_name)?;
        let sheet_row = row_idx as u32 + DATA_ROW_OFFSET;

        let mut record = record;
        record.set(FIELD_MODIFIED_ON, Utc::now());

        let mut updated = Record::new();
        for (i, field) in fields.iter().enumerate() {
            let col = i as u16 + 1;
            match record.field(field) {
                Some(value) => {
                    let value = value.clone();
                    sheet.write_cell(sheet_row, col, value.clone())?;
                    updated.set(field.clone(), value);
                }
                None => updated.set(field.clone(), sheet.read_cell(sheet_row, col)?),
            }
        }
        Ok(updated)
    }

    /// Delete the row matching the record's `id`.
    ///
    /// The row is removed entirely, shifting later rows up. Returns the input
    /// record unchanged as acknowledgment.
    pub fn delete_item(&mut self, record: Record, sheet_name: &str) -> StoreResult<Record> {
        let sheet = self.sheet_mut(sheet_name)?;
        let id = required_id(&record)?;
        let SheetData { fields, rows } = schema_and_rows(&*sheet)?;
        let row_idx = locate(&fields, &rows, &id, sheet_name)?;
        sheet.delete_row(row_idx as u32 + DATA_ROW_OFFSET)?;
        Ok(record)
    }

    fn sheet(&self, name: &str) -> StoreResult<&C::Sheet> {
        self.catalog
            .sheet(name)
            .ok_or_else(|| StoreError::SheetNotFound(name.to_string()))
    }

    fn sheet_mut(&mut self, name: &str) -> StoreResult<&mut C::Sheet> {
        self.catalog
            .sheet_mut(name)
            .ok_or_else(|| StoreError::SheetNotFound(name.to_string()))
    }
}

/// A sheet split into its schema (row 1, trimmed) and raw data rows
struct SheetData {
    fields: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

fn schema_and_rows<S: TabularSheet>(sheet: &S) -> StoreResult<SheetData> {
    let mut all = sheet.read_all()?;
    if all.is_empty() {
        return Ok(SheetData {
            fields: Vec::new(),
            rows: Vec::new(),
        });
    }
    let fields = all
        .remove(0)
        .into_iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();
    Ok(SheetData { fields, rows: all })
}

/// Zip header fields with one raw row; short rows pad with empty cells
fn materialize(fields: &[String], row: Vec<CellValue>) -> Record {
    let mut cells = row.into_iter();
    fields
        .iter()
        .map(|field| (field.clone(), cells.next().unwrap_or(CellValue::Empty)))
        .collect()
}

/// The record's `id`, required present and non-empty
fn required_id(record: &Record) -> StoreResult<CellValue> {
    match record.id() {
        None | Some(CellValue::Empty) => Err(StoreError::MissingId),
        Some(id) => Ok(id.clone()),
    }
}

/// Find the 0-based data row whose `id` cell equals `id` exactly.
///
/// The `id` column is the first header field named `id`.
fn locate(
    fields: &[String],
    rows: &[Vec<CellValue>],
    id: &CellValue,
    sheet_name: &str,
) -> StoreResult<usize> {
    let id_col = fields
        .iter()
        .position(|f| f.as_str() == FIELD_ID)
        .ok_or_else(|| StoreError::NoIdColumn(sheet_name.to_string()))?;
    rows.iter()
        .position(|row| row.get(id_col) == Some(id))
        .ok_or_else(|| StoreError::RecordNotFound {
            id: id.to_string(),
            sheet: sheet_name.to_string(),
        })
}
