//! Tabular sheet trait and its in-memory implementation

use crate::error::{Error, Result};
use crate::value::CellValue;

/// The capability set a tabular storage backend exposes.
///
/// Row and column addressing is 1-based, following spreadsheet convention:
/// row 1 is the header row, so data row `i` (0-based within the body) lives
/// at sheet row `i + 2`.
pub trait TabularSheet {
    /// Read the full used range, first row included (the header).
    fn read_all(&self) -> Result<Vec<Vec<CellValue>>>;

    /// Read a single cell. Cells to the right of a short row read as
    /// [`CellValue::Empty`].
    fn read_cell(&self, row: u32, col: u16) -> Result<CellValue>;

    /// Write a single cell in an existing row, extending the row with empty
    /// cells if it is shorter than `col`.
    fn write_cell(&mut self, row: u32, col: u16, value: CellValue) -> Result<()>;

    /// Append a row after the current last row.
    fn append_row(&mut self, values: Vec<CellValue>) -> Result<()>;

    /// Delete a row entirely, shifting later rows up by one.
    fn delete_row(&mut self, row: u32) -> Result<()>;
}

/// An in-memory sheet: a named, row-major grid of cell values
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    /// Sheet name
    name: String,
    /// Rows in sheet order; row 1 of the sheet is `rows[0]`
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Create a sheet whose first row holds the given field names
    pub fn with_header<S, I, F>(name: S, fields: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let header = fields
            .into_iter()
            .map(|f| CellValue::string(f.into()))
            .collect();
        Self {
            name: name.into(),
            rows: vec![header],
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of rows, header included
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Check if the sheet has no rows at all
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the rows in sheet order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    fn check_address(&self, row: u32, col: u16) -> Result<usize> {
        if row == 0 || col == 0 {
            return Err(Error::InvalidAddress(row, col));
        }
        if row > self.rows.len() as u32 {
            return Err(Error::RowOutOfBounds(row, self.rows.len() as u32));
        }
        Ok(row as usize - 1)
    }
}

impl TabularSheet for Sheet {
    fn read_all(&self) -> Result<Vec<Vec<CellValue>>> {
        Ok(self.rows.clone())
    }

    fn read_cell(&self, row: u32, col: u16) -> Result<CellValue> {
        let row_idx = self.check_address(row, col)?;
        Ok(self.rows[row_idx]
            .get(col as usize - 1)
            .cloned()
            .unwrap_or(CellValue::Empty))
    }

    fn write_cell(&mut self, row: u32, col: u16, value: CellValue) -> Result<()> {
        let row_idx = self.check_address(row, col)?;
        let cells = &mut self.rows[row_idx];
        let col_idx = col as usize - 1;
        if col_idx >= cells.len() {
            cells.resize(col_idx + 1, CellValue::Empty);
        }
        cells[col_idx] = value;
        Ok(())
    }

    fn append_row(&mut self, values: Vec<CellValue>) -> Result<()> {
        self.rows.push(values);
        Ok(())
    }

    fn delete_row(&mut self, row: u32) -> Result<()> {
        if row == 0 {
            return Err(Error::InvalidAddress(row, 1));
        }
        if row > self.rows.len() as u32 {
            return Err(Error::RowOutOfBounds(row, self.rows.len() as u32));
        }
        self.rows.remove(row as usize - 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_sheet() -> Sheet {
        let mut sheet = Sheet::with_header("people", ["id", "name"]);
        sheet
            .append_row(vec![CellValue::from("p-1"), CellValue::from("Ada")])
            .unwrap();
        sheet
            .append_row(vec![CellValue::from("p-2"), CellValue::from("Grace")])
            .unwrap();
        sheet
    }

    #[test]
    fn test_with_header_fills_row_one() {
        assert!(Sheet::new("blank").is_empty());

        let sheet = Sheet::with_header("people", ["id", "name"]);
        assert!(!sheet.is_empty());
        assert_eq!(sheet.row_count(), 1);
        assert_eq!(sheet.read_cell(1, 1).unwrap().as_str(), Some("id"));
        assert_eq!(sheet.read_cell(1, 2).unwrap().as_str(), Some("name"));
    }

    #[test]
    fn test_read_cell_is_one_based() {
        let sheet = sample_sheet();
        assert_eq!(sheet.read_cell(2, 2).unwrap().as_str(), Some("Ada"));
        assert!(matches!(
            sheet.read_cell(0, 1),
            Err(Error::InvalidAddress(0, 1))
        ));
        assert!(matches!(
            sheet.read_cell(9, 1),
            Err(Error::RowOutOfBounds(9, 3))
        ));
    }

    #[test]
    fn test_read_cell_past_row_width_is_empty() {
        let sheet = sample_sheet();
        assert_eq!(sheet.read_cell(2, 9).unwrap(), CellValue::Empty);
    }

    #[test]
    fn test_write_cell_extends_short_rows() {
        let mut sheet = sample_sheet();
        sheet.write_cell(2, 4, CellValue::from(7)).unwrap();
        assert_eq!(sheet.read_cell(2, 3).unwrap(), CellValue::Empty);
        assert_eq!(sheet.read_cell(2, 4).unwrap(), CellValue::Number(7.0));
    }

    #[test]
    fn test_write_cell_requires_existing_row() {
        let mut sheet = sample_sheet();
        assert!(sheet.write_cell(4, 1, CellValue::from("x")).is_err());
    }

    #[test]
    fn test_delete_row_shifts_later_rows_up() {
        let mut sheet = sample_sheet();
        sheet.delete_row(2).unwrap();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.read_cell(2, 2).unwrap().as_str(), Some("Grace"));
    }

    #[test]
    fn test_read_all_includes_header() {
        let sheet = sample_sheet();
        let all = sheet.read_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0][0].as_str(), Some("id"));
    }
}
