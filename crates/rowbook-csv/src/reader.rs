//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use rowbook_core::{CellValue, Sheet, TabularSheet};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// Reads a CSV file into a sheet
pub struct SheetReader;

impl SheetReader {
    /// Read a CSV file into a sheet with the given name
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        name: &str,
        options: &CsvReadOptions,
    ) -> CsvResult<Sheet> {
        let file = File::open(path)?;
        Self::read(file, name, options)
    }

    /// Read CSV from a reader into a sheet with the given name.
    ///
    /// The header row is not special-cased here: it lands as row 1 of the
    /// sheet, which is exactly where the store expects it.
    pub fn read<R: Read>(reader: R, name: &str, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = Sheet::new(name);
        for result in csv_reader.records() {
            let record = result?;
            let row = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();
            sheet.append_row(row)?;
        }

        Ok(sheet)
    }

    /// Detect the scalar type of a field value
    fn detect_type(field: &str) -> CellValue {
        if field.is_empty() {
            return CellValue::Empty;
        }

        if field.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if field.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        if let Ok(n) = field.parse::<f64>() {
            return CellValue::Number(n);
        }

        // Timestamps round-trip through their RFC 3339 rendering
        if let Ok(dt) = DateTime::parse_from_rfc3339(field) {
            return CellValue::DateTime(dt.with_timezone(&Utc));
        }

        CellValue::string(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_keeps_header_as_row_one() {
        let data = "id,name\np-1,Ada\n";
        let sheet = SheetReader::read(data.as_bytes(), "people", &CsvReadOptions::default())
            .unwrap();

        assert_eq!(sheet.name(), "people");
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.read_cell(1, 2).unwrap().as_str(), Some("name"));
        assert_eq!(sheet.read_cell(2, 2).unwrap().as_str(), Some("Ada"));
    }

    #[test]
    fn test_detect_type_scalars() {
        assert_eq!(SheetReader::detect_type(""), CellValue::Empty);
        assert_eq!(SheetReader::detect_type("TRUE"), CellValue::Boolean(true));
        assert_eq!(SheetReader::detect_type("false"), CellValue::Boolean(false));
        assert_eq!(SheetReader::detect_type("42"), CellValue::Number(42.0));
        assert_eq!(SheetReader::detect_type("-1.5"), CellValue::Number(-1.5));
        assert_eq!(
            SheetReader::detect_type("hello"),
            CellValue::string("hello")
        );
    }

    #[test]
    fn test_detect_type_rfc3339_timestamp() {
        let value = SheetReader::detect_type("2024-03-01T12:30:00.000Z");
        assert!(value.as_datetime().is_some());
    }

    #[test]
    fn test_auto_detection_can_be_disabled() {
        let data = "id,count\np-1,42\n";
        let options = CsvReadOptions {
            auto_detect_types: false,
            ..Default::default()
        };
        let sheet = SheetReader::read(data.as_bytes(), "t", &options).unwrap();
        assert_eq!(sheet.read_cell(2, 2).unwrap().as_str(), Some("42"));
    }
}
