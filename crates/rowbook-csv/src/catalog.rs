//! Directory-of-CSV-files catalog

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use rowbook_core::{Sheet, SheetCatalog, Workbook};

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvReadOptions, CsvWriteOptions};
use crate::reader::SheetReader;
use crate::writer::SheetWriter;

/// A sheet catalog persisted as one CSV file per sheet in a directory.
///
/// The file stem is the sheet name (`people.csv` holds the `people` sheet).
/// Files are loaded once at open time and written back on [`save`](Self::save);
/// in between, sheets live in memory and are handed out through
/// [`SheetCatalog`].
#[derive(Debug)]
pub struct CsvCatalog {
    dir: PathBuf,
    workbook: Workbook,
}

impl CsvCatalog {
    /// Open a directory with default read options
    pub fn open<P: AsRef<Path>>(dir: P) -> CsvResult<Self> {
        Self::open_with(dir, &CsvReadOptions::default())
    }

    /// Open a directory, loading every `*.csv` file as a sheet.
    ///
    /// Files are loaded in path order so sheet order is deterministic.
    pub fn open_with<P: AsRef<Path>>(dir: P, options: &CsvReadOptions) -> CsvResult<Self> {
        let dir = dir.as_ref().to_path_buf();

        let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension() == Some(OsStr::new("csv")))
            .collect();
        paths.sort();

        let mut workbook = Workbook::new();
        for path in &paths {
            let name = path
                .file_stem()
                .and_then(OsStr::to_str)
                .ok_or_else(|| CsvError::InvalidSheetFile(path.display().to_string()))?;
            let sheet = SheetReader::read_file(path, name, options)?;
            tracing::debug!("Loaded sheet '{}' from {}", name, path.display());
            workbook.add_sheet(sheet)?;
        }

        Ok(Self { dir, workbook })
    }

    /// Write every sheet back with default write options
    pub fn save(&self) -> CsvResult<()> {
        self.save_with(&CsvWriteOptions::default())
    }

    /// Write every sheet back to `<dir>/<sheet name>.csv`
    pub fn save_with(&self, options: &CsvWriteOptions) -> CsvResult<()> {
        for sheet in self.workbook.sheets() {
            let path = self.dir.join(format!("{}.csv", sheet.name()));
            SheetWriter::write_file(sheet, &path, options)?;
        }
        tracing::info!(
            "Saved {} sheets to {}",
            self.workbook.sheet_count(),
            self.dir.display()
        );
        Ok(())
    }

    /// The directory this catalog reads and writes
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Borrow the loaded workbook
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// Borrow the loaded workbook mutably
    pub fn workbook_mut(&mut self) -> &mut Workbook {
        &mut self.workbook
    }
}

impl SheetCatalog for CsvCatalog {
    type Sheet = Sheet;

    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.workbook.sheet(name)
    }

    fn sheet_mut(&mut self, name: &str) -> Option<&mut Sheet> {
        self.workbook.sheet_mut(name)
    }
}
