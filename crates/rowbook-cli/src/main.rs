//! Rowbook CLI - CRUD over directories of CSV sheets
//!
//! Each subcommand is a direct pass-through to the corresponding
//! [`RecordStore`] operation, with records as JSON objects on the way in and
//! out.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rowbook::prelude::*;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rowbook")]
#[command(author, version, about = "Record store over directories of CSV sheets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the sheets in a store directory
    Sheets {
        /// Store directory (one CSV file per sheet)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List every record in a sheet
    List {
        /// Sheet name (file stem of its CSV file)
        sheet: String,

        /// Store directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Get one record by id
    Get {
        /// Sheet name
        sheet: String,

        /// Record id
        id: String,

        /// Store directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Create a record from a JSON object
    Create {
        /// Sheet name
        sheet: String,

        /// Record payload, e.g. '{"name": "Ada"}'
        record: String,

        /// Store directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Update a record from a JSON object carrying its id
    Update {
        /// Sheet name
        sheet: String,

        /// Record payload, e.g. '{"id": "…", "age": 37}'
        record: String,

        /// Store directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Delete a record by id
    Delete {
        /// Sheet name
        sheet: String,

        /// Record id
        id: String,

        /// Store directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sheets { dir } => sheets(&dir),
        Commands::List { sheet, dir } => list(&dir, &sheet),
        Commands::Get { sheet, id, dir } => get(&dir, &sheet, &id),
        Commands::Create { sheet, record, dir } => create(&dir, &sheet, &record),
        Commands::Update { sheet, record, dir } => update(&dir, &sheet, &record),
        Commands::Delete { sheet, id, dir } => delete(&dir, &sheet, &id),
    }
}

fn open_store(dir: &Path) -> Result<RecordStore<CsvCatalog>> {
    RecordStore::open(dir)
        .with_context(|| format!("Failed to open store directory '{}'", dir.display()))
}

fn sheets(dir: &Path) -> Result<()> {
    let store = open_store(dir)?;

    for sheet in store.catalog().workbook().sheets() {
        let data_rows = sheet.row_count().saturating_sub(1);
        println!("{}\t{} records", sheet.name(), data_rows);
    }

    Ok(())
}

fn list(dir: &Path, sheet: &str) -> Result<()> {
    let store = open_store(dir)?;
    let items = store.get_items(sheet)?;

    let array = Value::Array(items.iter().map(record_to_json).collect());
    println!("{}", serde_json::to_string_pretty(&array)?);
    Ok(())
}

fn get(dir: &Path, sheet: &str, id: &str) -> Result<()> {
    let store = open_store(dir)?;

    match store.get_item_by_id(id, sheet)? {
        Some(item) => {
            println!("{}", serde_json::to_string_pretty(&record_to_json(&item))?);
            Ok(())
        }
        None => bail!("No record with id '{}' in sheet '{}'", id, sheet),
    }
}

fn create(dir: &Path, sheet: &str, payload: &str) -> Result<()> {
    let mut store = open_store(dir)?;
    let created = store.create_item(record_from_json(payload)?, sheet)?;

    store.save().context("Failed to save store")?;
    println!("{}", serde_json::to_string_pretty(&record_to_json(&created))?);
    Ok(())
}

fn update(dir: &Path, sheet: &str, payload: &str) -> Result<()> {
    let mut store = open_store(dir)?;
    let updated = store.update_item(record_from_json(payload)?, sheet)?;

    store.save().context("Failed to save store")?;
    println!("{}", serde_json::to_string_pretty(&record_to_json(&updated))?);
    Ok(())
}

fn delete(dir: &Path, sheet: &str, id: &str) -> Result<()> {
    let mut store = open_store(dir)?;
    let deleted = store.delete_item(Record::new().with(FIELD_ID, id), sheet)?;

    store.save().context("Failed to save store")?;
    println!("{}", serde_json::to_string_pretty(&record_to_json(&deleted))?);
    Ok(())
}

/// Parse a JSON object into a record; anything else is a usage error
fn record_from_json(text: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(text).context("Record payload is not valid JSON")?;
    let map = match value {
        Value::Object(map) => map,
        _ => bail!("Record payload must be a JSON object"),
    };

    let mut record = Record::new();
    for (name, value) in map {
        record.set(name, cell_from_json(value)?);
    }
    Ok(record)
}

fn cell_from_json(value: Value) -> Result<CellValue> {
    Ok(match value {
        Value::Null => CellValue::Empty,
        Value::Bool(b) => CellValue::Boolean(b),
        Value::Number(n) => {
            CellValue::Number(n.as_f64().context("Number does not fit in an f64")?)
        }
        Value::String(s) => CellValue::string(s),
        Value::Array(_) | Value::Object(_) => bail!("Record fields must be scalar values"),
    })
}

fn record_to_json(record: &Record) -> Value {
    let mut map = Map::new();
    for (name, value) in record.iter() {
        map.insert(name.to_string(), cell_to_json(value));
    }
    Value::Object(map)
}

fn cell_to_json(value: &CellValue) -> Value {
    match value {
        CellValue::Empty => Value::Null,
        CellValue::Boolean(b) => Value::Bool(*b),
        CellValue::Number(n) => Value::from(*n),
        CellValue::String(s) => Value::String(s.as_str().to_string()),
        // Timestamps render as RFC 3339, same as their cell display
        CellValue::DateTime(_) => Value::String(value.to_string()),
    }
}
