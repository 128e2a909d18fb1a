//! End-to-end CRUD behavior over an in-memory workbook

use pretty_assertions::assert_eq;
use rowbook_core::{CellValue, Sheet, Workbook};
use rowbook_store::{Record, RecordStore, StoreError, FIELD_CREATED_ON, FIELD_ID, FIELD_MODIFIED_ON};

fn people_store() -> RecordStore<Workbook> {
    let mut workbook = Workbook::new();
    workbook
        .add_sheet(Sheet::with_header(
            "people",
            ["id", "name", "age", "createdOn", "modifiedOn"],
        ))
        .unwrap();
    RecordStore::new(workbook)
}

fn id_of(record: &Record) -> String {
    record.field(FIELD_ID).unwrap().as_str().unwrap().to_string()
}

#[test]
fn create_then_read_back_by_generated_id() {
    let mut store = people_store();
    let created = store
        .create_item(Record::new().with("name", "a"), "people")
        .unwrap();

    let id = id_of(&created);
    assert!(!id.is_empty());
    assert!(created.field(FIELD_CREATED_ON).unwrap().as_datetime().is_some());
    // No update has happened yet, so modifiedOn is an empty cell
    assert_eq!(created.field(FIELD_MODIFIED_ON), Some(&CellValue::Empty));

    let found = store.get_item_by_id(&id, "people").unwrap().unwrap();
    assert_eq!(found.field("name").unwrap().as_str(), Some("a"));
    assert_eq!(found, created);
}

#[test]
fn supplied_id_and_created_on_are_kept() {
    let mut store = people_store();
    let created = store
        .create_item(Record::new().with(FIELD_ID, "x-1").with("name", "a"), "people")
        .unwrap();
    assert_eq!(id_of(&created), "x-1");

    let again = store
        .create_item(
            Record::new()
                .with(FIELD_ID, "x-2")
                .with(FIELD_CREATED_ON, "already stamped"),
            "people",
        )
        .unwrap();
    assert_eq!(
        again.field(FIELD_CREATED_ON).unwrap().as_str(),
        Some("already stamped")
    );
}

#[test]
fn generated_ids_are_unique() {
    let mut store = people_store();
    let a = store.create_item(Record::new(), "people").unwrap();
    let b = store.create_item(Record::new(), "people").unwrap();
    assert_ne!(id_of(&a), id_of(&b));
}

#[test]
fn listing_is_idempotent_and_ordered() {
    let mut store = people_store();
    for name in ["a", "b", "c"] {
        store
            .create_item(Record::new().with("name", name), "people")
            .unwrap();
    }

    let first = store.get_items("people").unwrap();
    let second = store.get_items("people").unwrap();
    assert_eq!(first, second);

    let names: Vec<&str> = first
        .iter()
        .map(|r| r.field("name").unwrap().as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn partial_update_preserves_untouched_fields() {
    let mut store = people_store();
    store
        .create_item(
            Record::new().with(FIELD_ID, "x").with("name", "a").with("age", 5),
            "people",
        )
        .unwrap();

    let updated = store
        .update_item(Record::new().with(FIELD_ID, "x").with("age", 6), "people")
        .unwrap();

    assert_eq!(updated.field("name").unwrap().as_str(), Some("a"));
    assert_eq!(updated.field("age").unwrap().as_number(), Some(6.0));
    assert!(updated.field(FIELD_MODIFIED_ON).unwrap().as_datetime().is_some());

    // The merge is visible to later reads, not just in the returned snapshot
    let found = store.get_item_by_id("x", "people").unwrap().unwrap();
    assert_eq!(found.field("name").unwrap().as_str(), Some("a"));
    assert_eq!(found.field("age").unwrap().as_number(), Some(6.0));
}

#[test]
fn update_always_stamps_modified_on() {
    let mut store = people_store();
    store
        .create_item(Record::new().with(FIELD_ID, "x").with("name", "a"), "people")
        .unwrap();

    let updated = store
        .update_item(
            Record::new()
                .with(FIELD_ID, "x")
                .with(FIELD_MODIFIED_ON, "caller supplied"),
            "people",
        )
        .unwrap();

    // The caller's value is discarded in favor of a fresh timestamp
    assert!(updated.field(FIELD_MODIFIED_ON).unwrap().as_datetime().is_some());
}

#[test]
fn delete_removes_exactly_one_row() {
    let mut store = people_store();
    for id in ["a", "b", "c"] {
        store
            .create_item(Record::new().with(FIELD_ID, id).with("name", id), "people")
            .unwrap();
    }

    store
        .delete_item(Record::new().with(FIELD_ID, "b"), "people")
        .unwrap();

    assert_eq!(store.get_items("people").unwrap().len(), 2);
    assert!(store.get_item_by_id("a", "people").unwrap().is_some());
    assert!(store.get_item_by_id("c", "people").unwrap().is_some());
    assert!(store.get_item_by_id("b", "people").unwrap().is_none());
}

#[test]
fn unknown_fields_are_dropped_on_create() {
    let mut workbook = Workbook::new();
    workbook
        .add_sheet(Sheet::with_header(
            "bare",
            ["id", "createdOn", "modifiedOn"],
        ))
        .unwrap();
    let mut store = RecordStore::new(workbook);

    let created = store
        .create_item(Record::new().with(FIELD_ID, "y").with("extra", "z"), "bare")
        .unwrap();

    assert!(created.field("extra").is_none());
    let found = store.get_item_by_id("y", "bare").unwrap().unwrap();
    assert!(found.field("extra").is_none());
}

#[test]
fn missing_id_fails_without_mutating_the_sheet() {
    let mut store = people_store();
    store
        .create_item(Record::new().with(FIELD_ID, "x").with("name", "a"), "people")
        .unwrap();
    let before = store.get_items("people").unwrap();

    let update = store.update_item(Record::new().with("name", "b"), "people");
    assert!(matches!(update, Err(StoreError::MissingId)));

    let delete = store.delete_item(Record::new().with("name", "b"), "people");
    assert!(matches!(delete, Err(StoreError::MissingId)));

    assert_eq!(store.get_items("people").unwrap(), before);
}

#[test]
fn unknown_record_id_fails_without_mutating_the_sheet() {
    let mut store = people_store();
    store
        .create_item(Record::new().with(FIELD_ID, "x").with("name", "a"), "people")
        .unwrap();
    let before = store.get_items("people").unwrap();

    let result = store.update_item(Record::new().with(FIELD_ID, "ghost"), "people");
    assert!(matches!(
        result,
        Err(StoreError::RecordNotFound { ref id, .. }) if id == "ghost"
    ));
    assert_eq!(store.get_items("people").unwrap(), before);
}

#[test]
fn sheet_without_id_column_rejects_updates() {
    let mut workbook = Workbook::new();
    workbook
        .add_sheet(Sheet::with_header("notes", ["text"]))
        .unwrap();
    let mut store = RecordStore::new(workbook);

    let result = store.update_item(Record::new().with(FIELD_ID, "x"), "notes");
    assert!(matches!(result, Err(StoreError::NoIdColumn(_))));
}

#[test]
fn nonexistent_sheet_fails_every_operation() {
    let mut store = people_store();

    assert!(matches!(
        store.get_items("ghost"),
        Err(StoreError::SheetNotFound(_))
    ));
    assert!(matches!(
        store.get_item_by_id("x", "ghost"),
        Err(StoreError::SheetNotFound(_))
    ));
    assert!(matches!(
        store.create_item(Record::new(), "ghost"),
        Err(StoreError::SheetNotFound(_))
    ));
    assert!(matches!(
        store.update_item(Record::new().with(FIELD_ID, "x"), "ghost"),
        Err(StoreError::SheetNotFound(_))
    ));
    assert!(matches!(
        store.delete_item(Record::new().with(FIELD_ID, "x"), "ghost"),
        Err(StoreError::SheetNotFound(_))
    ));
}

#[test]
fn delete_acknowledges_with_the_input_record() {
    let mut store = people_store();
    store
        .create_item(Record::new().with(FIELD_ID, "x").with("name", "a"), "people")
        .unwrap();

    let payload = Record::new().with(FIELD_ID, "x").with("note", "unrelated");
    let acknowledged = store.delete_item(payload.clone(), "people").unwrap();
    assert_eq!(acknowledged, payload);
}
