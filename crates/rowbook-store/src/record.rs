//! Record type - one data row as a field-name-keyed mapping

use indexmap::IndexMap;
use rowbook_core::CellValue;

/// Reserved field name: primary key
pub const FIELD_ID: &str = "id";

/// Reserved field name: timestamp set once at creation
pub const FIELD_CREATED_ON: &str = "createdOn";

/// Reserved field name: timestamp set on every update
pub const FIELD_MODIFIED_ON: &str = "modifiedOn";

/// One record: an ordered mapping from field name to cell value.
///
/// Field order follows insertion order, so records materialized from a sheet
/// iterate in header order. The three reserved fields ([`FIELD_ID`],
/// [`FIELD_CREATED_ON`], [`FIELD_MODIFIED_ON`]) are a convention, not a
/// schema: nothing stops a sheet from omitting them, and the store checks for
/// them where an operation requires one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: IndexMap<String, CellValue>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value by name
    pub fn field(&self, name: &str) -> Option<&CellValue> {
        self.fields.get(name)
    }

    /// Set a field value, replacing any previous value for that name
    pub fn set<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<CellValue>,
    {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set)
    pub fn with<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<CellValue>,
    {
        self.set(name, value);
        self
    }

    /// Remove a field by name
    pub fn remove(&mut self, name: &str) -> Option<CellValue> {
        self.fields.shift_remove(name)
    }

    /// The primary key value, if the record has one
    pub fn id(&self) -> Option<&CellValue> {
        self.fields.get(FIELD_ID)
    }

    /// Check if a field is present
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(field name, value)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over field names in field order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }
}

impl FromIterator<(String, CellValue)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, CellValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, CellValue);
    type IntoIter = indexmap::map::IntoIter<String, CellValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
