//! Record types produced by the schema flattener

use serde::{Deserialize, Serialize};

/// Column headers of the flattened table, in output order
pub const TABLE_COLUMNS: [&str; 5] = [
    "Path",
    "Property Name",
    "Expected Data Type",
    "Cardinality",
    "Description",
];

/// One row of the flattened schema table
///
/// Serializes with the [`TABLE_COLUMNS`] names so tabular writers can emit a
/// header row straight from the struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyRecord {
    /// Address of the containing object, `/` for the root
    #[serde(rename = "Path")]
    pub path: String,

    /// Key of the property within its containing object
    #[serde(rename = "Property Name")]
    pub name: String,

    /// Derived type signature such as `array<string>` or `enum(a, b)`
    #[serde(rename = "Expected Data Type")]
    pub data_type: String,

    /// Derived multiplicity such as `1..1` or `0..1 (array)`
    #[serde(rename = "Cardinality")]
    pub cardinality: String,

    /// Free text description, empty if absent
    #[serde(rename = "Description")]
    pub description: String,
}

impl PropertyRecord {
    /// Create a record from its five columns
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        data_type: impl Into<String>,
        cardinality: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            data_type: data_type.into(),
            cardinality: cardinality.into(),
            description: description.into(),
        }
    }

    /// Column values in [`TABLE_COLUMNS`] order
    #[must_use]
    pub fn columns(&self) -> [&str; 5] {
        [
            &self.path,
            &self.name,
            &self.data_type,
            &self.cardinality,
            &self.description,
        ]
    }
}
