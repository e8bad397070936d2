//! Column and ColumnInfo types for metadata result sets.

use crate::constants::{
    COL_CREATE_PARAMS, COL_LITERAL_PREFIX, COL_LITERAL_SUFFIX, COL_LOCAL_TYPE_NAME,
    TYPE_INFO_COLUMNS,
};

/// A column in a metadata result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

impl Column {
    /// Create a column.
    pub fn new(name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            nullable,
        }
    }
}

/// Shared column information for all rows in a result set.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<Column>,
}

impl ColumnInfo {
    /// Create new column info from columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Column layout of a standard type-info result set.
    pub fn type_info() -> Self {
        let nullable = [
            COL_LITERAL_PREFIX,
            COL_LITERAL_SUFFIX,
            COL_CREATE_PARAMS,
            COL_LOCAL_TYPE_NAME,
        ];
        Self::new(
            TYPE_INFO_COLUMNS
                .iter()
                .map(|name| Column::new(*name, nullable.contains(name)))
                .collect(),
        )
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}
