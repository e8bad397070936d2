//! Row type for metadata results.

use std::sync::Arc;

use super::column::{Column, ColumnInfo};
use super::value::SqlValue;
use crate::cursor::FieldAccess;
use crate::error::{Error, Result};

/// A row of metadata results.
#[derive(Debug, Clone)]
pub struct Row {
    /// Column values.
    values: Vec<SqlValue>,
    /// Shared column information (reference counted).
    column_info: Arc<ColumnInfo>,
}

impl Row {
    /// Create a new row with values and shared column info.
    pub fn new(values: Vec<SqlValue>, column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values,
            column_info,
        }
    }

    /// Create a new row, checking that every column has a value.
    pub fn try_new(values: Vec<SqlValue>, column_info: Arc<ColumnInfo>) -> Result<Self> {
        if values.len() != column_info.len() {
            return Err(Error::ColumnCountMismatch {
                values: values.len(),
                columns: column_info.len(),
            });
        }
        Ok(Self::new(values, column_info))
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&SqlValue> {
        self.values.get(index)
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&SqlValue> {
        self.column_info
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Get column information.
    pub fn columns(&self) -> &[Column] {
        &self.column_info.columns
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &SqlValue> {
        self.values.iter()
    }

    fn value(&self, name: &str) -> Result<&SqlValue> {
        self.get_by_name(name).ok_or_else(|| Error::ColumnNotFound {
            name: name.to_string(),
        })
    }

    fn integral(&self, name: &str) -> Result<i64> {
        match self.value(name)? {
            SqlValue::Null => Ok(0),
            value => value.to_i64().ok_or_else(|| {
                Error::type_conversion(format!("column {} is not numeric: {}", name, value))
            }),
        }
    }
}

impl FieldAccess for Row {
    fn get_string(&self, name: &str) -> Result<Option<String>> {
        match self.value(name)? {
            SqlValue::Null => Ok(None),
            SqlValue::String(s) => Ok(Some(s.clone())),
            other => Ok(Some(other.to_string())),
        }
    }

    fn get_int(&self, name: &str) -> Result<i32> {
        let value = self.integral(name)?;
        i32::try_from(value).map_err(|_| {
            Error::type_conversion(format!("column {} value {} out of INT range", name, value))
        })
    }

    fn get_short(&self, name: &str) -> Result<i16> {
        let value = self.integral(name)?;
        i16::try_from(value).map_err(|_| {
            Error::type_conversion(format!(
                "column {} value {} out of SMALLINT range",
                name, value
            ))
        })
    }

    fn get_bool(&self, name: &str) -> Result<bool> {
        match self.value(name)? {
            SqlValue::Null => Ok(false),
            value => value.to_bool().ok_or_else(|| {
                Error::type_conversion(format!("column {} is not boolean: {}", name, value))
            }),
        }
    }
}

impl IntoIterator for Row {
    type Item = SqlValue;
    type IntoIter = std::vec::IntoIter<SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a SqlValue;
    type IntoIter = std::slice::Iter<'a, SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
