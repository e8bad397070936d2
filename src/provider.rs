//! Metadata providers: the source of type-info result sets.
//!
//! A driver connection implements `MetadataProvider` (or its async twin) to
//! hand out a cursor over its supported-types result. The provider is only
//! borrowed for the duration of the call; its own lifecycle stays with the
//! caller.

use std::future::Future;
use std::sync::Arc;

use crate::cursor::{AsyncMetadataCursor, MetadataCursor, RowCursor};
use crate::error::Result;
use crate::types::{ColumnInfo, Row, SqlValue, TypeInfo};

/// Blocking source of database metadata.
pub trait MetadataProvider {
    /// Cursor type returned by `type_info()`.
    type Cursor<'a>: MetadataCursor
    where
        Self: 'a;

    /// Open a cursor over the supported-types result set.
    fn type_info(&mut self) -> Result<Self::Cursor<'_>>;
}

/// Asynchronous source of database metadata.
pub trait AsyncMetadataProvider {
    /// Cursor type returned by `type_info()`.
    type Cursor<'a>: AsyncMetadataCursor + Send
    where
        Self: 'a;

    /// Open a cursor over the supported-types result set.
    fn type_info(&mut self) -> impl Future<Output = Result<Self::Cursor<'_>>> + Send;
}

/// Provider serving pre-fetched type-info rows.
///
/// Useful when the rows were captured earlier, and as a fixture.
///
/// # Example
///
/// ```
/// use sql_typeinfo_rs::{extract_type_info, InMemoryMetadata, TypeInfo};
///
/// let mut metadata = InMemoryMetadata::new()
///     .with_type(&TypeInfo::new("INTEGER", 4))
///     .with_type(&TypeInfo::new("VARCHAR", 12).with_create_params(["length"]));
///
/// let catalog = extract_type_info(&mut metadata);
/// assert_eq!(catalog.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryMetadata {
    /// Shared column layout.
    column_info: Arc<ColumnInfo>,
    /// Buffered rows.
    rows: Vec<Row>,
}

impl InMemoryMetadata {
    /// Create an empty provider with the standard type-info layout.
    pub fn new() -> Self {
        Self::with_columns(ColumnInfo::type_info())
    }

    /// Create an empty provider with a custom column layout.
    pub fn with_columns(column_info: ColumnInfo) -> Self {
        Self {
            column_info: Arc::new(column_info),
            rows: Vec::new(),
        }
    }

    /// Append a raw row; values must match the column layout.
    pub fn push_row(&mut self, values: Vec<SqlValue>) -> Result<()> {
        let row = Row::try_new(values, Arc::clone(&self.column_info))?;
        self.rows.push(row);
        Ok(())
    }

    /// Append a row describing `info`.
    ///
    /// Only valid with the standard layout from `new()`.
    pub fn with_type(mut self, info: &TypeInfo) -> Self {
        self.rows.push(type_info_row(info, Arc::clone(&self.column_info)));
        self
    }

    /// Get column information.
    pub fn column_info(&self) -> &ColumnInfo {
        &self.column_info
    }

    /// Number of buffered rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no buffered rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for InMemoryMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataProvider for InMemoryMetadata {
    type Cursor<'a> = RowCursor;

    fn type_info(&mut self) -> Result<Self::Cursor<'_>> {
        Ok(RowCursor::new(self.rows.clone()))
    }
}

impl AsyncMetadataProvider for InMemoryMetadata {
    type Cursor<'a> = RowCursor;

    async fn type_info(&mut self) -> Result<Self::Cursor<'_>> {
        Ok(RowCursor::new(self.rows.clone()))
    }
}

/// Build a standard-layout type-info row for `info`.
fn type_info_row(info: &TypeInfo, column_info: Arc<ColumnInfo>) -> Row {
    let create_params = if info.create_params().is_empty() {
        SqlValue::Null
    } else {
        SqlValue::from(info.create_params().join(","))
    };

    // Order matches `TYPE_INFO_COLUMNS`.
    let values = vec![
        SqlValue::from(info.type_name()),
        SqlValue::from(info.data_type()),
        SqlValue::from(info.precision()),
        SqlValue::from(info.literal_prefix()),
        SqlValue::from(info.literal_suffix()),
        create_params,
        SqlValue::from(info.nullability().code()),
        SqlValue::from(info.is_case_sensitive()),
        SqlValue::from(info.searchability().code()),
        SqlValue::from(info.is_unsigned()),
        SqlValue::from(info.is_fixed_precision_scale()),
        SqlValue::from(false),
        SqlValue::Null,
        SqlValue::from(info.minimum_scale()),
        SqlValue::from(info.maximum_scale()),
        SqlValue::from(0),
        SqlValue::from(0),
        SqlValue::from(10),
    ];
    Row::new(values, column_info)
}
