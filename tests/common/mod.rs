//! Scripted metadata provider for exercising extraction failure paths.

#![allow(dead_code)]

use std::sync::Arc;

use sql_typeinfo_rs::{
    AsyncMetadataCursor, AsyncMetadataProvider, ColumnInfo, Error, FieldAccess, MetadataCursor,
    MetadataProvider, Result, Row, RowCursor, SqlValue,
};

/// Build a standard type-info row; unspecified columns are NULL.
pub fn type_row(fields: &[(&str, SqlValue)]) -> Row {
    let info = Arc::new(ColumnInfo::type_info());
    let mut values = vec![SqlValue::Null; info.len()];
    for (name, value) in fields {
        let idx = info
            .find_by_name(name)
            .unwrap_or_else(|| panic!("unknown column {}", name));
        values[idx] = value.clone();
    }
    Row::new(values, info)
}

/// A VARCHAR row with the given SEARCHABLE code.
pub fn varchar_row(searchable: i16) -> Row {
    type_row(&[
        ("TYPE_NAME", SqlValue::from("VARCHAR")),
        ("DATA_TYPE", SqlValue::from(12)),
        ("CREATE_PARAMS", SqlValue::from("length")),
        ("PRECISION", SqlValue::from(65535)),
        ("LITERAL_PREFIX", SqlValue::from("'")),
        ("LITERAL_SUFFIX", SqlValue::from("'")),
        ("CASE_SENSITIVE", SqlValue::from(true)),
        ("SEARCHABLE", SqlValue::from(searchable)),
        ("NULLABLE", SqlValue::from(1)),
    ])
}

/// A minimal row with just a name and type code.
pub fn simple_row(name: &str, data_type: i32) -> Row {
    type_row(&[
        ("TYPE_NAME", SqlValue::from(name)),
        ("DATA_TYPE", SqlValue::from(data_type)),
    ])
}

/// Provider whose cursor fails at configured points.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    pub rows: Vec<Row>,
    /// Fail `type_info()` itself.
    pub fail_open: bool,
    /// Fail `advance()` after this many rows were read.
    pub fail_after: Option<usize>,
    /// Fail `close()`.
    pub fail_close: bool,
    /// Number of times a cursor was closed.
    pub close_calls: usize,
}

impl ScriptedProvider {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    fn open(&mut self) -> Result<ScriptedCursor<'_>> {
        if self.fail_open {
            return Err(Error::ConnectionClosed);
        }
        Ok(ScriptedCursor {
            inner: RowCursor::new(self.rows.clone()),
            read: 0,
            fail_after: self.fail_after,
            fail_close: self.fail_close,
            close_calls: &mut self.close_calls,
        })
    }
}

pub struct ScriptedCursor<'a> {
    inner: RowCursor,
    read: usize,
    fail_after: Option<usize>,
    fail_close: bool,
    close_calls: &'a mut usize,
}

impl ScriptedCursor<'_> {
    fn step(&mut self) -> Result<bool> {
        if self.fail_after == Some(self.read) {
            return Err(Error::driver("network reset"));
        }
        let more = MetadataCursor::advance(&mut self.inner)?;
        if more {
            self.read += 1;
        }
        Ok(more)
    }

    fn release(&mut self) -> Result<()> {
        *self.close_calls += 1;
        if self.fail_close {
            return Err(Error::driver("close failed"));
        }
        MetadataCursor::close(&mut self.inner)
    }
}

impl FieldAccess for ScriptedCursor<'_> {
    fn get_string(&self, name: &str) -> Result<Option<String>> {
        self.inner.get_string(name)
    }

    fn get_int(&self, name: &str) -> Result<i32> {
        self.inner.get_int(name)
    }

    fn get_short(&self, name: &str) -> Result<i16> {
        self.inner.get_short(name)
    }

    fn get_bool(&self, name: &str) -> Result<bool> {
        self.inner.get_bool(name)
    }
}

impl MetadataCursor for ScriptedCursor<'_> {
    fn advance(&mut self) -> Result<bool> {
        self.step()
    }

    fn close(&mut self) -> Result<()> {
        self.release()
    }
}

impl AsyncMetadataCursor for ScriptedCursor<'_> {
    async fn advance(&mut self) -> Result<bool> {
        tokio::task::yield_now().await;
        self.step()
    }

    async fn close(&mut self) -> Result<()> {
        self.release()
    }
}

impl MetadataProvider for ScriptedProvider {
    type Cursor<'a> = ScriptedCursor<'a>;

    fn type_info(&mut self) -> Result<Self::Cursor<'_>> {
        self.open()
    }
}

impl AsyncMetadataProvider for ScriptedProvider {
    type Cursor<'a> = ScriptedCursor<'a>;

    async fn type_info(&mut self) -> Result<Self::Cursor<'_>> {
        self.open()
    }
}
