//! Cursor interfaces over metadata result sets.
//!
//! Drivers expose their type-info result through these traits. `FieldAccess`
//! reads typed fields from the current row by column name, `MetadataCursor`
//! advances and releases a blocking result set, and `AsyncMetadataCursor` is
//! the same contract for drivers whose fetches are asynchronous.
//!
//! `RowCursor` is an in-memory implementation of both over pre-fetched rows.

use crate::error::{Error, Result};
use crate::extract::read_type_info;
use crate::types::{Row, TypeInfo};
use futures::Stream;
use std::future::Future;
use tracing::debug;

/// Typed access to the fields of the current row.
///
/// SQL NULL reads as `None`, `0` or `false`, matching the usual driver
/// accessor convention.
pub trait FieldAccess {
    /// Read a character column.
    fn get_string(&self, name: &str) -> Result<Option<String>>;

    /// Read an INTEGER column.
    fn get_int(&self, name: &str) -> Result<i32>;

    /// Read a SMALLINT column.
    fn get_short(&self, name: &str) -> Result<i16>;

    /// Read a BOOLEAN column.
    fn get_bool(&self, name: &str) -> Result<bool>;
}

/// Blocking cursor over a metadata result set.
pub trait MetadataCursor: FieldAccess {
    /// Move to the next row. Returns `Ok(false)` when exhausted.
    fn advance(&mut self) -> Result<bool>;

    /// Release the result set.
    fn close(&mut self) -> Result<()>;
}

/// Asynchronous cursor over a metadata result set.
///
/// Field access stays synchronous: it reads the row the last `advance()`
/// already fetched.
pub trait AsyncMetadataCursor: FieldAccess {
    /// Move to the next row, fetching from the server if needed.
    ///
    /// Returns `Ok(false)` when exhausted.
    fn advance(&mut self) -> impl Future<Output = Result<bool>> + Send;

    /// Release the result set and its server resources.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// Row-by-row cursor over buffered rows.
///
/// # Lifecycle
///
/// 1. Created from rows (usually by `InMemoryMetadata::type_info()`)
/// 2. Positioned with `advance()`; fields read from the current row
/// 3. Released with `close()`; further use returns `Error::CursorClosed`
#[derive(Debug, Clone)]
pub struct RowCursor {
    /// Buffered rows.
    rows: Vec<Row>,
    /// Index of the current row, `None` before the first row or after the last.
    current: Option<usize>,
    /// Index of the next row to visit.
    next_pos: usize,
    /// Whether `close()` has been called.
    closed: bool,
}

impl RowCursor {
    /// Create a cursor positioned before the first row.
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows,
            current: None,
            next_pos: 0,
            closed: false,
        }
    }

    /// Check if the cursor has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of rows not yet visited.
    pub fn remaining(&self) -> usize {
        self.rows.len().saturating_sub(self.next_pos)
    }

    /// The row the cursor is positioned on.
    pub fn current_row(&self) -> Result<&Row> {
        if self.closed {
            return Err(Error::CursorClosed);
        }
        self.current
            .and_then(|idx| self.rows.get(idx))
            .ok_or(Error::NoCurrentRow)
    }

    fn advance_buffered(&mut self) -> Result<bool> {
        if self.closed {
            return Err(Error::CursorClosed);
        }
        if self.next_pos < self.rows.len() {
            self.current = Some(self.next_pos);
            self.next_pos += 1;
            Ok(true)
        } else {
            self.current = None;
            Ok(false)
        }
    }

    fn close_buffered(&mut self) -> Result<()> {
        self.closed = true;
        self.current = None;
        self.rows.clear();
        Ok(())
    }
}

impl FieldAccess for RowCursor {
    fn get_string(&self, name: &str) -> Result<Option<String>> {
        self.current_row()?.get_string(name)
    }

    fn get_int(&self, name: &str) -> Result<i32> {
        self.current_row()?.get_int(name)
    }

    fn get_short(&self, name: &str) -> Result<i16> {
        self.current_row()?.get_short(name)
    }

    fn get_bool(&self, name: &str) -> Result<bool> {
        self.current_row()?.get_bool(name)
    }
}

impl MetadataCursor for RowCursor {
    fn advance(&mut self) -> Result<bool> {
        self.advance_buffered()
    }

    fn close(&mut self) -> Result<()> {
        self.close_buffered()
    }
}

impl AsyncMetadataCursor for RowCursor {
    async fn advance(&mut self) -> Result<bool> {
        self.advance_buffered()
    }

    async fn close(&mut self) -> Result<()> {
        self.close_buffered()
    }
}

/// Extension trait for converting an async cursor into a `TypeInfo` stream.
///
/// Unlike extraction, the stream surfaces read errors to the caller and does
/// not deduplicate.
///
/// # Example
///
/// ```
/// use futures::stream::TryStreamExt;
/// use sql_typeinfo_rs::{CursorStreamExt, RowCursor, TypeInfo};
///
/// # tokio_test::block_on(async {
/// let cursor = RowCursor::new(Vec::new());
/// let types: Vec<TypeInfo> = cursor.into_type_info_stream().try_collect().await.unwrap();
/// assert!(types.is_empty());
/// # });
/// ```
pub trait CursorStreamExt: AsyncMetadataCursor + Sized {
    /// Convert this cursor into a Stream yielding `Result<TypeInfo>`.
    ///
    /// The stream takes ownership of the cursor and closes it when rows run
    /// out; a failed close is yielded as the last item. After the first error
    /// the cursor is closed best-effort and the stream ends.
    fn into_type_info_stream(self) -> impl Stream<Item = Result<TypeInfo>>;
}

impl<C: AsyncMetadataCursor> CursorStreamExt for C {
    fn into_type_info_stream(self) -> impl Stream<Item = Result<TypeInfo>> {
        use futures::stream;

        stream::unfold(Some(self), |opt_cursor| async move {
            let mut cursor = opt_cursor?;
            let step = match cursor.advance().await {
                Ok(true) => read_type_info(&cursor),
                Ok(false) => {
                    return match cursor.close().await {
                        Ok(()) => None,
                        Err(e) => Some((Err(e), None)),
                    };
                }
                Err(e) => Err(e),
            };

            match step {
                Ok(info) => Some((Ok(info), Some(cursor))),
                Err(e) => {
                    if let Err(close_err) = cursor.close().await {
                        debug!("Ignoring close failure after read error: {}", close_err);
                    }
                    Some((Err(e), None))
                }
            }
        })
    }
}
