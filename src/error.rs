//! Error types for metadata cursors and providers.
//!
//! Extraction itself never returns these: they are produced by cursor and
//! provider implementations and turned into warnings by the extractor.

use std::io;
use thiserror::Error;

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for metadata cursor and provider operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while talking to the database.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reported by the underlying driver.
    #[error("Driver error: {message}")]
    Driver { message: String },

    /// Connection closed.
    #[error("Connection closed")]
    ConnectionClosed,

    /// Cursor was used after it was closed.
    #[error("Cursor is closed")]
    CursorClosed,

    /// Field access before the cursor was positioned on a row.
    #[error("Cursor is not positioned on a row")]
    NoCurrentRow,

    /// Type conversion error.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },

    /// Column not found.
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Row shape does not match its column info.
    #[error("Row has {values} values but {columns} columns")]
    ColumnCountMismatch { values: usize, columns: usize },
}

impl Error {
    /// Create a driver error.
    pub fn driver(message: impl Into<String>) -> Self {
        Self::Driver {
            message: message.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }
}
