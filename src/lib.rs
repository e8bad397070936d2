//! SQL type catalog extraction for Rust
//!
//! Reads the supported-types result set a database driver exposes through its
//! metadata interface and turns each row into an immutable [`TypeInfo`].
//! Duplicates are dropped, first-seen order is kept, and driver failures are
//! reported as warnings instead of errors.
//!
//! # Example
//!
//! ```
//! use sql_typeinfo_rs::{
//!     extract_type_info_with, ExtractionWarning, InMemoryMetadata, TypeInfo,
//!     TypeSearchability,
//! };
//!
//! let mut metadata = InMemoryMetadata::new()
//!     .with_type(&TypeInfo::new("VARCHAR", 12).with_searchability(TypeSearchability::All))
//!     .with_type(&TypeInfo::new("VARCHAR", 12));
//!
//! let mut warnings: Vec<ExtractionWarning> = Vec::new();
//! let catalog = extract_type_info_with(&mut metadata, &mut warnings);
//!
//! // The two rows differ in searchability, so both are kept.
//! assert_eq!(catalog.len(), 2);
//! assert!(warnings.is_empty());
//! ```

pub mod catalog;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod extract;
pub mod logging;
pub mod provider;
pub mod types;
pub mod warning;

// Re-export main types
pub use catalog::TypeCatalog;
pub use cursor::{AsyncMetadataCursor, CursorStreamExt, FieldAccess, MetadataCursor, RowCursor};
pub use error::{Error, Result};
pub use extract::{
    extract_type_info, extract_type_info_async, extract_type_info_with, interpret_create_params,
    read_type_info,
};
pub use logging::{init_logging, LogConfig};
pub use provider::{AsyncMetadataProvider, InMemoryMetadata, MetadataProvider};
pub use types::{Column, ColumnInfo, Row, SqlValue, TypeInfo, TypeNullability, TypeSearchability};
pub use warning::{ExtractionWarning, TracingSink, WarningSink};
