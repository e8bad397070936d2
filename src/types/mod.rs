//! Metadata row types and the type-info record.

mod column;
mod nullability;
mod row;
mod searchability;
mod type_info;
mod value;

pub use column::{Column, ColumnInfo};
pub use nullability::TypeNullability;
pub use row::Row;
pub use searchability::TypeSearchability;
pub use type_info::TypeInfo;
pub use value::SqlValue;
