//! Whether a type may hold NULL.

use crate::constants::{TYPE_NO_NULLS, TYPE_NULLABLE, TYPE_NULLABLE_UNKNOWN};

/// Nullability of a SQL type, from the `NULLABLE` type-info column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeNullability {
    /// NULL is not allowed.
    NoNulls,
    /// NULL is allowed.
    Nullable,
    /// The driver does not know.
    Unknown,
}

impl TypeNullability {
    /// Interpret a driver-reported code; anything other than 0 or 1 is `Unknown`.
    pub fn interpret(code: i16) -> Self {
        match code {
            TYPE_NO_NULLS => TypeNullability::NoNulls,
            TYPE_NULLABLE => TypeNullability::Nullable,
            _ => TypeNullability::Unknown,
        }
    }

    /// Canonical code for this variant.
    pub fn code(&self) -> i16 {
        match self {
            TypeNullability::NoNulls => TYPE_NO_NULLS,
            TypeNullability::Nullable => TYPE_NULLABLE,
            TypeNullability::Unknown => TYPE_NULLABLE_UNKNOWN,
        }
    }
}

impl std::fmt::Display for TypeNullability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeNullability::NoNulls => write!(f, "NO_NULLS"),
            TypeNullability::Nullable => write!(f, "NULLABLE"),
            TypeNullability::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
