//! How a type may be used in a WHERE clause.

use crate::constants::{TYPE_PRED_BASIC, TYPE_PRED_CHAR, TYPE_PRED_NONE, TYPE_SEARCHABLE};

/// Searchability of a SQL type, from the `SEARCHABLE` type-info column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSearchability {
    /// Cannot be used in a WHERE clause.
    None,
    /// Searchable except with case-sensitive comparisons.
    CaseInsensitive,
    /// Searchable only in non-LIKE predicates.
    Basic,
    /// Fully searchable.
    All,
}

impl TypeSearchability {
    /// Interpret a driver-reported code.
    ///
    /// Unrecognized codes fall back to `Basic`; some drivers report
    /// out-of-range values.
    pub fn interpret(code: i16) -> Self {
        match code {
            TYPE_PRED_NONE => TypeSearchability::None,
            TYPE_PRED_CHAR => TypeSearchability::CaseInsensitive,
            TYPE_SEARCHABLE => TypeSearchability::All,
            _ => TypeSearchability::Basic,
        }
    }

    /// Canonical code for this variant.
    pub fn code(&self) -> i16 {
        match self {
            TypeSearchability::None => TYPE_PRED_NONE,
            TypeSearchability::CaseInsensitive => TYPE_PRED_CHAR,
            TypeSearchability::Basic => TYPE_PRED_BASIC,
            TypeSearchability::All => TYPE_SEARCHABLE,
        }
    }
}

impl std::fmt::Display for TypeSearchability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeSearchability::None => write!(f, "NONE"),
            TypeSearchability::CaseInsensitive => write!(f, "CASE_INSENSITIVE"),
            TypeSearchability::Basic => write!(f, "BASIC"),
            TypeSearchability::All => write!(f, "ALL"),
        }
    }
}
