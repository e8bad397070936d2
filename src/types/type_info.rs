//! Description of one SQL type supported by a database.

use super::nullability::TypeNullability;
use super::searchability::TypeSearchability;
use crate::constants::sql_type_name;

/// One SQL type supported by the target database.
///
/// Immutable once built. Two values are equal when every attribute matches,
/// which is what deduplication in a [`TypeCatalog`](crate::TypeCatalog) relies on.
///
/// # Example
///
/// ```
/// use sql_typeinfo_rs::{TypeInfo, TypeNullability, TypeSearchability};
///
/// let decimal = TypeInfo::new("DECIMAL", 3)
///     .with_create_params(["precision", "scale"])
///     .with_precision(38)
///     .with_scale_range(0, 38)
///     .with_searchability(TypeSearchability::Basic)
///     .with_nullability(TypeNullability::Nullable);
///
/// assert_eq!(decimal.to_string(), "DECIMAL(precision,scale)");
/// assert_eq!(decimal.sql_type_name(), Some("DECIMAL"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    type_name: String,
    data_type: i32,
    create_params: Vec<String>,
    unsigned: bool,
    precision: i32,
    minimum_scale: i16,
    maximum_scale: i16,
    fixed_precision_scale: bool,
    literal_prefix: Option<String>,
    literal_suffix: Option<String>,
    case_sensitive: bool,
    searchability: TypeSearchability,
    nullability: TypeNullability,
}

impl TypeInfo {
    /// Create a type with the given name and SQL type code.
    ///
    /// Remaining attributes start empty/false/zero, searchability `Basic`
    /// and nullability `Unknown`.
    pub fn new(type_name: impl Into<String>, data_type: i32) -> Self {
        Self {
            type_name: type_name.into(),
            data_type,
            create_params: Vec::new(),
            unsigned: false,
            precision: 0,
            minimum_scale: 0,
            maximum_scale: 0,
            fixed_precision_scale: false,
            literal_prefix: None,
            literal_suffix: None,
            case_sensitive: false,
            searchability: TypeSearchability::Basic,
            nullability: TypeNullability::Unknown,
        }
    }

    /// Set the creation parameter names.
    pub fn with_create_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.create_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Set the unsigned attribute.
    pub fn with_unsigned(mut self, unsigned: bool) -> Self {
        self.unsigned = unsigned;
        self
    }

    /// Set the maximum precision.
    pub fn with_precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    /// Set minimum and maximum scale.
    pub fn with_scale_range(mut self, minimum: i16, maximum: i16) -> Self {
        self.minimum_scale = minimum;
        self.maximum_scale = maximum;
        self
    }

    /// Set the fixed precision/scale flag.
    pub fn with_fixed_precision_scale(mut self, fixed: bool) -> Self {
        self.fixed_precision_scale = fixed;
        self
    }

    /// Set literal prefix and suffix.
    pub fn with_literal_affixes(mut self, prefix: Option<String>, suffix: Option<String>) -> Self {
        self.literal_prefix = prefix;
        self.literal_suffix = suffix;
        self
    }

    /// Set the case-sensitive flag.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set searchability.
    pub fn with_searchability(mut self, searchability: TypeSearchability) -> Self {
        self.searchability = searchability;
        self
    }

    /// Set nullability.
    pub fn with_nullability(mut self, nullability: TypeNullability) -> Self {
        self.nullability = nullability;
        self
    }

    /// Type name as reported by the database (`TYPE_NAME`).
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// SQL type code (`DATA_TYPE`).
    pub fn data_type(&self) -> i32 {
        self.data_type
    }

    /// Standard name of the SQL type code, if it is a standard code.
    pub fn sql_type_name(&self) -> Option<&'static str> {
        sql_type_name(self.data_type)
    }

    /// Creation parameter names (`CREATE_PARAMS`), in order.
    pub fn create_params(&self) -> &[String] {
        &self.create_params
    }

    /// Whether the type is unsigned (`UNSIGNED_ATTRIBUTE`).
    pub fn is_unsigned(&self) -> bool {
        self.unsigned
    }

    /// Maximum precision (`PRECISION`).
    pub fn precision(&self) -> i32 {
        self.precision
    }

    /// Minimum supported scale (`MINIMUM_SCALE`).
    pub fn minimum_scale(&self) -> i16 {
        self.minimum_scale
    }

    /// Maximum supported scale (`MAXIMUM_SCALE`).
    pub fn maximum_scale(&self) -> i16 {
        self.maximum_scale
    }

    /// Whether precision and scale are fixed (`FIXED_PREC_SCALE`).
    pub fn is_fixed_precision_scale(&self) -> bool {
        self.fixed_precision_scale
    }

    /// Prefix used to quote a literal (`LITERAL_PREFIX`).
    pub fn literal_prefix(&self) -> Option<&str> {
        self.literal_prefix.as_deref()
    }

    /// Suffix used to quote a literal (`LITERAL_SUFFIX`).
    pub fn literal_suffix(&self) -> Option<&str> {
        self.literal_suffix.as_deref()
    }

    /// Whether comparisons are case sensitive (`CASE_SENSITIVE`).
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// How the type may be used in a WHERE clause (`SEARCHABLE`).
    pub fn searchability(&self) -> TypeSearchability {
        self.searchability
    }

    /// Whether the type may hold NULL (`NULLABLE`).
    pub fn nullability(&self) -> TypeNullability {
        self.nullability
    }
}

impl std::fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.create_params.is_empty() {
            write!(f, "{}", self.type_name)
        } else {
            write!(f, "{}({})", self.type_name, self.create_params.join(","))
        }
    }
}
