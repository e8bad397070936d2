//! Ordered, deduplicated collection of extracted types.

use indexmap::IndexSet;

use crate::types::TypeInfo;

/// The set of SQL types a database reported, in first-seen order.
///
/// Inserting a value equal to one already present is a no-op and does not
/// move the existing entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCatalog {
    types: IndexSet<TypeInfo>,
}

impl TypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a type. Returns `false` if an equal type was already present.
    pub fn insert(&mut self, info: TypeInfo) -> bool {
        self.types.insert(info)
    }

    /// Get the number of distinct types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeInfo> {
        self.types.iter()
    }

    /// Get type by position.
    pub fn get(&self, index: usize) -> Option<&TypeInfo> {
        self.types.get_index(index)
    }

    /// Check if an equal type is present.
    pub fn contains(&self, info: &TypeInfo) -> bool {
        self.types.contains(info)
    }

    /// First type with the given name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&TypeInfo> {
        self.types
            .iter()
            .find(|t| t.type_name().eq_ignore_ascii_case(name))
    }

    /// All types reported for a SQL type code, in order.
    pub fn by_type_code(&self, code: i32) -> Vec<&TypeInfo> {
        self.types.iter().filter(|t| t.data_type() == code).collect()
    }

    /// Borrow the underlying ordered set.
    pub fn as_set(&self) -> &IndexSet<TypeInfo> {
        &self.types
    }

    /// Take the underlying ordered set.
    pub fn into_set(self) -> IndexSet<TypeInfo> {
        self.types
    }
}

impl FromIterator<TypeInfo> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = TypeInfo>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

impl Extend<TypeInfo> for TypeCatalog {
    fn extend<I: IntoIterator<Item = TypeInfo>>(&mut self, iter: I) {
        self.types.extend(iter);
    }
}

impl IntoIterator for TypeCatalog {
    type Item = TypeInfo;
    type IntoIter = indexmap::set::IntoIter<TypeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypeCatalog {
    type Item = &'a TypeInfo;
    type IntoIter = indexmap::set::Iter<'a, TypeInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.types.iter()
    }
}
