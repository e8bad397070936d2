//! Type-info extraction.
//!
//! Reads the supported-types result set from a metadata provider and collects
//! one `TypeInfo` per distinct row, in first-seen order. Extraction is lenient:
//! provider failures become warnings and the caller always gets a catalog,
//! possibly partial or empty.

use tracing::debug;

use crate::catalog::TypeCatalog;
use crate::constants::{
    COL_CASE_SENSITIVE, COL_CREATE_PARAMS, COL_DATA_TYPE, COL_FIXED_PREC_SCALE,
    COL_LITERAL_PREFIX, COL_LITERAL_SUFFIX, COL_MAXIMUM_SCALE, COL_MINIMUM_SCALE, COL_NULLABLE,
    COL_PRECISION, COL_SEARCHABLE, COL_TYPE_NAME, COL_UNSIGNED_ATTRIBUTE,
};
use crate::cursor::{AsyncMetadataCursor, FieldAccess, MetadataCursor};
use crate::error::Result;
use crate::provider::{AsyncMetadataProvider, MetadataProvider};
use crate::types::{TypeInfo, TypeNullability, TypeSearchability};
use crate::warning::{ExtractionWarning, TracingSink, WarningSink};

/// Extract the type catalog, logging warnings through `tracing`.
///
/// # Example
///
/// ```
/// use sql_typeinfo_rs::{extract_type_info, InMemoryMetadata, TypeInfo};
///
/// let mut metadata = InMemoryMetadata::new()
///     .with_type(&TypeInfo::new("VARCHAR", 12))
///     .with_type(&TypeInfo::new("VARCHAR", 12));
///
/// let catalog = extract_type_info(&mut metadata);
/// assert_eq!(catalog.len(), 1);
/// ```
pub fn extract_type_info<P>(provider: &mut P) -> TypeCatalog
where
    P: MetadataProvider,
{
    extract_type_info_with(provider, &mut TracingSink)
}

/// Extract the type catalog, reporting warnings to `sink`.
///
/// Never fails. If the result set cannot be opened the catalog is empty; if a
/// row cannot be read, iteration stops and the rows read so far are kept. The
/// result set is closed on every path once opened; a failed close is reported
/// and does not affect the catalog.
pub fn extract_type_info_with<P, S>(provider: &mut P, sink: &mut S) -> TypeCatalog
where
    P: MetadataProvider,
    S: WarningSink + ?Sized,
{
    let mut catalog = TypeCatalog::new();

    let mut cursor = match provider.type_info() {
        Ok(cursor) => cursor,
        Err(e) => {
            sink.warn(ExtractionWarning::RetrieveFailed {
                message: e.to_string(),
            });
            return catalog;
        }
    };

    if let Err(e) = read_all(&mut cursor, &mut catalog) {
        sink.warn(ExtractionWarning::AccessFailed {
            message: e.to_string(),
        });
    }

    if cursor.close().is_err() {
        sink.warn(ExtractionWarning::ReleaseFailed);
    }

    debug!("Extracted {} type info entries", catalog.len());
    catalog
}

/// Async variant of [`extract_type_info_with`], with the same guarantees.
pub async fn extract_type_info_async<P, S>(provider: &mut P, sink: &mut S) -> TypeCatalog
where
    P: AsyncMetadataProvider,
    S: WarningSink + ?Sized,
{
    let mut catalog = TypeCatalog::new();

    let mut cursor = match provider.type_info().await {
        Ok(cursor) => cursor,
        Err(e) => {
            sink.warn(ExtractionWarning::RetrieveFailed {
                message: e.to_string(),
            });
            return catalog;
        }
    };

    if let Err(e) = read_all_async(&mut cursor, &mut catalog).await {
        sink.warn(ExtractionWarning::AccessFailed {
            message: e.to_string(),
        });
    }

    if cursor.close().await.is_err() {
        sink.warn(ExtractionWarning::ReleaseFailed);
    }

    debug!("Extracted {} type info entries", catalog.len());
    catalog
}

fn read_all<C: MetadataCursor>(cursor: &mut C, catalog: &mut TypeCatalog) -> Result<()> {
    while cursor.advance()? {
        catalog.insert(read_type_info(&*cursor)?);
    }
    Ok(())
}

async fn read_all_async<C: AsyncMetadataCursor>(
    cursor: &mut C,
    catalog: &mut TypeCatalog,
) -> Result<()> {
    while cursor.advance().await? {
        catalog.insert(read_type_info(&*cursor)?);
    }
    Ok(())
}

/// Map the current type-info row to a `TypeInfo`.
///
/// A NULL `TYPE_NAME` reads as an empty name.
pub fn read_type_info<R: FieldAccess + ?Sized>(row: &R) -> Result<TypeInfo> {
    let type_name = row.get_string(COL_TYPE_NAME)?.unwrap_or_default();
    let data_type = row.get_int(COL_DATA_TYPE)?;
    let create_params = interpret_create_params(row.get_string(COL_CREATE_PARAMS)?.as_deref());
    let unsigned = row.get_bool(COL_UNSIGNED_ATTRIBUTE)?;
    let precision = row.get_int(COL_PRECISION)?;
    let minimum_scale = row.get_short(COL_MINIMUM_SCALE)?;
    let maximum_scale = row.get_short(COL_MAXIMUM_SCALE)?;
    let fixed_precision_scale = row.get_bool(COL_FIXED_PREC_SCALE)?;
    let literal_prefix = row.get_string(COL_LITERAL_PREFIX)?;
    let literal_suffix = row.get_string(COL_LITERAL_SUFFIX)?;
    let case_sensitive = row.get_bool(COL_CASE_SENSITIVE)?;
    let searchability = TypeSearchability::interpret(row.get_short(COL_SEARCHABLE)?);
    let nullability = TypeNullability::interpret(row.get_short(COL_NULLABLE)?);

    Ok(TypeInfo::new(type_name, data_type)
        .with_create_params(create_params)
        .with_unsigned(unsigned)
        .with_precision(precision)
        .with_scale_range(minimum_scale, maximum_scale)
        .with_fixed_precision_scale(fixed_precision_scale)
        .with_literal_affixes(literal_prefix, literal_suffix)
        .with_case_sensitive(case_sensitive)
        .with_searchability(searchability)
        .with_nullability(nullability))
}

/// Split a `CREATE_PARAMS` value on commas.
///
/// Absent or empty input yields no parameters. Tokens are not trimmed;
/// interior empty tokens are kept and trailing empty tokens are dropped.
pub fn interpret_create_params(value: Option<&str>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    let mut tokens: Vec<String> = value.split(',').map(str::to_string).collect();
    while tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    tokens
}
