//! Integration tests for blocking type-info extraction.

mod common;

use common::{simple_row, type_row, varchar_row, ScriptedProvider};
use sql_typeinfo_rs::{
    extract_type_info, extract_type_info_with, ExtractionWarning, SqlValue, TypeNullability,
    TypeSearchability,
};

#[test]
fn test_extract_all_rows_in_order() {
    let mut provider = ScriptedProvider::new(vec![
        simple_row("INTEGER", 4),
        varchar_row(3),
        simple_row("DATE", 91),
    ]);
    let mut warnings: Vec<ExtractionWarning> = Vec::new();

    let catalog = extract_type_info_with(&mut provider, &mut warnings);

    assert!(warnings.is_empty());
    let names: Vec<&str> = catalog.iter().map(|t| t.type_name()).collect();
    assert_eq!(names, vec!["INTEGER", "VARCHAR", "DATE"]);
    assert_eq!(provider.close_calls, 1);

    let varchar = catalog.find_by_name("varchar").unwrap();
    assert_eq!(varchar.create_params(), ["length"]);
    assert_eq!(varchar.precision(), 65535);
    assert_eq!(varchar.literal_prefix(), Some("'"));
    assert!(varchar.is_case_sensitive());
    assert_eq!(varchar.nullability(), TypeNullability::Nullable);
}

#[test]
fn test_duplicates_keep_first_position() {
    let mut provider = ScriptedProvider::new(vec![
        varchar_row(3),
        simple_row("INTEGER", 4),
        varchar_row(3),
        simple_row("INTEGER", 4),
    ]);

    let catalog = extract_type_info(&mut provider);

    let names: Vec<&str> = catalog.iter().map(|t| t.type_name()).collect();
    assert_eq!(names, vec!["VARCHAR", "INTEGER"]);
}

#[test]
fn test_rows_differing_in_searchability_are_distinct() {
    let mut provider = ScriptedProvider::new(vec![varchar_row(3), varchar_row(2)]);

    let catalog = extract_type_info(&mut provider);

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(0).unwrap().searchability(), TypeSearchability::All);
    assert_eq!(
        catalog.get(1).unwrap().searchability(),
        TypeSearchability::Basic
    );
    assert_eq!(catalog.by_type_code(12).len(), 2);
}

#[test]
fn test_unknown_codes_fall_back() {
    let mut provider = ScriptedProvider::new(vec![type_row(&[
        ("TYPE_NAME", SqlValue::from("GEOMETRY")),
        ("DATA_TYPE", SqlValue::from(1111)),
        ("SEARCHABLE", SqlValue::from(9)),
        ("NULLABLE", SqlValue::from(-1)),
    ])]);

    let catalog = extract_type_info(&mut provider);

    let geometry = catalog.get(0).unwrap();
    assert_eq!(geometry.searchability(), TypeSearchability::Basic);
    assert_eq!(geometry.nullability(), TypeNullability::Unknown);
    assert_eq!(geometry.sql_type_name(), Some("OTHER"));
}

#[test]
fn test_empty_create_params() {
    let mut provider = ScriptedProvider::new(vec![
        type_row(&[
            ("TYPE_NAME", SqlValue::from("BOOLEAN")),
            ("DATA_TYPE", SqlValue::from(16)),
            ("CREATE_PARAMS", SqlValue::from("")),
        ]),
        type_row(&[
            ("TYPE_NAME", SqlValue::from("NUMERIC")),
            ("DATA_TYPE", SqlValue::from(2)),
            ("CREATE_PARAMS", SqlValue::from("M,D")),
        ]),
        type_row(&[
            ("TYPE_NAME", SqlValue::from("NUMERIC")),
            ("DATA_TYPE", SqlValue::from(2)),
            ("CREATE_PARAMS", SqlValue::from("M,D,")),
        ]),
        type_row(&[
            ("TYPE_NAME", SqlValue::from("BIT")),
            ("DATA_TYPE", SqlValue::from(-7)),
            ("CREATE_PARAMS", SqlValue::from(",")),
        ]),
    ]);

    let catalog = extract_type_info(&mut provider);

    // "M,D," reads the same as "M,D", so the second NUMERIC row is a duplicate.
    assert_eq!(catalog.len(), 3);
    assert!(catalog.get(0).unwrap().create_params().is_empty());
    assert_eq!(catalog.get(1).unwrap().create_params(), ["M", "D"]);
    assert_eq!(catalog.get(2).unwrap().type_name(), "BIT");
    assert!(catalog.get(2).unwrap().create_params().is_empty());
}

#[test]
fn test_open_failure_returns_empty_with_one_warning() {
    let mut provider = ScriptedProvider::new(vec![varchar_row(3)]);
    provider.fail_open = true;
    let mut warnings: Vec<ExtractionWarning> = Vec::new();

    let catalog = extract_type_info_with(&mut provider, &mut warnings);

    assert!(catalog.is_empty());
    assert_eq!(
        warnings,
        vec![ExtractionWarning::RetrieveFailed {
            message: "Connection closed".to_string()
        }]
    );
    // Nothing was opened, so nothing is closed.
    assert_eq!(provider.close_calls, 0);
}

#[test]
fn test_read_failure_keeps_rows_read_so_far() {
    let mut provider = ScriptedProvider::new(vec![
        simple_row("INTEGER", 4),
        simple_row("INTEGER", 4),
        simple_row("BIGINT", -5),
        simple_row("NEVER_READ", 0),
    ]);
    provider.fail_after = Some(3);
    let mut warnings: Vec<ExtractionWarning> = Vec::new();

    let catalog = extract_type_info_with(&mut provider, &mut warnings);

    let names: Vec<&str> = catalog.iter().map(|t| t.type_name()).collect();
    assert_eq!(names, vec!["INTEGER", "BIGINT"]);
    assert_eq!(
        warnings,
        vec![ExtractionWarning::AccessFailed {
            message: "Driver error: network reset".to_string()
        }]
    );
    assert_eq!(provider.close_calls, 1);
}

#[test]
fn test_bad_field_is_a_read_failure() {
    let mut provider = ScriptedProvider::new(vec![
        simple_row("INTEGER", 4),
        type_row(&[
            ("TYPE_NAME", SqlValue::from("BROKEN")),
            ("DATA_TYPE", SqlValue::from("twelve")),
        ]),
        simple_row("DATE", 91),
    ]);
    let mut warnings: Vec<ExtractionWarning> = Vec::new();

    let catalog = extract_type_info_with(&mut provider, &mut warnings);

    assert_eq!(catalog.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0], ExtractionWarning::AccessFailed { .. }));
    assert_eq!(provider.close_calls, 1);
}

#[test]
fn test_close_failure_keeps_result() {
    let mut provider = ScriptedProvider::new(vec![varchar_row(3), simple_row("DATE", 91)]);
    provider.fail_close = true;
    let mut warnings: Vec<ExtractionWarning> = Vec::new();

    let catalog = extract_type_info_with(&mut provider, &mut warnings);

    assert_eq!(catalog.len(), 2);
    assert_eq!(warnings, vec![ExtractionWarning::ReleaseFailed]);
}

#[test]
fn test_read_and_close_failures_both_reported() {
    let mut provider = ScriptedProvider::new(vec![varchar_row(3), simple_row("DATE", 91)]);
    provider.fail_after = Some(1);
    provider.fail_close = true;
    let mut warnings: Vec<ExtractionWarning> = Vec::new();

    let catalog = extract_type_info_with(&mut provider, &mut warnings);

    assert_eq!(catalog.len(), 1);
    assert_eq!(warnings.len(), 2);
    assert!(matches!(warnings[0], ExtractionWarning::AccessFailed { .. }));
    assert_eq!(warnings[1], ExtractionWarning::ReleaseFailed);
    assert_eq!(provider.close_calls, 1);
}

#[test]
fn test_each_call_builds_new_catalog() {
    let mut provider = ScriptedProvider::new(vec![simple_row("INTEGER", 4)]);

    let first = extract_type_info(&mut provider);
    provider.rows.push(simple_row("DATE", 91));
    let second = extract_type_info(&mut provider);

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(provider.close_calls, 2);
}
