//! Tests for catalog load failures.

use crate::common::fixture;
use bidragsmatch::{load_catalog, match_project_from_path, MatchError, MatchOptions};
use std::io::Write;

#[test]
fn test_missing_file_is_data_load_error() {
    let err = load_catalog(fixture("does-not-exist.json")).unwrap_err();
    assert!(err.is_data_load(), "expected data-load error, got {:?}", err);
    assert!(
        err.to_string().contains("does-not-exist.json"),
        "error should name the file: {}",
        err
    );
}

#[test]
fn test_invalid_json_is_data_load_error() {
    let err = load_catalog(fixture("invalid.json")).unwrap_err();
    assert!(matches!(err, MatchError::DataLoad(_)), "got {:?}", err);
}

#[test]
fn test_non_array_is_data_load_error() {
    let err = load_catalog(fixture("not-an-array.json")).unwrap_err();
    assert!(err.is_data_load(), "got {:?}", err);
}

#[test]
fn test_missing_name_is_schema_error() {
    match load_catalog(fixture("missing-name.json")) {
        Err(MatchError::Schema { index, field }) => {
            assert_eq!(index, 1);
            assert_eq!(field, "name");
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_schema_error_before_scoring() {
    let err = match_project_from_path(
        "musik",
        "X",
        fixture("missing-name.json"),
        &MatchOptions::default(),
    )
    .unwrap_err();
    assert!(err.is_schema());
}

#[test]
fn test_empty_file_is_data_load_error() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = load_catalog(file.path()).unwrap_err();
    assert!(err.is_data_load());
}

#[test]
fn test_null_name_is_schema_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name": null, "keywords": ["x"]}}]"#).unwrap();
    let err = load_catalog(file.path()).unwrap_err();
    assert!(err.is_schema());
}

#[test]
fn test_both_name_spellings_is_data_load_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name": "A", "namn": "A"}}]"#).unwrap();
    let err = load_catalog(file.path()).unwrap_err();
    assert!(matches!(err, MatchError::DataLoad(_)), "got {:?}", err);
    assert!(err.to_string().contains("duplicate field"), "{}", err);
}
