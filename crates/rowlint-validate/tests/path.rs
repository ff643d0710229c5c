//! Tests for the file-backed entry points.

use rowlint_model::{CheckCode, SourceMeta};
use rowlint_validate::{validate_bytes, validate_path, validate_path_with_meta};

#[test]
fn missing_file_yields_not_found_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = validate_path(&dir.path().join("absent.csv")).expect("not found is not fatal");
    assert!(!report.valid);
    assert_eq!(report.row_count, 0);
    assert!(report.headers.is_empty());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, CheckCode::NotFound);
    assert_eq!(report.errors[0].row, None);
    assert_eq!(report.errors[0].column, None);
}

#[test]
fn file_validation_matches_in_memory_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.csv");
    let contents = b"a,b,c\n1,2,3\n4,5\n";
    std::fs::write(&path, contents).expect("write fixture");

    let from_path = validate_path(&path).expect("validate file");
    let meta = SourceMeta::new().with_extension("csv");
    let from_bytes = validate_bytes(contents, &meta).expect("validate bytes");
    assert_eq!(from_path, from_bytes);
}

#[test]
fn file_extension_becomes_the_declared_format() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.tsv");
    std::fs::write(&path, b"a,b\n1,2\n").expect("write fixture");

    let report = validate_path(&path).expect("validate file");
    assert_eq!(report.format, "tsv");
}

#[test]
fn declared_content_type_checked_for_files_too() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.csv");
    std::fs::write(&path, b"a,b\n1,2\n").expect("write fixture");

    let meta = SourceMeta::new().with_content_type("application/json");
    let report = validate_path_with_meta(&path, &meta).expect("validate file");
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].code, CheckCode::WrongContentType);
}
