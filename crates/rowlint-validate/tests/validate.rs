//! End-to-end validation tests over in-memory sources.

use rowlint_model::{CheckCode, SourceMeta, ValidationReport};
use rowlint_validate::validate_bytes;

fn validate(input: &[u8]) -> ValidationReport {
    validate_bytes(input, &SourceMeta::new()).expect("in-memory read")
}

fn codes(report: &ValidationReport) -> Vec<CheckCode> {
    report.errors.iter().map(|e| e.code).collect()
}

#[test]
fn well_formed_csv_is_valid() {
    let report = validate(b"a,b,c\n1,2,3\n4,5,6\n");
    assert!(report.valid);
    assert_eq!(report.error_count, 0);
    assert_eq!(report.row_count, 2);
    assert_eq!(report.headers, vec!["a", "b", "c"]);
    assert_eq!(report.encoding, "utf-8");
    assert_eq!(report.format, "csv");
}

#[test]
fn short_row_yields_one_ragged_record_at_row_two() {
    let report = validate(b"a,b,c\n1,2,3\n4,5\n");
    assert_eq!(report.row_count, 2);
    assert_eq!(report.error_count, 1);
    assert_eq!(report.errors[0].code, CheckCode::RaggedRows);
    assert_eq!(report.errors[0].row, Some(2));
    assert_eq!(report.errors[0].column, None);
    assert_eq!(
        report.errors[0].detail.as_deref(),
        Some("expected 3 fields, found 2")
    );
    assert!(!report.valid);
}

#[test]
fn blank_row_is_never_also_ragged() {
    let report = validate(b"a,b\n,\n1,2\n");
    assert_eq!(report.row_count, 2);
    assert_eq!(codes(&report), vec![CheckCode::BlankRows]);
    assert_eq!(report.errors[0].row, Some(1));
}

#[test]
fn blank_line_is_a_blank_row() {
    let report = validate(b"a,b\n\n1,2\n");
    assert_eq!(codes(&report), vec![CheckCode::BlankRows]);
    assert_eq!(report.errors[0].row, Some(1));
}

#[test]
fn unclosed_quote_references_the_last_row() {
    let report = validate(b"a,b\n\"x\n");
    assert_eq!(report.row_count, 1);
    assert!(report.error_count >= 1);
    let unclosed: Vec<_> = report
        .errors
        .iter()
        .filter(|e| e.code == CheckCode::UnclosedQuote)
        .collect();
    assert_eq!(unclosed.len(), 1);
    assert_eq!(unclosed[0].row, Some(1));
    assert_eq!(unclosed[0].column, Some(1));
}

#[test]
fn stray_quote_positioned_on_the_offending_field() {
    let report = validate(b"a,b\n1,2\"3\n");
    assert_eq!(codes(&report), vec![CheckCode::StrayQuote]);
    assert_eq!(report.errors[0].row, Some(1));
    assert_eq!(report.errors[0].column, Some(2));
}

#[test]
fn whitespace_around_quotes_is_flagged_not_stripped() {
    let report = validate(b"a,b\n \"x\",2\n");
    assert_eq!(codes(&report), vec![CheckCode::Whitespace]);
    assert_eq!(report.errors[0].row, Some(1));
    assert_eq!(report.errors[0].column, Some(1));
}

#[test]
fn invalid_encoding_still_counts_the_row() {
    let report = validate(b"a,b\n1,\xff\n2,3\n");
    assert_eq!(report.row_count, 2);
    assert_eq!(codes(&report), vec![CheckCode::InvalidEncoding]);
    assert_eq!(report.errors[0].row, Some(1));
    assert_eq!(report.errors[0].column, Some(2));
}

#[test]
fn inconsistent_line_breaks_flagged_once() {
    let report = validate(b"a,b\r\n1,2\n3,4\n");
    assert_eq!(codes(&report), vec![CheckCode::LineBreaks]);
    assert_eq!(report.errors[0].row, Some(1));
}

#[test]
fn wrong_content_type_prepended_before_row_records() {
    let meta = SourceMeta::new().with_content_type("text/html");
    let report = validate_bytes(b"a,b,c\n1,2\n", &meta).expect("in-memory read");
    assert_eq!(
        codes(&report),
        vec![CheckCode::WrongContentType, CheckCode::RaggedRows]
    );
    assert_eq!(report.errors[0].row, None);
    assert_eq!(report.errors[0].column, None);
}

#[test]
fn csv_content_type_with_parameters_is_accepted() {
    let meta = SourceMeta::new().with_content_type("text/csv; charset=utf-8");
    let report = validate_bytes(b"a,b\n1,2\n", &meta).expect("in-memory read");
    assert!(report.valid);
}

#[test]
fn header_anomalies_reported_without_row_coordinate() {
    let report = validate(b" \"a\",b\n1,2\n");
    assert_eq!(codes(&report), vec![CheckCode::Whitespace]);
    assert_eq!(report.errors[0].row, None);
    assert_eq!(report.errors[0].column, Some(1));
}

#[test]
fn records_come_out_in_scan_order() {
    // Stray quote on row 1 field 2, blank row 2, ragged row 3.
    let report = validate(b"a,b\n1,2\"3\n,\n1,2,3\n");
    assert_eq!(
        codes(&report),
        vec![
            CheckCode::StrayQuote,
            CheckCode::BlankRows,
            CheckCode::RaggedRows
        ]
    );
    assert_eq!(report.row_count, 3);
}

#[test]
fn multiline_quoted_field_is_not_an_error() {
    let report = validate(b"a,b\n\"x\ny\",2\n");
    assert!(report.valid);
    assert_eq!(report.row_count, 1);
}

#[test]
fn headers_kept_verbatim_including_empty_strings() {
    let report = validate(b"a,,c\n1,2,3\n");
    assert_eq!(report.headers, vec!["a", "", "c"]);
}

#[test]
fn header_only_input_is_valid_with_zero_rows() {
    let report = validate(b"a,b,c\n");
    assert!(report.valid);
    assert_eq!(report.row_count, 0);
    assert_eq!(report.headers, vec!["a", "b", "c"]);
}

#[test]
fn empty_input_is_valid_and_empty() {
    let report = validate(b"");
    assert!(report.valid);
    assert_eq!(report.row_count, 0);
    assert!(report.headers.is_empty());
}

#[test]
fn declared_encoding_and_format_flow_into_the_report() {
    let meta = SourceMeta::new()
        .with_encoding("windows-1252")
        .with_extension("tsv");
    let report = validate_bytes(b"a,b\n1,2\n", &meta).expect("in-memory read");
    assert_eq!(report.encoding, "windows-1252");
    assert_eq!(report.format, "tsv");
}
