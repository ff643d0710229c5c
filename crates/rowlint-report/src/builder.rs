use rowlint_model::{CheckCode, CheckRecord, SourceMeta, ValidationReport};

const DEFAULT_ENCODING: &str = "utf-8";
const DEFAULT_FORMAT: &str = "csv";

/// Assembles the final report from one completed scan.
///
/// Deterministic and side-effect-free; the error list is trusted as final
/// and never re-validated here. `valid` is derived from the error count,
/// keeping the two consistent by construction.
pub fn build_report(
    headers: Vec<String>,
    row_count: u64,
    errors: Vec<CheckRecord>,
    meta: &SourceMeta,
) -> ValidationReport {
    let error_count = errors.len();
    ValidationReport {
        error_count,
        valid: error_count == 0,
        row_count,
        headers,
        encoding: meta
            .encoding
            .clone()
            .unwrap_or_else(|| DEFAULT_ENCODING.to_string()),
        format: meta
            .extension
            .clone()
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
        errors,
        warnings: Vec::new(),
        informations: Vec::new(),
    }
}

/// Report for a source that could not be retrieved at all: a single
/// stream-level `not_found` record, zero rows, no header.
pub fn not_found_report(meta: &SourceMeta) -> ValidationReport {
    build_report(
        Vec::new(),
        0,
        vec![CheckRecord::stream(CheckCode::NotFound)],
        meta,
    )
}
