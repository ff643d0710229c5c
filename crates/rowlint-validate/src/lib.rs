//! CSV structural validation.
//!
//! Streams a CSV source exactly once, applies the fixed rule set
//! (content type, ragged rows, blank rows, encoding, quoting, whitespace,
//! line breaks), and produces a [`ValidationReport`] with positioned
//! diagnostic records.

mod engine;

pub use engine::{ScanOutcome, content_type_is_csv, scan};

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use rowlint_model::{Result, SourceMeta, ValidationReport};
use rowlint_parse::Dialect;
use rowlint_report::{build_report, not_found_report};

/// Validates an already-open source with the default comma/double-quote
/// dialect.
pub fn validate_reader<R: BufRead>(reader: R, meta: &SourceMeta) -> Result<ValidationReport> {
    validate_reader_with_dialect(reader, Dialect::default(), meta)
}

pub fn validate_reader_with_dialect<R: BufRead>(
    reader: R,
    dialect: Dialect,
    meta: &SourceMeta,
) -> Result<ValidationReport> {
    let outcome = scan(reader, dialect, meta)?;
    Ok(build_report(
        outcome.headers,
        outcome.row_count,
        outcome.records,
        meta,
    ))
}

pub fn validate_bytes(bytes: &[u8], meta: &SourceMeta) -> Result<ValidationReport> {
    validate_reader(bytes, meta)
}

/// Validates an explicit, caller-supplied file. The extension, when
/// present, is taken as the declared format.
pub fn validate_path(path: &Path) -> Result<ValidationReport> {
    let mut meta = SourceMeta::new();
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        meta = meta.with_extension(extension);
    }
    validate_path_with_meta(path, &meta)
}

/// A file that does not exist yields a `not_found` report; any other open
/// or mid-read I/O failure is fatal and surfaced to the caller instead of
/// being folded into the report.
pub fn validate_path_with_meta(path: &Path, meta: &SourceMeta) -> Result<ValidationReport> {
    match File::open(path) {
        Ok(file) => validate_reader(BufReader::new(file), meta),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "source not found");
            Ok(not_found_report(meta))
        }
        Err(err) => Err(err.into()),
    }
}
