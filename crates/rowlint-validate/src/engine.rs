//! Rule engine: one forward pass mapping rows and scan anomalies to
//! diagnostic records.
//!
//! All rules are evaluated independently with no short-circuiting, so a
//! single run captures every violation. Records come out in discovery
//! order: stream-level checks first, then row by row, and within a row
//! field anomalies left to right before the row-shape record.

use std::io::BufRead;

use rowlint_model::{CheckCode, CheckRecord, Result, SourceMeta};
use rowlint_parse::{Anomaly, AnomalyKind, Dialect, RowAssembler, RowShape};

/// Everything the report builder needs after one pass over the source.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub headers: Vec<String>,
    pub row_count: u64,
    pub records: Vec<CheckRecord>,
}

/// Whether a declared MIME type is CSV-compatible. Parameters after `;`
/// (e.g. `charset=utf-8`) are ignored.
pub fn content_type_is_csv(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("text/csv") || essence.eq_ignore_ascii_case("application/csv")
}

/// Stream-level checks, evaluated before any row is read.
fn stream_checks(meta: &SourceMeta) -> Vec<CheckRecord> {
    let mut records = Vec::new();
    if let Some(content_type) = &meta.content_type
        && !content_type_is_csv(content_type)
    {
        records.push(CheckRecord::stream(CheckCode::WrongContentType));
    }
    records
}

fn record_for(anomaly: &Anomaly) -> CheckRecord {
    let code = match anomaly.kind {
        AnomalyKind::InvalidEncoding => CheckCode::InvalidEncoding,
        AnomalyKind::StrayQuote => CheckCode::StrayQuote,
        AnomalyKind::UnclosedQuote => CheckCode::UnclosedQuote,
        AnomalyKind::Whitespace => CheckCode::Whitespace,
        AnomalyKind::LineBreaks => CheckCode::LineBreaks,
    };
    CheckRecord {
        code,
        row: anomaly.row,
        column: anomaly.column,
        detail: None,
    }
}

fn shape_record(row_number: u64, shape: &RowShape) -> Option<CheckRecord> {
    match shape {
        RowShape::Normal => None,
        RowShape::Blank => Some(CheckRecord::on_row(CheckCode::BlankRows, row_number)),
        RowShape::Ragged { expected, actual } => Some(
            CheckRecord::on_row(CheckCode::RaggedRows, row_number)
                .with_detail(format!("expected {expected} fields, found {actual}")),
        ),
    }
}

/// Runs every check over the source in a single pass.
///
/// Only real I/O failures come back as `Err`; every structural or encoding
/// problem becomes a record and the scan continues to the end of input.
pub fn scan<R: BufRead>(reader: R, dialect: Dialect, meta: &SourceMeta) -> Result<ScanOutcome> {
    let mut assembler = RowAssembler::with_dialect(reader, dialect);
    let mut records = stream_checks(meta);

    assembler.read_header()?;
    records.extend(assembler.header_anomalies().iter().map(record_for));

    let mut row_count = 0u64;
    while let Some(row) = assembler.next_row()? {
        row_count += 1;
        records.extend(row.anomalies.iter().map(record_for));
        records.extend(shape_record(row.number, &row.shape));
    }

    tracing::debug!(
        rows = row_count,
        records = records.len(),
        "scan complete"
    );

    Ok(ScanOutcome {
        headers: assembler.headers().to_vec(),
        row_count,
        records,
    })
}
