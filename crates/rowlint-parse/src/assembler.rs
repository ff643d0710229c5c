//! Groups tokenizer records into header plus numbered data rows.

use std::io::BufRead;

use rowlint_model::Result;

use crate::tokenizer::{AnomalyKind, Dialect, Tokenizer};

/// Anomaly stamped with the coordinates the rest of the pipeline reports.
///
/// Row numbers are 1-based over data rows; anomalies found on the header
/// record carry no row coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub row: Option<u64>,
    pub column: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape {
    Normal,
    /// Every field is empty. Takes priority over `Ragged`.
    Blank,
    /// Field count differs from the header's.
    Ragged { expected: usize, actual: usize },
}

/// A fully assembled data row, materialized before rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub number: u64,
    pub fields: Vec<String>,
    pub shape: RowShape,
    pub anomalies: Vec<Anomaly>,
}

/// Pulls records off the tokenizer in file order: the first record becomes
/// the header and fixes the expected field count, every later record
/// becomes a numbered, shape-classified data row.
pub struct RowAssembler<R: BufRead> {
    tokenizer: Tokenizer<R>,
    header: Vec<String>,
    header_anomalies: Vec<Anomaly>,
    header_read: bool,
    expected: usize,
    next_number: u64,
}

impl<R: BufRead> RowAssembler<R> {
    pub fn new(reader: R) -> Self {
        Self::with_dialect(reader, Dialect::default())
    }

    pub fn with_dialect(reader: R, dialect: Dialect) -> Self {
        Self {
            tokenizer: Tokenizer::with_dialect(reader, dialect),
            header: Vec::new(),
            header_anomalies: Vec::new(),
            header_read: false,
            expected: 0,
            next_number: 0,
        }
    }

    /// Reads the header record if it has not been read yet. Idempotent.
    pub fn read_header(&mut self) -> Result<()> {
        if self.header_read {
            return Ok(());
        }
        self.header_read = true;
        if let Some(raw) = self.tokenizer.next_row()? {
            self.expected = raw.fields.len();
            self.header = raw.fields.into_iter().map(|f| f.value).collect();
            self.header_anomalies = raw
                .anomalies
                .into_iter()
                .map(|a| Anomaly {
                    kind: a.kind,
                    row: None,
                    column: a.column,
                })
                .collect();
            tracing::debug!(fields = self.expected, "header record read");
        }
        Ok(())
    }

    /// Header field values, empty if the input had no records.
    pub fn headers(&self) -> &[String] {
        &self.header
    }

    pub fn header_anomalies(&self) -> &[Anomaly] {
        &self.header_anomalies
    }

    /// Next data row in file order, reading the header first if needed.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        self.read_header()?;
        let Some(raw) = self.tokenizer.next_row()? else {
            return Ok(None);
        };
        self.next_number += 1;
        let number = self.next_number;

        let anomalies = raw
            .anomalies
            .into_iter()
            .map(|a| Anomaly {
                kind: a.kind,
                row: Some(number),
                column: a.column,
            })
            .collect();
        let fields: Vec<String> = raw.fields.into_iter().map(|f| f.value).collect();

        let shape = if fields.iter().all(|f| f.is_empty()) {
            RowShape::Blank
        } else if fields.len() != self.expected {
            RowShape::Ragged {
                expected: self.expected,
                actual: fields.len(),
            }
        } else {
            RowShape::Normal
        };

        Ok(Some(Row {
            number,
            fields,
            shape,
            anomalies,
        }))
    }
}
