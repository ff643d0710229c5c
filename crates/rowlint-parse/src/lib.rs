//! Streaming CSV tokenization and row assembly.
//!
//! The tokenizer turns a byte stream into logical records with attached
//! structural anomalies; the assembler numbers the records, splits off the
//! header, and classifies each data row's shape. Both stages read the
//! source exactly once, forward only.

pub mod assembler;
pub mod tokenizer;

pub use assembler::{Anomaly, Row, RowAssembler, RowShape};
pub use tokenizer::{AnomalyKind, Dialect, RawAnomaly, RawField, RawRow, Tokenizer};
