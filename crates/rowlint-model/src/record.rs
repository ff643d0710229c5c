use serde::{Deserialize, Serialize};

use crate::code::CheckCode;

/// A single diagnostic found during validation.
///
/// `row` and `column` are 1-based; both are absent for stream-level codes
/// such as `wrong_content_type` or `not_found`. `column` is the ordinal of
/// the offending field within its row. Row coordinates refer to data rows;
/// the header row carries no row coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    pub code: CheckCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<u64>,
    /// Extra context for the message, e.g. expected vs actual field counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl CheckRecord {
    /// Record for a stream-level condition with no position.
    pub fn stream(code: CheckCode) -> Self {
        Self {
            code,
            row: None,
            column: None,
            detail: None,
        }
    }

    /// Record positioned on a whole row.
    pub fn on_row(code: CheckCode, row: u64) -> Self {
        Self {
            code,
            row: Some(row),
            column: None,
            detail: None,
        }
    }

    /// Record positioned on a specific field of a row.
    pub fn at(code: CheckCode, row: u64, column: u64) -> Self {
        Self {
            code,
            row: Some(row),
            column: Some(column),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
