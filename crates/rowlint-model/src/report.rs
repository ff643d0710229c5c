use serde::{Deserialize, Serialize};

use crate::record::CheckRecord;

/// Aggregate result of validating one CSV source.
///
/// Field names are part of the external contract. `warnings` and
/// `informations` are reserved and stay empty in this crate family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub error_count: usize,
    pub valid: bool,
    pub row_count: u64,
    /// First row's field values verbatim, empty when no rows were read.
    pub headers: Vec<String>,
    pub encoding: String,
    pub format: String,
    pub errors: Vec<CheckRecord>,
    pub warnings: Vec<CheckRecord>,
    pub informations: Vec<CheckRecord>,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
