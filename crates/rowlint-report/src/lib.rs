//! Report assembly for CSV structural validation.
//!
//! Builds the final [`rowlint_model::ValidationReport`] from a completed
//! scan, owns the constant code-to-message table, and serializes reports to
//! JSON.

mod builder;
mod json;
mod messages;

pub use builder::{build_report, not_found_report};
pub use json::{to_json, write_report_json};
pub use messages::describe;
