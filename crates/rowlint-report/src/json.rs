use std::path::{Path, PathBuf};

use anyhow::Result;

use rowlint_model::ValidationReport;

/// Pretty-printed JSON with a trailing newline.
pub fn to_json(report: &ValidationReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(format!("{json}\n"))
}

/// Writes the report under `output_dir`, creating the directory if needed.
///
/// The surrounding report envelope (paths, wrapping keys) belongs to the
/// caller; this only persists the report value itself.
pub fn write_report_json(output_dir: &Path, report: &ValidationReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("validation_report.json");
    std::fs::write(&output_path, to_json(report)?)?;
    Ok(output_path)
}
