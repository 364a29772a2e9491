//! JSON rendering for collection reports.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::CollectionReport;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a report to JSON. Non-ASCII text is written as-is.
pub fn to_json(report: &CollectionReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize `report` and write it to `path`, replacing any previous file.
pub fn write_report<P: AsRef<Path>>(
    report: &CollectionReport,
    path: P,
    format: JsonFormat,
) -> Result<()> {
    let json = to_json(report, format)?;
    fs::write(path, json)?;
    Ok(())
}
