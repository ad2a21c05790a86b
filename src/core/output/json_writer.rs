//! Reports as JSON.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::report::Report;
use crate::error::Result;

/// Writes `report` to `path` as pretty-printed JSON.
pub fn write_report_json(report: &Report, path: impl AsRef<Path>) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Serializes `report` to a pretty-printed JSON string.
pub fn report_to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
