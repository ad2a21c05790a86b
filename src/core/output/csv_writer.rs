//! Parsed records as CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Message;
use crate::error::{ChatlensError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes parsed records to CSV with a semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Text`
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`
/// - Multi-line bodies are quoted, newlines kept
pub fn write_records_csv(messages: &[Message], path: impl AsRef<Path>) -> Result<()> {
    let mut file = File::create(path)?;
    let csv = records_to_csv(messages)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Same as [`write_records_csv`], returned as a string.
pub fn records_to_csv(messages: &[Message]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(["Timestamp", "Sender", "Text"])?;
    for msg in messages {
        let ts = msg.timestamp.format(TIMESTAMP_FORMAT).to_string();
        writer.write_record([ts.as_str(), msg.sender.as_str(), msg.text.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ChatlensError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
