//! Report output formats.
//!
//! Library-level format handling, independent of the CLI:
//!
//! - [`OutputFormat`] - `text` tables for a terminal or `json` for tools
//! - [`render_text`] - aligned plain-text rendering of a [`Report`]
//! - [`write_to_format`] - writes a report to a file in either format
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{Scope, analyze};
//! use chatlens::format::{OutputFormat, render_text};
//! use chatlens::parser::parse;
//!
//! let messages = parse("01/02/23, 10:00 - Alice: hello\n");
//! let report = analyze(&Scope::Overall, &messages, &AnalysisConfig::default());
//!
//! let text = render_text(&report);
//! assert!(text.contains("Total messages"));
//!
//! let format = OutputFormat::from_path("report.json").unwrap();
//! assert_eq!(format, OutputFormat::Json);
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::report::Report;
use crate::error::ChatlensError;

/// How a [`Report`] is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Aligned plain-text tables (default)
    #[default]
    Text,

    /// Pretty-printed JSON of the whole report
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json"]
    }

    /// Detects the format from a file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatlensError::invalid_config(
                "output format",
                format!("unknown file extension '.{ext}'. Expected one of: txt, json"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ChatlensError::invalid_config(
                "output format",
                format!(
                    "unknown format '{}'. Expected one of: {}",
                    s,
                    OutputFormat::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Renders `report` as plain-text tables.
///
/// Empty tables are skipped; the headline numbers are always printed.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let stats = &report.stats;

    let _ = writeln!(out, "Top Statistics: {}", report.scope.label());
    let _ = writeln!(out, "  {:<16}{:>8}", "Total messages", stats.message_count);
    let _ = writeln!(out, "  {:<16}{:>8}", "Total words", stats.word_count);
    let _ = writeln!(out, "  {:<16}{:>8}", "Media shared", stats.media_count);
    let _ = writeln!(out, "  {:<16}{:>8}", "Links shared", stats.link_count);

    table(
        &mut out,
        "Monthly Timeline",
        report
            .monthly_timeline
            .iter()
            .map(|p| (p.label.clone(), p.count)),
    );
    table(
        &mut out,
        "Daily Timeline",
        report
            .daily_timeline
            .iter()
            .map(|p| (p.date.to_string(), p.count)),
    );
    table(
        &mut out,
        "Most Busy Days",
        report
            .week_activity
            .iter()
            .map(|d| (d.name().to_string(), d.count)),
    );
    table(
        &mut out,
        "Most Busy Months",
        report
            .month_activity
            .iter()
            .map(|m| (m.name().to_string(), m.count)),
    );

    if !report.heatmap.is_empty() {
        render_heatmap(&mut out, report);
    }

    if let Some(busy) = &report.busy_users {
        table(
            &mut out,
            "Most Busy Users",
            busy.top.iter().map(|u| (u.sender.clone(), u.count)),
        );
        if !busy.shares.is_empty() {
            let _ = writeln!(out, "\nShare of Messages");
            for share in &busy.shares {
                let _ = writeln!(out, "  {:<24}{:>7.2}%", share.sender, share.percent);
            }
        }
    }

    table(
        &mut out,
        "Most Common Words",
        report
            .common_words
            .iter()
            .map(|w| (w.word.clone(), w.count)),
    );
    table(
        &mut out,
        "Emoji Analysis",
        report.emojis.iter().map(|e| (e.emoji.clone(), e.count)),
    );

    out
}

fn table(out: &mut String, title: &str, rows: impl Iterator<Item = (String, usize)>) {
    let rows: Vec<(String, usize)> = rows.collect();
    if rows.is_empty() {
        return;
    }

    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(16);

    let _ = writeln!(out, "\n{title}");
    for (label, count) in rows {
        let _ = writeln!(out, "  {label:<width$}{count:>8}");
    }
}

fn render_heatmap(out: &mut String, report: &Report) {
    let heatmap = &report.heatmap;
    let _ = writeln!(out, "\nWeekly Activity Map");

    let _ = write!(out, "  {:<10}", "");
    for period in &heatmap.periods {
        let _ = write!(out, "{period:>6}");
    }
    out.push('\n');

    for (day, row) in heatmap.days.iter().zip(&heatmap.counts) {
        let _ = write!(out, "  {:<10}", crate::message::weekday_name(*day));
        for count in row {
            let _ = write!(out, "{count:>6}");
        }
        out.push('\n');
    }
}

/// Writes `report` to `path` in `format`.
///
/// # Errors
///
/// Returns an error if the file cannot be written, or if `format` needs an
/// output feature that is not enabled.
pub fn write_to_format(
    report: &Report,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), ChatlensError> {
    match format {
        OutputFormat::Text => {
            fs::write(path, render_text(report))?;
            Ok(())
        }
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_report_json(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(ChatlensError::invalid_config(
            "output format",
            format!("format {format} requires the 'json-output' feature to be enabled"),
        )),
    }
}
