//! Output writers.
//!
//! - [`write_records_csv`] / [`records_to_csv`] - parsed records, `;`-delimited (`csv-output` feature)
//! - [`write_report_json`] / [`report_to_json`] - an analysis report (`json-output` feature)
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::output::{write_records_csv, write_report_json};
//! use chatlens::core::{Scope, analyze};
//! use chatlens::parser::parse_transcript;
//!
//! let transcript = parse_transcript("01/02/23, 10:00 - Alice: hello\n");
//! write_records_csv(&transcript.messages, "records.csv")?;
//!
//! let report = analyze(&Scope::Overall, &transcript.messages, &AnalysisConfig::default());
//! write_report_json(&report, "report.json")?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{records_to_csv, write_records_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, write_report_json};
