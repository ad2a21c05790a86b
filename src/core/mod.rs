//! Aggregation over parsed records.
//!
//! Every view takes a [`Scope`] and the full record slice, filters by scope
//! first and then computes its table:
//!
//! - [`stats`] - message, word, media and link counts
//! - [`timeline`] - per-month and per-day counts
//! - [`activity`] - busiest weekdays, busiest months, weekday × hour heatmap
//! - [`users`] - participant list and busiest-users tables
//! - [`words`] - word cloud and most common words
//! - [`emoji`] - emoji frequencies
//! - [`report`] - all of the above in one [`Report`]
//! - [`output`] - CSV and JSON writers
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{Scope, analyze, participants};
//! use chatlens::parser::parse;
//!
//! let messages = parse("01/02/23, 10:00 - Alice: hello\n01/02/23, 10:01 - Bob: hi\n");
//! assert_eq!(participants(&messages), vec!["Alice", "Bob"]);
//!
//! let report = analyze(&Scope::participant("Bob"), &messages, &AnalysisConfig::default());
//! assert_eq!(report.stats.message_count, 1);
//! ```

pub mod activity;
mod counter;
pub mod emoji;
pub mod output;
pub mod report;
pub mod scope;
pub mod stats;
pub mod timeline;
pub mod users;
pub mod words;

pub use activity::{activity_heat_map, month_activity_map, week_activity_map};
pub use emoji::emoji_helper;
pub use report::{Report, analyze};
pub use scope::{Scope, apply_scope};
pub use stats::{Stats, fetch_stats};
pub use timeline::{daily_timeline, monthly_timeline};
pub use users::{most_busy_users, participants};
pub use words::{create_wordcloud, most_common_words};

pub use crate::Message;

#[cfg(feature = "csv-output")]
pub use output::{records_to_csv, write_records_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, write_report_json};
