//! # Chatlens
//!
//! A Rust library for parsing WhatsApp chat exports and computing activity
//! statistics over them.
//!
//! ## Overview
//!
//! Chatlens works in two stages:
//!
//! 1. **Parse** - a text export becomes an ordered `Vec<Message>`. Multi-line
//!    messages are reassembled, system lines are attributed to the
//!    `group_notification` pseudo-sender, and the date field order
//!    (day-first or month-first) is detected from the transcript.
//! 2. **Aggregate** - pure functions compute views over the records for the
//!    whole chat or for one participant: headline counts, monthly and daily
//!    timelines, busiest weekdays and months, a weekday × hour heatmap,
//!    busiest users, word frequencies and emoji usage.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let messages = parse(
//!     "01/02/23, 10:00 - Alice: hello there\n\
//!      01/02/23, 10:01 - Bob: hi\n\
//!      01/02/23, 10:02 - Alice: <Media omitted>\n",
//! );
//!
//! let stats = fetch_stats(&Scope::Overall, &messages, &AnalysisConfig::default());
//! assert_eq!(stats.message_count, 3);
//! assert_eq!(stats.word_count, 3);
//! assert_eq!(stats.media_count, 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), [`parse`]
//! - [`parsing`] - timestamp header grammar and sender splitting
//! - [`message`] - [`Message`] and its calendar accessors
//! - [`core`] - scope filtering, every aggregate view, output writers
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`format`] - report formats and text rendering
//! - [`cli`] - CLI argument types (`cli` feature)
//! - [`error`] - [`ChatlensError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

pub use error::{ChatlensError, Result};
pub use message::Message;
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::config::{AnalysisConfig, DateOrder, ParserConfig};
    pub use crate::parser::{Transcript, TranscriptParser, parse, parse_transcript};

    // Aggregation
    pub use crate::core::{
        Report, Scope, Stats, activity_heat_map, analyze, apply_scope, create_wordcloud,
        daily_timeline, emoji_helper, fetch_stats, month_activity_map, monthly_timeline,
        most_busy_users, most_common_words, participants, week_activity_map,
    };

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{records_to_csv, write_records_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{report_to_json, write_report_json};
    pub use crate::format::{OutputFormat, render_text, write_to_format};
}
