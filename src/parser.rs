//! Transcript parser.
//!
//! Turns the text of a chat export into an ordered `Vec<Message>`.
//!
//! Each line is one of:
//!
//! - a new message, `<date>, <time> - <sender>: <text>`
//! - a system notification, `<date>, <time> - <text>`
//! - a continuation of the previous message (no leading timestamp)
//!
//! See [`crate::parsing::timestamp`] for the accepted timestamp grammar.
//!
//! Parsing never fails on text input. A line whose header carries an
//! impossible date is folded into the previous message like any other
//! continuation line, and lines before the first header are kept in
//! [`Transcript::preamble`].
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::parse;
//!
//! let messages = parse(
//!     "01/02/23, 10:00 - Alice: hello there\n\
//!      second line\n\
//!      01/02/23, 10:01 - Bob: hi\n",
//! );
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(messages[0].text, "hello there\nsecond line");
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::Message;
use crate::config::{DateOrder, ParserConfig};
use crate::error::{ChatlensError, Result};
use crate::parsing::{Header, detect_date_order, scan_header, split_sender};

/// Result of parsing one export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transcript {
    /// Parsed records in file order.
    pub messages: Vec<Message>,

    /// Field order used for dates (never `Auto`).
    pub date_order: DateOrder,

    /// Lines that appeared before the first timestamped line.
    pub preamble: Vec<String>,

    /// Number of lines appended to a previous message.
    pub lines_folded: usize,
}

impl Transcript {
    /// Returns the number of parsed messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no message was found.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Consumes the transcript, returning its messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// Parser for text chat exports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{DateOrder, ParserConfig};
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(
///     ParserConfig::new().with_date_order(DateOrder::MonthFirst),
/// );
/// let transcript = parser.parse_str("01/02/23, 10:00 - Alice: hi");
/// assert_eq!(transcript.messages[0].month_name(), "January");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    pub fn parse_file(&self, path: &Path) -> Result<Transcript> {
        let bytes = fs::read(path)?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| ChatlensError::invalid_input(path.display().to_string(), e))?;
        Ok(self.parse_str(text))
    }

    /// Parses raw bytes, rejecting anything that is not UTF-8.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Transcript> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| ChatlensError::invalid_input("input bytes", e))?;
        Ok(self.parse_str(text))
    }

    /// Parses transcript text. Never fails.
    pub fn parse_str(&self, content: &str) -> Transcript {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);

        // Pass 1: recognise headers, independent of what follows them.
        let lines: Vec<(&str, Option<Header<'_>>)> =
            content.lines().map(|line| (line, scan_header(line))).collect();

        let date_order = match self.config.date_order {
            DateOrder::Auto => {
                detect_date_order(lines.iter().filter_map(|(_, h)| h.as_ref().map(|h| &h.stamp)))
            }
            fixed => fixed,
        };
        debug!(%date_order, lines = lines.len(), "parsing transcript");

        // Pass 2: build records.
        let mut transcript = Transcript {
            date_order,
            ..Transcript::default()
        };

        for (index, (line, header)) in lines.into_iter().enumerate() {
            let timestamp = header.and_then(|h| h.stamp.resolve(date_order).map(|ts| (h, ts)));

            match timestamp {
                Some((header, ts)) => {
                    finish_last(&mut transcript.messages);
                    let msg = match split_sender(header.rest) {
                        Some((sender, body)) => Message::new(ts, sender, body),
                        None => Message::notification(ts, header.rest),
                    };
                    if let Some(prev) = transcript.messages.last() {
                        if prev.timestamp > msg.timestamp {
                            debug!(line = index + 1, "timestamp earlier than previous message");
                        }
                    }
                    transcript.messages.push(msg);
                }
                None => {
                    if header.is_some() {
                        debug!(line = index + 1, "invalid timestamp, folding into previous message");
                    }
                    match transcript.messages.last_mut() {
                        Some(last) => {
                            last.text.push('\n');
                            last.text.push_str(line);
                            transcript.lines_folded += 1;
                        }
                        None => transcript.preamble.push(line.to_string()),
                    }
                }
            }
        }
        finish_last(&mut transcript.messages);

        debug!(
            messages = transcript.messages.len(),
            folded = transcript.lines_folded,
            preamble = transcript.preamble.len(),
            "transcript parsed"
        );
        transcript
    }
}

/// Trims trailing whitespace off the most recent message once it is complete.
fn finish_last(messages: &mut [Message]) {
    if let Some(last) = messages.last_mut() {
        let trimmed = last.text.trim_end().len();
        last.text.truncate(trimmed);
    }
}

/// Parses transcript text with default settings.
pub fn parse(content: &str) -> Vec<Message> {
    TranscriptParser::new().parse_str(content).into_messages()
}

/// Parses transcript text with default settings, keeping parse metadata.
pub fn parse_transcript(content: &str) -> Transcript {
    TranscriptParser::new().parse_str(content)
}

/// Parses raw bytes with default settings.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidInput`] if `bytes` is not UTF-8.
pub fn parse_bytes(bytes: &[u8]) -> Result<Transcript> {
    TranscriptParser::new().parse_bytes(bytes)
}
