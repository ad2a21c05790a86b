//! Headline numbers: messages, words, media and links.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::scope::{Scope, apply_scope};

/// URLs with a scheme or a `www.` prefix.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:https?://|www\.)\S+").expect("valid regex"));

/// Top-level counters for one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    /// Messages in scope, notifications included.
    pub message_count: usize,
    /// Whitespace-separated tokens; media placeholders contribute nothing.
    pub word_count: usize,
    /// Messages whose body is a media placeholder.
    pub media_count: usize,
    /// URLs found across all bodies.
    pub link_count: usize,
}

/// Counts URL occurrences in `text`.
///
/// ```
/// use chatlens::core::stats::count_links;
///
/// assert_eq!(count_links("see https://a.example and www.b.example"), 2);
/// assert_eq!(count_links("no links here"), 0);
/// ```
pub fn count_links(text: &str) -> usize {
    URL_PATTERN.find_iter(text).count()
}

/// Computes [`Stats`] for the records in `scope`.
///
/// # Example
///
/// ```
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Scope, fetch_stats};
/// use chatlens::parser::parse;
///
/// let messages = parse(
///     "01/02/23, 10:00 - Alice: hello there\n\
///      01/02/23, 10:01 - Bob: hi\n\
///      01/02/23, 10:02 - Alice: <Media omitted>\n",
/// );
/// let stats = fetch_stats(&Scope::Overall, &messages, &AnalysisConfig::default());
///
/// assert_eq!(stats.message_count, 3);
/// assert_eq!(stats.word_count, 3);
/// assert_eq!(stats.media_count, 1);
/// ```
pub fn fetch_stats(scope: &Scope, records: &[Message], config: &AnalysisConfig) -> Stats {
    let mut stats = Stats::default();

    for msg in apply_scope(scope, records) {
        stats.message_count += 1;
        if msg.is_media(&config.media_placeholders) {
            stats.media_count += 1;
        } else {
            stats.word_count += msg.text.split_whitespace().count();
        }
        stats.link_count += count_links(&msg.text);
    }

    stats
}
