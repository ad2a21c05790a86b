//! Configuration types for parsing and analysis.
//!
//! Plain builder structs, usable from library code without any CLI
//! framework:
//!
//! - [`ParserConfig`] - how timestamp headers are interpreted
//! - [`AnalysisConfig`] - media placeholders, stopwords and table sizes
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, DateOrder, ParserConfig};
//!
//! let parser_config = ParserConfig::new().with_date_order(DateOrder::MonthFirst);
//!
//! let analysis_config = AnalysisConfig::new()
//!     .with_top_users(3)
//!     .with_stopwords(["lol", "haha"]);
//! assert!(analysis_config.is_stopword("lol"));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;

/// Stopwords shipped with the crate: English plus common Hinglish chat filler.
const DEFAULT_STOPWORDS: &str = include_str!("stopwords.txt");

/// Body text WhatsApp writes in place of an attachment.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Attachment placeholders written by iOS exports, one per media kind.
pub const IOS_MEDIA_OMITTED: &[&str] = &[
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "GIF omitted",
    "document omitted",
];

/// Order of the day and month fields in a numeric date.
///
/// `01/02/23` is the 1st of February in most locales and January 2nd in
/// the US. Exports do not say which one they use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Decide from the transcript itself (default).
    #[default]
    Auto,
    /// `DD/MM/YY`
    DayFirst,
    /// `MM/DD/YY`
    MonthFirst,
}

impl DateOrder {
    /// Returns all accepted names.
    pub fn all_names() -> &'static [&'static str] {
        &["auto", "day-first", "month-first", "dmy", "mdy"]
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::Auto => write!(f, "auto"),
            DateOrder::DayFirst => write!(f, "day-first"),
            DateOrder::MonthFirst => write!(f, "month-first"),
        }
    }
}

impl FromStr for DateOrder {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(DateOrder::Auto),
            "day-first" | "dmy" => Ok(DateOrder::DayFirst),
            "month-first" | "mdy" => Ok(DateOrder::MonthFirst),
            _ => Err(ChatlensError::invalid_config(
                "date order",
                format!(
                    "unknown value '{}'. Expected one of: {}",
                    s,
                    DateOrder::all_names().join(", ")
                ),
            )),
        }
    }
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{DateOrder, ParserConfig};
///
/// let config = ParserConfig::new().with_date_order(DateOrder::DayFirst);
/// assert_eq!(config.date_order, DateOrder::DayFirst);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Field order of numeric dates (default: auto-detect)
    pub date_order: DateOrder,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces a date field order instead of auto-detecting it.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}

/// Configuration for the aggregate views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Bodies that count as a shared media file (default: `<Media omitted>` plus the iOS placeholders)
    pub media_placeholders: Vec<String>,

    /// Lowercase tokens ignored by the word views
    pub stopwords: HashSet<String>,

    /// Rows in the busiest-users table (default: 5)
    pub top_users: usize,

    /// Rows in the most-common-words table (default: 20)
    pub top_words: usize,

    /// Entries kept in the word cloud (default: 200)
    pub max_cloud_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholders: std::iter::once(MEDIA_OMITTED)
                .chain(IOS_MEDIA_OMITTED.iter().copied())
                .map(str::to_string)
                .collect(),
            stopwords: parse_stopwords(DEFAULT_STOPWORDS),
            top_users: 5,
            top_words: 20,
            max_cloud_words: 200,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a body text that should count as shared media.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholders.push(placeholder.into());
        self
    }

    /// Adds stopwords on top of the current list.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self.stopwords.remove("");
        self
    }

    /// Adds stopwords from file contents, one word per line (`#` starts a comment).
    #[must_use]
    pub fn with_stopword_list(mut self, contents: &str) -> Self {
        self.stopwords.extend(parse_stopwords(contents));
        self
    }

    /// Drops every stopword, including the built-in list.
    #[must_use]
    pub fn without_stopwords(mut self) -> Self {
        self.stopwords.clear();
        self
    }

    /// Sets the number of rows in the busiest-users table.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the number of rows in the most-common-words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the maximum number of word cloud entries.
    #[must_use]
    pub fn with_max_cloud_words(mut self, n: usize) -> Self {
        self.max_cloud_words = n;
        self
    }

    /// Returns `true` if `token` (already lowercased) is a stopword.
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

fn parse_stopwords(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_order_from_str() {
        assert_eq!("auto".parse::<DateOrder>().unwrap(), DateOrder::Auto);
        assert_eq!("DMY".parse::<DateOrder>().unwrap(), DateOrder::DayFirst);
        assert_eq!(
            "month-first".parse::<DateOrder>().unwrap(),
            DateOrder::MonthFirst
        );
        let err = "sideways".parse::<DateOrder>().unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn test_date_order_display_round_trips() {
        for order in [DateOrder::Auto, DateOrder::DayFirst, DateOrder::MonthFirst] {
            assert_eq!(order.to_string().parse::<DateOrder>().unwrap(), order);
        }
    }

    #[test]
    fn test_analysis_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.media_placeholders[0], MEDIA_OMITTED);
        assert!(config.media_placeholders.iter().any(|p| p == "image omitted"));
        assert_eq!(config.media_placeholders.len(), 1 + IOS_MEDIA_OMITTED.len());
        assert_eq!(config.top_users, 5);
        assert_eq!(config.top_words, 20);
        assert!(config.is_stopword("the"));
        assert!(config.is_stopword("hai"));
        assert!(!config.is_stopword("pizza"));
    }

    #[test]
    fn test_with_stopwords_lowercases() {
        let config = AnalysisConfig::new().without_stopwords().with_stopwords(["Pizza", " "]);
        assert!(config.is_stopword("pizza"));
        assert_eq!(config.stopwords.len(), 1);
    }

    #[test]
    fn test_stopword_list_skips_comments() {
        let config = AnalysisConfig::new()
            .without_stopwords()
            .with_stopword_list("# custom list\nfoo\n\n  Bar  # trailing\n");
        assert!(config.is_stopword("foo"));
        assert!(config.is_stopword("bar"));
        assert_eq!(config.stopwords.len(), 2);
    }

    #[test]
    fn test_config_serde() {
        let config = ParserConfig::new().with_date_order(DateOrder::MonthFirst);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("month-first"));
    }
}
