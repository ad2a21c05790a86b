//! Word frequencies: the word cloud and the most-common-words table.
//!
//! Both views share one token stream: bodies of human, non-media messages
//! in scope, split on whitespace, lowercased, with stopwords removed.

use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::counter::ranked;
use crate::core::scope::{Scope, apply_scope};

/// A word and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// A word cloud entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedWord {
    pub word: String,
    pub count: usize,
    /// `count` relative to the most frequent word, in `(0, 1]`
    pub weight: f64,
}

/// Frequency-weighted bag of words, most frequent first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WordCloud {
    pub words: Vec<WeightedWord>,
}

impl WordCloud {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Count for `word`, if it made it into the cloud.
    pub fn count_of(&self, word: &str) -> Option<usize> {
        self.words.iter().find(|w| w.word == word).map(|w| w.count)
    }
}

fn tokens<'a>(
    scope: &'a Scope,
    records: &'a [Message],
    config: &'a AnalysisConfig,
) -> impl Iterator<Item = String> + 'a {
    apply_scope(scope, records)
        .filter(move |msg| !msg.is_notification() && !msg.is_media(&config.media_placeholders))
        .flat_map(|msg| msg.text.split_whitespace())
        .map(str::to_lowercase)
        .filter(move |token| !config.is_stopword(token))
}

/// Builds the word cloud for `scope`.
///
/// Keeps at most [`AnalysisConfig::max_cloud_words`] entries.
pub fn create_wordcloud(scope: &Scope, records: &[Message], config: &AnalysisConfig) -> WordCloud {
    let counts = ranked(tokens(scope, records, config));
    let Some(&(_, max)) = counts.first() else {
        return WordCloud::default();
    };

    let words = counts
        .into_iter()
        .take(config.max_cloud_words)
        .map(|(word, count)| WeightedWord {
            word,
            count,
            weight: count as f64 / max as f64,
        })
        .collect();

    WordCloud { words }
}

/// The [`AnalysisConfig::top_words`] most used words (20 by default).
///
/// Words used equally often appear in the order they were first used.
///
/// # Example
///
/// ```
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Scope, most_common_words};
/// use chatlens::parser::parse;
///
/// let messages = parse(
///     "01/02/23, 10:00 - Alice: Pizza tonight?\n\
///      01/02/23, 10:01 - Bob: pizza for sure\n",
/// );
/// let words = most_common_words(&Scope::Overall, &messages, &AnalysisConfig::default());
///
/// assert_eq!(words[0].word, "pizza");
/// assert_eq!(words[0].count, 2);
/// ```
pub fn most_common_words(
    scope: &Scope,
    records: &[Message],
    config: &AnalysisConfig,
) -> Vec<WordCount> {
    ranked(tokens(scope, records, config))
        .into_iter()
        .take(config.top_words)
        .map(|(word, count)| WordCount { word, count })
        .collect()
}
