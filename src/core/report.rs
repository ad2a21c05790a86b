//! Every view for one scope, bundled.

use serde::Serialize;
use tracing::debug;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::activity::{
    DayCount, Heatmap, MonthCount, activity_heat_map, month_activity_map, week_activity_map,
};
use crate::core::emoji::{EmojiCount, emoji_helper};
use crate::core::scope::Scope;
use crate::core::stats::{Stats, fetch_stats};
use crate::core::timeline::{DailyPoint, MonthlyPoint, daily_timeline, monthly_timeline};
use crate::core::users::{BusyUsers, most_busy_users};
use crate::core::words::{WordCloud, WordCount, create_wordcloud, most_common_words};

/// All aggregated views for a single [`Scope`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub scope: Scope,
    pub stats: Stats,
    pub monthly_timeline: Vec<MonthlyPoint>,
    pub daily_timeline: Vec<DailyPoint>,
    pub week_activity: Vec<DayCount>,
    pub month_activity: Vec<MonthCount>,
    pub heatmap: Heatmap,
    /// Present only for [`Scope::Overall`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy_users: Option<BusyUsers>,
    pub word_cloud: WordCloud,
    pub common_words: Vec<WordCount>,
    pub emojis: Vec<EmojiCount>,
}

/// Runs every aggregation over `records` for `scope`.
///
/// # Example
///
/// ```
/// use chatlens::config::AnalysisConfig;
/// use chatlens::core::{Scope, analyze};
/// use chatlens::parser::parse;
///
/// let messages = parse(
///     "01/02/23, 10:00 - Alice: pizza tonight? 🍕\n\
///      01/02/23, 10:01 - Bob: pizza for sure\n",
/// );
/// let report = analyze(&Scope::Overall, &messages, &AnalysisConfig::default());
///
/// assert_eq!(report.stats.message_count, 2);
/// assert_eq!(report.emojis[0].emoji, "🍕");
/// assert!(report.busy_users.is_some());
/// ```
pub fn analyze(scope: &Scope, records: &[Message], config: &AnalysisConfig) -> Report {
    debug!(%scope, records = records.len(), "analyzing");

    Report {
        scope: scope.clone(),
        stats: fetch_stats(scope, records, config),
        monthly_timeline: monthly_timeline(scope, records),
        daily_timeline: daily_timeline(scope, records),
        week_activity: week_activity_map(scope, records),
        month_activity: month_activity_map(scope, records),
        heatmap: activity_heat_map(scope, records),
        busy_users: most_busy_users(scope, records, config),
        word_cloud: create_wordcloud(scope, records, config),
        common_words: most_common_words(scope, records, config),
        emojis: emoji_helper(scope, records),
    }
}
