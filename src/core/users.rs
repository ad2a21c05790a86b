//! Participants and the busiest-users tables.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::Message;
use crate::config::AnalysisConfig;
use crate::core::counter::ranked;
use crate::core::scope::Scope;

/// Messages sent by one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub sender: String,
    pub count: usize,
}

/// One participant's share of all human messages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub sender: String,
    pub count: usize,
    /// `100 * count / total`, rounded to 2 decimals
    pub percent: f64,
}

/// The two busiest-users tables.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BusyUsers {
    /// The busiest senders, most active first.
    pub top: Vec<UserCount>,
    /// Every sender with their percentage, most active first.
    pub shares: Vec<UserShare>,
}

/// Unique human senders, sorted by name.
///
/// ```
/// use chatlens::core::participants;
/// use chatlens::parser::parse;
///
/// let messages = parse(
///     "01/02/23, 09:00 - Bob created group \"Trip\"\n\
///      01/02/23, 10:00 - Bob: hi\n\
///      01/02/23, 10:01 - Alice: hello",
/// );
/// assert_eq!(participants(&messages), vec!["Alice", "Bob"]);
/// ```
pub fn participants(records: &[Message]) -> Vec<String> {
    records
        .iter()
        .filter(|msg| !msg.is_notification())
        .map(|msg| msg.sender.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Busiest participants of the whole chat.
///
/// Only defined for [`Scope::Overall`]; a single-participant scope yields
/// `None`. Notifications are left out of both the counts and the total.
pub fn most_busy_users(
    scope: &Scope,
    records: &[Message],
    config: &AnalysisConfig,
) -> Option<BusyUsers> {
    if !scope.is_overall() {
        return None;
    }

    let counts = ranked(
        records
            .iter()
            .filter(|msg| !msg.is_notification())
            .map(|msg| msg.sender.as_str()),
    );
    let total: usize = counts.iter().map(|(_, count)| count).sum();

    let top = counts
        .iter()
        .take(config.top_users)
        .map(|&(sender, count)| UserCount {
            sender: sender.to_string(),
            count,
        })
        .collect();

    let shares = counts
        .iter()
        .map(|&(sender, count)| UserShare {
            sender: sender.to_string(),
            count,
            percent: round2(100.0 * count as f64 / total as f64),
        })
        .collect();

    Some(BusyUsers { top, shares })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
