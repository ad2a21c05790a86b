//! Message counts over time, bucketed by month or by day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::Message;
use crate::core::scope::{Scope, apply_scope};
use crate::message::month_from_number;

/// Message count for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    /// `"<Month>-<Year>"`, e.g. `"February-2023"`
    pub label: String,
    pub count: usize,
}

/// Message count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts messages per month, in chronological order.
///
/// Ordering follows the `(year, month)` key, not the label, so
/// `"April-2023"` comes after `"March-2023"`.
pub fn monthly_timeline(scope: &Scope, records: &[Message]) -> Vec<MonthlyPoint> {
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for msg in apply_scope(scope, records) {
        *buckets.entry((msg.year(), msg.month_num())).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month_num), count)| MonthlyPoint {
            year,
            month_num,
            label: format!("{}-{}", month_from_number(month_num).name(), year),
            count,
        })
        .collect()
}

/// Counts messages per calendar date, in chronological order.
pub fn daily_timeline(scope: &Scope, records: &[Message]) -> Vec<DailyPoint> {
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for msg in apply_scope(scope, records) {
        *buckets.entry(msg.date()).or_default() += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}
