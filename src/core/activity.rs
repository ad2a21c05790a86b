//! Busiest weekdays, busiest months and the weekday × hour heatmap.

use chrono::{Month, Weekday};
use serde::{Serialize, Serializer};

use crate::Message;
use crate::core::scope::{Scope, apply_scope};
use crate::message::{month_from_number, weekday_name};

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Message count for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    #[serde(serialize_with = "weekday_as_name")]
    pub day: Weekday,
    pub count: usize,
}

impl DayCount {
    /// Full weekday name, e.g. `"Monday"`.
    pub fn name(&self) -> &'static str {
        weekday_name(self.day)
    }
}

/// Message count for one month of the year (all years combined).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    #[serde(serialize_with = "month_as_name")]
    pub month: Month,
    pub count: usize,
}

impl MonthCount {
    /// Full month name, e.g. `"March"`.
    pub fn name(&self) -> &'static str {
        self.month.name()
    }
}

/// Weekday × hour-bucket message counts.
///
/// Only weekdays and hour buckets that occur in the data get a row or a
/// column; cells without messages hold 0. Rows run Monday to Sunday and
/// columns run from `"00-01"` to `"23-00"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Heatmap {
    #[serde(serialize_with = "weekdays_as_names")]
    pub days: Vec<Weekday>,
    pub periods: Vec<String>,
    /// `counts[row][column]`, rows follow `days`, columns follow `periods`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Returns the count for a weekday and period label, 0 if either is absent.
    pub fn get(&self, day: Weekday, period: &str) -> usize {
        let row = self.days.iter().position(|d| *d == day);
        let col = self.periods.iter().position(|p| p == period);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Returns `true` if the heatmap has no rows.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Label of the one-hour bucket starting at `hour`.
///
/// ```
/// use chatlens::core::activity::hour_period;
///
/// assert_eq!(hour_period(9), "09-10");
/// assert_eq!(hour_period(22), "22-23");
/// assert_eq!(hour_period(23), "23-00");
/// ```
pub fn hour_period(hour: u32) -> String {
    format!("{:02}-{:02}", hour, (hour + 1) % 24)
}

/// Messages per weekday, busiest first.
///
/// Weekdays without messages are left out; ties keep calendar order.
pub fn week_activity_map(scope: &Scope, records: &[Message]) -> Vec<DayCount> {
    let mut counts = [0usize; 7];
    for msg in apply_scope(scope, records) {
        counts[msg.weekday().num_days_from_monday() as usize] += 1;
    }

    let mut days: Vec<DayCount> = WEEK
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&day, count)| DayCount { day, count })
        .collect();
    days.sort_by(|a, b| b.count.cmp(&a.count));
    days
}

/// Messages per month name, busiest first.
///
/// Months without messages are left out; ties keep calendar order.
pub fn month_activity_map(scope: &Scope, records: &[Message]) -> Vec<MonthCount> {
    let mut counts = [0usize; 12];
    for msg in apply_scope(scope, records) {
        counts[msg.month_num() as usize - 1] += 1;
    }

    let mut months: Vec<MonthCount> = (1..=12)
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(n, count)| MonthCount {
            month: month_from_number(n),
            count,
        })
        .collect();
    months.sort_by(|a, b| b.count.cmp(&a.count));
    months
}

/// Builds the weekday × hour heatmap.
pub fn activity_heat_map(scope: &Scope, records: &[Message]) -> Heatmap {
    let mut grid = [[0usize; 24]; 7];
    for msg in apply_scope(scope, records) {
        grid[msg.weekday().num_days_from_monday() as usize][msg.hour() as usize] += 1;
    }

    let rows: Vec<usize> = (0..7).filter(|&d| grid[d].iter().any(|&c| c > 0)).collect();
    let cols: Vec<usize> = (0..24).filter(|&h| grid.iter().any(|row| row[h] > 0)).collect();

    Heatmap {
        days: rows.iter().map(|&d| WEEK[d]).collect(),
        periods: cols.iter().map(|&h| hour_period(h as u32)).collect(),
        counts: rows
            .iter()
            .map(|&d| cols.iter().map(|&h| grid[d][h]).collect())
            .collect(),
    }
}

fn weekday_as_name<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

fn month_as_name<S: Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(month.name())
}

#[allow(clippy::ptr_arg)]
fn weekdays_as_names<S: Serializer>(days: &Vec<Weekday>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(days.iter().map(|d| weekday_name(*d)))
}
