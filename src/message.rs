//! The parsed transcript record.
//!
//! This module provides [`Message`], one utterance of a chat transcript.
//! The parser produces a chronological `Vec<Message>`; the aggregation
//! functions in [`crate::core`] only ever read it.
//!
//! # Overview
//!
//! A message consists of:
//! - `timestamp` taken from the line's leading timestamp token
//! - `sender`, or [`GROUP_NOTIFICATION`] for system lines
//! - `text`, the raw body (multi-line bodies joined with `\n`)
//!
//! Calendar fields (year, month, weekday, hour, ...) are derived from the
//! timestamp on demand instead of being stored alongside it.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1)
//!     .unwrap()
//!     .and_hms_opt(22, 15, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "hello there");
//!
//! assert_eq!(msg.sender(), "Alice");
//! assert_eq!(msg.month_name(), "February");
//! assert_eq!(msg.day_name(), "Wednesday");
//! assert_eq!(msg.hour(), 22);
//! assert!(!msg.is_notification());
//! ```

use chrono::{Datelike, Month, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Pseudo-sender for lines with no human author (joins, leaves, encryption notices).
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// One parsed transcript entry.
///
/// # Serialization
///
/// ```
/// use chatlens::Message;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
/// let msg = Message::new(ts, "Alice", "Hello!");
/// let json = serde_json::to_string(&msg)?;
/// let parsed: Message = serde_json::from_str(&json)?;
///
/// assert_eq!(msg, parsed);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, in the exporting device's local time.
    pub timestamp: NaiveDateTime,

    /// Display name of the author, or [`GROUP_NOTIFICATION`].
    pub sender: String,

    /// Message body.
    ///
    /// May contain newlines for multi-line messages. Media attachments are
    /// represented by the platform's placeholder text, e.g. `<Media omitted>`.
    pub text: String,
}

impl Message {
    /// Creates a message from a human sender.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Creates a system notification (no human sender).
    pub fn notification(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, text)
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns `true` for system lines that carry the notification sentinel.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is exactly one of `placeholders`.
    pub fn is_media(&self, placeholders: &[String]) -> bool {
        placeholders.iter().any(|p| self.text == *p)
    }

    // =========================================================================
    // Derived calendar fields
    // =========================================================================

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month number, 1 through 12.
    pub fn month_num(&self) -> u32 {
        self.timestamp.month()
    }

    pub fn month(&self) -> Month {
        month_from_number(self.month_num())
    }

    /// Full English month name, e.g. `"February"`.
    pub fn month_name(&self) -> &'static str {
        self.month().name()
    }

    /// Calendar date without the time of day.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Day of the month.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Full English weekday name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        weekday_name(self.weekday())
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }
}

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Maps 1..=12 to a [`Month`]; out-of-range values clamp to December.
pub(crate) fn month_from_number(n: u32) -> Month {
    u8::try_from(n)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .unwrap_or(Month::December)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_message_new() {
        let msg = Message::new(ts(2023, 2, 1, 10, 0), "Alice", "Hello");
        assert_eq!(msg.sender(), "Alice");
        assert_eq!(msg.text(), "Hello");
        assert!(!msg.is_notification());
    }

    #[test]
    fn test_notification_uses_sentinel() {
        let msg = Message::notification(ts(2023, 2, 1, 10, 0), "Alice joined");
        assert_eq!(msg.sender(), GROUP_NOTIFICATION);
        assert!(msg.is_notification());
    }

    #[test]
    fn test_derived_fields() {
        // 2023-12-31 was a Sunday
        let msg = Message::new(ts(2023, 12, 31, 23, 59), "Bob", "bye");
        assert_eq!(msg.year(), 2023);
        assert_eq!(msg.month_num(), 12);
        assert_eq!(msg.month(), Month::December);
        assert_eq!(msg.month_name(), "December");
        assert_eq!(msg.day(), 31);
        assert_eq!(msg.weekday(), Weekday::Sun);
        assert_eq!(msg.day_name(), "Sunday");
        assert_eq!(msg.hour(), 23);
        assert_eq!(msg.minute(), 59);
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_is_media() {
        let placeholders = vec!["<Media omitted>".to_string()];
        let media = Message::new(ts(2023, 2, 1, 10, 0), "Alice", "<Media omitted>");
        let text = Message::new(ts(2023, 2, 1, 10, 0), "Alice", "<Media omitted> lol");
        assert!(media.is_media(&placeholders));
        assert!(!text.is_media(&placeholders));
        assert!(!media.is_media(&[]));
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sat), "Saturday");
    }

    #[test]
    fn test_month_from_number() {
        assert_eq!(month_from_number(1), Month::January);
        assert_eq!(month_from_number(7), Month::July);
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::new(ts(2024, 6, 15, 12, 0), "Alice", "Hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("Alice"));
        assert!(json.contains("2024-06-15T12:00:00"));
    }
}
