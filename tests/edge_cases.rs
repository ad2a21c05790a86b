//! Edge case tests for chatlens
//!
//! Odd inputs that real exports produce: encodings, line endings, broken
//! headers, unusual senders and bodies.

use chatlens::config::MEDIA_OMITTED;
use chatlens::message::GROUP_NOTIFICATION;
use chatlens::prelude::*;
use chrono::{Datelike, Timelike};

// =========================================================================
// Input shape
// =========================================================================

#[test]
fn test_empty_and_blank_input() {
    assert!(parse("").is_empty());

    let transcript = parse_transcript("\n\n   \n");
    assert!(transcript.is_empty());
    assert_eq!(transcript.preamble.len(), 3);
}

#[test]
fn test_text_without_any_header() {
    let transcript = parse_transcript("hello\nworld");
    assert!(transcript.messages.is_empty());
    assert_eq!(transcript.preamble, vec!["hello", "world"]);
}

#[test]
fn test_bom_and_crlf() {
    let messages = parse("\u{FEFF}01/02/23, 10:00 - Alice: hi\r\n01/02/23, 10:01 - Bob: yo\r\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].text, "hi");
    assert_eq!(messages[1].sender, "Bob");
}

#[test]
fn test_impossible_date_is_folded() {
    let transcript = parse_transcript(
        "01/02/23, 10:00 - Alice: before\n\
         31/02/23, 10:01 - Bob: not a real day\n",
    );
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript.lines_folded, 1);
    assert!(transcript.messages[0].text.ends_with("31/02/23, 10:01 - Bob: not a real day"));
}

#[test]
fn test_header_without_trailing_separator_is_continuation() {
    let messages = parse(
        "01/02/23, 10:00 - Alice: see you at\n\
         01/02/23, 10:30\n",
    );
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "see you at\n01/02/23, 10:30");
}

#[test]
fn test_non_monotonic_timestamps_are_kept_in_file_order() {
    let messages = parse(
        "02/02/23, 10:00 - Alice: later\n\
         01/02/23, 10:00 - Bob: earlier\n",
    );
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[1].sender, "Bob");
    assert!(messages[0].timestamp > messages[1].timestamp);
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_separator_variants() {
    for line in [
        "15/02/23, 10:00 - A: x",
        "15.02.23, 10:00 - A: x",
        "15-02-23, 10:00 - A: x",
        "15.02.2023, 10:00 - A: x",
    ] {
        let messages = parse(line);
        assert_eq!(messages.len(), 1, "{line}");
        assert_eq!(messages[0].timestamp.month(), 2, "{line}");
        assert_eq!(messages[0].timestamp.year(), 2023, "{line}");
    }
}

#[test]
fn test_meridiem_variants() {
    for line in [
        "1/2/23, 9:05 pm - A: x",
        "1/2/23, 9:05 PM - A: x",
        "1/2/23, 9:05\u{202F}pm - A: x",
        "1/2/23, 9:05pm - A: x",
    ] {
        let messages = parse(line);
        assert_eq!(messages.len(), 1, "{line:?}");
        assert_eq!(messages[0].timestamp.hour(), 21, "{line:?}");
    }
}

#[test]
fn test_twelve_am_is_midnight() {
    let messages = parse("1/2/23, 12:30 am - A: x");
    assert_eq!(messages[0].timestamp.hour(), 0);
    assert_eq!(messages[0].timestamp.minute(), 30);
}

#[test]
fn test_lowercase_meridiem_stays_day_first() {
    let transcript = parse_transcript(
        "05/03/23, 9:15 pm - Rahul: hi\n\
         06/03/23, 10:00 am - Priya: hello",
    );
    assert_eq!(transcript.date_order, DateOrder::DayFirst);
    let first = &transcript.messages[0];
    assert_eq!((first.timestamp.day(), first.timestamp.month()), (5, 3));
    assert_eq!(first.timestamp.hour(), 21);
}

#[test]
fn test_uppercase_meridiem_reads_month_first() {
    let transcript = parse_transcript("[01/02/23, 10:00:00 AM] Alice: hi");
    assert_eq!(transcript.date_order, DateOrder::MonthFirst);
    assert_eq!(transcript.messages[0].timestamp.month(), 1);
}

#[test]
fn test_forced_date_order() {
    let parser =
        TranscriptParser::with_config(ParserConfig::new().with_date_order(DateOrder::DayFirst));
    let transcript = parser.parse_str("1/2/23, 9:05 pm - A: x");
    assert_eq!(transcript.date_order, DateOrder::DayFirst);
    assert_eq!(transcript.messages[0].timestamp.month(), 2);
}

// =========================================================================
// Senders and bodies
// =========================================================================

#[test]
fn test_unicode_and_phone_number_senders() {
    let messages = parse(
        "01/02/23, 10:00 - Иван: Привет мир!\n\
         01/02/23, 10:01 - +91 98765 43210: hello\n\
         01/02/23, 10:02 - 🔥FireUser🔥: 🔥\n",
    );
    assert_eq!(messages[0].sender, "Иван");
    assert_eq!(messages[1].sender, "+91 98765 43210");
    assert_eq!(messages[2].sender, "🔥FireUser🔥");
}

#[test]
fn test_colon_in_body_is_kept() {
    let messages = parse("01/02/23, 10:00 - Alice: note: meet at 10:30");
    assert_eq!(messages[0].sender, "Alice");
    assert_eq!(messages[0].text, "note: meet at 10:30");
}

#[test]
fn test_notification_with_colon_free_text() {
    let messages = parse("01/02/23, 10:00 - Alice changed this group's icon");
    assert_eq!(messages[0].sender, GROUP_NOTIFICATION);
    assert!(messages[0].is_notification());
}

#[test]
fn test_media_placeholder_must_match_exactly() {
    let messages = parse(
        "01/02/23, 10:00 - Alice: <Media omitted>\n\
         01/02/23, 10:01 - Alice: <Media omitted> lol\n",
    );
    let config = AnalysisConfig::default();
    let stats = fetch_stats(&Scope::Overall, &messages, &config);
    assert_eq!(stats.media_count, 1);
    assert_eq!(stats.word_count, 3);
    assert_eq!(messages[0].text, MEDIA_OMITTED);
}

#[test]
fn test_ios_media_placeholders() {
    let messages = parse(
        "[01/02/23, 10:00:00] Alice: \u{200E}image omitted\n\
         [01/02/23, 10:01:00] Bob: \u{200E}sticker omitted\n\
         [01/02/23, 10:02:00] Bob: nice image",
    );
    assert_eq!(messages[0].text, "image omitted");

    let config = AnalysisConfig::default();
    let stats = fetch_stats(&Scope::Overall, &messages, &config);
    assert_eq!(stats.media_count, 2);
    assert_eq!(stats.word_count, 2);

    let words = most_common_words(&Scope::Overall, &messages, &config);
    assert!(words.iter().all(|w| w.word != "omitted"));
}

#[test]
fn test_custom_media_placeholder() {
    let messages = parse("01/02/23, 10:00 - Alice: <Medien ausgeschlossen>");
    let config = AnalysisConfig::default().with_media_placeholder("<Medien ausgeschlossen>");
    assert_eq!(fetch_stats(&Scope::Overall, &messages, &config).media_count, 1);
}

// =========================================================================
// Aggregation boundaries
// =========================================================================

#[test]
fn test_empty_records_give_empty_report() {
    let report = analyze(&Scope::Overall, &[], &AnalysisConfig::default());
    assert_eq!(report.stats, Stats::default());
    assert!(report.daily_timeline.is_empty());
    assert!(report.week_activity.is_empty());
    let busy = report.busy_users.unwrap();
    assert!(busy.top.is_empty());
}

#[test]
fn test_single_participant_is_whole_chat() {
    let messages = parse("01/02/23, 10:00 - Alice: one\n01/02/23, 10:01 - Alice: two");
    let busy = most_busy_users(&Scope::Overall, &messages, &AnalysisConfig::default()).unwrap();
    assert_eq!(busy.shares.len(), 1);
    assert!((busy.shares[0].percent - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_notifications_only_chat() {
    let messages = parse("01/02/23, 10:00 - Alice created group \"x\"\n01/02/23, 10:01 - Bob joined");
    assert!(participants(&messages).is_empty());
    let busy = most_busy_users(&Scope::Overall, &messages, &AnalysisConfig::default()).unwrap();
    assert!(busy.shares.is_empty());
    // still counted as messages, and their words count too
    let stats = fetch_stats(&Scope::Overall, &messages, &AnalysisConfig::default());
    assert_eq!(stats.message_count, 2);
    assert_eq!(stats.word_count, 6);
}

#[test]
fn test_without_stopwords() {
    let messages = parse("01/02/23, 10:00 - Alice: the the pizza");
    let config = AnalysisConfig::default().without_stopwords();
    let words = most_common_words(&Scope::Overall, &messages, &config);
    assert_eq!(words[0].word, "the");
    assert_eq!(words[0].count, 2);
}
