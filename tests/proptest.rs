//! Property-based tests for chatlens.
//!
//! Transcripts are assembled from predefined fragments so generation stays
//! fast and every generated header is valid.

use proptest::prelude::*;

use chatlens::config::MEDIA_OMITTED;
use chatlens::prelude::*;

const SENDERS: &[&str] = &["Alice", "Bob", "Charlie", "Иван", "+91 98765 43210"];

const BODIES: &[&str] = &[
    "hello there",
    "hi",
    "<Media omitted>",
    "see https://x.example and www.y.example",
    "😂😂 lol",
    "pizza party tonight",
    "",
    "note: bring snacks",
    "Привет мир",
];

const CONTINUATIONS: &[&str] = &["and more", "   ", "", "😂", "- dash start"];

/// One transcript line: a message header, a notification or a continuation.
fn arb_line() -> impl Strategy<Value = String> {
    let stamp = (1u32..=28, 1u32..=12, 0u32..24, 0u32..60)
        .prop_map(|(d, m, h, min)| format!("{d:02}/{m:02}/23, {h:02}:{min:02}"));

    prop_oneof![
        6 => (stamp.clone(), prop::sample::select(SENDERS), prop::sample::select(BODIES))
            .prop_map(|(stamp, sender, body)| format!("{stamp} - {sender}: {body}")),
        1 => (stamp, prop::sample::select(SENDERS))
            .prop_map(|(stamp, sender)| format!("{stamp} - {sender} joined")),
        2 => prop::sample::select(CONTINUATIONS).prop_map(str::to_string),
    ]
}

fn arb_transcript(max_lines: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_line(), 0..max_lines).prop_map(|lines| lines.join("\n"))
}

fn scopes(messages: &[Message]) -> Vec<Scope> {
    let mut scopes = vec![Scope::Overall];
    scopes.extend(participants(messages).into_iter().map(Scope::Participant));
    scopes.push(Scope::participant("Nobody"));
    scopes
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// Every line becomes a record, a folded continuation or preamble
    #[test]
    fn parsing_is_total(input in "[a-zA-Z0-9 /:,.\\-\\[\\]\n]{0,200}") {
        let transcript = parse_transcript(&input);
        prop_assert_eq!(
            transcript.len() + transcript.lines_folded + transcript.preamble.len(),
            input.lines().count()
        );
    }

    /// Generated transcripts: one record per header line
    #[test]
    fn one_record_per_header(input in arb_transcript(40)) {
        let headers = input.lines().filter(|l| l.contains("/23, ")).count();
        prop_assert_eq!(parse(&input).len(), headers);
    }

    /// Parsing the same text twice gives the same records
    #[test]
    fn parsing_is_idempotent(input in arb_transcript(40)) {
        prop_assert_eq!(parse_transcript(&input), parse_transcript(&input));
    }

    // ============================================
    // AGGREGATION PROPERTIES
    // ============================================

    /// Monthly, daily and weekday counts all add up to message_count
    #[test]
    fn timelines_sum_to_message_count(input in arb_transcript(40)) {
        let messages = parse(&input);
        let config = AnalysisConfig::default();

        for scope in scopes(&messages) {
            let count = fetch_stats(&scope, &messages, &config).message_count;
            let monthly: usize = monthly_timeline(&scope, &messages).iter().map(|p| p.count).sum();
            let daily: usize = daily_timeline(&scope, &messages).iter().map(|p| p.count).sum();
            let weekly: usize = week_activity_map(&scope, &messages).iter().map(|d| d.count).sum();
            prop_assert_eq!(monthly, count);
            prop_assert_eq!(daily, count);
            prop_assert_eq!(weekly, count);
            prop_assert_eq!(activity_heat_map(&scope, &messages).total(), count);
        }
    }

    /// word_count is the token count of in-scope, non-media bodies
    #[test]
    fn word_count_matches_tokens(input in arb_transcript(40)) {
        let messages = parse(&input);
        let config = AnalysisConfig::default();

        for scope in scopes(&messages) {
            let expected: usize = messages
                .iter()
                .filter(|m| scope.matches(m) && m.text != MEDIA_OMITTED)
                .map(|m| m.text.split_whitespace().count())
                .sum();
            prop_assert_eq!(fetch_stats(&scope, &messages, &config).word_count, expected);
        }
    }

    /// Busy-user shares add up to 100 up to rounding and match their counts
    #[test]
    fn busy_user_percentages(input in arb_transcript(40)) {
        let messages = parse(&input);
        let busy = most_busy_users(&Scope::Overall, &messages, &AnalysisConfig::default()).unwrap();
        let total: usize = busy.shares.iter().map(|s| s.count).sum();

        // each row is off by at most half a hundredth
        let sum: f64 = busy.shares.iter().map(|s| s.percent).sum();
        let slack = 0.005 * busy.shares.len() as f64 + 1e-9;
        prop_assert!(sum <= 100.0 + slack, "sum was {}", sum);

        for share in &busy.shares {
            let exact = 100.0 * share.count as f64 / total as f64;
            prop_assert!((share.percent - exact).abs() <= 0.005 + 1e-9);
        }
        prop_assert!(busy.top.len() <= 5);
    }

    /// Identical input gives an identical report
    #[test]
    fn analyze_is_idempotent(input in arb_transcript(30)) {
        let messages = parse(&input);
        let config = AnalysisConfig::default();
        prop_assert_eq!(
            analyze(&Scope::Overall, &messages, &config),
            analyze(&Scope::Overall, &messages, &config)
        );
    }

    /// Counting tables are sorted busiest first
    #[test]
    fn ranked_tables_are_descending(input in arb_transcript(40)) {
        let messages = parse(&input);
        let report = analyze(&Scope::Overall, &messages, &AnalysisConfig::default());

        prop_assert!(report.week_activity.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(report.month_activity.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(report.common_words.windows(2).all(|w| w[0].count >= w[1].count));
        prop_assert!(report.emojis.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
