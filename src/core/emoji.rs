//! Emoji usage.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::Message;
use crate::core::counter::ranked;
use crate::core::scope::{Scope, apply_scope};

/// A single emoji codepoint. Multi-codepoint sequences (skin tones, ZWJ
/// families, flags) are counted per codepoint.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Presentation}]").expect("valid regex")
});

/// An emoji and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Returns `true` if `c` is an emoji codepoint.
///
/// ```
/// use chatlens::core::emoji::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('❤'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('#'));
/// ```
pub fn is_emoji(c: char) -> bool {
    let mut buf = [0u8; 4];
    !c.is_ascii() && EMOJI.is_match(c.encode_utf8(&mut buf))
}

/// Emoji frequencies in `scope`, most used first.
///
/// Text is scanned codepoint by codepoint, so `"😂😂"` counts twice even
/// without whitespace. Ties keep first-use order.
pub fn emoji_helper(scope: &Scope, records: &[Message]) -> Vec<EmojiCount> {
    let emojis = apply_scope(scope, records)
        .flat_map(|msg| EMOJI.find_iter(&msg.text))
        .map(|m| m.as_str());

    ranked(emojis)
        .into_iter()
        .map(|(emoji, count)| EmojiCount {
            emoji: emoji.to_string(),
            count,
        })
        .collect()
}
