//! Line-level parsing building blocks.
//!
//! [`timestamp`] recognises the header that starts every new message;
//! [`split_sender`] separates the author from the body once a header has
//! been found. The transcript-level state machine lives in
//! [`crate::parser`].

pub mod timestamp;

pub use timestamp::{
    Header, HeaderShape, Meridiem, RawTimestamp, detect_date_order, scan_header,
};

/// Splits the text after a header into `(sender, body)`.
///
/// The split happens once, on the first `": "`, so bodies that contain
/// colons stay intact. A line ending in a bare `:` is a sender with an empty
/// first line (the body continues on the next lines). A left-to-right mark
/// at the start of the body is dropped. Returns `None` when
/// there is no sender, i.e. for system notifications.
///
/// # Example
///
/// ```
/// use chatlens::parsing::split_sender;
///
/// assert_eq!(split_sender("Alice: see: this"), Some(("Alice", "see: this")));
/// assert_eq!(split_sender("Bob left"), None);
/// ```
pub fn split_sender(rest: &str) -> Option<(&str, &str)> {
    if let Some((sender, body)) = rest.split_once(": ") {
        let sender = sender.trim();
        let body = body.trim_start_matches(timestamp::LRM);
        return (!sender.is_empty()).then_some((sender, body));
    }

    let sender = rest.strip_suffix(':')?.trim();
    (!sender.is_empty()).then_some((sender, ""))
}
