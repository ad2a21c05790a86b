//! Timestamp header tokenizer.
//!
//! Every new message in an export starts with a timestamp header. Two shapes
//! are accepted:
//!
//! ```text
//! dash shape:     01/02/23, 10:00 - Alice: hello
//! bracket shape:  [01/02/23, 10:00:15 PM] Alice: hello
//! ```
//!
//! Grammar (no regex involved):
//!
//! ```text
//! header  := date ", " time " - "
//!          | "[" date ", " time "] "
//! date    := d{1,2} SEP d{1,2} SEP (d{2} | d{4})      SEP is one of / . -, used twice
//! time    := d{1,2} ":" d{2} [ ":" d{2} ] [ [" " | U+202F] ("am" | "pm") ]
//! ```
//!
//! Scanning only checks the shape. Turning the fields into a calendar
//! value happens in [`RawTimestamp::resolve`], because the meaning of the
//! first two date fields depends on the [`DateOrder`] of the whole export.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::config::DateOrder;

/// Narrow no-break space, written before AM/PM by recent exports.
const NARROW_NBSP: char = '\u{202F}';

/// Left-to-right mark some iOS exports put in front of each line.
pub(crate) const LRM: char = '\u{200E}';

/// Which header layout a line used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShape {
    /// `date, time - `
    Dash,
    /// `[date, time] `
    Bracket,
}

/// 12-hour clock marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Numeric fields of a header, before any calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTimestamp {
    /// First date field (day or month, depending on order)
    pub first: u32,
    /// Second date field (month or day)
    pub second: u32,
    pub year: u32,
    /// Number of year digits (2 or 4)
    pub year_digits: usize,
    pub hour: u32,
    pub minute: u32,
    pub seconds: u32,
    pub meridiem: Option<Meridiem>,
    /// `AM`/`PM` written in capitals, as US iOS exports do
    pub meridiem_upper: bool,
}

impl RawTimestamp {
    /// Builds the calendar value for a concrete field order.
    ///
    /// Returns `None` for impossible dates or times (`31/02/23`, `25:00`,
    /// `13:00 PM`). `DateOrder::Auto` is treated as day-first.
    pub fn resolve(&self, order: DateOrder) -> Option<NaiveDateTime> {
        let (day, month) = match order {
            DateOrder::MonthFirst => (self.second, self.first),
            DateOrder::DayFirst | DateOrder::Auto => (self.first, self.second),
        };

        let year = if self.year_digits == 2 {
            2000 + self.year
        } else {
            self.year
        };

        let hour = match self.meridiem {
            None => self.hour,
            Some(_) if !(1..=12).contains(&self.hour) => return None,
            Some(Meridiem::Am) => self.hour % 12,
            Some(Meridiem::Pm) => self.hour % 12 + 12,
        };

        let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, self.minute, self.seconds)?;
        Some(date.and_time(time))
    }
}

/// A recognised header and whatever follows it on the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub stamp: RawTimestamp,
    pub shape: HeaderShape,
    /// `sender: body` or a notification text
    pub rest: &'a str,
}

/// Byte cursor over one line.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_str(&mut self, s: &str) -> bool {
        if self.src[self.pos..].starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    fn eat_char(&mut self, c: char) -> bool {
        if self.src[self.pos..].starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Reads between `min` and `max` ASCII digits. Returns the value and digit count.
    fn number(&mut self, min: usize, max: usize) -> Option<(u32, usize)> {
        let start = self.pos;
        let mut value: u32 = 0;
        while self.pos - start < max {
            match self.peek() {
                Some(b @ b'0'..=b'9') => {
                    value = value * 10 + u32::from(b - b'0');
                    self.pos += 1;
                }
                _ => break,
            }
        }
        let len = self.pos - start;
        if len < min {
            return None;
        }
        // A longer digit run means the field did not end where the grammar expects.
        if matches!(self.peek(), Some(b'0'..=b'9')) {
            return None;
        }
        Some((value, len))
    }

    /// Reads an optional AM/PM marker. The flag is `true` when it is uppercase.
    fn meridiem(&mut self) -> Option<(Meridiem, bool)> {
        let save = self.pos;
        // Separator before AM/PM is optional.
        if !self.eat(b' ') {
            self.eat_char(NARROW_NBSP);
        }

        let raw = self.src[self.pos..].get(..2);
        let meridiem = match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("am") => Some(Meridiem::Am),
            Some("pm") => Some(Meridiem::Pm),
            _ => None,
        };
        match meridiem {
            Some(m) => {
                let upper = raw.is_some_and(|r| r.bytes().all(|b| b.is_ascii_uppercase()));
                self.pos += 2;
                Some((m, upper))
            }
            None => {
                self.pos = save;
                None
            }
        }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }
}

/// Tries to read a timestamp header at the start of `line`.
///
/// Returns `None` when the line does not start with a header; such lines
/// are continuations of the previous message.
///
/// # Example
///
/// ```
/// use chatlens::parsing::timestamp::{scan_header, HeaderShape};
///
/// let header = scan_header("01/02/23, 10:00 - Alice: hello").unwrap();
/// assert_eq!(header.shape, HeaderShape::Dash);
/// assert_eq!(header.rest, "Alice: hello");
///
/// assert!(scan_header("just some text").is_none());
/// ```
pub fn scan_header(line: &str) -> Option<Header<'_>> {
    let line = line.trim_start_matches(LRM);
    let mut cur = Cursor::new(line);

    let shape = if cur.eat(b'[') {
        HeaderShape::Bracket
    } else {
        HeaderShape::Dash
    };

    let (first, _) = cur.number(1, 2)?;
    let sep = cur.peek().filter(|b| matches!(b, b'/' | b'.' | b'-'))?;
    cur.pos += 1;
    let (second, _) = cur.number(1, 2)?;
    if !cur.eat(sep) {
        return None;
    }
    let (year, year_digits) = cur.number(2, 4)?;
    if year_digits == 3 {
        return None;
    }

    if !cur.eat_str(", ") {
        return None;
    }

    let (hour, _) = cur.number(1, 2)?;
    if !cur.eat(b':') {
        return None;
    }
    let (minute, _) = cur.number(2, 2)?;
    let seconds = if cur.eat(b':') {
        cur.number(2, 2)?.0
    } else {
        0
    };
    let (meridiem, meridiem_upper) = match cur.meridiem() {
        Some((m, upper)) => (Some(m), upper),
        None => (None, false),
    };

    let closed = match shape {
        HeaderShape::Dash => cur.eat_str(" - "),
        HeaderShape::Bracket => cur.eat_str("] "),
    };
    if !closed {
        return None;
    }

    Some(Header {
        stamp: RawTimestamp {
            first,
            second,
            year,
            year_digits,
            hour,
            minute,
            seconds,
            meridiem,
            meridiem_upper,
        },
        shape,
        rest: cur.rest(),
    })
}

/// Picks a concrete field order from the headers of one export.
///
/// A first field above 12 can only be a day and a second field above 12
/// can only be a day too; the side with more such headers wins. Without
/// any evidence, an uppercase `AM`/`PM` points to a US export (month
/// first). Everything else is read day first, including Android exports
/// with a lowercase `am`/`pm`.
pub fn detect_date_order<'a, I>(stamps: I) -> DateOrder
where
    I: IntoIterator<Item = &'a RawTimestamp>,
{
    let mut day_first = 0usize;
    let mut month_first = 0usize;
    let mut us_clock = false;

    for stamp in stamps {
        if stamp.first > 12 {
            day_first += 1;
        }
        if stamp.second > 12 {
            month_first += 1;
        }
        us_clock |= stamp.meridiem_upper;
    }

    if day_first > month_first {
        DateOrder::DayFirst
    } else if month_first > day_first {
        DateOrder::MonthFirst
    } else if us_clock {
        DateOrder::MonthFirst
    } else {
        DateOrder::DayFirst
    }
}
