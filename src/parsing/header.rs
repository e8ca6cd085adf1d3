//! Header line recognition for WhatsApp TXT exports.
//!
//! A header line starts a new message:
//!
//! ```text
//! DD/MM/YY, HH:MM - SENDER: BODY
//! 01/01/23, 09:00 - Alice: hi
//! ```
//!
//! Any other line is a continuation of the previous message.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

/// Regex for a header line. Sender is non-greedy up to the first `": "`,
/// body is the rest of the line and may be empty.
pub const HEADER_PATTERN: &str = r"^(\d{2}/\d{2}/\d{2}), (\d{2}:\d{2}) - (.*?): (.*)";

/// chrono format for the `DATE TIME` pair captured from a header.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M";

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(HEADER_PATTERN).unwrap());

/// The captured parts of a header line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    /// `DD/MM/YY`
    pub date: &'a str,
    /// `HH:MM`
    pub time: &'a str,
    pub sender: &'a str,
    pub body: &'a str,
}

impl HeaderLine<'_> {
    /// Parses the captured date and time into a timestamp.
    ///
    /// Fails when the digits are shaped right but out of range,
    /// e.g. `32/13/23` or `25:61`.
    pub fn timestamp(&self) -> Result<NaiveDateTime, chrono::ParseError> {
        NaiveDateTime::parse_from_str(&format!("{} {}", self.date, self.time), TIMESTAMP_FORMAT)
    }
}

/// Classification of a single transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Starts a new message.
    Header(HeaderLine<'a>),
    /// Belongs to the previous message, if there is one.
    Continuation(&'a str),
}

/// Classifies a line as header or continuation.
///
/// ```
/// use chatstats::parsing::{LineKind, classify_line};
///
/// match classify_line("01/01/23, 09:00 - Alice: hi: there") {
///     LineKind::Header(h) => {
///         assert_eq!(h.sender, "Alice");
///         assert_eq!(h.body, "hi: there");
///     }
///     LineKind::Continuation(_) => unreachable!(),
/// }
///
/// assert!(matches!(classify_line("just text"), LineKind::Continuation(_)));
/// ```
pub fn classify_line(line: &str) -> LineKind<'_> {
    match HEADER_REGEX.captures(line) {
        Some(caps) => {
            let part = |i: usize| caps.get(i).map_or("", |m| m.as_str());
            LineKind::Header(HeaderLine {
                date: part(1),
                time: part(2),
                sender: part(3),
                body: part(4),
            })
        }
        None => LineKind::Continuation(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn header(line: &str) -> HeaderLine<'_> {
        match classify_line(line) {
            LineKind::Header(h) => h,
            LineKind::Continuation(_) => panic!("expected header: {line}"),
        }
    }

    #[test]
    fn test_header_captures() {
        let h = header("15/01/24, 10:30 - Alice: Hello everyone!");
        assert_eq!(h.date, "15/01/24");
        assert_eq!(h.time, "10:30");
        assert_eq!(h.sender, "Alice");
        assert_eq!(h.body, "Hello everyone!");
    }

    #[test]
    fn test_sender_stops_at_first_colon_space() {
        let h = header("15/01/24, 10:30 - Bob: note: see below");
        assert_eq!(h.sender, "Bob");
        assert_eq!(h.body, "note: see below");
    }

    #[test]
    fn test_sender_with_spaces_and_symbols() {
        let h = header("15/01/24, 10:30 - +39 333 123 4567: ciao");
        assert_eq!(h.sender, "+39 333 123 4567");
        assert_eq!(h.body, "ciao");
    }

    #[test]
    fn test_empty_body_is_header() {
        let h = header("15/01/24, 10:30 - Alice: ");
        assert_eq!(h.body, "");
    }

    #[test]
    fn test_missing_colon_space_is_continuation() {
        // System notices have no sender delimiter
        let line = "15/01/24, 10:30 - Messages are end-to-end encrypted";
        assert_eq!(classify_line(line), LineKind::Continuation(line));
        assert!(matches!(
            classify_line("15/01/24, 10:30 - Alice:"),
            LineKind::Continuation(_)
        ));
    }

    #[test]
    fn test_other_layouts_are_continuations() {
        for line in [
            "[15/01/24, 10:30:45] Alice: Hello",
            "15/01/2024, 10:30 - Alice: Hello",
            "1/5/24, 10:30 - Alice: Hello",
            " 15/01/24, 10:30 - Alice: Hello",
            "",
        ] {
            assert!(
                matches!(classify_line(line), LineKind::Continuation(_)),
                "{line}"
            );
        }
    }

    #[test]
    fn test_timestamp_parse() {
        let ts = header("15/01/24, 10:30 - Alice: x").timestamp().unwrap();
        assert_eq!(ts.year(), 2024);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.day(), 15);
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_timestamp_out_of_range() {
        assert!(header("32/13/23, 09:00 - Alice: x").timestamp().is_err());
        assert!(header("01/01/23, 25:00 - Alice: x").timestamp().is_err());
    }
}
