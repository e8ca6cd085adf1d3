//! Message and transcript types.
//!
//! [`Message`] is the atomic unit produced by the transcript parser.
//! [`Transcript`] is the time-ordered, immutable sequence of messages handed
//! to the analytics engines.
//!
//! # Examples
//!
//! ```
//! use chatstats::{Message, Transcript};
//! use chrono::NaiveDate;
//!
//! let at = |h, m| NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(h, m, 0).unwrap();
//!
//! let transcript = Transcript::from_messages(vec![
//!     Message::new(at(9, 5), "Bob", "hello there"),
//!     Message::new(at(9, 0), "Alice", "hi"),
//! ]);
//!
//! // Always sorted by timestamp
//! assert_eq!(transcript.messages()[0].sender(), "Alice");
//! assert_eq!(transcript.senders(), vec!["Alice", "Bob"]);
//! ```

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single chat message recovered from a transcript.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Minute-precision send time |
/// | `sender` | `String` | Display name before the first `": "` |
/// | `text` | `String` | Body, continuation lines joined with a space |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, as written in the export (no timezone).
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub sender: String,

    /// Message body.
    ///
    /// May be empty (e.g. media placeholders with nothing after the colon).
    pub text: String,
}

impl Message {
    /// Creates a new message.
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

    /// Hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Calendar date, without the time part.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Number of whitespace-delimited tokens in the body.
    ///
    /// This is a raw cardinality: no punctuation, stopword or emoji filtering.
    ///
    /// ```
    /// use chatstats::Message;
    /// use chrono::NaiveDateTime;
    ///
    /// let ts = NaiveDateTime::parse_from_str("2023-01-01 09:00", "%Y-%m-%d %H:%M").unwrap();
    /// assert_eq!(Message::new(ts, "Bob", "hello  there !").word_count(), 3);
    /// assert_eq!(Message::new(ts, "Bob", "").word_count(), 0);
    /// ```
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Appends a continuation line: a single space plus the trimmed line.
    pub fn append_continuation(&mut self, line: &str) {
        self.text.push(' ');
        self.text.push_str(line.trim());
    }
}

/// An immutable, chronologically ordered sequence of messages.
///
/// Every constructor stable-sorts by timestamp, so messages sharing a
/// timestamp keep their input order. Engines only ever read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
    dropped_lines: usize,
}

impl Transcript {
    /// Builds a transcript from messages in any order.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self::with_dropped_lines(messages, 0)
    }

    pub(crate) fn with_dropped_lines(mut messages: Vec<Message>, dropped_lines: usize) -> Self {
        // `sort_by_key` is stable
        messages.sort_by_key(|m| m.timestamp);
        Self {
            messages,
            dropped_lines,
        }
    }

    /// Returns the ordered messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns an iterator over the ordered messages.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if no message was parsed.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of continuation lines dropped because no message preceded them.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Distinct senders in order of first appearance.
    pub fn senders(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for msg in &self.messages {
            if !seen.contains(&msg.sender.as_str()) {
                seen.push(msg.sender.as_str());
            }
        }
        seen
    }

    /// All texts from `sender`, joined with single spaces.
    pub fn text_by_sender(&self, sender: &str) -> String {
        self.messages
            .iter()
            .filter(|m| m.sender == sender)
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Consumes the transcript and returns the messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
