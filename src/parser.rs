//! Transcript parser.
//!
//! Turns the raw text of a WhatsApp export into a [`Transcript`]. Lines that
//! don't start a message are folded into the message before them.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::TranscriptParser;
//!
//! let input = "\
//! 01/01/23, 09:00 - Alice: first line
//! second line
//! 01/01/23, 09:02 - Bob: hello there";
//!
//! let transcript = TranscriptParser::new().parse_str(input)?;
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.messages()[0].text(), "first line second line");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::error::{ChatstatsError, Result};
use crate::message::{Message, Transcript};
use crate::parsing::{LineKind, classify_line};

/// Parser for `DD/MM/YY, HH:MM - SENDER: BODY` transcripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser;

/// Parser state between lines.
enum State {
    /// No header seen yet; continuation lines have nowhere to go.
    AwaitingHeader,
    /// A message is open and collects continuation lines.
    Building(Message),
}

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Returns the human-readable name of this parser.
    pub fn name(&self) -> &'static str {
        "WhatsApp TXT"
    }

    /// Reads and parses a transcript file.
    ///
    /// ```rust,no_run
    /// use chatstats::parser::TranscriptParser;
    ///
    /// let transcript = TranscriptParser::new().parse("chat.txt".as_ref())?;
    /// # Ok::<(), chatstats::ChatstatsError>(())
    /// ```
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses a transcript held in memory.
    ///
    /// The first header line whose date or time fails to parse aborts the
    /// whole run with [`ChatstatsError::MalformedTimestamp`].
    pub fn parse_str(&self, content: &str) -> Result<Transcript> {
        let mut messages = Vec::new();
        let mut state = State::AwaitingHeader;
        let mut dropped = 0usize;

        for (idx, line) in content.lines().enumerate() {
            match classify_line(line) {
                LineKind::Header(header) => {
                    let timestamp = header
                        .timestamp()
                        .map_err(|e| ChatstatsError::malformed_timestamp(idx + 1, line, e))?;
                    let msg = Message::new(timestamp, header.sender, header.body);
                    if let State::Building(done) =
                        std::mem::replace(&mut state, State::Building(msg))
                    {
                        messages.push(done);
                    }
                }
                LineKind::Continuation(text) => match &mut state {
                    State::Building(msg) => msg.append_continuation(text),
                    State::AwaitingHeader => {
                        tracing::debug!(line = idx + 1, "dropping line before first message");
                        dropped += 1;
                    }
                },
            }
        }

        if let State::Building(done) = state {
            messages.push(done);
        }

        tracing::debug!(
            messages = messages.len(),
            dropped_lines = dropped,
            "parsed transcript"
        );

        Ok(Transcript::with_dropped_lines(messages, dropped))
    }
}
