//! Restrict a transcript by date range and sender before analysis.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from specific user |
//!
//! # Example
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::parser::TranscriptParser;
//!
//! # fn main() -> chatstats::Result<()> {
//! let transcript = TranscriptParser::new().parse_str(
//!     "01/01/24, 09:00 - Alice: old\n15/06/24, 09:00 - Alice: new\n15/06/24, 09:05 - Bob: hi",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_sender("alice");
//!
//! let filtered = apply_filters(transcript, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.messages()[0].text(), "new");
//! # Ok(())
//! # }
//! ```
//!
//! Filtering happens before analysis, so response times and conversation
//! starts are computed over the remaining messages only.

use chrono::NaiveDate;

use crate::error::{ChatstatsError, Result};
use crate::message::Transcript;

/// Configuration for filtering messages by date and sender.
///
/// Filters are combined with AND logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the sender filter. Matching is case-insensitive for ASCII.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    fn matches(&self, sender: &str, date: NaiveDate) -> bool {
        if let Some(ref from) = self.from {
            if !sender.eq_ignore_ascii_case(from) {
                return false;
            }
        }
        if self.after.is_some_and(|after| date < after) {
            return false;
        }
        if self.before.is_some_and(|before| date > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatsError::invalid_date(date_str))
}

/// Keeps only the messages matching all active filters.
///
/// Order is preserved; an inactive config returns the transcript unchanged.
pub fn apply_filters(transcript: Transcript, config: &FilterConfig) -> Transcript {
    if !config.is_active() {
        return transcript;
    }

    let dropped = transcript.dropped_lines();
    let kept: Vec<_> = transcript
        .into_messages()
        .into_iter()
        .filter(|msg| config.matches(&msg.sender, msg.date()))
        .collect();
    tracing::debug!(kept = kept.len(), "applied filters");
    Transcript::with_dropped_lines(kept, dropped)
}
