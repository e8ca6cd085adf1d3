//! Temporal analytics: who talks, when, and how fast they answer.
//!
//! Every function here is a pure read of a [`Transcript`] and returns an owned
//! table. An empty transcript yields empty tables.
//!
//! # Response times
//!
//! A response sample exists for message `i > 0` only when its sender differs
//! from the sender of message `i - 1`. The sample is the gap between the two
//! timestamps and is attributed to the sender of message `i`. Senders without
//! any sample are absent from [`response_times`].
//!
//! # Conversation starts
//!
//! The first message is always a start. Any later message is a start when the
//! gap since the previous message is strictly greater than the threshold.
//!
//! ```
//! use chatstats::analysis::temporal;
//! use chatstats::parser::TranscriptParser;
//! use chrono::TimeDelta;
//!
//! let t = TranscriptParser::new().parse_str(
//!     "01/01/23, 09:00 - Alice: morning\n01/01/23, 11:00 - Alice: anyone?",
//! )?;
//! let starts = temporal::conversation_starts(&t, TimeDelta::minutes(90));
//! assert_eq!(starts["Alice"], 2);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::collections::BTreeMap;

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::message::{Message, Transcript};

/// Per-message fields that depend on the previous message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageContext<'a> {
    pub message: &'a Message,
    pub previous_sender: Option<&'a str>,
    pub time_since_previous: Option<TimeDelta>,
    pub is_conversation_start: bool,
    pub hour_of_day: u32,
    pub date: NaiveDate,
    pub word_count: usize,
}

impl MessageContext<'_> {
    /// The response time carried by this message, if the sender changed.
    pub fn response_time(&self) -> Option<TimeDelta> {
        match self.previous_sender {
            Some(prev) if prev != self.message.sender => self.time_since_previous,
            _ => None,
        }
    }
}

/// One response-time sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseSample<'a> {
    /// Position of the responding message in the transcript.
    pub index: usize,
    pub sender: &'a str,
    pub delay: TimeDelta,
}

/// Word count aggregate for one sender.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WordStats {
    /// Total words across the sender's messages.
    pub sum: usize,
    /// Number of messages.
    pub messages: usize,
    /// `sum / messages`.
    pub mean: f64,
}

/// Computes the derived per-message fields.
pub fn annotate(transcript: &Transcript, gap: TimeDelta) -> Vec<MessageContext<'_>> {
    let mut previous: Option<&Message> = None;
    transcript
        .iter()
        .map(|message| {
            let time_since_previous = previous.map(|p| message.timestamp - p.timestamp);
            let ctx = MessageContext {
                message,
                previous_sender: previous.map(|p| p.sender.as_str()),
                time_since_previous,
                is_conversation_start: time_since_previous.is_none_or(|d| d > gap),
                hour_of_day: message.hour(),
                date: message.date(),
                word_count: message.word_count(),
            };
            previous = Some(message);
            ctx
        })
        .collect()
}

/// Number of messages per sender.
pub fn message_counts(transcript: &Transcript) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for msg in transcript {
        *counts.entry(msg.sender.clone()).or_insert(0) += 1;
    }
    counts
}

/// All response samples, in transcript order.
pub fn response_samples(transcript: &Transcript) -> Vec<ResponseSample<'_>> {
    transcript
        .messages()
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[0].sender != pair[1].sender)
        .map(|(i, pair)| ResponseSample {
            index: i + 1,
            sender: pair[1].sender.as_str(),
            delay: pair[1].timestamp - pair[0].timestamp,
        })
        .collect()
}

/// Mean response time per sender.
///
/// Senders that never answered someone else are omitted.
pub fn response_times(transcript: &Transcript) -> BTreeMap<String, TimeDelta> {
    let mut totals: BTreeMap<&str, (TimeDelta, i32)> = BTreeMap::new();
    for sample in response_samples(transcript) {
        let entry = totals.entry(sample.sender).or_insert((TimeDelta::zero(), 0));
        entry.0 += sample.delay;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(sender, (sum, n))| (sender.to_string(), sum / n))
        .collect()
}

/// Word sum and mean per sender.
pub fn word_stats(transcript: &Transcript) -> BTreeMap<String, WordStats> {
    let mut stats: BTreeMap<String, WordStats> = BTreeMap::new();
    for msg in transcript {
        let entry = stats.entry(msg.sender.clone()).or_insert(WordStats {
            sum: 0,
            messages: 0,
            mean: 0.0,
        });
        entry.sum += msg.word_count();
        entry.messages += 1;
    }
    for entry in stats.values_mut() {
        entry.mean = entry.sum as f64 / entry.messages as f64;
    }
    stats
}

/// Message count per hour of day. Only hours with messages appear.
pub fn hourly_distribution(transcript: &Transcript) -> BTreeMap<u32, usize> {
    let mut hours = BTreeMap::new();
    for msg in transcript {
        *hours.entry(msg.hour()).or_insert(0) += 1;
    }
    hours
}

/// Message count per calendar date, in chronological order.
pub fn daily_distribution(transcript: &Transcript) -> BTreeMap<NaiveDate, usize> {
    let mut days = BTreeMap::new();
    for msg in transcript {
        *days.entry(msg.date()).or_insert(0) += 1;
    }
    days
}

/// Number of conversations opened by each sender.
pub fn conversation_starts(transcript: &Transcript, gap: TimeDelta) -> BTreeMap<String, usize> {
    let mut starts = BTreeMap::new();
    for ctx in annotate(transcript, gap) {
        if ctx.is_conversation_start {
            *starts.entry(ctx.message.sender.clone()).or_insert(0) += 1;
        }
    }
    starts
}

/// Every temporal table for one transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct TemporalStats {
    pub total_messages: usize,
    pub total_words: usize,
    pub message_counts: BTreeMap<String, usize>,
    pub response_times: BTreeMap<String, TimeDelta>,
    pub word_stats: BTreeMap<String, WordStats>,
    pub hourly: BTreeMap<u32, usize>,
    pub daily: BTreeMap<NaiveDate, usize>,
    pub conversation_starts: BTreeMap<String, usize>,
}

impl TemporalStats {
    /// Computes all tables.
    pub fn compute(transcript: &Transcript, config: &AnalysisConfig) -> Self {
        let word_stats = word_stats(transcript);
        Self {
            total_messages: transcript.len(),
            total_words: word_stats.values().map(|w| w.sum).sum(),
            message_counts: message_counts(transcript),
            response_times: response_times(transcript),
            word_stats,
            hourly: hourly_distribution(transcript),
            daily: daily_distribution(transcript),
            conversation_starts: conversation_starts(transcript, config.conversation_gap()),
        }
    }

    /// Mean words per message across the whole chat, `None` when empty.
    pub fn average_words_per_message(&self) -> Option<f64> {
        (self.total_messages > 0).then(|| self.total_words as f64 / self.total_messages as f64)
    }
}
