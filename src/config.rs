//! Configuration types for the analytics engines.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::new()
//!     .with_conversation_gap_minutes(60)
//!     .with_top_words(5);
//!
//! assert_eq!(config.conversation_gap().num_minutes(), 60);
//! ```

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Default silence, in minutes, after which a message opens a new conversation.
pub const DEFAULT_CONVERSATION_GAP_MINUTES: i64 = 90;

/// Default length of each sender's ranked word list.
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Configuration for temporal and lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// A message is a conversation start if the gap since the previous
    /// message is strictly greater than this (default: 90)
    pub conversation_gap_minutes: i64,

    /// Number of entries kept in each sender's top-words list (default: 10)
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            conversation_gap_minutes: DEFAULT_CONVERSATION_GAP_MINUTES,
            top_words: DEFAULT_TOP_WORDS,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the conversation gap threshold in minutes.
    #[must_use]
    pub fn with_conversation_gap_minutes(mut self, minutes: i64) -> Self {
        self.conversation_gap_minutes = minutes;
        self
    }

    /// Sets the length of the top-words list.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// The conversation gap threshold as a duration.
    pub fn conversation_gap(&self) -> TimeDelta {
        TimeDelta::minutes(self.conversation_gap_minutes)
    }
}
