//! # chatstats
//!
//! Parses exported WhatsApp chat transcripts and computes who talks how much,
//! how fast they answer, when the chat is active, who starts conversations and
//! which words each participant uses most.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = TranscriptParser::new().parse_str(
//!         "01/01/23, 09:00 - Alice: ciao\n\
//!          01/01/23, 09:05 - Bob: ciao! come stai?\n\
//!          01/01/23, 12:00 - Alice: bene grazie",
//!     )?;
//!
//!     let report = ChatReport::analyze(&transcript, &AnalysisConfig::default());
//!
//!     assert_eq!(report.temporal.message_counts["Alice"], 2);
//!     assert_eq!(report.temporal.conversation_starts["Alice"], 2);
//!     println!("{}", to_text(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - header line recognition
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), folds raw lines into messages
//! - [`message`] - [`Message`] and the chronologically ordered [`Transcript`]
//! - [`analysis`] - temporal tables and per-sender word frequencies
//! - [`config`] - [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - filtering, [`ChatReport`](core::ChatReport) and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) selection
//! - [`cli`] - CLI arguments (feature `cli`)
//! - [`error`] - [`ChatstatsError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

pub use error::{ChatstatsError, Result};
pub use message::{Message, Transcript};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ChatstatsError, Result};
    pub use crate::message::{Message, Transcript};

    pub use crate::parser::TranscriptParser;

    pub use crate::analysis::{
        EmojiFilter, KeepEmoji, LexicalAnalyzer, Stopwords, TemporalStats, UnicodeEmojiFilter,
    };
    pub use crate::config::AnalysisConfig;

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::report::ChatReport;

    pub use crate::core::output::{to_text, write_text};
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
