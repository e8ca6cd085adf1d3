//! Analytics engines over a parsed [`Transcript`](crate::Transcript).
//!
//! - [`temporal`] - message counts, response times, activity by hour/day,
//!   conversation starters
//! - [`lexical`] - per-sender word frequencies after punctuation, stopword
//!   and emoji filtering
//! - [`stopwords`] / [`emoji`] - swappable collaborators of the lexical engine
//!
//! Both engines only read the transcript and return owned tables, so they can
//! be run in any order.

pub mod emoji;
pub mod lexical;
pub mod stopwords;
pub mod temporal;

pub use emoji::{EmojiFilter, KeepEmoji, UnicodeEmojiFilter};
pub use lexical::{LexicalAnalyzer, NULL_TOKEN, SenderWords, WordCount, WordFrequencies};
pub use stopwords::Stopwords;
pub use temporal::{MessageContext, ResponseSample, TemporalStats, WordStats};
