//! Lexical analytics: which words each sender uses most.
//!
//! For every sender the texts are joined and split on whitespace, then each
//! token goes through:
//!
//! 1. ASCII punctuation stripped from both ends, lowercased
//! 2. dropped if empty or a stopword
//! 3. emoji removed; if nothing is left it becomes [`NULL_TOKEN`]
//! 4. [`NULL_TOKEN`] dropped
//!
//! Surviving tokens are counted and ranked by descending frequency, ties in
//! order of first appearance.
//!
//! ```
//! use chatstats::analysis::{KeepEmoji, LexicalAnalyzer, Stopwords};
//!
//! let analyzer = LexicalAnalyzer::new(Stopwords::from_words(["il"]), KeepEmoji);
//! assert_eq!(analyzer.tokenize("Ciao! il CIAO, mondo"), vec!["ciao", "ciao", "mondo"]);
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::config::DEFAULT_TOP_WORDS;
use crate::message::Transcript;

use super::emoji::{EmojiFilter, UnicodeEmojiFilter};
use super::stopwords::Stopwords;

/// Placeholder for a token that was nothing but emoji. Never counted.
pub const NULL_TOKEN: &str = "null";

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Frequency table for one token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
    ranked: Vec<WordCount>,
}

impl WordFrequencies {
    /// Counts tokens and ranks them.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for token in tokens {
            match counts.get_mut(&token) {
                Some(n) => *n += 1,
                None => {
                    first_seen.push(token.clone());
                    counts.insert(token, 1);
                }
            }
        }

        let mut ranked: Vec<WordCount> = first_seen
            .into_iter()
            .map(|word| {
                let count = counts[&word];
                WordCount { word, count }
            })
            .collect();
        // stable: ties stay in first-seen order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));

        Self { counts, ranked }
    }

    /// The `n` most frequent words.
    pub fn top(&self, n: usize) -> &[WordCount] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// Every word, most frequent first.
    pub fn ranked(&self) -> &[WordCount] {
        &self.ranked
    }

    /// Full word → count map.
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.ranked.len()
    }

    /// Number of counted tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Word usage of one sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderWords {
    pub sender: String,
    pub frequencies: WordFrequencies,
    top_n: usize,
}

impl SenderWords {
    /// The ranked top list, at most the analyzer's `top_n` entries.
    pub fn top_words(&self) -> &[WordCount] {
        self.frequencies.top(self.top_n)
    }
}

/// Tokenizes, filters and ranks words per sender.
///
/// Stopwords and emoji handling are supplied by the caller.
#[derive(Debug, Clone)]
pub struct LexicalAnalyzer<E = UnicodeEmojiFilter> {
    stopwords: Stopwords,
    emoji: E,
    top_n: usize,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new(Stopwords::italian(), UnicodeEmojiFilter)
    }
}

impl<E: EmojiFilter> LexicalAnalyzer<E> {
    /// Creates an analyzer keeping the default top 10.
    pub fn new(stopwords: Stopwords, emoji: E) -> Self {
        Self {
            stopwords,
            emoji,
            top_n: DEFAULT_TOP_WORDS,
        }
    }

    /// Sets how many words each sender's top list keeps.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Turns free text into counted tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(clean_word)
            .filter(|w| !w.is_empty() && !self.stopwords.contains(w))
            .map(|w| self.remove_emoji(&w))
            .filter(|w| w != NULL_TOKEN)
            .collect()
    }

    /// Frequency table for free text.
    pub fn word_frequencies(&self, text: &str) -> WordFrequencies {
        WordFrequencies::from_tokens(self.tokenize(text))
    }

    /// Word usage of a single sender.
    pub fn analyze_sender(&self, transcript: &Transcript, sender: &str) -> SenderWords {
        SenderWords {
            sender: sender.to_string(),
            frequencies: self.word_frequencies(&transcript.text_by_sender(sender)),
            top_n: self.top_n,
        }
    }

    /// Word usage of every sender, in order of first appearance.
    pub fn analyze(&self, transcript: &Transcript) -> Vec<SenderWords> {
        let result: Vec<SenderWords> = transcript
            .senders()
            .into_iter()
            .map(|sender| self.analyze_sender(transcript, sender))
            .collect();
        tracing::debug!(senders = result.len(), "computed word frequencies");
        result
    }

    fn remove_emoji(&self, token: &str) -> String {
        let stripped = self.emoji.strip(token);
        if stripped.is_empty() {
            NULL_TOKEN.to_string()
        } else {
            stripped
        }
    }
}

/// Strips ASCII punctuation from both ends and lowercases.
fn clean_word(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_ascii_punctuation())
        .to_lowercase()
}
