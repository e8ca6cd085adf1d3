//! All result tables for one transcript, bundled for the writers.

use crate::analysis::{EmojiFilter, LexicalAnalyzer, SenderWords, TemporalStats};
use crate::config::AnalysisConfig;
use crate::message::Transcript;

/// Temporal and lexical results for a transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReport {
    /// Settings the report was computed with.
    pub config: AnalysisConfig,
    /// Lines dropped by the parser before the first message.
    pub dropped_lines: usize,
    pub temporal: TemporalStats,
    /// Word usage per sender, in order of first appearance.
    pub words: Vec<SenderWords>,
}

impl ChatReport {
    /// Runs both engines with a caller-supplied lexical analyzer.
    ///
    /// The analyzer's own top-N limit applies to the word lists.
    pub fn build<E: EmojiFilter>(
        transcript: &Transcript,
        config: &AnalysisConfig,
        lexical: &LexicalAnalyzer<E>,
    ) -> Self {
        let temporal = TemporalStats::compute(transcript, config);
        let words = lexical.analyze(transcript);
        tracing::info!(
            messages = temporal.total_messages,
            senders = words.len(),
            "analysis complete"
        );
        Self {
            config: config.clone(),
            dropped_lines: transcript.dropped_lines(),
            temporal,
            words,
        }
    }

    /// Runs both engines with the built-in Italian stopwords and emoji
    /// stripping, keeping `config.top_words` words per sender.
    ///
    /// ```
    /// use chatstats::config::AnalysisConfig;
    /// use chatstats::core::ChatReport;
    /// use chatstats::parser::TranscriptParser;
    ///
    /// let t = TranscriptParser::new().parse_str(
    ///     "01/01/23, 09:00 - Alice: ciao! il mare\n01/01/23, 09:03 - Bob: ciao 😂",
    /// )?;
    /// let report = ChatReport::analyze(&t, &AnalysisConfig::default());
    ///
    /// assert_eq!(report.temporal.total_messages, 2);
    /// assert_eq!(report.words[1].top_words()[0].word, "ciao");
    /// # Ok::<(), chatstats::ChatstatsError>(())
    /// ```
    pub fn analyze(transcript: &Transcript, config: &AnalysisConfig) -> Self {
        let lexical: LexicalAnalyzer = LexicalAnalyzer::default().with_top_n(config.top_words);
        Self::build(transcript, config, &lexical)
    }

    /// Words for one sender, if present.
    pub fn words_for(&self, sender: &str) -> Option<&SenderWords> {
        self.words.iter().find(|w| w.sender == sender)
    }
}
