//! JSON output writer.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;

use serde::Serialize;

use crate::analysis::{WordCount, WordStats};
use crate::core::report::ChatReport;
use crate::error::Result;

use super::duration_seconds;

/// Serialized shape of a [`ChatReport`].
///
/// Durations become fractional seconds and dates `YYYY-MM-DD` strings.
#[derive(Serialize)]
struct JsonReport<'a> {
    total_messages: usize,
    total_words: usize,
    average_words_per_message: Option<f64>,
    dropped_lines: usize,
    conversation_gap_minutes: i64,
    message_counts: &'a BTreeMap<String, usize>,
    response_times_seconds: BTreeMap<&'a str, f64>,
    word_stats: &'a BTreeMap<String, WordStats>,
    hourly: &'a BTreeMap<u32, usize>,
    daily: BTreeMap<String, usize>,
    conversation_starts: &'a BTreeMap<String, usize>,
    top_words: Vec<JsonSenderWords<'a>>,
}

#[derive(Serialize)]
struct JsonSenderWords<'a> {
    sender: &'a str,
    words: &'a [WordCount],
}

impl<'a> JsonReport<'a> {
    fn from_report(report: &'a ChatReport) -> Self {
        let t = &report.temporal;
        Self {
            total_messages: t.total_messages,
            total_words: t.total_words,
            average_words_per_message: t.average_words_per_message(),
            dropped_lines: report.dropped_lines,
            conversation_gap_minutes: report.config.conversation_gap_minutes,
            message_counts: &t.message_counts,
            response_times_seconds: t
                .response_times
                .iter()
                .map(|(sender, mean)| (sender.as_str(), duration_seconds(*mean)))
                .collect(),
            word_stats: &t.word_stats,
            hourly: &t.hourly,
            daily: t
                .daily
                .iter()
                .map(|(date, n)| (date.format("%Y-%m-%d").to_string(), *n))
                .collect(),
            conversation_starts: &t.conversation_starts,
            top_words: report
                .words
                .iter()
                .map(|w| JsonSenderWords {
                    sender: &w.sender,
                    words: w.top_words(),
                })
                .collect(),
        }
    }
}

/// Writes the report to a pretty-printed JSON file.
///
/// # Format
/// ```json
/// {
///   "total_messages": 3,
///   "message_counts": {"Alice": 2, "Bob": 1},
///   "response_times_seconds": {"Bob": 600.0},
///   "daily": {"2023-01-01": 3},
///   "top_words": [{"sender": "Alice", "words": [{"word": "ciao", "count": 2}]}]
/// }
/// ```
pub fn write_json(report: &ChatReport, output_path: &str) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Same as [`write_json`], returned as a string.
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_report(
        report,
    ))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::parser::TranscriptParser;
    use serde_json::Value;
    use tempfile::NamedTempFile;

    fn report() -> ChatReport {
        let t = TranscriptParser::new()
            .parse_str(
                "01/01/23, 09:00 - Alice: ciao ciao\n\
                 01/01/23, 09:10 - Bob: pizza\n\
                 01/01/23, 09:11 - Alice: ciao",
            )
            .unwrap();
        ChatReport::analyze(&t, &AnalysisConfig::default())
    }

    #[test]
    fn test_to_json_fields() {
        let v: Value = serde_json::from_str(&to_json(&report()).unwrap()).unwrap();
        assert_eq!(v["total_messages"], 3);
        assert_eq!(v["total_words"], 4);
        assert_eq!(v["message_counts"]["Alice"], 2);
        assert_eq!(v["response_times_seconds"]["Bob"], 600.0);
        assert_eq!(v["response_times_seconds"]["Alice"], 60.0);
        assert_eq!(v["word_stats"]["Alice"]["sum"], 3);
        assert_eq!(v["hourly"]["9"], 3);
        assert_eq!(v["daily"]["2023-01-01"], 3);
        assert_eq!(v["conversation_starts"]["Alice"], 1);
        assert!(v["conversation_starts"].get("Bob").is_none());
        assert_eq!(v["top_words"][0]["sender"], "Alice");
        assert_eq!(v["top_words"][0]["words"][0]["word"], "ciao");
        assert_eq!(v["top_words"][0]["words"][0]["count"], 3);
    }

    #[test]
    fn test_write_json() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        write_json(&report(), path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains(r#""total_messages": 3"#));
    }

    #[test]
    fn test_empty_report() {
        let report = ChatReport::analyze(
            &crate::message::Transcript::default(),
            &AnalysisConfig::default(),
        );
        let v: Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(v["total_messages"], 0);
        assert!(v["average_words_per_message"].is_null());
        assert_eq!(v["top_words"], Value::Array(vec![]));
    }
}
