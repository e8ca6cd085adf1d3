//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::report::ChatReport;
use crate::error::Result;

use super::duration_seconds;

const HEADER: [&str; 4] = ["Table", "Sender", "Key", "Value"];

/// Writes the report as a long table with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Table`, `Sender`, `Key`, `Value`
/// - Tables: `summary`, `messages`, `response_time` (seconds), `words`,
///   `conversation_starts`, `hourly`, `daily`, `top_words`
/// - Encoding: UTF-8
pub fn write_csv(report: &ChatReport, output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(report, file)
}

/// Same as [`write_csv`], returned as a string.
pub fn to_csv(report: &ChatReport) -> Result<String> {
    let mut buf = Vec::new();
    write_records(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_records<W: Write>(report: &ChatReport, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(HEADER)?;

    for row in build_rows(report) {
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

fn build_rows(report: &ChatReport) -> Vec<[String; 4]> {
    let t = &report.temporal;
    let row = |table: &str, sender: &str, key: &str, value: String| {
        [table.to_string(), sender.to_string(), key.to_string(), value]
    };
    let mut rows = Vec::new();

    rows.push(row("summary", "", "total_messages", t.total_messages.to_string()));
    rows.push(row("summary", "", "total_words", t.total_words.to_string()));
    if let Some(avg) = t.average_words_per_message() {
        rows.push(row("summary", "", "average_words", format!("{avg:.4}")));
    }
    rows.push(row("summary", "", "dropped_lines", report.dropped_lines.to_string()));

    for (sender, count) in &t.message_counts {
        rows.push(row("messages", sender, "count", count.to_string()));
    }
    for (sender, mean) in &t.response_times {
        rows.push(row(
            "response_time",
            sender,
            "mean_seconds",
            duration_seconds(*mean).to_string(),
        ));
    }
    for (sender, stats) in &t.word_stats {
        rows.push(row("words", sender, "sum", stats.sum.to_string()));
        rows.push(row("words", sender, "mean", format!("{:.4}", stats.mean)));
    }
    for (sender, count) in &t.conversation_starts {
        rows.push(row("conversation_starts", sender, "count", count.to_string()));
    }
    for (hour, count) in &t.hourly {
        rows.push(row("hourly", "", &hour.to_string(), count.to_string()));
    }
    for (date, count) in &t.daily {
        rows.push(row(
            "daily",
            "",
            &date.format("%Y-%m-%d").to_string(),
            count.to_string(),
        ));
    }
    for sender_words in &report.words {
        for wc in sender_words.top_words() {
            rows.push(row("top_words", &sender_words.sender, &wc.word, wc.count.to_string()));
        }
    }

    rows
}
