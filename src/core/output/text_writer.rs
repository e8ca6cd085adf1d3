//! Plain-text summary writer.

use std::fs;

use chrono::TimeDelta;

use crate::core::report::ChatReport;
use crate::error::Result;

/// Formats a duration as `H:MM:SS`, rounded to whole seconds (halves to
/// even), with a leading `N day(s), ` once it reaches 24 hours.
///
/// ```
/// use chatstats::core::output::format_duration;
/// use chrono::TimeDelta;
///
/// assert_eq!(format_duration(TimeDelta::seconds(75)), "0:01:15");
/// assert_eq!(format_duration(TimeDelta::milliseconds(1_500)), "0:00:02");
/// assert_eq!(format_duration(TimeDelta::milliseconds(22_500)), "0:00:22");
/// assert_eq!(format_duration(TimeDelta::hours(49)), "2 days, 1:00:00");
/// ```
pub fn format_duration(delta: TimeDelta) -> String {
    let total = round_half_even_seconds(delta);
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {clock}"),
        n => format!("{n} days, {clock}"),
    }
}

fn round_half_even_seconds(delta: TimeDelta) -> i64 {
    const NANOS: i128 = 1_000_000_000;
    let nanos = i128::from(delta.num_seconds()) * NANOS + i128::from(delta.subsec_nanos());
    let mut secs = nanos.div_euclid(NANOS);
    let rem = nanos.rem_euclid(NANOS);
    if rem > NANOS / 2 || (rem == NANOS / 2 && secs % 2 != 0) {
        secs += 1;
    }
    i64::try_from(secs).unwrap_or(i64::MAX)
}

/// Renders the report as a console summary.
pub fn to_text(report: &ChatReport) -> String {
    let t = &report.temporal;
    let mut out = String::new();

    out.push_str("=== Chat statistics ===\n");
    out.push_str(&format!("Total messages: {}\n", t.total_messages));
    if report.dropped_lines > 0 {
        out.push_str(&format!(
            "Lines before first message (ignored): {}\n",
            report.dropped_lines
        ));
    }

    out.push_str("\nMessages per sender:\n");
    let mut by_count: Vec<_> = t.message_counts.iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(a.1));
    for (sender, count) in by_count {
        out.push_str(&format!("  {sender}: {count}\n"));
    }

    out.push_str("\nAverage response time:\n");
    for (sender, mean) in &t.response_times {
        out.push_str(&format!("  {sender}: {}\n", format_duration(*mean)));
    }

    out.push_str(&format!("\nTotal words: {}\n", t.total_words));
    out.push_str(&format!(
        "Average words per message: {:.2}\n",
        t.average_words_per_message().unwrap_or(0.0)
    ));
    out.push_str("\nWords per sender (sum / mean):\n");
    for (sender, stats) in &t.word_stats {
        out.push_str(&format!("  {sender}: {} / {:.2}\n", stats.sum, stats.mean));
    }

    out.push_str(&format!(
        "\nConversations started (gap > {} min):\n",
        report.config.conversation_gap_minutes
    ));
    for (sender, count) in &t.conversation_starts {
        out.push_str(&format!("  {sender}: {count}\n"));
    }

    out.push_str("\nMessages by hour:\n");
    for (hour, count) in &t.hourly {
        out.push_str(&format!("  {hour:02}:00  {count}\n"));
    }

    out.push_str("\nMessages by day:\n");
    for (date, count) in &t.daily {
        out.push_str(&format!("  {}  {count}\n", date.format("%Y-%m-%d")));
    }

    for sender_words in &report.words {
        out.push_str(&format!("\nTop words of {}:\n", sender_words.sender));
        for (rank, wc) in sender_words.top_words().iter().enumerate() {
            out.push_str(&format!("  {:>2}. {} ({})\n", rank + 1, wc.word, wc.count));
        }
    }

    out
}

/// Writes the text summary to a file.
pub fn write_text(report: &ChatReport, output_path: &str) -> Result<()> {
    fs::write(output_path, to_text(report))?;
    Ok(())
}
