//! Report writers.
//!
//! - [`write_text`] / [`to_text`] - human-readable summary (always available)
//! - [`write_json`] / [`to_json`] - pretty JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - `;`-delimited long table - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::AnalysisConfig;
//! use chatstats::core::ChatReport;
//! use chatstats::core::output::{to_text, write_csv, write_json};
//! use chatstats::parser::TranscriptParser;
//!
//! let transcript = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! let report = ChatReport::analyze(&transcript, &AnalysisConfig::default());
//!
//! write_json(&report, "stats.json")?;
//! write_csv(&report, "stats.csv")?;
//! println!("{}", to_text(&report));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use text_writer::{format_duration, to_text, write_text};

use chrono::TimeDelta;

/// Duration as fractional seconds, for machine-readable outputs.
pub(crate) fn duration_seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}
