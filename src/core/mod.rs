//! Report assembly and output.
//!
//! This module contains:
//! - [`filter`] - Message filtering by date and sender
//! - [`report`] - [`ChatReport`], every result table for one transcript
//! - [`output`] - Format writers (text, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::AnalysisConfig;
//! use chatstats::core::{ChatReport, FilterConfig, apply_filters, to_json};
//! use chatstats::parser::TranscriptParser;
//!
//! let transcript = TranscriptParser::new().parse_str("01/01/23, 09:00 - Alice: ciao")?;
//! let transcript = apply_filters(transcript, &FilterConfig::new().with_sender("Alice"));
//! let report = ChatReport::analyze(&transcript, &AnalysisConfig::default());
//! let json = to_json(&report)?;
//! assert!(json.contains("\"total_messages\": 1"));
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json-output"))]
//! # fn main() {}
//! ```

pub mod filter;
pub mod output;
pub mod report;

pub use filter::{FilterConfig, apply_filters};
pub use report::ChatReport;

pub use output::{format_duration, to_text, write_text};
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
