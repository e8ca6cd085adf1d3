//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure
//! - [`OutputFormat`] - Output format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CONVERSATION_GAP_MINUTES, DEFAULT_TOP_WORDS};

/// Message, response-time and word statistics for WhatsApp chat exports.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt -f json -o stats.json
    chatstats chat.txt --gap 60 --top 20 --after 2024-01-01
    chatstats chat.txt --no-default-stopwords --stopwords english.txt")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Silence in minutes after which a message starts a new conversation
    #[arg(long, value_name = "MINUTES", default_value_t = DEFAULT_CONVERSATION_GAP_MINUTES,
          value_parser = clap::value_parser!(i64).range(0..))]
    pub gap: i64,

    /// Number of top words listed per sender
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Extra stopword file, one word per line
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<String>,

    /// Do not use the built-in Italian stopword list
    #[arg(long)]
    pub no_default_stopwords: bool,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this sender only
    #[arg(long, value_name = "SENDER")]
    pub from: Option<String>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Pretty JSON object
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
