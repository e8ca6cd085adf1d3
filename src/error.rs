//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library. Library users get typed errors they can match on,
//! application users get messages that point at the offending input.
//!
//! Only a malformed header timestamp is fatal while parsing. Orphan
//! continuation lines, empty transcripts and senders without response samples
//! are absorbed by the parser and the engines and never surface here.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::Transcript;
///
/// fn load() -> Result<Transcript> {
///     Ok(Transcript::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred while reading a transcript or writing a report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A header line matched the message pattern but its date or time
    /// could not be parsed (e.g. `32/13/23, 25:00`).
    ///
    /// Parsing stops at the first such line; no partial transcript is returned.
    #[error("Malformed timestamp on line {line_number}: {line:?} ({source})")]
    MalformedTimestamp {
        /// 1-based line number in the transcript.
        line_number: usize,
        /// Full content of the offending line.
        line: String,
        /// The underlying chrono error.
        #[source]
        source: chrono::ParseError,
    },

    /// The input doesn't have the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a malformed timestamp error for a header line.
    pub fn malformed_timestamp(
        line_number: usize,
        line: impl Into<String>,
        source: chrono::ParseError,
    ) -> Self {
        ChatstatsError::MalformedTimestamp {
            line_number,
            line: line.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is a malformed timestamp error.
    pub fn is_malformed_timestamp(&self) -> bool {
        matches!(self, ChatstatsError::MalformedTimestamp { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }

    /// Returns the offending line number for parse failures.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ChatstatsError::MalformedTimestamp { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
