//! Output format selection.
//!
//! Library-level format type, independent of the CLI parser.
//!
//! # Example
//!
//! ```rust
//! use chatstats::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("stats.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! assert_eq!(OutputFormat::default(), OutputFormat::Text);
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::core::report::ChatReport;
use crate::error::ChatstatsError;

/// Output format for a report.
///
/// - [`Text`](OutputFormat::Text) - console summary
/// - [`Json`](OutputFormat::Json) - one pretty JSON object
/// - [`Csv`](OutputFormat::Csv) - `;`-delimited long table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    /// File extension for this format, without dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all accepted format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Detects format from a file path based on extension.
    pub fn from_path(path: &str) -> Result<Self, ChatstatsError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatstatsError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Text => "default",
            OutputFormat::Json => "json-output",
            OutputFormat::Csv => "csv-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes a report to a file in the given format.
///
/// ```rust,no_run
/// # fn example(report: &chatstats::core::ChatReport) -> chatstats::Result<()> {
/// use chatstats::format::{OutputFormat, write_to_format};
///
/// write_to_format(report, "stats.txt", OutputFormat::Text)?;
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file cannot
/// be written.
pub fn write_to_format(
    report: &ChatReport,
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatstatsError> {
    match format {
        OutputFormat::Text => crate::core::output::write_text(report, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders a report to a string in the given format.
pub fn to_format_string(report: &ChatReport, format: OutputFormat) -> Result<String, ChatstatsError> {
    match format {
        OutputFormat::Text => Ok(crate::core::output::to_text(report)),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(report),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

fn missing_feature(format: OutputFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "Output format {format:?} requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}
