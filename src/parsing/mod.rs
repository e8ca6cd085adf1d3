//! Line-level parsing utilities.
//!
//! The transcript parser in [`crate::parser`] drives a state machine over
//! lines; this module decides what each line is.

pub mod header;

pub use header::{HEADER_PATTERN, HeaderLine, LineKind, TIMESTAMP_FORMAT, classify_line};
