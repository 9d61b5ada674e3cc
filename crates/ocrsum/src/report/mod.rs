//! Accuracy report text: format constants, reading and writing.
//!
//! A report is a fixed header (title, divider, scalar counts, operation
//! counts) followed by up to three tables: class accuracy, confusions and
//! per-character accuracy. [`read_report`] accumulates a report into an
//! [`crate::Aggregate`]; [`write_report`] serializes an aggregate back into
//! the identical layout. Reading what the writer produced and writing it
//! again reproduces the bytes exactly.

pub mod format;
mod lines;
mod reader;
mod writer;

pub use reader::{read_report, read_report_file, ReadSummary, ReadWarning};
pub use writer::{render_report, write_report, write_report_file};
