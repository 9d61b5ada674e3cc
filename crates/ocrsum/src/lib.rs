//! ocrsum - OCR Accuracy Report Aggregation
//!
//! ocrsum reads the accuracy reports produced for individual documents and
//! sums them into one combined report in the same text format, preserving
//! per-class, per-character and confusion-pair statistics.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use ocrsum::{sum_files, write_report_file, SumConfig};
//!
//! # fn main() -> ocrsum::Result<()> {
//! let paths = vec![PathBuf::from("page1.txt"), PathBuf::from("page2.txt")];
//! let outcome = sum_files(&paths, &SumConfig::default())?;
//! write_report_file("total.txt", &outcome.aggregate)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - **Character Set** (`charset`): token decoding, classification and
//!   rendering of character values
//! - **Aggregate Store** (`aggregate`): scalar counters, class/character
//!   buckets and the confusion map
//! - **Report** (`report`): the staged reader and the deterministic writer
//!   for the report text format
//! - **Summing** (`sum`): multi-file orchestration, sequential or parallel

#![deny(unsafe_code)]

pub mod aggregate;
pub mod charset;
pub mod config;
pub mod error;
pub mod report;
pub mod sum;

pub use aggregate::{Aggregate, ClassBucket, ConfusionEntry, OpCounts};
pub use charset::{decode_token, render_char, CharClass, CharValue, INVALID_CHAR, NEWLINE_CHAR};
pub use config::SumConfig;
pub use error::{OcrsumError, Result};
pub use report::{
    read_report, read_report_file, render_report, write_report, write_report_file, ReadSummary,
    ReadWarning,
};
pub use sum::{sum_files, SkippedFile, SumOutcome, STDIN_PATH};
