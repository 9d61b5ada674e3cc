//! Staged reading of accuracy reports.
//!
//! A report is consumed in two phases. The header phase (title through the
//! operation-count rows) is strict: any missing line or unparsable count is
//! a format error, and the aggregate is untouched until the whole header has
//! validated. The table phase is tolerant: tables end at the first row that
//! does not parse as two counts, truncation is not an error, and a bad
//! character token becomes a warning plus a row under the invalid sentinel.
//!
//! The class-accuracy section is never parsed. Its rows are a projection of
//! the per-character table, so the reader skips them and rebuilds the class
//! buckets while scanning per-character rows.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::aggregate::{Aggregate, OpCounts};
use crate::charset::decode_token;
use crate::error::{OcrsumError, Result};
use crate::report::format::{CHAR_TOKEN_OFFSET, CONFUSION_KEY_OFFSET, DIVIDER, TITLE_PREFIX};
use crate::report::lines::LineScanner;

/// A recoverable oddity noticed while reading, tied to its line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadWarning {
    pub line: u64,
    pub message: String,
}

/// What one successful read contributed.
#[derive(Debug, Clone, Serialize)]
pub struct ReadSummary {
    /// Path or `<stdin>`.
    pub source: String,
    pub confusion_rows: usize,
    pub character_rows: usize,
    pub warnings: Vec<ReadWarning>,
}

/// Read one report from `bytes` and accumulate it into `aggregate`.
///
/// On error the aggregate is exactly as it was before the call.
pub fn read_report(source: &str, bytes: &[u8], aggregate: &mut Aggregate) -> Result<ReadSummary> {
    let mut reader = ReportReader {
        scanner: LineScanner::new(bytes),
        source,
        warnings: Vec::new(),
    };

    let title = reader.require_line("title line")?;
    if !title.starts_with(TITLE_PREFIX.as_bytes()) {
        return Err(reader.format_error("not an accuracy report (bad title line)"));
    }
    let divider = reader.require_line("divider line")?;
    if divider != DIVIDER.as_bytes() {
        return Err(reader.format_error("missing divider line"));
    }
    let characters = reader.read_count("characters")?;
    let errors = reader.read_count("errors")?;
    reader.skip_line("accuracy line")?;
    reader.skip_line("separator after accuracy")?;
    let reject_characters = reader.read_count("reject characters")?;
    let suspect_markers = reader.read_count("suspect markers")?;
    let false_marks = reader.read_count("false marks")?;
    reader.skip_line("characters-marked line")?;
    reader.skip_line("corrected-accuracy line")?;
    reader.skip_line("separator before operations")?;
    reader.skip_line("operation header")?;
    let marked_ops = reader.read_ops("marked operations")?;
    let unmarked_ops = reader.read_ops("unmarked operations")?;
    let total_ops = reader.read_ops("total operations")?;
    reader.skip_line("separator after operations")?;

    // The header is valid; from here on nothing can fail hard.
    aggregate.characters += characters;
    aggregate.errors += errors;
    aggregate.reject_characters += reject_characters;
    aggregate.suspect_markers += suspect_markers;
    aggregate.false_marks += false_marks;
    aggregate.marked_ops.accumulate(marked_ops);
    aggregate.unmarked_ops.accumulate(unmarked_ops);
    aggregate.total_ops.accumulate(total_ops);

    // Skip the class-accuracy section up to its trailing blank line.
    while let Some(line) = reader.next_line() {
        if line.is_empty() {
            break;
        }
    }

    let mut confusion_rows = 0;
    if errors > 0 && reader.next_line().is_some() {
        // The consumed line was the confusion header.
        while let Some(line) = reader.next_line() {
            let Some([row_errors, row_marked]) = parse_counts::<2>(line) else {
                break;
            };
            let key = match line.get(CONFUSION_KEY_OFFSET..) {
                Some(key) => key,
                None => {
                    reader.warn("confusion row too short, key missing".to_string());
                    &[]
                }
            };
            aggregate.record_confusion(key, row_errors, row_marked);
            confusion_rows += 1;
        }
    }

    let mut character_rows = 0;
    if characters > 0 && reader.next_line().is_some() {
        // The consumed line was the per-character header.
        while let Some(line) = reader.next_line() {
            let Some([count, missed]) = parse_counts::<2>(line) else {
                break;
            };
            let token = line.get(CHAR_TOKEN_OFFSET..).unwrap_or(&[]);
            let value = decode_token(token);
            if value.is_invalid() {
                reader.warn(format!(
                    "invalid character token {:?}",
                    String::from_utf8_lossy(token)
                ));
            }
            aggregate.record_character(value, count, missed);
            character_rows += 1;
        }
    }

    tracing::debug!(
        "{}: {} characters, {} errors, {} confusion rows, {} character rows",
        source,
        characters,
        errors,
        confusion_rows,
        character_rows
    );
    Ok(ReadSummary {
        source: source.to_string(),
        confusion_rows,
        character_rows,
        warnings: reader.warnings,
    })
}

/// Read one report file and accumulate it into `aggregate`.
pub fn read_report_file<P: AsRef<Path>>(path: P, aggregate: &mut Aggregate) -> Result<ReadSummary> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    read_report(&path.display().to_string(), &bytes, aggregate)
}

struct ReportReader<'a> {
    scanner: LineScanner<'a>,
    source: &'a str,
    warnings: Vec<ReadWarning>,
}

impl<'a> ReportReader<'a> {
    fn next_line(&mut self) -> Option<&'a [u8]> {
        self.scanner.next_line()
    }

    fn require_line(&mut self, what: &str) -> Result<&'a [u8]> {
        self.scanner
            .next_line()
            .ok_or_else(|| OcrsumError::format(self.source, format!("unexpected end of file, expected {what}")))
    }

    /// Consume one line whose content does not matter, but which must exist.
    fn skip_line(&mut self, what: &str) -> Result<()> {
        self.require_line(what).map(|_| ())
    }

    /// Leading count on a scalar line; the label after it is not validated.
    fn read_count(&mut self, what: &str) -> Result<u64> {
        let line = self.require_line(what)?;
        parse_counts::<1>(line)
            .map(|[value]| value)
            .ok_or_else(|| self.format_error(format!("expected a {what} count")))
    }

    fn read_ops(&mut self, what: &str) -> Result<OpCounts> {
        let line = self.require_line(what)?;
        parse_counts::<4>(line)
            .map(|[ins, subst, del, errors]| OpCounts { ins, subst, del, errors })
            .ok_or_else(|| self.format_error(format!("expected four counts on the {what} row")))
    }

    fn format_error<S: Into<String>>(&self, message: S) -> OcrsumError {
        OcrsumError::format(
            self.source,
            format!("line {}: {}", self.scanner.line_number(), message.into()),
        )
    }

    fn warn(&mut self, message: String) {
        let line = self.scanner.line_number();
        tracing::warn!("{}: line {}: {}", self.source, line, message);
        self.warnings.push(ReadWarning { line, message });
    }
}

/// Parse the first `N` whitespace-separated fields as counts.
///
/// Returns `None` when fewer than `N` fields are present or any of them is
/// not an unsigned decimal number, which is also how table rows signal the
/// end of their table.
fn parse_counts<const N: usize>(line: &[u8]) -> Option<[u64; N]> {
    let mut fields = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|field| !field.is_empty());
    let mut counts = [0u64; N];
    for slot in &mut counts {
        let field = fields.next()?;
        *slot = std::str::from_utf8(field).ok()?.parse().ok()?;
    }
    Some(counts)
}
