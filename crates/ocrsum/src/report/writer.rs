//! Deterministic serialization of an aggregate.
//!
//! Output is a function of the aggregate alone. Class rows follow the fixed
//! class order, per-character rows ascend by character value, and confusion
//! rows sort by errors descending, marked descending, then key bytes
//! ascending, so equal aggregates always serialize to identical bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::aggregate::{Aggregate, ClassBucket, ConfusionEntry, OpCounts};
use crate::charset::{render_char, CharClass};
use crate::error::Result;
use crate::report::format::{
    CLASS_HEADER, CONFUSION_HEADER, DIVIDER, OPS_HEADER, PCT_PLACEHOLDER, TITLE_PREFIX,
};

/// Write `aggregate` as report text.
pub fn write_report<W: Write>(out: &mut W, aggregate: &Aggregate) -> Result<()> {
    writeln!(out, "{}{}", TITLE_PREFIX, env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "{DIVIDER}")?;
    write_value(out, aggregate.characters, "Characters")?;
    write_value(out, aggregate.errors, "Errors")?;
    write_pct(out, diff(aggregate.characters, aggregate.errors), aggregate.characters)?;
    writeln!(out, "%  Accuracy")?;
    writeln!(out)?;
    write_value(out, aggregate.reject_characters, "Reject Characters")?;
    write_value(out, aggregate.suspect_markers, "Suspect Markers")?;
    write_value(out, aggregate.false_marks, "False Marks")?;
    write_pct(
        out,
        aggregate.reject_characters as i128 + aggregate.suspect_markers as i128,
        aggregate.characters,
    )?;
    writeln!(out, "%  Characters Marked")?;
    write_pct(
        out,
        diff(aggregate.characters, aggregate.unmarked_ops.errors),
        aggregate.characters,
    )?;
    writeln!(out, "%  Accuracy After Correction")?;
    writeln!(out)?;
    writeln!(out, "{OPS_HEADER}")?;
    write_ops(out, aggregate.marked_ops, "Marked")?;
    write_ops(out, aggregate.unmarked_ops, "Unmarked")?;
    write_ops(out, aggregate.total_ops, "Total")?;
    writeln!(out)?;
    writeln!(out, "{CLASS_HEADER}")?;
    for class in CharClass::ALL {
        let bucket = aggregate.class_bucket(class);
        if bucket.count > 0 {
            write_bucket_row(out, bucket, class.name())?;
        }
    }
    write_bucket_row(out, aggregate.total_bucket(), "Total")?;
    if aggregate.errors > 0 {
        writeln!(out)?;
        writeln!(out, "{CONFUSION_HEADER}")?;
        for (key, entry) in sorted_confusions(aggregate) {
            write!(out, "{:8} {:8}   ", entry.errors, entry.marked)?;
            out.write_all(key)?;
            writeln!(out)?;
        }
    }
    if aggregate.characters > 0 {
        writeln!(out)?;
        writeln!(out, "{CLASS_HEADER}")?;
        for (value, bucket) in aggregate.character_buckets() {
            if bucket.count > 0 {
                let token = format!("{{{}}}", render_char(value));
                write_bucket_row(out, bucket, &token)?;
            }
        }
    }
    Ok(())
}

/// Render `aggregate` as report text in memory.
pub fn render_report(aggregate: &Aggregate) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    write_report(&mut out, aggregate)?;
    Ok(out)
}

/// Write `aggregate` as a report file at `path`.
pub fn write_report_file<P: AsRef<Path>>(path: P, aggregate: &Aggregate) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_report(&mut out, aggregate)?;
    out.flush()?;
    tracing::debug!("wrote report to {}", path.display());
    Ok(())
}

fn sorted_confusions(aggregate: &Aggregate) -> Vec<(&[u8], ConfusionEntry)> {
    let mut rows: Vec<_> = aggregate.confusions().collect();
    rows.sort_by(|(key_a, a), (key_b, b)| {
        b.errors
            .cmp(&a.errors)
            .then_with(|| b.marked.cmp(&a.marked))
            .then_with(|| key_a.cmp(key_b))
    });
    rows
}

fn write_value<W: Write>(out: &mut W, value: u64, label: &str) -> Result<()> {
    writeln!(out, "{value:8}   {label}")?;
    Ok(())
}

fn write_ops<W: Write>(out: &mut W, ops: OpCounts, label: &str) -> Result<()> {
    writeln!(
        out,
        "{:8} {:8} {:8} {:8}   {}",
        ops.ins, ops.subst, ops.del, ops.errors, label
    )?;
    Ok(())
}

fn write_bucket_row<W: Write>(out: &mut W, bucket: ClassBucket, label: &str) -> Result<()> {
    write!(out, "{:8} {:8} ", bucket.count, bucket.missed)?;
    write_pct(out, diff(bucket.count, bucket.missed), bucket.count)?;
    writeln!(out, "   {label}")?;
    Ok(())
}

fn write_pct<W: Write>(out: &mut W, numerator: i128, denominator: u64) -> Result<()> {
    if denominator == 0 {
        write!(out, "{PCT_PLACEHOLDER}")?;
    } else {
        write!(out, "{:8.2}", 100.0 * numerator as f64 / denominator as f64)?;
    }
    Ok(())
}

/// Difference of two counters, widened so deficits stay representable.
fn diff(a: u64, b: u64) -> i128 {
    a as i128 - b as i128
}
