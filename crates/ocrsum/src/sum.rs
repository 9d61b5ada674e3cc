//! Summing many reports into one aggregate.
//!
//! Files are read in the order given; `-` names standard input. A format
//! error normally aborts the whole sum, or skips just that file when the
//! configuration is lenient. IO errors are fatal either way. The parallel
//! path reads files on the rayon pool into per-file aggregates and merges
//! them in input order, so its result serializes byte-identically to the
//! sequential sum.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::config::SumConfig;
use crate::error::{OcrsumError, Result};
use crate::report::{read_report, ReadSummary};

/// Command-line spelling of standard input.
pub const STDIN_PATH: &str = "-";

/// Name reported for standard input in errors and summaries.
pub const STDIN_SOURCE: &str = "<stdin>";

/// A file passed over under lenient summing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// The result of summing a set of reports.
#[derive(Debug)]
pub struct SumOutcome {
    pub aggregate: Aggregate,
    /// Per-file read summaries, in input order.
    pub summaries: Vec<ReadSummary>,
    /// Files skipped because of format errors, lenient mode only.
    pub skipped: Vec<SkippedFile>,
}

/// Sum the given report files into one aggregate.
pub fn sum_files(paths: &[PathBuf], config: &SumConfig) -> Result<SumOutcome> {
    tracing::debug!(
        "summing {} report(s), parallel: {}, lenient: {}",
        paths.len(),
        config.parallel,
        config.lenient
    );
    if config.parallel {
        sum_files_parallel(paths, config)
    } else {
        sum_files_sequential(paths, config)
    }
}

fn sum_files_sequential(paths: &[PathBuf], config: &SumConfig) -> Result<SumOutcome> {
    let mut outcome = SumOutcome {
        aggregate: Aggregate::new(),
        summaries: Vec::new(),
        skipped: Vec::new(),
    };
    for path in paths {
        let (source, bytes) = read_input(path)?;
        match read_report(&source, &bytes, &mut outcome.aggregate) {
            Ok(summary) => outcome.summaries.push(summary),
            Err(error) => skip_or_fail(&mut outcome.skipped, config, &source, error)?,
        }
    }
    Ok(outcome)
}

fn sum_files_parallel(paths: &[PathBuf], config: &SumConfig) -> Result<SumOutcome> {
    let per_file: Vec<Result<(Aggregate, ReadSummary)>> = paths
        .par_iter()
        .map(|path| {
            let (source, bytes) = read_input(path)?;
            let mut aggregate = Aggregate::new();
            let summary = read_report(&source, &bytes, &mut aggregate)?;
            Ok((aggregate, summary))
        })
        .collect();

    let mut outcome = SumOutcome {
        aggregate: Aggregate::new(),
        summaries: Vec::new(),
        skipped: Vec::new(),
    };
    // Folding in input order keeps the outcome identical to the sequential
    // sum, including which error wins under strict mode.
    for (path, result) in paths.iter().zip(per_file) {
        match result {
            Ok((aggregate, summary)) => {
                outcome.aggregate.merge(aggregate);
                outcome.summaries.push(summary);
            }
            Err(error) => {
                let source = source_name(path);
                skip_or_fail(&mut outcome.skipped, config, &source, error)?;
            }
        }
    }
    Ok(outcome)
}

fn skip_or_fail(
    skipped: &mut Vec<SkippedFile>,
    config: &SumConfig,
    source: &str,
    error: OcrsumError,
) -> Result<()> {
    match error {
        OcrsumError::Format { .. } if config.lenient => {
            tracing::warn!("skipping {}: {}", source, error);
            skipped.push(SkippedFile {
                path: source.to_string(),
                reason: error.to_string(),
            });
            Ok(())
        }
        other => Err(other),
    }
}

fn source_name(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        STDIN_SOURCE.to_string()
    } else {
        path.display().to_string()
    }
}

fn read_input(path: &Path) -> Result<(String, Vec<u8>)> {
    let source = source_name(path);
    let bytes = if path.as_os_str() == STDIN_PATH {
        let mut bytes = Vec::new();
        std::io::stdin().read_to_end(&mut bytes)?;
        bytes
    } else {
        fs::read(path)?
    };
    Ok((source, bytes))
}
