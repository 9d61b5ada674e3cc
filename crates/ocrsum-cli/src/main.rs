//! Command-line interface for summing OCR accuracy reports.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use ocrsum::{sum_files, write_report, write_report_file, SumConfig, SumOutcome};

#[derive(Parser)]
#[command(name = "ocrsum")]
#[command(about = "Sum OCR accuracy reports into one cumulative report")]
#[command(version)]
#[command(after_help = "\
Examples:
  ocrsum page1.txt page2.txt page3.txt
  ocrsum reports/*.txt -o total.txt
  cat page1.txt | ocrsum - reports/page2.txt
  ocrsum --lenient --json reports/*.txt")]
struct Cli {
    /// Accuracy report files to sum (use - for stdin)
    #[arg(required = true, value_name = "REPORT")]
    reports: Vec<PathBuf>,

    /// Output file (omit for stdout)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Skip files with format errors instead of aborting
    #[arg(long)]
    lenient: bool,

    /// Read files in parallel
    #[arg(long)]
    parallel: bool,

    /// Print a JSON summary instead of the report text
    #[arg(long)]
    json: bool,

    /// Log errors only
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,

    /// Increase log detail (-v, -vv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    if let Err(error) = run(cli) {
        eprintln!("ocrsum: {error:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_logging(quiet: bool, verbose: u8) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SumConfig::discover()
        .context("failed to load configuration")?
        .unwrap_or_default();
    if cli.lenient {
        config.lenient = true;
    }
    if cli.parallel {
        config.parallel = true;
    }

    let outcome = sum_files(&cli.reports, &config)?;
    tracing::info!(
        "summed {} report(s), skipped {}",
        outcome.summaries.len(),
        outcome.skipped.len()
    );

    if cli.json {
        let summary = serde_json::to_string_pretty(&json_summary(&outcome))?;
        match &cli.output {
            Some(path) => std::fs::write(path, summary + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => println!("{summary}"),
        }
    } else {
        match &cli.output {
            Some(path) => write_report_file(path, &outcome.aggregate)
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                write_report(&mut out, &outcome.aggregate)?;
                out.flush()?;
            }
        }
    }
    Ok(())
}

fn json_summary(outcome: &SumOutcome) -> serde_json::Value {
    let aggregate = &outcome.aggregate;
    serde_json::json!({
        "characters": aggregate.characters,
        "errors": aggregate.errors,
        "accuracy": accuracy_pct(aggregate.characters, aggregate.errors),
        "reject_characters": aggregate.reject_characters,
        "suspect_markers": aggregate.suspect_markers,
        "false_marks": aggregate.false_marks,
        "marked_ops": aggregate.marked_ops,
        "unmarked_ops": aggregate.unmarked_ops,
        "total_ops": aggregate.total_ops,
        "confusions": aggregate.confusions().count(),
        "distinct_characters": aggregate.character_buckets().count(),
        "files": outcome.summaries,
        "skipped": outcome.skipped,
    })
}

/// Accuracy percentage, or `None` (JSON null) when no characters were seen.
fn accuracy_pct(characters: u64, errors: u64) -> Option<f64> {
    if characters == 0 {
        return None;
    }
    let correct = characters as i128 - errors as i128;
    Some(100.0 * correct as f64 / characters as f64)
}
