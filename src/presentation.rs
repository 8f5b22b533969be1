// src/presentation.rs
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use line_triage_domain::{StatsMode, Summary};
use line_triage_shared_kernel::{ApplicationError, Result};
use serde::Serialize;

/// How the statistics report is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    version: &'static str,
    mode: StatsMode,
    classified: usize,
    skipped: usize,
    summaries: &'a [Summary],
}

/// Totals shown alongside the per-bucket summaries in JSON output.
#[derive(Debug, Clone, Copy)]
pub struct RunTotals {
    pub classified: usize,
    pub skipped: usize,
}

pub fn print_written_file<W: Write>(out: &mut W, path: &Path) -> Result<()> {
    writeln!(out, "Writing to file: {}", path.display())?;
    Ok(())
}

/// Diagnostic for an input dropped before classification.
pub struct RejectedInput<'a>(pub &'a Path);

impl fmt::Display for RejectedInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Input file is not readable or does not exist: {}", self.0.display())
    }
}

/// One line per dropped input, then one per read or write failure.
pub fn print_file_problems<'a, W: Write>(
    err: &mut W,
    rejected: &[PathBuf],
    failures: impl IntoIterator<Item = &'a ApplicationError>,
) -> Result<()> {
    for path in rejected {
        writeln!(err, "{}", RejectedInput(path))?;
    }
    for failure in failures {
        writeln!(err, "Error: {failure}")?;
    }
    Ok(())
}

pub fn print_report<W: Write>(
    out: &mut W,
    summaries: &[Summary],
    mode: StatsMode,
    format: ReportFormat,
    totals: RunTotals,
) -> Result<()> {
    match format {
        ReportFormat::Text => print_text(out, summaries),
        ReportFormat::Json => print_json(out, summaries, mode, totals),
    }
}

fn print_text<W: Write>(out: &mut W, summaries: &[Summary]) -> Result<()> {
    for summary in summaries {
        writeln!(out, "{summary}")?;
    }
    Ok(())
}

fn print_json<W: Write>(out: &mut W, summaries: &[Summary], mode: StatsMode, totals: RunTotals) -> Result<()> {
    let report = JsonReport {
        version: crate::VERSION,
        mode,
        classified: totals.classified,
        skipped: totals.skipped,
        summaries,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
