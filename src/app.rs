// src/app.rs
use std::io::Write;

use line_triage_domain::{Aggregator, Summary};
use line_triage_infra::{FileBucketSink, FileLineSource, filesystem};
use line_triage_shared_kernel::{ApplicationError, ErrorContext, Result};
use line_triage_usecase::{ClassifyOutput, ClassifySources, WriteBuckets, WriteOutput};
use log::info;

use crate::config::RunConfig;
use crate::presentation::{self, RunTotals};

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub classified: ClassifyOutput,
    pub written: WriteOutput,
    pub summaries: Vec<Summary>,
}

impl RunOutcome {
    /// Number of per-file read or write failures that were reported and skipped.
    pub fn failure_count(&self) -> usize {
        self.classified.failures.len() + self.written.failures.len()
    }

    /// Read failures in input order, then write failures in bucket order.
    pub fn failures(&self) -> impl Iterator<Item = &ApplicationError> {
        let reads = self.classified.failures.iter().map(|f| &f.error);
        reads.chain(self.written.failures.iter().map(|f| &f.error))
    }
}

/// Classifies every input, writes the buckets, then prints the requested statistics.
///
/// Per-file failures are logged and recorded in the outcome; only a failure
/// to write to `out` itself is returned as an error.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> Result<RunOutcome> {
    let classified = ClassifySources::new(&FileLineSource).run(config.inputs.as_slice());
    info!(
        "classified {} lines from {} files ({} blank)",
        classified.result.total(),
        config.inputs.len(),
        classified.skipped
    );

    let sink = FileBucketSink::new(config.output.clone());
    let written = WriteBuckets::new(&sink).run(&classified.result);
    for (_, path) in &written.written {
        presentation::print_written_file(out, &filesystem::absolute(path))?;
    }

    let summaries = match config.stats {
        Some(mode) => {
            let summaries = Aggregator::summaries(&classified.result, mode);
            let totals = RunTotals { classified: classified.result.total().value(), skipped: classified.skipped };
            presentation::print_report(out, &summaries, mode, config.format, totals)
                .context("printing statistics")?;
            summaries
        }
        None => Vec::new(),
    };

    Ok(RunOutcome { classified, written, summaries })
}
