use std::path::PathBuf;

use line_triage_domain::{Category, ClassificationResult};
use line_triage_shared_kernel::ApplicationError;

/// An input source that could not be read to the end.
#[derive(Debug)]
pub struct SourceFailure {
    pub path: PathBuf,
    pub error: ApplicationError,
}

/// Result of classifying every input source.
#[derive(Debug, Default)]
pub struct ClassifyOutput {
    pub result: ClassificationResult,
    pub skipped: usize,
    pub failures: Vec<SourceFailure>,
}

/// A bucket whose output file could not be written.
#[derive(Debug)]
pub struct WriteFailure {
    pub category: Category,
    pub error: ApplicationError,
}

/// Result of writing the non-empty buckets.
#[derive(Debug, Default)]
pub struct WriteOutput {
    pub written: Vec<(Category, PathBuf)>,
    pub failures: Vec<WriteFailure>,
}
