use std::path::{Path, PathBuf};

use line_triage_domain::{Category, ClassificationResult, Classifier};
use line_triage_ports::{BucketSink, LineSource};
use line_triage_shared_kernel::{ApplicationError, ApplicationResult};
use log::debug;

use crate::dto::{ClassifyOutput, SourceFailure, WriteFailure, WriteOutput};

/// Feeds every line of every source, in the order given, through one classifier.
pub struct ClassifySources<'a> {
    source: &'a dyn LineSource,
}

impl<'a> ClassifySources<'a> {
    pub fn new(source: &'a dyn LineSource) -> Self {
        Self { source }
    }

    /// A source that fails part-way keeps the lines it produced before the
    /// failure; the remaining sources are still processed.
    pub fn run<P: AsRef<Path>>(&self, paths: &[P]) -> ClassifyOutput {
        let mut classifier = Classifier::new();
        let mut failures = Vec::new();

        for path in paths {
            let path: &Path = path.as_ref();
            let before = classifier.skipped();
            let mut lines = 0usize;
            let read = self.source.for_each_line(path, &mut |line| {
                lines += 1;
                classifier.feed(line);
            });
            debug!(
                "classified {lines} lines from {} ({} blank)",
                path.display(),
                classifier.skipped() - before
            );

            if let Err(err) = read {
                debug!("{err:?}");
                failures.push(SourceFailure {
                    path: path.to_path_buf(),
                    error: ApplicationError::ClassificationFailed {
                        path: path.to_path_buf(),
                        reason: err.to_string(),
                        source: Some(Box::new(err)),
                    },
                });
            }
        }

        let skipped = classifier.skipped();
        ClassifyOutput { result: classifier.finish(), skipped, failures }
    }
}

/// Writes each non-empty bucket through the sink, continuing past failures.
pub struct WriteBuckets<'a> {
    sink: &'a dyn BucketSink,
}

impl<'a> WriteBuckets<'a> {
    pub fn new(sink: &'a dyn BucketSink) -> Self {
        Self { sink }
    }

    pub fn run(&self, result: &ClassificationResult) -> WriteOutput {
        let mut output = WriteOutput::default();

        for category in Category::ALL {
            if result.is_empty(category) {
                debug!("{category} bucket is empty; no file written");
                continue;
            }
            match self.write(result, category) {
                Ok(path) => output.written.push((category, path)),
                Err(err) => {
                    debug!("{err:?}");
                    output.failures.push(WriteFailure { category, error: err });
                }
            }
        }

        output
    }

    fn write(&self, result: &ClassificationResult, category: Category) -> ApplicationResult<PathBuf> {
        self.sink
            .write_lines(category.file_name(), &result.rendered(category))
            .map_err(|err| ApplicationError::BucketWriteFailed {
                category: category.label().to_lowercase(),
                reason: err.to_string(),
                source: Some(Box::new(err)),
            })
    }
}
