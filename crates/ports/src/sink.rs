// crates/ports/src/sink.rs
use std::path::PathBuf;

use line_triage_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Whether existing output files are replaced or extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WriteMode {
    #[default]
    Truncate,
    Append,
}

/// Where and how bucket files are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPlan {
    pub directory: PathBuf,
    pub prefix: String,
    pub mode: WriteMode,
}

impl OutputPlan {
    /// Full path for an output file called `file_name`.
    pub fn target(&self, file_name: &str) -> PathBuf {
        self.directory.join(format!("{}{file_name}", self.prefix))
    }
}

impl Default for OutputPlan {
    fn default() -> Self {
        Self { directory: PathBuf::from("."), prefix: String::new(), mode: WriteMode::Truncate }
    }
}

/// Port for persisting the rendered values of one bucket.
pub trait BucketSink: Send + Sync {
    /// Writes `lines`, one per line, to the file named `file_name` and
    /// returns the path that was written.
    fn write_lines(&self, file_name: &str, lines: &[String]) -> Result<PathBuf>;
}
