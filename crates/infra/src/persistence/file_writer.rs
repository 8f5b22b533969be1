// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use line_triage_ports::{BucketSink, OutputPlan, WriteMode};
use line_triage_shared_kernel::{InfrastructureError, Result};
use log::info;

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`, replacing or extending it per `mode`.
    pub fn open<P: AsRef<Path>>(path: P, mode: WriteMode) -> std::io::Result<BufWriter<File>> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        options.open(path.as_ref()).map(BufWriter::new)
    }

    /// Write each item followed by `\n`, then flush.
    pub fn write_lines<W: Write, S: AsRef<str>>(mut writer: W, lines: &[S]) -> std::io::Result<()> {
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

/// [`BucketSink`] that writes one text file per bucket according to an [`OutputPlan`].
#[derive(Debug, Clone)]
pub struct FileBucketSink {
    plan: OutputPlan,
}

impl FileBucketSink {
    pub fn new(plan: OutputPlan) -> Self {
        Self { plan }
    }
}

impl BucketSink for FileBucketSink {
    fn write_lines(&self, file_name: &str, lines: &[String]) -> Result<PathBuf> {
        let path = self.plan.target(file_name);
        info!("writing {} values to {} ({:?})", lines.len(), path.display(), self.plan.mode);
        FileWriter::open(&path, self.plan.mode)
            .and_then(|writer| FileWriter::write_lines(writer, lines))
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        Ok(path)
    }
}
