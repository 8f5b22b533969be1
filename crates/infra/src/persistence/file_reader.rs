use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use line_triage_ports::LineSource;
use line_triage_shared_kernel::{InfrastructureError, Result};
use log::debug;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> std::io::Result<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Feed every line of `reader` to `visit`, without its terminator.
    ///
    /// A line ends at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    pub fn visit_lines<R: BufRead>(mut reader: R, visit: &mut dyn FnMut(&str)) -> std::io::Result<usize> {
        let mut buf = Vec::new();
        let mut count = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(count);
            }
            for line in strip_terminator(&buf).split(|&b| b == b'\r') {
                visit(&String::from_utf8_lossy(line));
                count += 1;
            }
        }
    }
}

fn strip_terminator(buf: &[u8]) -> &[u8] {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// [`LineSource`] backed by files on disk.
///
/// The file handle lives only inside [`LineSource::for_each_line`] and is
/// dropped on every return path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLineSource;

impl LineSource for FileLineSource {
    fn for_each_line(&self, path: &Path, visit: &mut dyn FnMut(&str)) -> Result<()> {
        let to_error = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };
        let reader = FileReader::open_buffered(path).map_err(to_error)?;
        debug!("reading {}", path.display());
        let lines = FileReader::visit_lines(reader, visit).map_err(to_error)?;
        debug!("read {lines} lines from {}", path.display());
        Ok(())
    }
}
