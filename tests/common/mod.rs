// tests/common/mod.rs
//! Shared helpers for the integration suites.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

/// Temporary working directory that doubles as the default output directory.
#[derive(Debug)]
pub struct TempWorkspace {
    dir: tempfile::TempDir,
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.dir.path().join(rel)).expect("read output")
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.dir.path().join(rel).exists()
    }

    /// The binary, running inside this workspace.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_line_triage"));
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        cmd
    }
}

/// Lines of `stdout` that belong to the statistics report.
#[allow(dead_code)]
pub fn report_lines(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|l| !l.starts_with("Writing to file: "))
        .map(str::to_string)
        .collect()
}
