use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn shows_help() {
    TempWorkspace::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("line_triage"))
        .stdout(predicate::str::contains("--output-dir"))
        .stdout(predicate::str::contains("--prefix"));
}

/// Usage line and option column of `--help`, without the descriptions.
fn help_outline(help: &str) -> String {
    help.lines()
        .filter_map(|line| {
            let indent = line.len() - line.trim_start().len();
            let item = line.trim_start();
            if item.starts_with("Usage:") {
                Some(item.to_string())
            } else if indent <= 6 && (item.starts_with('-') || item.starts_with('[')) {
                Some(item.split("  ").next().unwrap_or(item).to_string())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn help_outline_snapshot() {
    let assert = TempWorkspace::new().command().arg("--help").assert().success();
    let help = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    insta::assert_snapshot!(help_outline(&help), @r"
Usage: line_triage [OPTIONS] [FILES]...
[FILES]...
-a, --append
-s, --short
-f, --full
-o, --output-dir <DIR>
-p, --prefix <PREFIX>
--format <FORMAT>
-v, --verbose...
-h, --help
-V, --version
");
}

#[test]
fn shows_version() {
    TempWorkspace::new()
        .command()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn processes_single_file_silently_without_stats() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    ws.command()
        .arg("in.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing to file:").and(predicate::str::contains("count=").not()));
}
