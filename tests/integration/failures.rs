// tests/integration/failures.rs
use predicates::prelude::*;

use crate::common::TempWorkspace;

#[test]
fn missing_output_dir_value_is_fatal() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    ws.command()
        .args(["in.txt", "-o"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-o"));
    assert!(!ws.exists("integers.txt"));
}

#[test]
fn missing_prefix_value_is_fatal() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    ws.command().args(["in.txt", "-p"]).assert().failure();
}

#[test]
fn no_input_files_is_fatal() {
    let ws = TempWorkspace::new();
    ws.command()
        .arg("-s")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input files specified"));
}

#[test]
fn only_unreadable_inputs_is_fatal() {
    let ws = TempWorkspace::new();
    ws.command()
        .arg("missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file is not readable or does not exist: missing.txt"))
        .stderr(predicate::str::contains("No input files specified"));
}

#[test]
fn nonexistent_output_directory_is_fatal() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    ws.command()
        .args(["-o", "nowhere", "in.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output path does not exist: nowhere"));
    assert!(!ws.exists("integers.txt"));
}

#[test]
fn unreadable_input_is_skipped_and_run_continues() {
    let ws = TempWorkspace::new();
    ws.create_file("good.txt", "4\n");
    ws.command()
        .args(["-s", "missing.txt", "good.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("missing.txt"))
        .stdout(predicate::str::contains("Integers: count=1"));
    assert_eq!(ws.read("integers.txt"), "4\n");
}

#[test]
fn file_problems_reach_stderr_with_logging_off() {
    let ws = TempWorkspace::new();
    ws.create_file("good.txt", "4\n");
    ws.command()
        .env("RUST_LOG", "off")
        .args(["-s", "missing.txt", "good.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Input file is not readable or does not exist: missing.txt"));

    ws.command()
        .env("RUST_LOG", "off")
        .arg("missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn bucket_write_failure_is_reported_and_other_buckets_written() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "5\nword\n");
    // A directory where the strings file should go makes that write fail.
    ws.create_file("ro/strings.txt/keep", "");
    ws.command()
        .env("RUST_LOG", "off")
        .args(["-o", "ro", "in.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("strings.txt"));
    assert_eq!(ws.read("ro/integers.txt"), "5\n");
}
