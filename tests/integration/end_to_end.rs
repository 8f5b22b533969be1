// tests/integration/end_to_end.rs
use predicates::prelude::*;
use serde_json::Value;

use crate::common::{TempWorkspace, report_lines};

#[test]
fn short_statistics_for_mixed_input() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "3\n2.5\nx\n7\n");

    let assert = ws.command().args(["-s", "in.txt"]).assert().success();
    assert_eq!(
        report_lines(&assert.get_output().stdout),
        vec!["Integers: count=2", "Floats: count=1", "Strings: count=1"]
    );
    assert_eq!(ws.read("integers.txt"), "3\n7\n");
    assert_eq!(ws.read("floats.txt"), "2.5\n");
    assert_eq!(ws.read("strings.txt"), "x\n");
}

#[test]
fn full_statistics_snapshot() {
    let ws = TempWorkspace::new();
    ws.create_file("a.txt", "3\nhello\n7\n");
    ws.create_file("b.txt", "-2\n2.5\nx\n");

    let assert = ws.command().args(["a.txt", "-f", "b.txt"]).assert().success();
    let report = report_lines(&assert.get_output().stdout).join("\n");
    insta::assert_snapshot!(report, @r"
Integers: count=3, Min=-2, Max=7, Sum=8, Avg=2.67
Floats: count=1, Min=2.50, Max=2.50, Sum=2.50, Avg=2.50
Strings: count=2, Min Length=1, Max Length=5
");
}

#[test]
fn inputs_are_concatenated_in_argument_order() {
    let ws = TempWorkspace::new();
    ws.create_file("first.txt", "1\nb\n");
    ws.create_file("second.txt", "2\na\n");

    ws.command().args(["second.txt", "first.txt"]).assert().success();
    assert_eq!(ws.read("integers.txt"), "2\n1\n");
    assert_eq!(ws.read("strings.txt"), "a\nb\n");
}

#[test]
fn output_directory_and_prefix() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n1.5\nword\n");
    std::fs::create_dir(ws.path().join("out")).unwrap();

    ws.command()
        .args(["-o", "out", "-p", "run_", "in.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("run_integers.txt"));

    assert_eq!(ws.read("out/run_integers.txt"), "1\n");
    assert_eq!(ws.read("out/run_floats.txt"), "1.5\n");
    assert_eq!(ws.read("out/run_strings.txt"), "word\n");
    assert!(!ws.exists("integers.txt"));
}

#[test]
fn append_mode_extends_existing_files() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");

    ws.command().arg("in.txt").assert().success();
    ws.command().args(["-a", "in.txt"]).assert().success();
    assert_eq!(ws.read("integers.txt"), "1\n1\n");

    ws.command().arg("in.txt").assert().success();
    assert_eq!(ws.read("integers.txt"), "1\n");
}

#[test]
fn blank_lines_are_skipped() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "\n  \n5\n");

    let assert = ws.command().args(["-f", "in.txt"]).assert().success();
    assert_eq!(ws.read("integers.txt"), "5\n");
    assert!(!ws.exists("floats.txt"));
    assert!(!ws.exists("strings.txt"));
    assert_eq!(
        report_lines(&assert.get_output().stdout),
        vec!["Integers: count=1, Min=5, Max=5, Sum=5, Avg=5.00"]
    );
}

#[test]
fn values_beyond_32_bits_are_integers() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "2147483648\n9223372036854775807\n9223372036854775808\n");

    ws.command().args(["-f", "in.txt"]).assert().success().stdout(predicate::str::contains(
        "Integers: count=2, Min=2147483648, Max=9223372036854775807, Sum=9223372039002259455",
    ));
    assert_eq!(ws.read("integers.txt"), "2147483648\n9223372036854775807\n");
    assert_eq!(ws.read("floats.txt"), "9.223372036854776e18\n");
}

#[test]
fn json_report() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "3\n7\n-2\n\n");

    let assert = ws.command().args(["-f", "--format", "json", "in.txt"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let json_start = stdout.find('{').expect("json document");
    let json: Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    assert_eq!(json["mode"], "full");
    assert_eq!(json["classified"], 3);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["summaries"].as_array().unwrap().len(), 1);
    assert_eq!(json["summaries"][0]["min"], -2);
    assert_eq!(json["summaries"][0]["max"], 7);
}

#[test]
fn prefix_may_name_a_subdirectory() {
    let ws = TempWorkspace::new();
    ws.create_file("in.txt", "1\n");
    ws.create_file("nested/.keep", "");
    ws.command().args(["-p", "nested/run_", "in.txt"]).assert().success();
    assert_eq!(ws.read("nested/run_integers.txt"), "1\n");

    ws.command()
        .env("RUST_LOG", "off")
        .args(["-p", "absent/run_", "in.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("run_integers.txt"));
}
