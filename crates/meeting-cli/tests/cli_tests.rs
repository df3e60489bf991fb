//! Integration tests for the `meetq` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the query
//! subcommand through the actual binary, including stdin/stdout piping, file
//! I/O, output formats, and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the day.json fixture.
fn day_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/day.json")
}

/// Helper: read the day.json fixture as a string.
fn day_json() -> String {
    std::fs::read_to_string(day_json_path()).expect("day.json fixture must exist")
}

fn slots_from(stdout: &[u8]) -> Vec<(u64, u64)> {
    let value: serde_json::Value = serde_json::from_slice(stdout).expect("output must be JSON");
    value
        .as_array()
        .expect("output must be a JSON array")
        .iter()
        .map(|slot| {
            (
                slot["start"].as_u64().unwrap(),
                slot["end"].as_u64().unwrap(),
            )
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Query subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn query_file_to_stdout_falls_back_to_required() {
    // Carol (optional) is away all day, so she is dropped.
    let output = Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "-i", day_json_path()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        slots_from(&output.stdout),
        vec![(0, 480), (510, 540), (570, 1440)]
    );
}

#[test]
fn query_stdin_to_stdout() {
    let input = r#"{
        "events": [{"title": "Busy", "when": {"start": 600, "end": 700}, "attendees": ["A"]}],
        "request": {"attendees": ["A"], "duration": 30}
    }"#;

    let output = Command::cargo_bin("meetq")
        .unwrap()
        .arg("query")
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(slots_from(&output.stdout), vec![(0, 600), (700, 1440)]);
}

#[test]
fn query_without_events_is_whole_day() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "--format", "text"])
        .write_stdin(r#"{"request": {"attendees": ["A"], "duration": 60}}"#)
        .assert()
        .success()
        .stdout("00:00-24:00 (1440 min)\n");
}

#[test]
fn query_text_format() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "-i", day_json_path(), "--format", "text"])
        .assert()
        .success()
        .stdout("00:00-08:00 (480 min)\n08:30-09:00 (30 min)\n09:30-24:00 (870 min)\n");
}

#[test]
fn duration_flag_overrides_request() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "--format", "text", "--duration", "60"])
        .write_stdin(day_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("08:30-09:00").not())
        .stdout(predicate::str::contains("00:00-08:00 (480 min)"))
        .stdout(predicate::str::contains("09:30-24:00 (870 min)"));
}

#[test]
fn query_file_to_file() {
    let output_path = std::env::temp_dir().join("meetq-test-query-output.json");
    let _ = std::fs::remove_file(&output_path);

    Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "-i", day_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read(&output_path).expect("output file must exist");
    assert_eq!(slots_from(&content), vec![(0, 480), (510, 540), (570, 1440)]);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn debug_logs_go_to_stderr() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["--debug", "query", "-i", day_json_path()])
        .assert()
        .success()
        .stderr(predicate::str::contains("falling back to required only"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_input_file_fails() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "-i", "/nonexistent/day.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_json_fails() {
    Command::cargo_bin("meetq")
        .unwrap()
        .arg("query")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse query input JSON"));
}

#[test]
fn invalid_event_range_fails() {
    let input = r#"{
        "events": [{"title": "Backwards", "when": {"start": 700, "end": 600}, "attendees": ["A"]}],
        "request": {"attendees": ["A"], "duration": 30}
    }"#;

    Command::cargo_bin("meetq")
        .unwrap()
        .arg("query")
        .write_stdin(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time range"));
}

#[test]
fn zero_duration_is_rejected() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "--duration", "0"])
        .write_stdin(day_json())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid meeting duration: 0"));
}

#[test]
fn overlong_duration_is_rejected() {
    Command::cargo_bin("meetq")
        .unwrap()
        .arg("query")
        .write_stdin(r#"{"request": {"attendees": [], "duration": 1441}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not schedulable"));
}

#[test]
fn unknown_format_is_rejected() {
    Command::cargo_bin("meetq")
        .unwrap()
        .args(["query", "--format", "yaml"])
        .write_stdin(day_json())
        .assert()
        .failure();
}
