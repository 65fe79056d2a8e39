// Integration tests for the `jtree` command line interface.
//
// Each test spawns the real binary via assert_cmd, so these cover argument
// parsing, stdin/stdout plumbing, file IO, and exit codes end to end.

// assert_cmd deprecated `Command::cargo_bin` in favor of a builder that does
// not exist in the versions we support, so silence the warning for now.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn jtree() -> Command {
    Command::cargo_bin("jtree").unwrap()
}

fn fixture(name: &str) -> String {
    format!(
        "{}/tests/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

// ---------------------------------------------------------------------------
// fmt: stdin / stdout
// ---------------------------------------------------------------------------

#[test]
fn fmt_reads_stdin_and_pretty_prints() {
    jtree()
        .arg("fmt")
        .write_stdin(r#"{"name":"Ada", "age":36}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Ada\""))
        .stdout(predicate::str::contains("\"age\": 36"));
}

#[test]
fn fmt_output_is_exact_for_flat_object() {
    jtree()
        .arg("fmt")
        .write_stdin(r#"{"name":"John", "age":30, "car":null}"#)
        .assert()
        .success()
        .stdout("{\n  \"name\": \"John\",\n  \"age\": 30,\n  \"car\": null\n}\n");
}

#[test]
fn fmt_accepts_scalar_documents() {
    jtree()
        .arg("fmt")
        .write_stdin("42")
        .assert()
        .success()
        .stdout("42\n");
}

#[test]
fn fmt_renders_empty_containers_inline() {
    jtree()
        .arg("fmt")
        .write_stdin(r#"{"a":[], "b":{}}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": []"))
        .stdout(predicate::str::contains("\"b\": {}"));
}

// ---------------------------------------------------------------------------
// fmt: file input and output
// ---------------------------------------------------------------------------

#[test]
fn fmt_reads_input_file() {
    jtree()
        .args(["fmt", "-i", &fixture("person.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"car\": null"));
}

#[test]
fn fmt_handles_nested_document() {
    jtree()
        .args(["fmt", "-i", &fixture("company.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"company\": \"Acme Corporation\""))
        .stdout(predicate::str::contains("\"budget\": 1500000.5"))
        .stdout(predicate::str::contains("\"id\": \"proj-003\""));
}

#[test]
fn fmt_writes_output_file() {
    let out = std::env::temp_dir().join("jtree_fmt_out.json");
    jtree()
        .args(["fmt", "-i", &fixture("employees.json")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("{\n  \"employees\": [\n"));
    assert!(written.contains("\"firstName\": \"Anna\""));
    assert!(written.ends_with("}\n"));
    std::fs::remove_file(&out).unwrap();
}

#[test]
fn fmt_is_idempotent() {
    let first = jtree()
        .args(["fmt", "-i", &fixture("company.json")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let second = jtree()
        .arg("fmt")
        .write_stdin(first.clone())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// fmt: failures
// ---------------------------------------------------------------------------

#[test]
fn fmt_rejects_invalid_json() {
    jtree()
        .arg("fmt")
        .write_stdin(r#"{"a":1,,}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse JSON"));
}

#[test]
fn fmt_error_reports_position() {
    jtree()
        .arg("fmt")
        .write_stdin("[1, 2,]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn fmt_fails_on_missing_input_file() {
    jtree()
        .args(["fmt", "-i", "no/such/file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read file"));
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_accepts_valid_file() {
    jtree()
        .args(["check", "-i", &fixture("employees.json")])
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn check_reads_stdin_by_default() {
    jtree()
        .arg("check")
        .write_stdin(r#"[true, false, null]"#)
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn check_rejects_invalid_input() {
    jtree()
        .arg("check")
        .write_stdin(r#"{"a" 1}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn check_rejects_trailing_content() {
    jtree()
        .arg("check")
        .write_stdin("{} []")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

// ---------------------------------------------------------------------------
// argument handling
// ---------------------------------------------------------------------------

#[test]
fn missing_subcommand_shows_usage() {
    jtree()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    jtree()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
