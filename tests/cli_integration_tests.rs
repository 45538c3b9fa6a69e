//! CLI Integration Tests
//!
//! Exercises the formkit binary directly using assert_cmd.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const VALID_DOC: &str = r#"form:
  name: "Signup"
  fields:
    - textbox:
        name: "email"
        label: "Email"
        required: true
"#;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("formkit"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("formkit"));
}

#[test]
fn test_preview_help() {
    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.args(["preview", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HTML"));
}

#[test]
fn test_preview_writes_html_next_to_the_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("signup.yaml");
    fs::write(&input, VALID_DOC).unwrap();

    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.args(["preview", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview written"));

    let html = fs::read_to_string(dir.path().join("signup.html")).unwrap();
    assert!(html.contains("<h2>Signup</h2>"));
    assert!(html.contains(r#"<input type="text" id="email" name="email" required>"#));
}

#[test]
fn test_preview_honors_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("signup.yaml");
    let output = dir.path().join("out").with_extension("html");
    fs::write(&input, VALID_DOC).unwrap();

    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.args([
        "preview",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .assert()
    .success();

    assert!(output.exists());
}

#[test]
fn test_preview_of_invalid_yaml_writes_the_error_panel() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.yaml");
    fs::write(&input, "form: [unclosed").unwrap();

    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.args(["preview", input.to_str().unwrap()])
        .assert()
        .success();

    let html = fs::read_to_string(dir.path().join("broken.html")).unwrap();
    assert!(html.contains("Invalid YAML"));
}

#[test]
fn test_preview_missing_file_fails() {
    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.args(["preview", "no-such-file.yaml"]).assert().failure();
}

#[test]
fn test_check_passes_for_valid_documents() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("signup.yaml");
    fs::write(&input, VALID_DOC).unwrap();

    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.args(["check", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("All documents parsed"));
}

#[test]
fn test_check_fails_for_malformed_documents() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.yaml");
    let bad = dir.path().join("bad.yaml");
    fs::write(&good, VALID_DOC).unwrap();
    fs::write(&bad, "form: [unclosed").unwrap();

    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.args(["check", good.to_str().unwrap(), bad.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("bad.yaml"));
}

#[test]
fn test_check_requires_at_least_one_file() {
    let mut cmd = Command::cargo_bin("formkit").unwrap();
    cmd.arg("check").assert().failure();
}
