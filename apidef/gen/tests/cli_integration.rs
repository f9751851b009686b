//! Integration tests for the apidef-gen CLI.
//!
//! These tests verify end-to-end CLI behavior using assert_cmd.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gen_cmd() -> Command {
    Command::cargo_bin("apidef-gen").unwrap()
}

const DEFINITIONS: &str = r#"
[[endpoint]]
path = "/widgets"
method = "PUT"

[[endpoint.field]]
name = "size"
type = "int"
pass = ["1", "2"]
fail = ["-1"]
validators = [{ name = "range", params = ["1", "10"] }]
"#;

#[test]
fn cli_shows_help() {
    gen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--path"))
        .stdout(predicate::str::contains("--method"))
        .stdout(predicate::str::contains("--gen-tests"))
        .stdout(predicate::str::contains("--gen-structs"));
}

#[test]
fn cli_generates_structs_for_builtin_endpoint() {
    gen_cmd()
        .args(["--path", "/signup", "--method", "POST", "--gen-structs"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("type body struct {\n"))
        .stdout(predicate::str::contains(
            "\tname string `valid: \"alphanumeric,length(8|64)\"`\n",
        ));
}

#[test]
fn cli_generates_tests_with_camel_case_alias() {
    gen_cmd()
        .args(["--path", "/signup", "--method", "POST", "--genTests"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("type POSTsignupTest struct {\n"))
        .stdout(predicate::str::contains("tests := []*POSTsignupTest{\n"));
}

#[test]
fn cli_rejects_missing_path() {
    gen_cmd()
        .args(["--method", "POST", "--gen-tests"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidEndpointParameters"));
}

#[test]
fn cli_rejects_both_generation_flags() {
    gen_cmd()
        .args(["--path", "/signup", "--method", "POST", "--gen-tests", "--gen-structs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidGenerateParameters"));
}

#[test]
fn cli_rejects_neither_generation_flag() {
    gen_cmd()
        .args(["--path", "/signup", "--method", "POST"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidGenerateParameters"));
}

#[test]
fn cli_reports_unknown_endpoint() {
    gen_cmd()
        .args(["--path", "/nope", "--method", "GET", "--gen-structs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ApiEndpointNotFound"));
}

#[test]
fn cli_reads_definitions_file_and_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let defs = dir.path().join("defs.toml");
    let out = dir.path().join("gen/widgets_test.go");
    fs::write(&defs, DEFINITIONS).unwrap();

    gen_cmd()
        .args(["--path", "/widgets", "--method", "PUT", "--gen-tests"])
        .arg("--definitions")
        .arg(&defs)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("type PUTwidgetsTest struct {\n"));
    assert_eq!(written.matches("\t&PUTwidgetsTest{\n").count(), 3);
    assert_eq!(written.matches("\t\ttrue,\n").count(), 2);
}

#[test]
fn cli_builtin_catalog_not_consulted_with_definitions_file() {
    let dir = TempDir::new().unwrap();
    let defs = dir.path().join("defs.toml");
    fs::write(&defs, DEFINITIONS).unwrap();

    gen_cmd()
        .args(["--path", "/signup", "--method", "POST", "--gen-structs"])
        .arg("--definitions")
        .arg(&defs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ApiEndpointNotFound"));
}

#[test]
fn cli_reports_malformed_definitions_file() {
    let dir = TempDir::new().unwrap();
    let defs = dir.path().join("bad.toml");
    fs::write(&defs, "[[endpoint]]\npath = 3\n").unwrap();

    gen_cmd()
        .args(["--path", "/a", "--method", "POST", "--gen-structs"])
        .arg("--definitions")
        .arg(&defs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("ParseDefinitions"));
}

#[test]
fn cli_output_is_identical_across_runs() {
    let run = || {
        gen_cmd()
            .args(["--path", "/login", "--method", "POST", "--gen-tests"])
            .output()
            .unwrap()
            .stdout
    };
    let first = run();
    assert!(!first.is_empty());
    assert_eq!(first, run());
}
