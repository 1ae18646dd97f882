use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_row_index_filter"))
}

fn rows_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("rows.txt");
    let rows: Vec<String> = (1..=8).map(|n| format!("row{n}")).collect();
    fs::write(&path, rows.join("\n")).unwrap();
    path
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("row_index_filter"));
}

#[test]
fn selects_mixed_indexes_from_file() {
    let dir = TempDir::new().unwrap();
    bin()
        .args(["--indexes", "1,3,5-7"])
        .arg(rows_file(&dir))
        .assert()
        .success()
        .stdout("row1\nrow3\nrow5\nrow6\nrow7\n");
}

#[test]
fn reads_stdin_and_numbers_rows() {
    bin()
        .args(["-i", "2", "--format", "numbered"])
        .write_stdin("a\nb\nc\n")
        .assert()
        .success()
        .stdout("2\tb\n");
}

#[test]
fn settings_file_supplies_indexes() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("filter.json");
    fs::write(&config, r#"{ "indexes": "8" }"#).unwrap();

    bin()
        .arg("--config")
        .arg(&config)
        .arg(rows_file(&dir))
        .assert()
        .success()
        .stdout("row8\n");
}

#[test]
fn missing_indexes_fail() {
    bin()
        .write_stdin("a\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please provide valid indexes for filtering"));
}

#[test]
fn malformed_indexes_report_row() {
    bin()
        .args(["-i", "1,x"])
        .write_stdin("a\nb\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 1 could not be evaluated against indexes '1,x'"));
}

#[test]
fn lazy_parsing_accepts_malformed_indexes_without_rows() {
    bin().args(["-i", "oops"]).write_stdin("").assert().success().stdout("");
}

#[test]
fn eager_parsing_rejects_malformed_indexes_without_rows() {
    bin()
        .args(["-i", "oops", "--eager"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Index 'oops' is invalid"));
}

#[test]
fn json_output() {
    bin()
        .args(["-i", "1-2", "--format", "json"])
        .write_stdin("x\ny\nz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"evaluated\": 3").and(predicate::str::contains("\"value\": \"y\"")));
}
