//! Headless `--report` mode of the binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn fnplot() -> Command {
    Command::cargo_bin("fnplot").unwrap()
}

#[test]
fn help_lists_flags() {
    fnplot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--report"))
        .stdout(predicate::str::contains("--data"));
}

#[test]
fn report_analyzes_default_selection() {
    fnplot()
        .arg("--report")
        .assert()
        .success()
        .stdout(predicate::str::contains("view: x [-10.0000, 10.0000] y [-6.0000, 6.0000]"))
        .stdout(predicate::str::contains("functions: sin(x)\n"))
        .stdout(predicate::str::contains("zeros: 7\n"))
        .stdout(predicate::str::contains("extrema: 6\n"));
}

#[test]
fn report_includes_loaded_series() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0 1\n1 -1\n2 1").unwrap();

    fnplot()
        .arg("--report")
        .arg("--data")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("functions: sin(x), data(series)"))
        .stdout(predicate::str::contains("zeros: 9\n"))
        .stdout(predicate::str::contains("  x = 0.50000\n"));
}

#[test]
fn malformed_data_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1\nabc\n3").unwrap();

    fnplot()
        .arg("--report")
        .arg("--data")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_data_file_fails() {
    fnplot()
        .args(["--report", "--data", "/nonexistent/fnplot/series.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load"));
}
