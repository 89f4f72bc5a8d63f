use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("brainfudge").unwrap()
}

#[test]
fn cursor_underflow_reports_on_stderr() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("<")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("register cursor out of range"))
        .stderr(predicate::str::contains("at instruction 0"));
}

#[test]
fn unmatched_open_bracket_reports_on_stderr() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("[++")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unmatched bracket '['"));
}

#[test]
fn unmatched_close_bracket_reports_on_stderr() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("++]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unmatched bracket ']'"));
}

#[test]
fn input_exhaustion_reports_on_stderr() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(",")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input exhausted"));
}

#[test]
fn error_output_includes_a_caret_context_window() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("++]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("++]"))
        .stderr(predicate::str::contains("^"));
}
