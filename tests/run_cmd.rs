use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command {
    Command::cargo_bin("brainfudge").unwrap()
}

fn letter_a_bf() -> String {
    format!("{}.", "+".repeat(65))
}

fn program_to_tempfile(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

#[test]
fn positional_code_runs_and_prints_output() {
    cargo_bin()
        .arg(letter_a_bf())
        .assert()
        .success()
        .stdout("A\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn positional_code_parts_are_concatenated() {
    cargo_bin()
        .arg("+".repeat(60))
        .arg(format!("{}.", "+".repeat(5)))
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn file_program_runs_and_prints_output() {
    // Leading '-' instructions exercise the hyphen-friendly file path too.
    let tf = program_to_tempfile("----[---->+<]>++.");
    cargo_bin()
        .arg("--file")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("A\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn file_and_positional_code_conflict() {
    let tf = program_to_tempfile("+.");
    cargo_bin()
        .arg("--file")
        .arg(tf.path())
        .arg("+.")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--file"));
}

#[test]
fn missing_file_reports_and_fails() {
    cargo_bin()
        .arg("--file")
        .arg("no-such-program.bf")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn program_from_stdin_runs() {
    cargo_bin()
        .write_stdin(letter_a_bf())
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn empty_stdin_program_prints_only_the_trailing_newline() {
    cargo_bin()
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n")
        .stderr(predicate::str::is_empty());
}
