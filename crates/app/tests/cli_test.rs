//! Integration tests for the envregex command line.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn envregex() -> Command {
    let mut cmd = Command::cargo_bin("envregex").expect("binary is built");
    cmd.env_remove("ENVREGEX_OFFSET_MODE")
        .env_remove("ENVREGEX_OFFSET_UNIT")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is utf-8")
}

#[test]
fn test_prints_matches_for_arguments() {
    let stdout = stdout_of(envregex().arg("a{{x}}b{{y}}c").arg("plain"));
    assert_eq!(
        stdout,
        concat!(
            r#"[{"leadOffset":1,"endOffset":6,"matchingString":"{{x}}"},"#,
            r#"{"leadOffset":7,"endOffset":12,"matchingString":"{{y}}"}]"#,
            "\n[]\n"
        )
    );
}

#[test]
fn test_reads_stdin_lines() {
    let stdout = stdout_of(envregex().write_stdin("{{a}}}}\nnone\n"));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![r#"[{"leadOffset":0,"endOffset":5,"matchingString":"{{a}}"}]"#, "[]"]
    );
}

#[test]
fn test_check_mode_exit_codes() {
    envregex()
        .args(["--check", "{{home}}/bin", "/usr/bin"])
        .assert()
        .success()
        .stdout("true\nfalse\n");

    envregex()
        .args(["--check", "{{incomplete", ""])
        .assert()
        .code(1)
        .stdout("false\nfalse\n");
}

#[test]
fn test_offset_unit_flag() {
    envregex()
        .args(["--offset-unit", "utf16", "😀{{v}}"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""leadOffset":2,"endOffset":7"#));
}

#[test]
fn test_offset_mode_from_environment() {
    envregex()
        .env("ENVREGEX_OFFSET_MODE", "first-occurrence")
        .arg("{{id}}/{{id}}")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"leadOffset":0,"endOffset":6"#).count(2));
}

#[test]
fn test_segments_output() {
    envregex()
        .args(["--segments", "/srv/{{env}}"])
        .assert()
        .success()
        .stdout(concat!(
            r#"[{"kind":"literal","text":"/srv/"},"#,
            r#"{"kind":"placeholder","leadOffset":5,"endOffset":12,"matchingString":"{{env}}"}]"#,
            "\n"
        ));
}

#[test]
fn test_rejects_unknown_offset_unit() {
    envregex()
        .args(["--offset-unit", "words", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid offset unit"));
}
