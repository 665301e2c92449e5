//! Tests for the demo binary.

use std::process::Command;

fn demo_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_betterflag"));
    cmd.env_remove("BETTERFLAG_LOG");
    cmd
}

#[test]
fn demo_reports_bound_values_and_positionals() {
    let output = demo_cmd()
        .args(["-xValue=198", "extra1", "--username", "Bob", "extra2"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Flag has parsed? yes"));
    assert!(stdout.contains("Non flag value: extra1\nNon flag value: extra2\n"));
    assert!(stdout.contains("Option: xValue is used? yes"));
    assert!(stdout.contains("Option: username is used? yes"));
    assert!(stdout.contains("Number of arguments setted: 2"));
    assert!(stdout.contains("X value: 198"));
    assert!(stdout.contains("Username: Bob"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-xValue unsigned int"));
}

#[test]
fn demo_without_arguments_prints_defaults() {
    let output = demo_cmd().output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Option: xValue is used? no"));
    assert!(stdout.contains("Number of arguments setted: 0"));
    assert!(stdout.contains("X value: 100"));
    assert!(stdout.contains("Username: Gabriel Correia"));
}

#[test]
fn demo_warns_about_unknown_flags() {
    let output = demo_cmd()
        .arg("-unknownFlag=1")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning: unknown flag '-unknownFlag=1'"));
}
