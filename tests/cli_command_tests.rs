//! CLI command tests for the headless `--cli` mode
//!
//! These run the built binary with stdout/stderr captured and check exit
//! codes and rendered output.


use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;
use test_fixtures::{SourceFixtures, gcc_available};

/// Run cppexec with `args`, feeding `stdin` to it
fn run_cppexec(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cppexec"))
        .args(args)
        .env("XDG_CONFIG_HOME", "/nonexistent")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start cppexec");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write source");

    child.wait_with_output().expect("Failed to wait for cppexec")
}

#[test]
fn test_help_lists_flags() {
    let output = run_cppexec(&["--help"], "");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--std", "--wall", "--xclip", "--cli", "--format"] {
        assert!(stdout.contains(flag), "help should mention {}", flag);
    }
}

#[test]
fn test_hello_world_from_stdin() {
    if !gcc_available() {
        return;
    }

    let output = run_cppexec(&["--cli", "-q"], SourceFixtures::hello_c99());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hello 0\nhello 1\n");
}

#[test]
fn test_program_exit_code_is_propagated() {
    if !gcc_available() {
        return;
    }

    let output = run_cppexec(&["--cli", "-q"], SourceFixtures::stdout_and_stderr());
    assert_eq!(output.status.code(), Some(7));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "to stdout\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("to stderr"));
}

#[test]
fn test_signal_death_exits_like_a_shell() {
    if !gcc_available() {
        return;
    }

    let source = "#include <signal.h>\nint main(void) { raise(SIGKILL); return 0; }\n";
    let output = run_cppexec(&["--cli", "-q"], source);
    assert_eq!(output.status.code(), Some(137));
}

#[test]
fn test_compile_error_exit_code() {
    if !gcc_available() {
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source = temp_dir.path().join("broken.c");
    std::fs::write(&source, SourceFixtures::syntax_error()).expect("Failed to write source");

    let output = run_cppexec(&["--cli", "-q", "-Wall", source.to_str().unwrap()], "");
    assert_ne!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("error"));
}

#[test]
fn test_json_report() {
    if !gcc_available() {
        return;
    }

    let output = run_cppexec(
        &["--cli", "-q", "--format", "json", "-std=c99"],
        SourceFixtures::hello_c99(),
    );
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["compile_exit"], 0);
    assert_eq!(report["run_exit"], 0);
    assert_eq!(report["run_output"]["lines"][0]["stream"], "stdout");
    assert_eq!(report["run_output"]["lines"][0]["text"], "hello 0");
}

#[test]
fn test_html_marks_stderr_red() {
    if !gcc_available() {
        return;
    }

    let output = run_cppexec(
        &["--cli", "-q", "--format", "html"],
        SourceFixtures::stdout_and_stderr(),
    );
    let html = String::from_utf8_lossy(&output.stdout);
    assert!(html.contains("to stdout<br>"));
    assert!(html.contains("<span style=\"color:red\">to stderr</span><br>"));
    assert!(html.contains("<h3>Run (exit 7)</h3>"));
}

#[test]
fn test_missing_compiler_fails_cleanly() {
    let output = run_cppexec(
        &["--cli", "-q", "--compiler", "/nonexistent/cppexec-gcc"],
        SourceFixtures::hello_c99(),
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("/nonexistent/cppexec-gcc"));
}
