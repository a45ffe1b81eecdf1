//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

/// Path of the tabrepl binary built for these tests.
pub fn tabrepl_binary() -> &'static str {
    env!("CARGO_BIN_EXE_tabrepl")
}

/// A command for the binary with a clean, colorless environment.
fn base_command(args: &[&str]) -> Command {
    let mut command = Command::new(tabrepl_binary());
    command
        .args(args)
        .env_remove("TABREPL_FORMAT")
        .env_remove("TABREPL_VERBOSE")
        .env_remove("TABREPL_MAX_WIDTH")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    command
}

/// Run the binary with `args`.
pub fn run_tabrepl(args: &[&str]) -> Output {
    base_command(args)
        .output()
        .expect("Failed to execute tabrepl binary")
}

/// Run the binary with `args`, feeding `stdin` to it.
pub fn run_tabrepl_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = base_command(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn tabrepl binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for tabrepl binary")
}

/// Stdout as a string.
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
