//! Shared helpers for the CLI integration tests.
//!
//! `run_cli` drives the library entry point in-process with scripted input;
//! `run_binary` spawns the built `classwar` executable.

use std::io::Write;
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `classwar <args>` through [`classwar_cli::run_with_input`].
#[allow(dead_code)]
pub fn run_cli(args: &[&str], input: &str) -> CliResult {
    let mut argv = vec!["classwar"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut reader = input.as_bytes();
    let exit_code = classwar_cli::run_with_input(argv, &mut out, &mut err, &mut reader);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(err).expect("stderr is utf-8"),
    }
}

/// Spawns the compiled binary, feeds `input` on stdin and waits for it.
#[allow(dead_code)]
pub fn run_binary(args: &[&str], input: &str) -> CliResult {
    let mut child = Command::new(env!("CARGO_BIN_EXE_classwar"))
        .args(args)
        .env_remove("CLASSWAR_CONFIG")
        .env_remove("CLASSWAR_SEED")
        .env_remove("CLASSWAR_MAX_ROUNDS")
        .env_remove("CLASSWAR_GAMES")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn classwar");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for classwar");
    CliResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
