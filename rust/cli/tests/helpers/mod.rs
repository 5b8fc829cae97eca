#![allow(dead_code)]

use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Runs the built `coinjack` binary inside a scratch directory, so the
/// default state file never touches the working tree.
#[derive(Debug)]
pub struct CliRunner {
    dir: TempDir,
}

#[derive(Debug, Clone)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliRunner {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("coinjack-state.json")
    }

    pub fn write_state(&self, json: &str) {
        std::fs::write(self.state_path(), json).expect("write state");
    }

    pub fn read_state(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.state_path()).expect("read state");
        serde_json::from_str(&raw).expect("state json")
    }

    pub fn run(&self, args: &[&str]) -> CliResult {
        self.run_inner(args, &[], None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliResult {
        self.run_inner(args, env, None)
    }

    pub fn run_with_input(&self, args: &[&str], input: &str) -> CliResult {
        self.run_inner(args, &[], Some(input))
    }

    fn run_inner(&self, args: &[&str], env: &[(&str, &str)], input: Option<&str>) -> CliResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_coinjack"));
        cmd.args(args)
            .current_dir(self.dir.path())
            .env_remove("COINJACK_CONFIG")
            .env_remove("COINJACK_SEED")
            .env_remove("COINJACK_BET")
            .env_remove("COINJACK_STATE")
            .env_remove("RUST_LOG")
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to spawn coinjack");
        if let Some(payload) = input
            && let Some(mut stdin) = child.stdin.take()
        {
            let _ = stdin.write_all(payload.as_bytes());
        }
        let output = child.wait_with_output().expect("failed to read output");
        CliResult {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
