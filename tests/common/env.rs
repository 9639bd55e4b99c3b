//! Test environment for isolated Nexus runs.
//!
//! Every `TestEnv` owns a temp working directory (where `portfolio.json`
//! lands) and a temp config home, so user config on the machine running the
//! tests never leaks in.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a Nexus CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}"))
            })
            .collect()
    }

    /// The first `{"event": "data"}` line
    pub fn data(&self) -> Value {
        self.json_lines()
            .into_iter()
            .find(|v| v["event"] == "data")
            .unwrap_or_else(|| panic!("no data event in:\n{}", self.stdout))
    }
}

pub struct TestEnv {
    /// Working directory for every command
    pub root: TempDir,
    /// Stands in for `$XDG_CONFIG_HOME`
    pub config_home: TempDir,
    nexus_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            config_home: tempfile::tempdir().expect("Failed to create temp config home"),
            nexus_bin: PathBuf::from(env!("CARGO_BIN_EXE_nexus")),
        }
    }

    /// A fresh environment with `nexus init` already run
    pub fn initialized() -> Self {
        let env = Self::new();
        let result = env.run(&["init"]);
        assert!(result.success, "init failed:\n{}", result.combined_output());
        env
    }

    /// Get path relative to the working directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn portfolio_path(&self) -> PathBuf {
        self.path("portfolio.json")
    }

    /// Run nexus in the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run nexus with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.nexus_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("NEXUS_PORTFOLIO")
            .env_remove("NEXUS_VERBOSITY")
            .env_remove("NEXUS_UNICODE")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute nexus");
        output_to_result(output)
    }

    /// Run with `--json` and return the NDJSON lines, asserting success
    pub fn run_json(&self, args: &[&str]) -> Vec<Value> {
        let mut all = vec!["--json"];
        all.extend_from_slice(args);
        let result = self.run(&all);
        assert!(
            result.success,
            "nexus {:?} failed:\n{}",
            args,
            result.combined_output()
        );
        result.json_lines()
    }

    /// Write a file into the working directory
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn read_file(&self, relative: &str) -> String {
        read(&self.path(relative))
    }

    /// The saved portfolio document
    pub fn portfolio_json(&self) -> Value {
        serde_json::from_str(&read(&self.portfolio_path())).expect("portfolio is not JSON")
    }

    /// Codes of saved applications, in store order
    pub fn codes(&self) -> Vec<String> {
        self.portfolio_json()["applications"]
            .as_array()
            .map(|apps| {
                apps.iter()
                    .map(|a| a["code"].as_str().unwrap_or_default().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
