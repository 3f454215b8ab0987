//! Test environment for isolated livepoll runs.
//!
//! Every run uses the site directory as its working directory and points
//! `LIVEPOLL_CONFIG_DIR` at an empty temp dir, so user configuration on the
//! machine running the tests never leaks in.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Result of running a livepoll CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories
pub struct TestEnv {
    /// Site being watched; also the working directory of every run
    pub site: TempDir,
    /// Stand-in for the user configuration directory
    pub config_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            site: TempDir::new().expect("Failed to create site dir"),
            config_dir: TempDir::new().expect("Failed to create config dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_livepoll")),
        }
    }

    /// Get path relative to the site root
    pub fn site_path(&self, relative: &str) -> PathBuf {
        self.site.path().join(relative)
    }

    /// Write a file under the site root, creating parents
    pub fn write_site_file(&self, relative: &str, content: &str) {
        let path = self.site_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
    }

    /// Pin a site file's modification time to `secs` after the epoch
    pub fn set_mtime(&self, relative: &str, secs: u64) {
        std::fs::File::options()
            .write(true)
            .open(self.site_path(relative))
            .expect("Failed to open file")
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .expect("Failed to set mtime");
    }

    /// Write `livepoll.toml` in the working directory
    pub fn write_config(&self, content: &str) {
        self.write_site_file("livepoll.toml", content);
    }

    /// Command for the livepoll binary, ready to run in this environment
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.site.path())
            .args(args)
            .env("LIVEPOLL_CONFIG_DIR", self.config_dir.path())
            .env_remove("LIVEPOLL_ROOT")
            .env_remove("LIVEPOLL_PORT")
            .env_remove("LIVEPOLL_BIND")
            .env_remove("LIVEPOLL_SESSION_STORE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run livepoll and capture its output
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .output()
            .expect("Failed to execute livepoll");
        output_to_result(output)
    }

    /// Run livepoll from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .current_dir(cwd)
            .output()
            .expect("Failed to execute livepoll");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
