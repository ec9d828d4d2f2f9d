//! Shared testing utilities for mjcuadrado-net-sdk CLI tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SDK_DIR: &str = ".mjcuadrado-net-sdk";

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in by default.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for the compiled binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("mjcuadrado-net-sdk")
            .expect("Failed to locate mjcuadrado-net-sdk binary");
        cmd.current_dir(dir.as_ref())
            .env("HOME", self.home())
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env_remove("MJSDK_LOG");
        cmd
    }

    pub fn config_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(SDK_DIR).join("config.json")
    }

    /// Parse a project's config.json as raw JSON.
    pub fn read_config(&self, project_root: &Path) -> Value {
        let content = fs::read_to_string(self.config_path(project_root))
            .expect("config.json should be readable");
        serde_json::from_str(&content).expect("config.json should be valid JSON")
    }

    pub fn write_config(&self, project_root: &Path, value: &Value) {
        let json = serde_json::to_string_pretty(value).expect("serialize config");
        fs::write(self.config_path(project_root), json).expect("write config.json");
    }

    /// Assert every directory and document `init` is expected to produce.
    pub fn assert_scaffold(&self, project_root: &Path) {
        for dir in [
            ".mjcuadrado-net-sdk/memory",
            ".mjcuadrado-net-sdk/reports",
            ".mjcuadrado-net-sdk/specs",
            ".claude/agents",
            ".claude/commands",
            ".claude/skills",
            ".claude/hooks",
        ] {
            assert!(project_root.join(dir).is_dir(), "{} should exist", dir);
            assert!(
                project_root.join(dir).join("README.md").is_file(),
                "{}/README.md should exist",
                dir
            );
        }
        for doc in ["config.json", "product.md", "structure.md", "tech.md"] {
            assert!(project_root.join(SDK_DIR).join(doc).is_file(), "{} should exist", doc);
        }
    }
}
