use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::{GitIdentity, HostProbe};

/// Scripted host: canned command output, git identity and free space.
#[derive(Debug, Default)]
pub struct FakeHostProbe {
    outputs: HashMap<String, String>,
    identity: GitIdentity,
    available: Option<u64>,
    pub space_queries: Mutex<Vec<PathBuf>>,
}

impl FakeHostProbe {
    /// Nothing installed, no identity, unknown disk space.
    pub fn new() -> Self {
        Self::default()
    }

    /// .NET 10, git with identity, and 10 GiB free.
    pub fn healthy() -> Self {
        Self::new()
            .with_output("dotnet --version", "10.0.100\n")
            .with_output("git --version", "git version 2.43.0\n")
            .with_identity("Maria", "maria@example.com")
            .with_available_space(10 * 1024 * 1024 * 1024)
    }

    /// Register stdout for `"<program> <args...>"`.
    pub fn with_output(mut self, command: &str, stdout: &str) -> Self {
        self.outputs.insert(command.to_string(), stdout.to_string());
        self
    }

    pub fn with_identity(mut self, name: &str, email: &str) -> Self {
        self.identity = GitIdentity { name: Some(name.into()), email: Some(email.into()) };
        self
    }

    pub fn without_identity(mut self) -> Self {
        self.identity = GitIdentity::default();
        self
    }

    pub fn with_available_space(mut self, bytes: u64) -> Self {
        self.available = Some(bytes);
        self
    }
}

impl HostProbe for FakeHostProbe {
    fn command_output(&self, program: &str, args: &[&str]) -> Option<String> {
        let mut key = program.to_string();
        for arg in args {
            key.push(' ');
            key.push_str(arg);
        }
        self.outputs.get(&key).cloned()
    }

    fn git_identity(&self) -> GitIdentity {
        self.identity.clone()
    }

    fn available_space(&self, path: &Path) -> Option<u64> {
        self.space_queries.lock().unwrap().push(path.to_path_buf());
        self.available
    }
}
