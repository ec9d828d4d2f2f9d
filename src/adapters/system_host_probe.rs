use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::ports::{GitIdentity, HostProbe};

/// Probes the real host: spawns processes and reads the user's git config.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostProbe;

impl SystemHostProbe {
    pub fn new() -> Self {
        Self
    }
}

impl HostProbe for SystemHostProbe {
    fn command_output(&self, program: &str, args: &[&str]) -> Option<String> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .inspect_err(|err| debug!(program, error = %err, "failed to spawn"))
            .ok()?;

        if !output.status.success() {
            debug!(program, status = ?output.status.code(), "command exited unsuccessfully");
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn git_identity(&self) -> GitIdentity {
        let config = match git2::Config::open_default() {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "git config unavailable");
                return GitIdentity::default();
            }
        };
        GitIdentity {
            name: config.get_string("user.name").ok(),
            email: config.get_string("user.email").ok(),
        }
    }

    fn available_space(&self, path: &Path) -> Option<u64> {
        let existing = path.ancestors().find(|p| p.exists())?;
        let output = Command::new("df")
            .arg("-Pk")
            .arg(existing)
            .stdin(Stdio::null())
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        parse_df_available(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Free bytes from POSIX `df -Pk` output (fourth column, in KiB).
fn parse_df_available(output: &str) -> Option<u64> {
    let line = output.lines().nth(1)?;
    let kib: u64 = line.split_whitespace().nth(3)?.parse().ok()?;
    Some(kib * 1024)
}
