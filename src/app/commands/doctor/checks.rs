//! Individual host and project probes.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::domain::configuration::validate;
use crate::domain::diagnostics::{MIN_DOTNET_MAJOR, MIN_FREE_BYTES};
use crate::domain::layout::{CLAUDE_FOLDERS, SDK_FOLDERS, config_path};
use crate::domain::{
    CLAUDE_DIR, CONFIG_FILE, DiskCheck, DotnetCheck, GitCheck, PermissionsCheck, SDK_DIR,
    StructureCheck,
};
use crate::ports::{ConfigurationStore, HostProbe, WorkspaceStore};

pub(super) const NOT_INSTALLED: &str = "Not installed";

static DOTNET_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)").expect("valid dotnet version regex"));

static GIT_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+\.\d+)").expect("valid git version regex"));

pub fn check_dotnet<P: HostProbe>(probe: &P) -> DotnetCheck {
    let Some(output) = probe.command_output("dotnet", &["--version"]) else {
        return DotnetCheck { success: false, version: NOT_INSTALLED.to_string() };
    };
    let version = output.trim().to_string();

    let major = DOTNET_VERSION_RE
        .captures(&version)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());
    debug!(version = %version, ?major, "dotnet probed");

    match major {
        Some(major) if major >= MIN_DOTNET_MAJOR => DotnetCheck { success: true, version },
        Some(_) => DotnetCheck {
            success: false,
            version: format!("{} (required >= {}.0)", version, MIN_DOTNET_MAJOR),
        },
        None => DotnetCheck { success: false, version },
    }
}

pub fn check_git<P: HostProbe>(probe: &P) -> GitCheck {
    let Some(output) = probe.command_output("git", &["--version"]) else {
        return GitCheck { success: false, version: NOT_INSTALLED.to_string(), configured: false };
    };
    let output = output.trim();
    let version = GIT_VERSION_RE
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map_or(output, |m| m.as_str())
        .to_string();
    let configured = probe.git_identity().is_configured();
    debug!(version = %version, configured, "git probed");

    GitCheck { success: true, version, configured }
}

/// Missing entries of the project layout; a missing tool directory short-circuits.
pub fn check_structure<W, C>(workspace: &W, store: &C) -> StructureCheck
where
    W: WorkspaceStore,
    C: ConfigurationStore,
{
    let mut missing = Vec::new();

    if !workspace.is_dir(SDK_DIR) {
        missing.push(format!("{}/", SDK_DIR));
        return StructureCheck { success: false, missing };
    }

    if !workspace.file_exists(&format!("{}/{}", SDK_DIR, CONFIG_FILE)) {
        missing.push(CONFIG_FILE.to_string());
    } else {
        let usable = match store.load(&config_path(workspace.root())) {
            Ok(config) => validate(Some(&config)).is_valid(),
            Err(err) => {
                debug!(error = %err, "configuration failed to load");
                false
            }
        };
        if !usable {
            missing.push(format!("{} (invalid)", CONFIG_FILE));
        }
    }

    for folder in SDK_FOLDERS {
        if !workspace.is_dir(&format!("{}/{}", SDK_DIR, folder)) {
            missing.push(format!("{}/", folder));
        }
    }

    if !workspace.is_dir(CLAUDE_DIR) {
        missing.push(format!("{}/", CLAUDE_DIR));
    } else {
        for folder in CLAUDE_FOLDERS {
            let path = format!("{}/{}", CLAUDE_DIR, folder);
            if !workspace.is_dir(&path) {
                missing.push(format!("{}/", path));
            }
        }
    }

    StructureCheck { success: missing.is_empty(), missing }
}

pub fn check_disk<W, P>(workspace: &W, probe: &P) -> DiskCheck
where
    W: WorkspaceStore,
    P: HostProbe,
{
    match probe.available_space(workspace.root()) {
        Some(available_bytes) => {
            DiskCheck { success: available_bytes >= MIN_FREE_BYTES, available_bytes }
        }
        None => DiskCheck { success: false, available_bytes: 0 },
    }
}

pub fn check_permissions<W: WorkspaceStore>(workspace: &W) -> PermissionsCheck {
    PermissionsCheck { success: workspace.can_write() }
}
