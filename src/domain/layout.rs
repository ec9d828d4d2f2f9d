//! Fixed on-disk layout of an initialized project.

use std::path::{Path, PathBuf};

/// Tool directory at the project root.
pub const SDK_DIR: &str = ".mjcuadrado-net-sdk";

/// Configuration file inside [`SDK_DIR`].
pub const CONFIG_FILE: &str = "config.json";

/// Agent tooling directory at the project root.
pub const CLAUDE_DIR: &str = ".claude";

/// Subfolders of [`SDK_DIR`].
pub const SDK_FOLDERS: [&str; 3] = ["memory", "reports", "specs"];

/// Subfolders of [`CLAUDE_DIR`].
pub const CLAUDE_FOLDERS: [&str; 4] = ["agents", "commands", "skills", "hooks"];

/// Every directory `init` creates, relative to the project root, parents first.
pub fn project_folders() -> Vec<String> {
    let mut folders = vec![SDK_DIR.to_string()];
    folders.extend(SDK_FOLDERS.iter().map(|f| format!("{}/{}", SDK_DIR, f)));
    folders.push(CLAUDE_DIR.to_string());
    folders.extend(CLAUDE_FOLDERS.iter().map(|f| format!("{}/{}", CLAUDE_DIR, f)));
    folders
}

/// `<root>/.mjcuadrado-net-sdk/config.json`
pub fn config_path(root: &Path) -> PathBuf {
    root.join(SDK_DIR).join(CONFIG_FILE)
}
