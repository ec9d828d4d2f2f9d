use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::WorkspaceStore;

const WRITE_PROBE_FILE: &str = ".write_test.tmp";

/// Filesystem-based workspace store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemWorkspaceStore {
    root: PathBuf,
}

impl FilesystemWorkspaceStore {
    /// Create a workspace store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let full_path = self.root.join(path);
        self.validate_path_within_root(&full_path)?;
        Ok(full_path)
    }

    /// Validates that a path stays within the workspace root.
    ///
    /// Uses logical normalization of `.` and `..` so paths to directories
    /// that do not exist yet can be checked.
    fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let normalized_path = normalize_path(path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::invalid_argument(
                "path",
                format!("'{}' escapes the project root", path.display()),
            ));
        }

        Ok(())
    }
}

impl WorkspaceStore for FilesystemWorkspaceStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_dirs(&self, dirs: &[String]) -> Result<(), AppError> {
        for dir in dirs.iter().filter(|d| !d.trim().is_empty()) {
            let full_path = self.resolve_path(dir)?;
            debug!(path = %full_path.display(), "creating directory");
            fs::create_dir_all(full_path)?;
        }
        Ok(())
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %full_path.display(), bytes = content.len(), "writing file");
        fs::write(full_path, content)?;
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve_path(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve_path(path).map(|p| p.is_dir()).unwrap_or(false)
    }

    fn can_write(&self) -> bool {
        let dir = if self.root.is_dir() {
            self.root.clone()
        } else {
            match self.root.parent() {
                Some(parent) => parent.to_path_buf(),
                None => return false,
            }
        };

        let probe = dir.join(WRITE_PROBE_FILE);
        let writable = fs::write(&probe, "test").is_ok();
        if writable {
            let _ = fs::remove_file(&probe);
        }
        writable
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
