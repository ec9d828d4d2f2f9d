use std::path::Path;

use crate::domain::{AppError, SDK_DIR};

/// Port for the project directory a scaffold is written into.
///
/// Relative paths are resolved against [`WorkspaceStore::root`]; paths that
/// would escape the root are rejected.
pub trait WorkspaceStore {
    /// Project root directory.
    fn root(&self) -> &Path;

    /// Check whether the tool directory exists in the root.
    fn exists(&self) -> bool {
        self.is_dir(SDK_DIR)
    }

    /// Create each directory (and its parents).
    fn create_dirs(&self, dirs: &[String]) -> Result<(), AppError>;

    /// Write a file, creating its parent directory.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    fn file_exists(&self, path: &str) -> bool;

    fn is_dir(&self, path: &str) -> bool;

    /// Probe whether files can be created in the root.
    fn can_write(&self) -> bool;
}
