use crate::domain::{AppError, ProjectInfo};

/// A rendered scaffold file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    /// Path relative to the project root.
    pub path: String,
    /// File content as UTF-8 text.
    pub content: String,
}

/// Port for the documentation templates written by `init`.
pub trait TemplateStore {
    /// Render every scaffold file for the given project.
    fn scaffold_files(&self, project: &ProjectInfo) -> Result<Vec<ScaffoldFile>, AppError>;
}
