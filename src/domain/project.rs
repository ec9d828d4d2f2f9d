use std::path::PathBuf;

use chrono::Utc;

use crate::domain::configuration::defaults::{DEFAULT_AUTHOR, DEFAULT_FRAMEWORK};

/// Date format shared by configuration dates and template variables.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date (UTC) as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Input for `init`: seeds both the default configuration and the scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub name: String,
    /// Project root the scaffold is written into.
    pub base_path: PathBuf,
    pub author: Option<String>,
    pub framework: Option<String>,
    pub sdk_version: String,
    /// Creation date used for template rendering, `YYYY-MM-DD`.
    pub created_date: String,
    /// Overwrite an existing scaffold.
    pub force: bool,
}

impl ProjectInfo {
    pub fn new(name: impl Into<String>, base_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
            author: None,
            framework: None,
            sdk_version: env!("CARGO_PKG_VERSION").to_string(),
            created_date: today(),
            force: false,
        }
    }

    /// Author, falling back to `@user` when unset or blank.
    pub fn author_or_default(&self) -> &str {
        non_blank(self.author.as_deref()).unwrap_or(DEFAULT_AUTHOR)
    }

    /// Target framework, falling back to `net10.0` when unset or blank.
    pub fn framework_or_default(&self) -> &str {
        non_blank(self.framework.as_deref()).unwrap_or(DEFAULT_FRAMEWORK)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
