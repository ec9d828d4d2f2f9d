//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    EmbeddedTemplateStore, FilesystemWorkspaceStore, JsonConfigurationStore, SystemHostProbe,
};
use crate::app::AppContext;
use crate::app::commands::{doctor, init, version};
use crate::domain::configuration::validate;
use crate::domain::layout::SDK_DIR;
use crate::domain::{DiagnosticReport, ProjectInfo, SdkConfiguration, ValidationResult};
use crate::ports::ConfigurationStore;

pub use crate::app::commands::init::InitOutcome;
pub use crate::app::commands::version::VersionInfo;
pub use crate::domain::AppError;

type SystemContext = AppContext<
    FilesystemWorkspaceStore,
    EmbeddedTemplateStore,
    JsonConfigurationStore,
    SystemHostProbe,
>;

/// Create an `AppContext` for a given project root.
fn create_context(root: PathBuf) -> SystemContext {
    AppContext::new(
        FilesystemWorkspaceStore::new(root),
        EmbeddedTemplateStore::new(),
        JsonConfigurationStore::new(),
        SystemHostProbe::new(),
    )
}

// =============================================================================
// Init Command API
// =============================================================================

/// Options accepted by `init`.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Project name; the target becomes `<cwd>/<name>`. Defaults to the
    /// current directory's name, initializing in place.
    pub name: Option<String>,
    pub force: bool,
    pub author: Option<String>,
    pub framework: Option<String>,
}

/// Resolve the project root and name `init` would use from `cwd`.
pub fn resolve_project(cwd: &Path, options: &InitOptions) -> Result<ProjectInfo, AppError> {
    let (name, root) = match options.name.as_deref() {
        Some(name) => {
            init::ensure_project_name(name)?;
            (name.to_string(), cwd.join(name))
        }
        None => {
            let name = cwd
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| AppError::InvalidProjectName(cwd.display().to_string()))?;
            init::ensure_project_name(&name)?;
            (name, cwd.to_path_buf())
        }
    };

    let mut project = ProjectInfo::new(name, root);
    project.author = options.author.clone();
    project.framework = options.framework.clone();
    project.force = options.force;
    Ok(project)
}

/// Whether `root` already holds a scaffold.
pub fn is_initialized(root: &Path) -> bool {
    root.join(SDK_DIR).is_dir()
}

/// Initialize a project relative to the current directory.
pub fn init(options: &InitOptions) -> Result<InitOutcome, AppError> {
    init_at(std::env::current_dir()?, options)
}

/// Initialize a project relative to `cwd`.
pub fn init_at(cwd: impl AsRef<Path>, options: &InitOptions) -> Result<InitOutcome, AppError> {
    let project = resolve_project(cwd.as_ref(), options)?;
    init_project(&project)
}

/// Initialize an already resolved project.
pub fn init_project(project: &ProjectInfo) -> Result<InitOutcome, AppError> {
    let ctx = create_context(project.base_path.clone());
    init::execute(&ctx, project)
}

// =============================================================================
// Doctor / Version API
// =============================================================================

/// Diagnose the host and the project containing the current directory.
pub fn doctor() -> Result<DiagnosticReport, AppError> {
    doctor_at(std::env::current_dir()?)
}

/// Diagnose the host and the project at or above `path`.
///
/// When no configuration is found upwards, `path` itself is inspected.
pub fn doctor_at(path: impl Into<PathBuf>) -> Result<DiagnosticReport, AppError> {
    let path = path.into();
    let root = project_root(&path).unwrap_or(path);
    Ok(doctor::execute(&create_context(root)))
}

fn project_root(start: &Path) -> Option<PathBuf> {
    let config = JsonConfigurationStore::new().find(start)?;
    config.parent()?.parent().map(Path::to_path_buf)
}

/// Tool version and host details.
pub fn version_info() -> VersionInfo {
    version::execute(&SystemHostProbe::new())
}

// =============================================================================
// Configuration API
// =============================================================================

/// Read a configuration file without validating it.
pub fn load_configuration(path: &Path) -> Result<SdkConfiguration, AppError> {
    JsonConfigurationStore::new().load(path)
}

/// Validate and write a configuration file.
pub fn save_configuration(path: &Path, config: &SdkConfiguration) -> Result<(), AppError> {
    JsonConfigurationStore::new().save(path, config)
}

/// Locate the nearest configuration file at or above `start`.
pub fn find_configuration(start: &Path) -> Option<PathBuf> {
    JsonConfigurationStore::new().find(start)
}

/// Merge `overrides` into the stored configuration and persist the result.
pub fn update_configuration(
    path: &Path,
    overrides: &SdkConfiguration,
) -> Result<SdkConfiguration, AppError> {
    JsonConfigurationStore::new().update(path, overrides)
}

/// Validate an in-memory configuration.
pub fn validate_configuration(config: &SdkConfiguration) -> ValidationResult {
    validate(Some(config))
}
