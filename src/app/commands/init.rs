use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::configuration::{create_default, merge, validate};
use crate::domain::layout::{config_path, project_folders};
use crate::domain::validation::is_valid_name;
use crate::domain::{AppError, ProjectInfo};
use crate::ports::{ConfigurationStore, HostProbe, TemplateStore, WorkspaceStore};

/// Summary of what `init` wrote.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub directories: Vec<String>,
    pub files_written: Vec<String>,
    /// An existing configuration was carried over onto the fresh defaults.
    pub preserved_config: bool,
}

/// Reject names that are not filename-safe or that resolve outside the target.
pub fn ensure_project_name(name: &str) -> Result<(), AppError> {
    if !is_valid_name(Some(name)) || name == "." || name == ".." {
        return Err(AppError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}

/// Execute the init command.
///
/// Creates the folder layout, persists the default configuration through the
/// configuration store, and renders the documentation templates. With
/// `force`, an existing scaffold is rewritten and a readable existing
/// configuration is merged over the new defaults.
pub fn execute<W, T, C, P>(
    ctx: &AppContext<W, T, C, P>,
    project: &ProjectInfo,
) -> Result<InitOutcome, AppError>
where
    W: WorkspaceStore,
    T: TemplateStore,
    C: ConfigurationStore,
    P: HostProbe,
{
    ensure_project_name(&project.name)?;

    let workspace = ctx.workspace();
    if workspace.exists() && !project.force {
        return Err(AppError::ProjectExists(workspace.root().display().to_string()));
    }

    let config_path = config_path(workspace.root());
    let defaults = create_default(Some(project))?;
    let (config, preserved_config) = match ctx.config_store().load(&config_path) {
        Ok(existing) => {
            let merged = merge(Some(&defaults), Some(&existing))?;
            let validation = validate(Some(&merged));
            if validation.is_valid() {
                (merged, true)
            } else {
                warn!(
                    errors = %validation,
                    "existing configuration invalid, replacing with defaults"
                );
                (defaults, false)
            }
        }
        Err(AppError::ConfigNotFound(_)) => (defaults, false),
        Err(err) => {
            warn!(error = %err, "existing configuration unreadable, replacing with defaults");
            (defaults, false)
        }
    };

    let scaffold = ctx.templates().scaffold_files(project)?;

    let directories = project_folders();
    workspace.create_dirs(&directories)?;

    ctx.config_store().save(&config_path, &config)?;

    for file in &scaffold {
        workspace.write_file(&file.path, &file.content)?;
    }

    info!(
        root = %workspace.root().display(),
        files = scaffold.len(),
        preserved_config,
        "project initialized"
    );

    Ok(InitOutcome {
        root: workspace.root().to_path_buf(),
        config_path,
        directories,
        files_written: scaffold.into_iter().map(|f| f.path).collect(),
        preserved_config,
    })
}
