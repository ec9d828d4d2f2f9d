use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::configuration::validate;
use crate::domain::layout::config_path;
use crate::domain::project::today;
use crate::domain::{AppError, SdkConfiguration};
use crate::ports::ConfigurationStore;

/// Stores the configuration as pretty-printed JSON on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigurationStore;

impl JsonConfigurationStore {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigurationStore for JsonConfigurationStore {
    fn load(&self, path: &Path) -> Result<SdkConfiguration, AppError> {
        let content = fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::ConfigNotFound(path.display().to_string()),
            _ => AppError::Io(err),
        })?;

        let parsed: Option<SdkConfiguration> =
            serde_json::from_str(&content).map_err(|err| AppError::ConfigParse {
                path: path.display().to_string(),
                details: err.to_string(),
            })?;

        let config = parsed.ok_or_else(|| AppError::ConfigParse {
            path: path.display().to_string(),
            details: "document is empty".to_string(),
        })?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn save(&self, path: &Path, config: &SdkConfiguration) -> Result<(), AppError> {
        let validation = validate(Some(config));
        if !validation.is_valid() {
            warn!(
                path = %path.display(),
                errors = %validation,
                "refusing to save invalid configuration"
            );
            return Err(AppError::InvalidConfiguration(validation));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut stamped = config.clone();
        if let Some(project) = stamped.project.as_mut() {
            project.updated = Some(today());
        }

        let mut json = serde_json::to_string_pretty(&stamped)?;
        json.push('\n');
        fs::write(path, json)?;

        info!(path = %path.display(), "saved configuration");
        Ok(())
    }

    fn find(&self, start: &Path) -> Option<PathBuf> {
        if !start.is_dir() {
            return None;
        }

        let found = start.ancestors().map(config_path).find(|candidate| candidate.is_file());
        debug!(start = %start.display(), found = ?found, "searched for configuration");
        found
    }
}
