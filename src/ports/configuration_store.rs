use std::path::{Path, PathBuf};

use crate::domain::configuration::merge;
use crate::domain::{AppError, SdkConfiguration};

/// Port for persisting the project configuration document.
pub trait ConfigurationStore {
    /// Read and parse a configuration file.
    ///
    /// Fails with `ConfigNotFound` when the file is absent and `ConfigParse`
    /// when it is not a configuration document. Validity is not checked.
    fn load(&self, path: &Path) -> Result<SdkConfiguration, AppError>;

    /// Validate and write a configuration file.
    ///
    /// Refuses with `InvalidConfiguration` when validation fails; nothing is
    /// written in that case.
    fn save(&self, path: &Path, config: &SdkConfiguration) -> Result<(), AppError>;

    /// Search `start` and its ancestors for `.mjcuadrado-net-sdk/config.json`.
    fn find(&self, start: &Path) -> Option<PathBuf>;

    /// Load, merge `overrides` onto the stored configuration, and save.
    ///
    /// Returns the merged configuration as persisted.
    fn update(
        &self,
        path: &Path,
        overrides: &SdkConfiguration,
    ) -> Result<SdkConfiguration, AppError> {
        let stored = self.load(path)?;
        let merged = merge(Some(&stored), Some(overrides))?;
        self.save(path, &merged)?;
        self.load(path)
    }
}
