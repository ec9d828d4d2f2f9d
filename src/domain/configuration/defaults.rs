//! Default configuration for a freshly initialized project.

use chrono::{NaiveDate, Utc};

use crate::domain::AppError;
use crate::domain::configuration::model::{
    GitHubConfig, LanguageConfig, OptimizationConfig, ProjectConfig, SdkConfig, SdkConfiguration,
};
use crate::domain::project::{DATE_FORMAT, ProjectInfo};

pub const DEFAULT_VERSION: &str = "0.1.0";
pub const DEFAULT_SOURCE_LANGUAGE: &str = "csharp";
pub const DEFAULT_FRAMEWORK: &str = "net10.0";
pub const DEFAULT_MODE: &str = "personal";
pub const DEFAULT_AUTHOR: &str = "@user";
pub const DEFAULT_MIN_DOTNET_VERSION: &str = "9.0.0";
pub const DEFAULT_CONVERSATION_LANGUAGE: &str = "es";
pub const DEFAULT_CONVERSATION_LANGUAGE_NAME: &str = "Spanish";

/// Build the default configuration for `info`, dated today (UTC).
pub fn create_default(info: Option<&ProjectInfo>) -> Result<SdkConfiguration, AppError> {
    create_default_on(info, Utc::now().date_naive())
}

/// Build the default configuration for `info`, dated `today`.
pub fn create_default_on(
    info: Option<&ProjectInfo>,
    today: NaiveDate,
) -> Result<SdkConfiguration, AppError> {
    let info =
        info.ok_or_else(|| AppError::invalid_argument("project_info", "project info is required"))?;
    if info.name.trim().is_empty() {
        return Err(AppError::invalid_argument("project_info", "project name is required"));
    }

    let today = today.format(DATE_FORMAT).to_string();

    Ok(SdkConfiguration {
        project: Some(ProjectConfig {
            name: Some(info.name.clone()),
            version: Some(DEFAULT_VERSION.to_string()),
            template_version: Some(DEFAULT_VERSION.to_string()),
            created: Some(today.clone()),
            updated: Some(today),
            language: Some(DEFAULT_SOURCE_LANGUAGE.to_string()),
            framework: Some(info.framework_or_default().to_string()),
            mode: Some(DEFAULT_MODE.to_string()),
            author: Some(info.author_or_default().to_string()),
        }),
        sdk: Some(SdkConfig {
            version: Some(DEFAULT_VERSION.to_string()),
            min_dotnet_version: Some(DEFAULT_MIN_DOTNET_VERSION.to_string()),
        }),
        language: Some(LanguageConfig {
            conversation_language: Some(DEFAULT_CONVERSATION_LANGUAGE.to_string()),
            conversation_language_name: Some(DEFAULT_CONVERSATION_LANGUAGE_NAME.to_string()),
        }),
        github: Some(GitHubConfig { enabled: false, repository: None, auto_delete_branches: None }),
        optimization: Some(OptimizationConfig { last_sync: None, template_synced: false }),
    })
}
