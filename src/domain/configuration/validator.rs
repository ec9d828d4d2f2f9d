//! Configuration validation.
//!
//! Validation never stops at the first problem: every applicable check runs
//! and each failure is recorded against its field path (`project.version`,
//! `github.repository`, ...). Messages are for humans; field paths are the
//! stable part of the contract.

use std::fmt;

use crate::domain::configuration::model::{
    GitHubConfig, LanguageConfig, OptimizationConfig, ProjectConfig, SdkConfig, SdkConfiguration,
};
use crate::domain::validation::{
    SUPPORTED_LANGUAGES, is_supported_language, is_valid_date, is_valid_name, is_valid_semver,
};

/// One failed constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All problems found in a single validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff no errors were recorded.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(ValidationError::new(field, message));
    }

    pub fn summary(&self) -> String {
        self.errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Validate a configuration, accumulating every violation.
///
/// `None` yields a single `config` error. A missing section yields one error
/// naming the section and skips that section's field checks.
pub fn validate(config: Option<&SdkConfiguration>) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(config) = config else {
        result.add_error("config", "configuration must not be null");
        return result;
    };

    match &config.project {
        Some(project) => validate_project(project, &mut result),
        None => section_required("project", &mut result),
    }
    match &config.sdk {
        Some(sdk) => validate_sdk(sdk, &mut result),
        None => section_required("sdk", &mut result),
    }
    match &config.language {
        Some(language) => validate_language(language, &mut result),
        None => section_required("language", &mut result),
    }
    match &config.github {
        Some(github) => validate_github(github, &mut result),
        None => section_required("github", &mut result),
    }
    match &config.optimization {
        Some(optimization) => validate_optimization(optimization, &mut result),
        None => section_required("optimization", &mut result),
    }

    result
}

fn section_required(section: &str, result: &mut ValidationResult) {
    result.add_error(section, format!("section '{}' is required", section));
}

fn display(value: Option<&str>) -> &str {
    value.unwrap_or("<missing>")
}

fn validate_project(project: &ProjectConfig, result: &mut ValidationResult) {
    let name = project.name.as_deref();
    if name.is_none_or(|n| n.trim().is_empty()) {
        result.add_error("project.name", "project name is required");
    } else if !is_valid_name(name) {
        result.add_error(
            "project.name",
            format!("project name contains invalid characters: {}", display(name)),
        );
    }

    check_semver("project.version", project.version.as_deref(), result);
    check_semver("project.template_version", project.template_version.as_deref(), result);
    check_date("project.created", project.created.as_deref(), result);
    check_date("project.updated", project.updated.as_deref(), result);
}

fn validate_sdk(sdk: &SdkConfig, result: &mut ValidationResult) {
    check_semver("sdk.version", sdk.version.as_deref(), result);
    check_semver("sdk.min_dotnet_version", sdk.min_dotnet_version.as_deref(), result);
}

fn validate_language(language: &LanguageConfig, result: &mut ValidationResult) {
    let value = language.conversation_language.as_deref();
    if !is_supported_language(value) {
        result.add_error(
            "language.conversation_language",
            format!(
                "unsupported language: {}. Supported: {}",
                display(value),
                SUPPORTED_LANGUAGES.join(", ")
            ),
        );
    }
}

fn validate_github(github: &GitHubConfig, result: &mut ValidationResult) {
    let repository_missing = github.repository.as_deref().is_none_or(|r| r.trim().is_empty());
    if github.enabled && repository_missing {
        result.add_error("github.repository", "repository is required when GitHub is enabled");
    }
}

fn validate_optimization(optimization: &OptimizationConfig, result: &mut ValidationResult) {
    if let Some(last_sync) = optimization.last_sync.as_deref()
        && !is_valid_date(Some(last_sync))
    {
        result.add_error(
            "optimization.last_sync",
            format!("last sync is not a valid YYYY-MM-DD date: {}", last_sync),
        );
    }
}

fn check_semver(field: &str, value: Option<&str>, result: &mut ValidationResult) {
    if !is_valid_semver(value) {
        result.add_error(field, format!("not a valid semantic version: {}", display(value)));
    }
}

fn check_date(field: &str, value: Option<&str>, result: &mut ValidationResult) {
    if !is_valid_date(value) {
        result.add_error(field, format!("not a valid YYYY-MM-DD date: {}", display(value)));
    }
}
