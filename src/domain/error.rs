use std::io;

use thiserror::Error;

use crate::domain::configuration::ValidationResult;

/// Library-wide error type for mjcuadrado-net-sdk operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required input to a core operation was missing or blank.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Project name is not filename-safe.
    #[error(
        "Invalid project name '{0}': only letters, digits, '.', '_' and '-' are allowed"
    )]
    InvalidProjectName(String),

    /// Project structure already exists at the target location.
    #[error("Project already initialized at {0}. Use --force to overwrite.")]
    ProjectExists(String),

    /// No configuration file at the given path.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration file exists but is not a readable configuration document.
    #[error("Failed to parse configuration {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// Configuration failed validation and was not persisted.
    #[error("Configuration is not valid: {0}")]
    InvalidConfiguration(ValidationResult),

    /// Configuration could not be encoded as JSON.
    #[error("Failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Scaffold template could not be loaded or rendered.
    #[error("Template '{name}' failed: {details}")]
    Template { name: String, details: String },

    /// Interactive prompt could not be completed.
    #[error("Interactive prompt failed: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn invalid_argument<S: Into<String>>(name: &'static str, reason: S) -> Self {
        AppError::InvalidArgument { name, reason: reason.into() }
    }
}
