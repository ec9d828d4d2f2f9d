pub mod configuration;
pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod project;
pub mod validation;

pub use configuration::{
    GitHubConfig, LanguageConfig, OptimizationConfig, ProjectConfig, SdkConfig, SdkConfiguration,
    ValidationError, ValidationResult,
};
pub use diagnostics::{
    DiagnosticCheck, DiagnosticReport, DiskCheck, DotnetCheck, GitCheck, PermissionsCheck,
    StructureCheck,
};
pub use error::AppError;
pub use layout::{CLAUDE_DIR, CONFIG_FILE, SDK_DIR};
pub use project::ProjectInfo;
