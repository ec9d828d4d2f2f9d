//! mjcuadrado-net-sdk: scaffold `.mjcuadrado-net-sdk/` projects, validate and
//! merge their configuration, and diagnose the .NET host environment.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InitOptions, InitOutcome, VersionInfo, doctor, doctor_at, find_configuration, init, init_at,
    init_project, is_initialized, load_configuration, resolve_project, save_configuration,
    update_configuration, validate_configuration, version_info,
};
pub use domain::configuration::{create_default, merge, validate};
pub use domain::validation::{is_supported_language, is_valid_date, is_valid_name, is_valid_semver};
pub use domain::{
    AppError, DiagnosticCheck, DiagnosticReport, GitHubConfig, LanguageConfig, OptimizationConfig,
    ProjectConfig, ProjectInfo, SdkConfig, SdkConfiguration, ValidationError, ValidationResult,
};
