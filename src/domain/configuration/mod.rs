pub mod defaults;
pub mod merge;
pub mod model;
pub mod validator;

pub use defaults::{create_default, create_default_on};
pub use merge::merge;
pub use model::{
    GitHubConfig, LanguageConfig, OptimizationConfig, ProjectConfig, SdkConfig, SdkConfiguration,
};
pub use validator::{ValidationError, ValidationResult, validate};
