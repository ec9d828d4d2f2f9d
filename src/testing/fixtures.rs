use crate::domain::{
    GitHubConfig, LanguageConfig, OptimizationConfig, ProjectConfig, SdkConfig, SdkConfiguration,
};

/// A fully populated configuration that passes validation.
pub fn valid_configuration() -> SdkConfiguration {
    SdkConfiguration {
        project: Some(ProjectConfig {
            name: Some("demo".into()),
            version: Some("0.1.0".into()),
            created: Some("2024-01-01".into()),
            updated: Some("2024-01-02".into()),
            language: Some("csharp".into()),
            framework: Some("net10.0".into()),
            mode: Some("personal".into()),
            author: Some("@user".into()),
            template_version: Some("0.1.0".into()),
        }),
        sdk: Some(SdkConfig {
            version: Some("0.1.0".into()),
            min_dotnet_version: Some("9.0.0".into()),
        }),
        language: Some(LanguageConfig {
            conversation_language: Some("es".into()),
            conversation_language_name: Some("Spanish".into()),
        }),
        github: Some(GitHubConfig { enabled: false, repository: None, auto_delete_branches: None }),
        optimization: Some(OptimizationConfig::default()),
    }
}
