use mjcuadrado_net_sdk::{
    AppError, GitHubConfig, InitOptions, ProjectConfig, SdkConfiguration, doctor_at,
    find_configuration, init_at, is_initialized, load_configuration, resolve_project,
    save_configuration, update_configuration, validate_configuration,
};
use std::fs;
use tempfile::TempDir;

fn named(name: &str) -> InitOptions {
    InitOptions { name: Some(name.to_string()), ..Default::default() }
}

#[test]
fn init_at_writes_a_valid_configuration() {
    let dir = TempDir::new().unwrap();

    let outcome = init_at(dir.path(), &named("billing")).unwrap();

    assert_eq!(outcome.root, dir.path().join("billing"));
    assert!(is_initialized(&outcome.root));
    assert_eq!(outcome.directories.len(), 9);
    assert_eq!(outcome.files_written.len(), 10);

    let config = load_configuration(&outcome.config_path).unwrap();
    assert!(validate_configuration(&config).is_valid());
    assert_eq!(config.project.unwrap().name.as_deref(), Some("billing"));
}

#[test]
fn init_at_refuses_existing_project_unless_forced() {
    let dir = TempDir::new().unwrap();
    init_at(dir.path(), &named("billing")).unwrap();

    let err = init_at(dir.path(), &named("billing")).unwrap_err();
    assert!(matches!(err, AppError::ProjectExists(_)));

    let forced = InitOptions { force: true, ..named("billing") };
    assert!(init_at(dir.path(), &forced).is_ok());
}

#[test]
fn resolve_project_defaults_to_directory_name() {
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().join("Inventory.Service");
    fs::create_dir_all(&cwd).unwrap();

    let project = resolve_project(&cwd, &InitOptions::default()).unwrap();
    assert_eq!(project.name, "Inventory.Service");
    assert_eq!(project.base_path, cwd);

    let spaced = dir.path().join("has space");
    fs::create_dir_all(&spaced).unwrap();
    let err = resolve_project(&spaced, &InitOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::InvalidProjectName(_)));
}

#[test]
fn update_configuration_merges_and_stamps() {
    let dir = TempDir::new().unwrap();
    let outcome = init_at(dir.path(), &named("billing")).unwrap();

    let overrides = SdkConfiguration {
        project: Some(ProjectConfig { version: Some("1.2.0".into()), ..Default::default() }),
        github: Some(GitHubConfig {
            enabled: true,
            repository: Some("acme/billing".into()),
            auto_delete_branches: Some(true),
        }),
        ..Default::default()
    };
    let updated = update_configuration(&outcome.config_path, &overrides).unwrap();

    let project = updated.project.unwrap();
    assert_eq!(project.version.as_deref(), Some("1.2.0"));
    assert_eq!(project.author.as_deref(), Some("@user"));
    assert_eq!(updated.github.unwrap().repository.as_deref(), Some("acme/billing"));
}

#[test]
fn save_configuration_rejects_invalid_documents() {
    let dir = TempDir::new().unwrap();
    let outcome = init_at(dir.path(), &named("billing")).unwrap();

    let mut config = load_configuration(&outcome.config_path).unwrap();
    config.language.as_mut().unwrap().conversation_language = Some("klingon".into());

    let err = save_configuration(&outcome.config_path, &config).unwrap_err();
    match err {
        AppError::InvalidConfiguration(result) => {
            assert_eq!(result.errors()[0].field, "language.conversation_language");
        }
        other => panic!("unexpected error: {other}"),
    }
    let stored = load_configuration(&outcome.config_path).unwrap();
    assert_eq!(stored.language.unwrap().conversation_language.as_deref(), Some("es"));
}

#[test]
fn find_configuration_from_nested_directory() {
    let dir = TempDir::new().unwrap();
    let outcome = init_at(dir.path(), &named("billing")).unwrap();
    let nested = outcome.root.join("src/Billing.Api/Controllers");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_configuration(&nested), Some(outcome.config_path));
    assert_eq!(find_configuration(dir.path()), None);
}

#[test]
fn doctor_at_inspects_enclosing_project() {
    let dir = TempDir::new().unwrap();
    let outcome = init_at(dir.path(), &named("billing")).unwrap();
    let nested = outcome.root.join("docs");
    fs::create_dir_all(&nested).unwrap();

    let report = doctor_at(&nested).unwrap();
    let structure = report.checks.iter().find(|c| c.name == "Project Structure").unwrap();
    assert!(structure.success, "{:?}", structure.details);

    let permissions = report.checks.iter().find(|c| c.name == "Write Permissions").unwrap();
    assert!(permissions.success);
}

#[test]
fn doctor_at_uninitialized_directory_fails_structure() {
    let dir = TempDir::new().unwrap();

    let report = doctor_at(dir.path()).unwrap();

    assert!(!report.all_passed());
    let structure = report.checks.iter().find(|c| c.name == "Project Structure").unwrap();
    assert_eq!(structure.details.as_deref(), Some(".mjcuadrado-net-sdk/"));
}
