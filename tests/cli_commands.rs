mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn init_with_name_creates_project_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "orders-api"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized orders-api"))
        .stdout(predicate::str::contains("cd orders-api"));

    let root = ctx.work_dir().join("orders-api");
    ctx.assert_scaffold(&root);

    let config = ctx.read_config(&root);
    assert_eq!(config["project"]["name"], "orders-api");
    assert_eq!(config["project"]["framework"], "net10.0");
    assert_eq!(config["sdk"]["min_dotnet_version"], "9.0.0");
    assert_eq!(config["language"]["conversation_language"], "es");
    assert_eq!(config["github"]["enabled"], false);
}

#[test]
fn init_without_name_uses_current_directory() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success();

    ctx.assert_scaffold(ctx.work_dir());
    assert_eq!(ctx.read_config(ctx.work_dir())["project"]["name"], "work");
}

#[test]
fn init_applies_author_and_framework() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "demo", "--author", "@maria", "--framework", "net9.0"])
        .assert()
        .success();

    let root = ctx.work_dir().join("demo");
    let config = ctx.read_config(&root);
    assert_eq!(config["project"]["author"], "@maria");
    assert_eq!(config["project"]["framework"], "net9.0");

    let tech = fs::read_to_string(root.join(".mjcuadrado-net-sdk/tech.md")).unwrap();
    assert!(tech.contains("net9.0"));
    assert!(!tech.contains("{{"));
}

#[test]
fn init_rejects_unsafe_project_names() {
    let ctx = TestContext::new();

    for name in ["bad name", "../escape", ".."] {
        ctx.cli()
            .args(["init", name])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid project name"));
    }
    assert!(fs::read_dir(ctx.work_dir()).unwrap().next().is_none());
}

#[test]
fn init_twice_without_force_fails() {
    let ctx = TestContext::new();
    ctx.cli().args(["init", "demo"]).assert().success();

    ctx.cli()
        .args(["init", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn init_force_restores_structure_and_keeps_settings() {
    let ctx = TestContext::new();
    ctx.cli().args(["init", "demo"]).assert().success();
    let root = ctx.work_dir().join("demo");

    let mut config = ctx.read_config(&root);
    config["github"]["enabled"] = true.into();
    config["github"]["repository"] = "me/demo".into();
    ctx.write_config(&root, &config);
    fs::remove_dir_all(root.join(".claude/skills")).unwrap();

    ctx.cli()
        .args(["init", "demo", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept settings"));

    ctx.assert_scaffold(&root);
    let config = ctx.read_config(&root);
    assert_eq!(config["github"]["enabled"], true);
    assert_eq!(config["github"]["repository"], "me/demo");
}

#[test]
fn doctor_outside_project_suggests_init() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Project Structure"))
        .stdout(predicate::str::contains("Initialize project with: mjcuadrado-net-sdk init"))
        .stdout(predicate::str::contains("problem(s)"));
}

#[test]
fn doctor_finds_project_from_subdirectory() {
    let ctx = TestContext::new();
    ctx.cli().args(["init", "demo"]).assert().success();
    let nested = ctx.work_dir().join("demo/src/Api");
    fs::create_dir_all(&nested).unwrap();

    ctx.cli_in(&nested)
        .args(["doctor", "--verbose"])
        .assert()
        .stdout(predicate::str::contains("All folders present"))
        .stdout(predicate::str::contains("Write Permissions"));
}

#[test]
fn doctor_flags_invalid_configuration() {
    let ctx = TestContext::new();
    ctx.cli().args(["init", "demo"]).assert().success();
    let root = ctx.work_dir().join("demo");

    let mut config = ctx.read_config(&root);
    config["sdk"]["version"] = "latest".into();
    ctx.write_config(&root, &config);

    ctx.cli_in(&root)
        .arg("doctor")
        .assert()
        .failure()
        .stdout(predicate::str::contains("config.json (invalid)"))
        .stdout(predicate::str::contains("init --force"));
}

#[test]
fn version_prints_tool_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "mjcuadrado-net-sdk v{}",
            env!("CARGO_PKG_VERSION")
        )))
        .stdout(predicate::str::contains(".NET"));
}

#[test]
fn version_verbose_shows_host_table() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["version", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Architecture"))
        .stdout(predicate::str::contains(std::env::consts::OS));
}

#[test]
fn help_lists_commands() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("doctor"))
        .stdout(predicate::str::contains("version"));
}

#[test]
fn logs_go_to_stderr_when_enabled() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "demo"])
        .env("MJSDK_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("project initialized"))
        .stdout(predicate::str::contains("project initialized").not());
}

#[test]
fn logs_are_quiet_by_default() {
    let ctx = TestContext::new();

    ctx.cli().args(["init", "demo"]).assert().success().stderr(predicate::str::is_empty());
}
