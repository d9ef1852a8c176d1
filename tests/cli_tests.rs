//! # CLI Integration Tests / CLI 集成测试
//!
//! End-to-end tests of the `suite-runner` binary: flag-mode rejection
//! paths, the setup banner and the stdin event bridge. The happy run
//! path is not exercised here because it would launch the real test
//! engine.
//!
//! `suite-runner` 二进制的端到端测试：标志模式的拒绝路径、启动横幅和
//! 标准输入事件桥。成功运行路径不在此测试，因为那会启动真实的测试引擎。

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use assert_cmd::Command;

fn runner() -> Command {
    let mut cmd = Command::cargo_bin("suite-runner").unwrap();
    cmd.args(["--lang", "en"]);
    cmd
}

#[test]
fn test_cli_mode_requires_an_environment() {
    runner()
        .arg("--cli")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid environment"))
        .stderr(predicate::str::contains("Valid options: local, stage, prod"));
}

#[test]
fn test_cli_mode_rejects_unknown_environment() {
    runner()
        .args(["--cli", "--env", "qa"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid environment: qa"));
}

#[test]
fn test_cli_mode_rejects_unknown_project() {
    runner()
        .args(["--cli", "--env", "stage", "--projects", "chrome,edge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project: edge"));
}

#[test]
fn test_cli_mode_rejects_unknown_tag() {
    runner()
        .args(["--cli", "--env", "stage", "--tags", "NIGHTLY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tag: NIGHTLY"));
}

#[test]
fn test_help_documents_the_flag_mode_options() {
    runner()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--env"))
        .stdout(predicate::str::contains("--projects"))
        .stdout(predicate::str::contains("--tags"));
}

#[test]
fn test_print_setup_shows_the_boxed_configuration() {
    runner()
        .arg("--print-setup")
        .env("ENV", "stage")
        .env("PORTAL_URL", "https://portal.stage.example")
        .env("API_URL", "https://api.stage.example")
        .env("REDIRECT_TIMEOUT", "5000")
        .assert()
        .success()
        .stdout(predicate::str::contains("GLOBAL TEST SETUP"))
        .stdout(predicate::str::contains("Env:  stage"))
        .stdout(predicate::str::contains("Url:  https://portal.stage.example"))
        .stdout(predicate::str::contains("Api:  https://api.stage.example"));
}

#[test]
fn test_print_setup_fails_fast_on_missing_settings() {
    runner()
        .arg("--print-setup")
        .env_remove("ENV")
        .env_remove("PORTAL_URL")
        .env_remove("API_URL")
        .env_remove("REDIRECT_TIMEOUT")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required configuration missing"))
        .stderr(predicate::str::contains("PORTAL_URL: null"));
}

#[test]
fn test_record_events_appends_to_the_environment_report() {
    let dir = tempfile::tempdir().unwrap();

    let events = concat!(
        r#"{"title":"User login","status":"passed","titlePath":["chrome","login.spec","Login","User login"]}"#,
        "\n",
        r#"{"title":"Excluded","status":"skipped","titlePath":["chrome"]}"#,
        "\n",
    );

    runner()
        .arg("--record-events")
        .current_dir(dir.path())
        .env("ENV", "stage")
        .write_stdin(events)
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 2 test event(s)"));

    let report = dir.path().join("custom-report").join("stage-report.txt");
    let content = fs::read_to_string(report).unwrap();
    assert_eq!(content.matches('╔').count(), 1);
    assert!(content.contains("[PASSED] [chrome] [login.spec] [Login] User login"));
    // 跳过的用例不得出现在报告中
    assert!(!content.contains("Excluded"));
}

#[test]
fn test_record_events_survives_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();

    let events = concat!(
        "this is not an event\n",
        r#"{"title":"Survivor","status":"failed","titlePath":["safari","a.spec","A","Survivor"]}"#,
        "\n",
    );

    runner()
        .arg("--record-events")
        .current_dir(dir.path())
        .env("ENV", "local")
        .write_stdin(events)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping malformed test event"));

    let report = dir.path().join("custom-report").join("local-report.txt");
    let content = fs::read_to_string(report).unwrap();
    assert!(content.contains("[FAILED] [safari] [a.spec] [A] Survivor"));
}

#[test]
fn test_record_events_falls_back_to_unknown_environment() {
    let dir = tempfile::tempdir().unwrap();

    let events = concat!(
        r#"{"title":"x","status":"passed","titlePath":["chrome"]}"#,
        "\n",
    );

    runner()
        .arg("--record-events")
        .current_dir(dir.path())
        .env_remove("ENV")
        .write_stdin(events)
        .assert()
        .success();

    let report = dir.path().join("custom-report").join("unknown-report.txt");
    let content = fs::read_to_string(report).unwrap();
    assert!(content.contains("Environment: UNKNOWN"));
}
