// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Black-box coverage of the `decree` binary's local, no-network
//! subcommands.

use assert_cmd::Command;

fn decree() -> Command {
    Command::cargo_bin("decree").expect("decree binary builds")
}

#[test]
fn check_command_allows_a_safe_git_invocation() {
    decree()
        .args(["check-command", "git status"])
        .assert()
        .success()
        .stdout("allowed\n");
}

#[test]
fn check_command_blocks_a_dangerous_pattern() {
    decree()
        .args(["check-command", "git reset --hard HEAD~1"])
        .assert()
        .success()
        .stdout("blocked: Blocked: matches dangerous pattern 'git reset --hard'\n");
}

#[test]
fn check_command_blocks_an_unlisted_prefix() {
    decree()
        .args(["check-command", "curl https://example.invalid"])
        .assert()
        .success()
        .stdout("blocked: 'curl' is not in the allowed command list\n");
}

#[test]
fn validate_config_rejects_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    decree()
        .args(["validate-config", "--config"])
        .arg(dir.path().join("missing.toml"))
        .assert()
        .failure();
}

#[test]
fn validate_config_accepts_a_minimal_config() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("decree.toml");
    std::fs::write(
        &config_path,
        r#"
        repository = "acme/widgets"
        specs_dir = "specs"

        [provider]
        app_id = "1"
        private_key = "key"
        installation_id = "2"

        [logging]
        logs_dir = "logs"

        [role_assignment]
        planner = "claude"
        implementor = "claude"
        reviewer = "claude"
        "#,
    )
    .unwrap();

    decree()
        .args(["validate-config", "--config"])
        .arg(&config_path)
        .args(["--repo"])
        .arg(dir.path())
        .assert()
        .success();
}
