use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("anti-stale"));
}

#[test]
fn test_help_lists_commands_and_global_flags() {
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("completion"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_no_args_shows_help() {
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.assert()
        .failure()
        .code(predicate::eq(2))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_check_help_shows_flags_and_defaults() {
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--reply"))
        .stdout(predicate::str::contains("--interactive"))
        .stdout(predicate::str::contains("not stale"))
        .stdout(predicate::str::contains("Stale"));
}

#[test]
fn test_completion_bash_generates_script() {
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn test_invalid_command_exits_with_usage_error() {
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.arg("definitely-not-a-command")
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_invalid_log_level_rejected() {
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.args(["--log-level", "7", "check"])
        .assert()
        .failure()
        .code(predicate::eq(2));
}

#[test]
fn test_check_without_config_fails_with_hint() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.current_dir(dir.path())
        .arg("check")
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_check_with_empty_selector_succeeds_offline() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("anti-stale.json"),
        r#"{"userAgent": "anti-stale tests", "token": "ghp_test", "owners": {}}"#,
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.current_dir(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No stale entities found"));
}

#[test]
fn test_check_empty_selector_json_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("anti-stale.json"),
        r#"{"userAgent": "anti-stale tests", "token": "ghp_test", "owners": {}}"#,
    )
    .expect("write config");

    let output = cargo_bin_cmd!("anti-stale")
        .current_dir(dir.path())
        .args(["check", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout is utf-8");
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("check -o json should produce valid JSON");
    assert!(json["stale"].as_array().expect("stale array").is_empty());
    assert!(json["comments"].as_array().expect("comments array").is_empty());
}

#[test]
fn test_check_rejects_config_with_empty_token() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("anti-stale.json"),
        r#"{"userAgent": "anti-stale tests", "token": "", "owners": {}}"#,
    )
    .expect("write config");

    let mut cmd = cargo_bin_cmd!("anti-stale");
    cmd.current_dir(dir.path())
        .env_remove("ANTISTALE_TOKEN")
        .arg("check")
        .assert()
        .failure()
        .code(predicate::eq(1))
        .stderr(predicate::str::contains("token is empty"));
}
