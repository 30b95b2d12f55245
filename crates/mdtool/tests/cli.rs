use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"github:
  default_org: "CompanyCam"
  default_repo: "Company-Cam-API"
  mappings:
    "companycam/company-cam-api": "CompanyCam/API"
jira:
  domain: "https://companycam.atlassian.net"
  projects: ["PLAT", "SPEED"]
url:
  domain_mappings:
    "youtube_com": "YouTube"
    "example_org": "Example"
"#;

fn create_config() -> NamedTempFile {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(config.path(), CONFIG).expect("Writing temp config failed");
    config
}

fn mdtool(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("mdtool").expect("Binary exists");
    cmd.env_remove("MDTOOL_VERBOSE")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config.path());
    cmd
}

#[test]
fn converts_jira_key_from_stdin() {
    let config = create_config();
    mdtool(&config)
        .write_stdin("PLAT-192\n")
        .assert()
        .success()
        .stdout("[PLAT-192](https://companycam.atlassian.net/browse/PLAT-192)");
}

#[test]
fn converts_github_pull_request_url() {
    let config = create_config();
    mdtool(&config)
        .write_stdin("https://github.com/companycam/company-cam-api/pull/123")
        .assert()
        .success()
        .stdout("[CompanyCam/API#123](https://github.com/companycam/company-cam-api/pull/123)");
}

#[test]
fn converts_phone_number_and_tel_uri() {
    let config = create_config();
    mdtool(&config)
        .write_stdin("(890) 123-4567")
        .assert()
        .success()
        .stdout("[890-123-4567](tel:8901234567)");

    mdtool(&config)
        .write_stdin("tel:+18901234567\n")
        .assert()
        .success()
        .stdout("[+1-890-123-4567](tel:+18901234567)");
}

#[test]
fn echoes_unrecognized_input_trimmed() {
    let config = create_config();
    mdtool(&config)
        .write_stdin("  just some words \n")
        .assert()
        .success()
        .stdout("just some words");
}

#[test]
fn empty_input_prints_nothing() {
    let config = create_config();
    mdtool(&config)
        .write_stdin("   \n")
        .assert()
        .success()
        .stdout("");

    mdtool(&config)
        .write_stdin("tel:")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn explain_prints_report() {
    let config = create_config();
    mdtool(&config)
        .arg("--explain")
        .write_stdin("PLAT-192")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Detections")
                .and(predicate::str::contains("jira_key"))
                .and(predicate::str::contains("Votes"))
                .and(predicate::str::contains(
                    "[PLAT-192](https://companycam.atlassian.net/browse/PLAT-192)",
                )),
        );
}

#[test]
fn json_prints_machine_readable_report() {
    let config = create_config();
    let output = mdtool(&config)
        .arg("--json")
        .write_stdin("https://www.youtube.com/watch?v=abc")
        .output()
        .expect("Running mdtool failed");

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["findings"][0]["detector"], "url");
    assert_eq!(report["winner"]["renderer"], "url_family");
    assert_eq!(
        report["output"],
        "[YouTube](https://www.youtube.com/watch?v=abc)"
    );
}

#[test]
fn reads_config_path_from_env() {
    let config = create_config();
    let home = tempfile::tempdir().expect("Creating temp dir failed");
    Command::cargo_bin("mdtool")
        .expect("Binary exists")
        .env("HOME", home.path())
        .env("MDTOOL_CONFIG", config.path())
        .env_remove("MDTOOL_VERBOSE")
        .write_stdin("https://example.org/page")
        .assert()
        .success()
        .stdout("[Example](https://example.org/page)");

    assert!(!home.path().join(".config/mdtool/config.yaml").exists());
}

#[test]
fn missing_explicit_config_fails() {
    let dir = tempfile::tempdir().expect("Creating temp dir failed");
    Command::cargo_bin("mdtool")
        .expect("Binary exists")
        .arg("--config")
        .arg(dir.path().join("nope.yaml"))
        .write_stdin("PLAT-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_fails() {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(config.path(), "jira: [unclosed").expect("Writing temp config failed");

    mdtool(&config)
        .write_stdin("PLAT-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn bootstraps_default_config_in_home() {
    let home = tempfile::tempdir().expect("Creating temp dir failed");
    Command::cargo_bin("mdtool")
        .expect("Binary exists")
        .env("HOME", home.path())
        .env_remove("MDTOOL_CONFIG")
        .write_stdin("SPEED-7")
        .assert()
        .success()
        .stdout("[SPEED-7](https://companycam.atlassian.net/browse/SPEED-7)");

    let bootstrapped = home.path().join(".config/mdtool/config.yaml");
    assert!(bootstrapped.exists());
}

#[test]
fn verbose_logs_to_stderr_only() {
    let config = create_config();
    mdtool(&config)
        .arg("--verbose")
        .write_stdin("PLAT-192")
        .assert()
        .success()
        .stdout("[PLAT-192](https://companycam.atlassian.net/browse/PLAT-192)")
        .stderr(predicate::str::contains("Winner"));
}
