use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SAMPLE: &str = r#"{
    "name": "demo-app",
    "description": "Demo project",
    "scripts": {
        "build": "cargo build",
        "test": "cargo test",
        "test:watch": "cargo watch -x test",
        "lint": "cargo clippy",
        "broken": 42
    }
}"#;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("sl").unwrap();
    cmd.env_remove("SL_PATH")
        .env_remove("SL_FORMAT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_manifest(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

#[test]
fn table_is_default() {
    let (_dir, path) = write_manifest(SAMPLE);

    cmd()
        .arg("--path")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("demo-app"))
        .stdout(contains("Demo project"))
        .stdout(contains("Script"))
        .stdout(contains("Command"))
        .stdout(contains("Found 4 script(s)"));
}

#[test]
fn default_path_reads_working_directory() {
    let (dir, _path) = write_manifest(SAMPLE);

    cmd()
        .current_dir(dir.path())
        .args(["--format", "list", "--names-only"])
        .assert()
        .success()
        .stdout("build\nlint\ntest\ntest:watch\n");
}

#[test]
fn filter_example_lists_only_match() {
    let (_dir, path) = write_manifest(r#"{"scripts":{"build":"cargo build","test":"cargo test"}}"#);

    cmd()
        .arg("--path")
        .arg(&path)
        .args(["-f", "test", "--format", "list"])
        .assert()
        .success()
        .stdout("test: cargo test\n");
}

#[test]
fn filter_is_case_insensitive() {
    let (_dir, path) = write_manifest(SAMPLE);

    cmd()
        .arg("-p")
        .arg(&path)
        .args(["--filter", "TEST", "-F", "list"])
        .assert()
        .success()
        .stdout("test: cargo test\ntest:watch: cargo watch -x test\n");
}

#[test]
fn json_output_round_trips() {
    let (_dir, path) = write_manifest(SAMPLE);

    let output = cmd()
        .arg("--path")
        .arg(&path)
        .args(["--format", "json", "--filter", "t"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).unwrap();
    let scripts = parsed.as_object().unwrap();
    assert_eq!(scripts.len(), 3);
    assert_eq!(scripts["test"], "cargo test");
    assert_eq!(scripts["lint"], "cargo clippy");
    assert!(!scripts.contains_key("build"));
}

#[test]
fn format_from_environment() {
    let (_dir, path) = write_manifest(SAMPLE);

    cmd()
        .arg("--path")
        .arg(&path)
        .env("SL_FORMAT", "json")
        .assert()
        .success()
        .stdout(contains("\"build\": \"cargo build\""));
}

#[test]
fn missing_scripts_is_success() {
    let (_dir, path) = write_manifest(r#"{"name": "empty"}"#);

    cmd()
        .arg("--path")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("No scripts found in package.json"));
}

#[test]
fn no_match_is_success() {
    let (_dir, path) = write_manifest(SAMPLE);

    cmd()
        .arg("--path")
        .arg(&path)
        .args(["--filter", "deploy"])
        .assert()
        .success()
        .stdout(contains("No scripts matching 'deploy' found"));
}

#[test]
fn empty_json_stays_parseable() {
    let (_dir, path) = write_manifest("{}");

    cmd()
        .arg("--path")
        .arg(&path)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout("{}\n")
        .stderr(contains("No scripts found"));
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("--path")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains("No package.json file found"))
        .stderr(contains("nope.json"));
}

#[test]
fn missing_default_manifest_fails() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(contains("No package.json file found"));
}

#[test]
fn malformed_json_fails() {
    let (_dir, path) = write_manifest("{ not json");

    cmd()
        .arg("--path")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid package.json"));
}

#[test]
fn scripts_not_object_fails() {
    let (_dir, path) = write_manifest(r#"{"scripts": "build"}"#);

    cmd()
        .arg("--path")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("`scripts` must be an object"));
}

#[test]
fn unknown_format_is_usage_error() {
    cmd().args(["--format", "yaml"]).assert().failure().code(2);
}

#[test]
fn non_string_script_logs_warning() {
    let (_dir, path) = write_manifest(SAMPLE);

    cmd()
        .arg("--path")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("broken").not())
        .stderr(contains("skipping script with non-string command"));
}

#[test]
fn invalid_utf8_is_invalid_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("package.json");
    fs::write(&path, b"{\"scripts\":{\"build\":\"\xff\xfe\"}}").unwrap();

    cmd()
        .arg("--path")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid package.json"))
        .stderr(contains("No package.json file found").not());
}

#[test]
fn format_value_ignores_case() {
    let (_dir, path) = write_manifest(SAMPLE);

    cmd()
        .arg("--path")
        .arg(&path)
        .args(["--format", "JSON"])
        .assert()
        .success()
        .stdout(contains("\"lint\": \"cargo clippy\""));
}

#[test]
fn parent_relative_path_titles_with_directory_name() {
    let dir = TempDir::new().unwrap();
    let project = dir.path().join("my-project");
    let nested = project.join("packages");
    fs::create_dir_all(&nested).unwrap();
    fs::write(project.join("package.json"), r#"{"scripts": {"build": "make"}}"#).unwrap();

    cmd()
        .current_dir(&nested)
        .args(["--path", "../package.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("my-project\n"));
}
