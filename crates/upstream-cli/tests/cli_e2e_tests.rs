//! CLI end-to-end tests that invoke the compiled `upstream` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "upstream backend {\n    server 10.0.0.1:80 weight=5;\n    server 10.0.0.2:80;\n}";

fn upstream_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_upstream"))
}

fn command() -> Command {
    let mut cmd = Command::new(upstream_bin());
    cmd.env_remove("UPSTREAM_FILE").env("NO_COLOR", "1");
    cmd
}

/// Run `upstream --file <path>` with the given args.
fn run(path: &Path, args: &[&str]) -> Output {
    command()
        .arg("--file")
        .arg(path)
        .args(args)
        .output()
        .expect("failed to execute upstream binary")
}

fn write_sample(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("upstream.conf");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add-line").and(predicate::str::contains("fmt")));
}

#[test]
fn test_missing_file_argument() {
    command()
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No file given"));
}

#[test]
fn test_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    command()
        .env("UPSTREAM_FILE", &path)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("backend"));
}

#[test]
fn test_show_json() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    let out = run(&path, &["show", "--json"]);
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["name"], "backend");
    assert_eq!(value["lines"][0][1], "10.0.0.1:80");
    assert_eq!(value["lines"].as_array().unwrap().len(), 2);
}

#[test]
fn test_show_unparseable_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "server 10.0.0.1;");

    let out = run(&path, &["show"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Name could not be parsed"), "stderr: {stderr}");
}

#[test]
fn test_fmt_check_and_rewrite() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "upstream backend{server 10.0.0.1:80 weight=5;server 10.0.0.2:80;}\n");

    assert!(!run(&path, &["fmt", "--check"]).status.success());

    assert!(run(&path, &["fmt"]).status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);

    assert!(run(&path, &["fmt", "--check"]).status.success());
}

#[test]
fn test_add_and_remove_line() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    assert!(run(&path, &["add-line", "server", "10.0.0.3:80", "backup"]).status.success());
    assert!(fs::read_to_string(&path).unwrap().contains("    server 10.0.0.3:80 backup;\n"));

    assert!(run(&path, &["remove-line", "server", "10.0.0.1:80"]).status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "upstream backend {\n    server 10.0.0.2:80;\n    server 10.0.0.3:80 backup;\n}"
    );
}

#[test]
fn test_set_line_changes_weight() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    assert!(run(&path, &["set-line", "1", "server", "10.0.0.1:80", "weight=1"]).status.success());
    assert!(fs::read_to_string(&path).unwrap().contains("    server 10.0.0.1:80 weight=1;\n"));
}

#[test]
fn test_dry_run_prints_diff_without_writing() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    let out = run(&path, &["rename", "frontend", "--dry-run"]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("-upstream backend {"), "stdout: {stdout}");
    assert!(stdout.contains("+upstream frontend {"), "stdout: {stdout}");
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
}

#[test]
fn test_rename_invalid_name_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    let out = run(&path, &["rename", "web.backend"]);
    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
}

#[test]
fn test_fmt_refuses_to_drop_comment_header() {
    let dir = TempDir::new().unwrap();
    let original = "# managed by ops, do not remove\nupstream backend {\n server a;\n}\n";
    let path = write_sample(&dir, original);

    let out = run(&path, &["fmt"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--force"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(&path).unwrap(), original);

    let out = run(&path, &["add-line", "server", "b"]);
    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_force_drops_outside_text() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "# header\nupstream backend {\n server a;\n}\n");

    assert!(run(&path, &["--force", "fmt"]).status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "upstream backend {\n    server a;\n}"
    );
}

#[test]
fn test_trailing_newline_is_not_outside_text() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, "upstream backend {\n server a;\n}\n");

    assert!(run(&path, &["fmt"]).status.success());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "upstream backend {\n    server a;\n}"
    );
}

#[test]
fn test_set_line_out_of_range_reports_typed_number() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    let out = run(&path, &["set-line", "9", "a"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Line 9 does not exist (block has 2 lines)"), "stderr: {stderr}");
}

#[test]
fn test_any_whitespace_rejects_tabbed_token() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    let out = run(&path, &["--any-whitespace", "add-line", "server\t10.0.0.9:80"]);
    assert!(!out.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
}

#[test]
fn test_token_starting_with_hyphen() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, SAMPLE);

    assert!(run(&path, &["add-line", "server", "10.0.0.3:80", "-x"]).status.success());
    assert!(fs::read_to_string(&path).unwrap().contains("    server 10.0.0.3:80 -x;\n"));
}
