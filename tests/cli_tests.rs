// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end tests of the photo-index binary

use photo_index::report::{RunSummary, StepStatus};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn photo_index(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_photo-index"))
        .arg("--root")
        .arg(root)
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("binary should run")
}

fn touch(dir: &Path, names: &[&str]) {
    fs::create_dir_all(dir).unwrap();
    for name in names {
        fs::write(dir.join(name), b"").unwrap();
    }
}

#[test]
fn test_no_arguments_indexes_both_directories() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("photos/facebases"), &["France-1.png", "robot-x.png"]);
    touch(&root.path().join("photos/items"), &["hat.png"]);

    let output = photo_index(root.path(), &[]);
    assert!(output.status.success());

    assert!(root.path().join("photos/facebases/facebases.json").is_file());
    assert!(root.path().join("photos/facebases/categories.json").is_file());
    assert!(root.path().join("photos/items/items.json").is_file());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("'robot' is not a recognised country"));
}

#[test]
fn test_missing_directories_still_exit_zero() {
    let root = TempDir::new().unwrap();

    let output = photo_index(root.path(), &[]);
    assert_eq!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping facebases"));
    assert!(stderr.contains("skipping items"));
}

#[test]
fn test_items_command_leaves_facebases_alone() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("photos/facebases"), &["Peru-1.png"]);
    touch(&root.path().join("photos/items"), &["cup.png"]);

    let output = photo_index(root.path(), &["items"]);
    assert!(output.status.success());

    assert!(root.path().join("photos/items/items.json").is_file());
    assert!(!root.path().join("photos/facebases/facebases.json").exists());
}

#[test]
fn test_summary_records_step_statuses() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("photos/facebases"), &["Chile-1.png", "Chile-2.png", "moon-1.png"]);
    let summary_path = root.path().join("out/summary.json");

    let output = photo_index(
        root.path(),
        &["--dry-run", "--summary", summary_path.to_str().unwrap()],
    );
    assert!(output.status.success());

    let summary: RunSummary =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert!(summary.dry_run);
    assert_eq!(summary.facebases.status, StepStatus::Indexed);
    assert_eq!(summary.facebases.names, 3);
    assert_eq!(summary.facebases.countries, Some(1));
    assert_eq!(summary.facebases.others, Some(1));
    assert_eq!(summary.items.status, StepStatus::Skipped);

    assert!(!root.path().join("photos/facebases/facebases.json").exists());
}

#[test]
fn test_config_file_is_picked_up_and_flags_win() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join("photo-index.yaml"),
        "extension: jpg\nflag_base: from-config\n",
    )
    .unwrap();
    touch(&root.path().join("photos/facebases"), &["bird-1.jpg", "Kenya-1.png"]);

    let output = photo_index(root.path(), &["facebases", "--flag-base", "from-flag"]);
    assert!(output.status.success());

    let names: Vec<String> = serde_json::from_str(
        &fs::read_to_string(root.path().join("photos/facebases/facebases.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(names, vec!["bird-1"]);

    let categories = fs::read_to_string(root.path().join("photos/facebases/categories.json")).unwrap();
    assert!(categories.contains("from-flag/bird.png"));
}

#[test]
fn test_broken_config_is_a_warning() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("photo-index.json"), "{ not json").unwrap();
    touch(&root.path().join("photos/items"), &["a.png"]);

    let output = photo_index(root.path(), &[]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ignoring config"));
    assert!(root.path().join("photos/items/items.json").is_file());
}

#[test]
fn test_classify_command() {
    let root = TempDir::new().unwrap();

    let output = photo_index(root.path(), &["classify", "France", "robot"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("FR"));
    assert!(stdout.contains("photos/app/robot.png"));
}

#[test]
fn test_quiet_prints_only_warnings() {
    let root = TempDir::new().unwrap();

    let output = photo_index(root.path(), &["--quiet"]);
    assert!(output.status.success());

    assert!(output.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&output.stdout));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("skipping facebases"));
    assert!(stderr.contains("skipping items"));
}

#[test]
fn test_invalid_separator_flag_keeps_default() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("photos/facebases"), &["Norway-1.png", "cat_x-2.png"]);

    let output = photo_index(root.path(), &["facebases", "--separator=--"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("separator must be exactly one character"));

    let categories = fs::read_to_string(root.path().join("photos/facebases/categories.json")).unwrap();
    assert!(categories.contains("\"iso\": \"NO\""));
    assert!(categories.contains("\"name\": \"cat_x\""));
}

#[test]
fn test_flag_extension_flag() {
    let root = TempDir::new().unwrap();
    touch(&root.path().join("photos/facebases"), &["robot-1.png"]);

    let output = photo_index(root.path(), &["facebases", "--flag-extension", "svg"]);
    assert!(output.status.success());

    let categories = fs::read_to_string(root.path().join("photos/facebases/categories.json")).unwrap();
    assert!(categories.contains("photos/app/robot.svg"));
}
