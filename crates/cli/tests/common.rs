// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn cityfix() -> Command {
    let mut cmd = cargo_bin_cmd!("cityfix");
    cmd.env_remove("COLOR").env_remove("CITYFIX_LOG");
    cmd
}

/// Helper to create an initialized temp directory with the example reports
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    cityfix()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create an initialized temp directory with no reports
pub fn init_temp_no_seed() -> TempDir {
    let temp = TempDir::new().unwrap();
    cityfix()
        .arg("init")
        .arg("--no-seed")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to report an issue and return its ID
pub fn create_issue(temp: &TempDir, issue_type: &str, severity: &str, description: &str) -> String {
    let output = cityfix()
        .args(["new", issue_type, severity, description, "-o", "id"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// IDs printed by `cityfix list -o id` with the given extra arguments
pub fn list_ids(temp: &TempDir, args: &[&str]) -> Vec<String> {
    let output = cityfix()
        .args(["list", "-o", "id"])
        .args(args)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "list failed: {:?}", output);
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// The ID prefix for reports filed this year, e.g. `ISS-2026-`.
pub fn this_year_prefix() -> String {
    use chrono::Datelike;
    format!("ISS-{}-", chrono::Utc::now().year())
}
