// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn export_then_import_into_empty_project() {
    let source = init_temp();
    let target = init_temp_no_seed();
    let file = source.path().join("issues.jsonl");

    cityfix()
        .arg("export")
        .arg(&file)
        .current_dir(source.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 issues"));

    let content = std::fs::read_to_string(&file).unwrap();
    assert_eq!(content.lines().count(), 5);

    cityfix()
        .arg("import")
        .arg(&file)
        .current_dir(target.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 5 issues"));

    assert_eq!(list_ids(&target, &[]), list_ids(&source, &[]));
}

#[test]
fn import_replaces_matching_ids() {
    let temp = init_temp();
    let file = temp.path().join("update.jsonl");
    std::fs::write(
        &file,
        r#"{"id":"ISS-2024-003","type":"graffiti","description":"Repainted","location":{"lat":34.025,"lng":-6.845},"severity":"low","status":"closed","reportedAt":"2024-01-10T09:00:00Z"}"#,
    )
    .unwrap();

    cityfix()
        .arg("import")
        .arg(&file)
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(list_ids(&temp, &[]).len(), 5);
    assert_eq!(list_ids(&temp, &["-s", "closed"]), vec!["ISS-2024-003"]);
}

#[test]
fn import_bad_line_fails_without_changes() {
    let temp = init_temp_no_seed();
    let file = temp.path().join("bad.jsonl");
    std::fs::write(&file, "{\"id\":\"ISS-2024-001\"}\n").unwrap();

    cityfix()
        .arg("import")
        .arg(&file)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 1"));

    assert!(list_ids(&temp, &[]).is_empty());
}

#[test]
fn import_missing_file_fails() {
    let temp = init_temp();
    cityfix()
        .args(["import", "missing.jsonl"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn import_into_empty_database_does_not_seed_examples() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".cityfix/config.toml"),
        "database = \"fresh.db\"\nseed_examples = true\n",
    )
    .unwrap();
    let file = temp.path().join("one.jsonl");
    std::fs::write(
        &file,
        r#"{"id":"ISS-2024-042","type":"pothole","description":"Sinkhole","location":{"lat":34.02,"lng":-6.84},"severity":"critical","status":"reported","reportedAt":"2024-03-01T10:00:00Z"}"#,
    )
    .unwrap();

    cityfix()
        .arg("import")
        .arg(&file)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 issues"));

    assert!(temp.path().join("fresh.db").exists());
    assert_eq!(list_ids(&temp, &[]), vec!["ISS-2024-042"]);
}
