// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for unit tests.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{Result, StorageError};
use crate::issue::{Issue, IssueType, Location, NewIssue, Severity, Status};
use crate::repo::IssueRepository;

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn issue(id: &str, reported_at: DateTime<Utc>) -> Issue {
    Issue::from_new(
        id.to_string(),
        NewIssue::new(
            IssueType::Pothole,
            Severity::Medium,
            format!("Report {id}"),
            Location::new(34.02, -6.84).with_address("Avenue Mohammed V, Rabat"),
        ),
        reported_at,
    )
}

/// A repository whose every call fails, for exercising error paths.
#[derive(Debug, Default)]
pub struct BrokenRepository;

fn broken<T>() -> Result<T> {
    Err(StorageError::CorruptedData("storage offline".into()).into())
}

impl IssueRepository for BrokenRepository {
    fn list_all(&self) -> Result<Vec<Issue>> {
        broken()
    }

    fn get(&self, _id: &str) -> Result<Option<Issue>> {
        broken()
    }

    fn put(&self, _issue: &Issue) -> Result<()> {
        broken()
    }

    fn delete(&self, _id: &str) -> Result<()> {
        broken()
    }

    fn count(&self) -> Result<usize> {
        broken()
    }

    fn clear(&self) -> Result<()> {
        broken()
    }
}

/// Behavior every repository implementation must share.
pub fn check_repository_contract(repo: &dyn IssueRepository) {
    assert!(repo.list_all().unwrap().is_empty());
    assert_eq!(repo.count().unwrap(), 0);
    assert_eq!(repo.get("ISS-2024-001").unwrap(), None);

    let first = issue("ISS-2024-001", at(2024, 2, 1));
    let second = issue("ISS-2024-002", at(2024, 2, 2));
    repo.put(&first).unwrap();
    repo.put(&second).unwrap();
    assert_eq!(repo.count().unwrap(), 2);
    assert_eq!(repo.get("ISS-2024-001").unwrap(), Some(first.clone()));

    // put replaces the whole record and is idempotent
    let mut updated = first.clone();
    updated.status = Status::Resolved;
    updated.location.address = None;
    repo.put(&updated).unwrap();
    repo.put(&updated).unwrap();
    assert_eq!(repo.count().unwrap(), 2);
    assert_eq!(repo.get("ISS-2024-001").unwrap(), Some(updated));

    let mut ids: Vec<String> = repo.list_all().unwrap().into_iter().map(|i| i.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["ISS-2024-001", "ISS-2024-002"]);

    repo.delete("ISS-2024-002").unwrap();
    repo.delete("ISS-2024-002").unwrap();
    repo.delete("ISS-2099-404").unwrap();
    assert_eq!(repo.count().unwrap(), 1);
    assert_eq!(repo.get("ISS-2024-002").unwrap(), None);

    repo.clear().unwrap();
    assert_eq!(repo.count().unwrap(), 0);
    assert!(repo.list_all().unwrap().is_empty());
}
