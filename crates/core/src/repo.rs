// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable key-value persistence for issues.
//!
//! [`IssueRepository`] is the storage boundary of the store: one record per
//! issue, keyed by id. Every call is atomic for its key. Implementations
//! lock internally so a shared repository can be reached from several
//! threads.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Result, StorageError};
use crate::issue::Issue;

/// Storage operations the issue store relies on.
pub trait IssueRepository: Send {
    /// Returns every stored issue, in no particular order.
    fn list_all(&self) -> Result<Vec<Issue>>;

    /// Returns the issue stored under `id`, or None.
    fn get(&self, id: &str) -> Result<Option<Issue>>;

    /// Inserts the issue or fully replaces the record with the same id.
    fn put(&self, issue: &Issue) -> Result<()>;

    /// Removes the record if present; absent ids are not an error.
    fn delete(&self, id: &str) -> Result<()>;

    /// Number of stored issues.
    fn count(&self) -> Result<usize>;

    /// Removes every record.
    fn clear(&self) -> Result<()>;
}

impl<R: IssueRepository + Sync> IssueRepository for &R {
    fn list_all(&self) -> Result<Vec<Issue>> {
        (*self).list_all()
    }

    fn get(&self, id: &str) -> Result<Option<Issue>> {
        (*self).get(id)
    }

    fn put(&self, issue: &Issue) -> Result<()> {
        (*self).put(issue)
    }

    fn delete(&self, id: &str) -> Result<()> {
        (*self).delete(id)
    }

    fn count(&self) -> Result<usize> {
        (*self).count()
    }

    fn clear(&self) -> Result<()> {
        (*self).clear()
    }
}

impl<R: IssueRepository + ?Sized> IssueRepository for Box<R> {
    fn list_all(&self) -> Result<Vec<Issue>> {
        (**self).list_all()
    }

    fn get(&self, id: &str) -> Result<Option<Issue>> {
        (**self).get(id)
    }

    fn put(&self, issue: &Issue) -> Result<()> {
        (**self).put(issue)
    }

    fn delete(&self, id: &str) -> Result<()> {
        (**self).delete(id)
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}

/// Non-durable repository backed by an ordered map.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    issues: Mutex<BTreeMap<String, Issue>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-filled with `issues`.
    pub fn with_issues(issues: impl IntoIterator<Item = Issue>) -> Self {
        let map = issues
            .into_iter()
            .map(|issue| (issue.id.clone(), issue))
            .collect();
        MemoryRepository {
            issues: Mutex::new(map),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Issue>>> {
        self.issues
            .lock()
            .map_err(|_| StorageError::Poisoned.into())
    }
}

impl IssueRepository for MemoryRepository {
    fn list_all(&self) -> Result<Vec<Issue>> {
        Ok(self.lock()?.values().cloned().collect())
    }

    fn get(&self, id: &str) -> Result<Option<Issue>> {
        Ok(self.lock()?.get(id).cloned())
    }

    fn put(&self, issue: &Issue) -> Result<()> {
        self.lock()?.insert(issue.id.clone(), issue.clone());
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.lock()?.remove(id);
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
