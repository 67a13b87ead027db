// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory issue collection backed by a repository.
//!
//! [`IssueStore`] owns the canonical list used for rendering. Reads come
//! from memory; every mutation goes through the [`IssueRepository`] first
//! and touches memory only once the write succeeded.
//!
//! The collection is kept newest first. Mutating calls take `&mut self`,
//! so computing the next id and writing the new issue cannot interleave
//! with another creation on the same store.

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::filter::{self, FilterSpec, FilterStats};
use crate::id;
use crate::issue::{Issue, NewIssue, Status};
use crate::repo::IssueRepository;
use crate::seed;

/// Lifecycle of the in-memory collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// `load` has not been called yet.
    Uninitialized,
    /// A load is in flight.
    Loading,
    /// The collection mirrors the repository.
    Ready,
    /// The last load failed; the collection is empty or stale.
    LoadFailed,
}

/// Application state container for issues.
pub struct IssueStore<R, C = SystemClock> {
    repo: R,
    clock: C,
    issues: Vec<Issue>,
    state: LoadState,
    seed_when_empty: bool,
}

impl<R: IssueRepository> IssueStore<R, SystemClock> {
    /// Creates an unloaded store over `repo` using the system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: IssueRepository, C: Clock> IssueStore<R, C> {
    /// Creates an unloaded store with a custom clock.
    pub fn with_clock(repo: R, clock: C) -> Self {
        IssueStore {
            repo,
            clock,
            issues: Vec::new(),
            state: LoadState::Uninitialized,
            seed_when_empty: true,
        }
    }

    /// Whether `load` writes example issues into an empty repository (default: true).
    pub fn seed_when_empty(mut self, seed: bool) -> Self {
        self.seed_when_empty = seed;
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// All issues, newest first.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Replace the collection with the repository contents.
    ///
    /// An empty repository is seeded with the example issues unless seeding
    /// is disabled. On failure the previous collection is kept, the state
    /// becomes [`LoadState::LoadFailed`] and the error is returned.
    pub fn load(&mut self) -> Result<()> {
        self.state = LoadState::Loading;
        match self.fetch_or_seed() {
            Ok(mut issues) => {
                sort_newest_first(&mut issues);
                tracing::debug!(count = issues.len(), "loaded issues");
                self.issues = issues;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load issues");
                self.state = LoadState::LoadFailed;
                Err(e)
            }
        }
    }

    fn fetch_or_seed(&self) -> Result<Vec<Issue>> {
        let issues = self.repo.list_all()?;
        if !issues.is_empty() || !self.seed_when_empty {
            return Ok(issues);
        }

        let examples = seed::example_issues(self.clock.now());
        for issue in &examples {
            self.repo.put(issue)?;
        }
        tracing::info!(count = examples.len(), "seeded example issues");
        Ok(examples)
    }

    /// The id the next `create` would assign.
    pub fn next_id(&self) -> String {
        id::next_id(&self.issues, self.clock.year())
    }

    /// Record a new report.
    ///
    /// The id is derived from the in-memory collection and the clock's
    /// calendar year. The issue is written through the repository and then put at
    /// the front of the collection. If the write fails the collection is
    /// left unchanged.
    pub fn create(&mut self, new_issue: NewIssue) -> Result<Issue> {
        new_issue.validate()?;

        let now = self.clock.now();
        let id = id::next_id(&self.issues, self.clock.year());
        let new_issue = NewIssue {
            description: new_issue.description.trim().to_string(),
            ..new_issue
        };
        let issue = Issue::from_new(id, new_issue, now);

        if let Err(e) = self.repo.put(&issue) {
            tracing::error!(id = %issue.id, error = %e, "failed to add issue");
            return Err(e);
        }

        self.insert_newest(issue.clone());
        tracing::info!(id = %issue.id, "created issue");
        Ok(issue)
    }

    /// Prepend, unless the clock stepped back behind the current head.
    fn insert_newest(&mut self, issue: Issue) {
        let pos = self
            .issues
            .iter()
            .position(|existing| existing.reported_at <= issue.reported_at)
            .unwrap_or(self.issues.len());
        self.issues.insert(pos, issue);
    }

    /// Look up an issue in memory; None before load or for unknown ids.
    pub fn get_by_id(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    /// Issues passing `spec`, newest first.
    pub fn filtered(&self, spec: &FilterSpec) -> Vec<&Issue> {
        filter::apply_filter(&self.issues, spec)
    }

    pub fn filter_stats(&self, spec: &FilterSpec) -> FilterStats {
        filter::filter_stats(&self.issues, spec)
    }

    /// Change the status of a known issue.
    ///
    /// Returns the updated issue, or None if the id is not in the collection.
    pub fn update_status(&mut self, id: &str, status: Status) -> Result<Option<Issue>> {
        let Some(pos) = self.issues.iter().position(|issue| issue.id == id) else {
            return Ok(None);
        };

        let mut updated = self.issues[pos].clone();
        updated.status = status;
        self.repo.put(&updated)?;
        self.issues[pos] = updated.clone();
        tracing::info!(id, %status, "updated issue status");
        Ok(Some(updated))
    }

    /// Delete an issue from the repository and the collection.
    ///
    /// Returns whether the issue was in the collection.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        self.repo.delete(id)?;
        let before = self.issues.len();
        self.issues.retain(|issue| issue.id != id);
        let removed = self.issues.len() != before;
        if removed {
            tracing::info!(id, "removed issue");
        }
        Ok(removed)
    }

    /// Write `issues` through the repository, replacing records with the
    /// same id, and merge them into the collection.
    ///
    /// Returns the number of issues written.
    pub fn import(&mut self, issues: Vec<Issue>) -> Result<usize> {
        for issue in &issues {
            self.repo.put(issue)?;
        }
        let count = issues.len();
        for issue in issues {
            match self.issues.iter_mut().find(|existing| existing.id == issue.id) {
                Some(existing) => *existing = issue,
                None => self.issues.push(issue),
            }
        }
        sort_newest_first(&mut self.issues);
        tracing::info!(count, "imported issues");
        Ok(count)
    }
}

fn sort_newest_first(issues: &mut [Issue]) {
    issues.sort_by(|a, b| {
        b.reported_at
            .cmp(&a.reported_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
