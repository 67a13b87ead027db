// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cityfix_core::{Clock, Issue, IssueRepository, IssueStore, Status};

use crate::error::{Error, Result};

use super::open_store;

pub fn run(id: &str, status: &str) -> Result<()> {
    let (mut store, _) = open_store()?;
    run_impl(&mut store, id, status)?;
    Ok(())
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(
    store: &mut IssueStore<R, C>,
    id: &str,
    status: &str,
) -> Result<Issue> {
    let status: Status = status.parse()?;
    let id = id.trim();
    let previous = store
        .get_by_id(id)
        .map(|issue| issue.status)
        .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;

    let updated = store
        .update_status(id, status)?
        .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;

    if previous == status {
        println!("{} is already {}", updated.id, status);
    } else {
        println!("Updated {}: {} -> {}", updated.id, previous, status);
    }
    Ok(updated)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
