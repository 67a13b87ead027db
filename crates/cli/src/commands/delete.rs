// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cityfix_core::{Clock, IssueRepository, IssueStore};

use crate::error::{Error, Result};

use super::open_store;

pub fn run(id: &str) -> Result<()> {
    let (mut store, _) = open_store()?;
    run_impl(&mut store, id)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(
    store: &mut IssueStore<R, C>,
    id: &str,
) -> Result<()> {
    let id = id.trim();
    if !store.remove(id)? {
        return Err(Error::IssueNotFound(id.to_string()));
    }
    println!("Deleted {}", id);
    Ok(())
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
