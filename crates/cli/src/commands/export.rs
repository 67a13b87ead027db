// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use cityfix_core::{jsonl, Clock, IssueRepository, IssueStore};

use crate::error::{Error, Result};

use super::open_store;

pub fn run(filepath: &str) -> Result<()> {
    let (store, _) = open_store()?;
    run_impl(&store, filepath)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(
    store: &IssueStore<R, C>,
    filepath: &str,
) -> Result<()> {
    if filepath.trim().is_empty() {
        return Err(Error::FieldRequired {
            field: "Export path",
        });
    }

    let issues = store.issues();
    jsonl::write_issues(Path::new(filepath), issues)?;
    println!("Exported {} issues to {}", issues.len(), filepath);

    Ok(())
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
