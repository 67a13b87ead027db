// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use cityfix_core::{jsonl, Clock, Issue, IssueRepository, IssueStore, ValidationError};

use crate::error::{Error, Result};

use super::open_store_unseeded;

/// Imports into the database as it is; an empty database is not seeded
/// with the example reports first.
pub fn run(filepath: &str) -> Result<()> {
    let (mut store, _) = open_store_unseeded()?;
    run_impl(&mut store, filepath)?;
    Ok(())
}

/// Internal implementation that accepts the store for testing.
///
/// Every record is checked before anything is written, so a bad file
/// leaves the store untouched.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(
    store: &mut IssueStore<R, C>,
    filepath: &str,
) -> Result<usize> {
    if filepath.trim().is_empty() {
        return Err(Error::FieldRequired {
            field: "Import path",
        });
    }

    let issues = jsonl::read_issues(Path::new(filepath))?;
    for issue in &issues {
        validate_record(issue).map_err(cityfix_core::Error::from)?;
    }

    let count = store.import(issues)?;
    println!("Imported {} issues from {}", count, filepath);
    Ok(count)
}

fn validate_record(issue: &Issue) -> std::result::Result<(), ValidationError> {
    if issue.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    issue.location.validate()
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
