// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cityfix_core::{Clock, IssueRepository, IssueStore};

use crate::config::Config;
use crate::display::format_issue_details;
use crate::error::{Error, Result};

use super::open_store;

pub fn run(id: &str, format: &str) -> Result<()> {
    let (store, config) = open_store()?;
    print!("{}", run_impl(&store, &config, id, format)?);
    Ok(())
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(
    store: &IssueStore<R, C>,
    config: &Config,
    id: &str,
    format: &str,
) -> Result<String> {
    let issue = store
        .get_by_id(id.trim())
        .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;

    match format {
        "json" => Ok(format!("{}\n", serde_json::to_string(issue)?)),
        "text" => Ok(format_issue_details(issue, config.map.zoom)),
        _ => Err(Error::UnknownFormat {
            format: format.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
