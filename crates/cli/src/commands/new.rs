// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cityfix_core::{
    Clock, Issue, IssueRepository, IssueStore, IssueType, Location, NewIssue, Severity,
};

use crate::cli::{LocationArgs, OutputFormat};
use crate::config::Config;
use crate::display::{truncate_text, DESCRIPTION_PREVIEW_LEN};
use crate::error::{Error, Result};

use super::open_store;

pub fn run(
    issue_type: String,
    severity: String,
    description: String,
    location: LocationArgs,
    output: OutputFormat,
) -> Result<()> {
    let (mut store, config) = open_store()?;
    run_impl(
        &mut store,
        &config,
        &issue_type,
        &severity,
        &description,
        &location,
        output,
    )?;
    Ok(())
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(
    store: &mut IssueStore<R, C>,
    config: &Config,
    issue_type: &str,
    severity: &str,
    description: &str,
    location: &LocationArgs,
    output: OutputFormat,
) -> Result<Issue> {
    let new_issue = build_new_issue(config, issue_type, severity, description, location)?;
    let issue = store.create(new_issue)?;

    match output {
        OutputFormat::Text => println!(
            "Created [{}] {}: {}",
            issue.issue_type.label(),
            issue.id,
            truncate_text(&issue.description, DESCRIPTION_PREVIEW_LEN)
        ),
        OutputFormat::Json => println!("{}", serde_json::to_string(&issue)?),
        OutputFormat::Id => println!("{}", issue.id),
    }

    Ok(issue)
}

/// Parse command-line input into a report.
///
/// Without coordinates the report is placed at the configured map center;
/// a lone latitude or longitude is rejected.
pub(crate) fn build_new_issue(
    config: &Config,
    issue_type: &str,
    severity: &str,
    description: &str,
    location: &LocationArgs,
) -> Result<NewIssue> {
    let issue_type: IssueType = issue_type.parse()?;
    let severity: Severity = severity.parse()?;

    let mut point = match (location.lat, location.lng) {
        (Some(lat), Some(lng)) => Location::new(lat, lng),
        (None, None) => config.map.center(),
        (Some(_), None) => return Err(Error::FieldRequired { field: "--lng" }),
        (None, Some(_)) => return Err(Error::FieldRequired { field: "--lat" }),
    };
    point.address = location
        .address
        .as_deref()
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(String::from);

    Ok(NewIssue::new(issue_type, severity, description, point))
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
