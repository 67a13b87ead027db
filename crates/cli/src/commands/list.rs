// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::str::FromStr;

use cityfix_core::{Clock, FilterSpec, FilterStats, Issue, IssueRepository, IssueStore};
use serde::Serialize;

use crate::cli::{FilterArgs, OutputFormat};
use crate::display::{format_issue_line, format_list_summary};
use crate::error::Result;

use super::open_store;

/// JSON output structure for the list command.
#[derive(Serialize)]
struct ListOutputJson<'a> {
    issues: Vec<&'a Issue>,
    total: usize,
    shown: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<String>,
}

pub fn run(filter: FilterArgs, print_query: bool, output: OutputFormat) -> Result<()> {
    let (store, _) = open_store()?;
    run_impl(&store, &filter, print_query, output)
}

/// Internal implementation that accepts the store for testing.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(
    store: &IssueStore<R, C>,
    filter: &FilterArgs,
    print_query: bool,
    output: OutputFormat,
) -> Result<()> {
    let spec = build_spec(filter)?;
    let issues = store.filtered(&spec);
    let stats = store.filter_stats(&spec);
    let query = if print_query {
        Some(spec.to_query_string()?)
    } else {
        None
    };

    print!("{}", render(&issues, &stats, query, output)?);
    Ok(())
}

/// Build the filter from a saved query string overlaid with explicit flags.
///
/// Unknown values in the query string are skipped; unknown values in flags
/// are errors.
pub(crate) fn build_spec(filter: &FilterArgs) -> Result<FilterSpec> {
    let mut spec = match &filter.query {
        Some(query) => FilterSpec::from_query_string(query)?,
        None => FilterSpec::new(),
    };

    if let Some(search) = &filter.search {
        spec.search_text = search.clone();
    }
    if !filter.types.is_empty() {
        spec.types = parse_values(&filter.types)?;
    }
    if !filter.statuses.is_empty() {
        spec.statuses = parse_values(&filter.statuses)?;
    }
    if !filter.severities.is_empty() {
        spec.severities = parse_values(&filter.severities)?;
    }

    Ok(spec)
}

/// Parse comma-separated flag values, dropping empty segments and duplicates.
fn parse_values<T>(values: &[String]) -> Result<Vec<T>>
where
    T: FromStr<Err = cityfix_core::Error> + PartialEq,
{
    let mut parsed = Vec::new();
    for value in values {
        for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let item: T = part.parse()?;
            if !parsed.contains(&item) {
                parsed.push(item);
            }
        }
    }
    Ok(parsed)
}

pub(crate) fn render(
    issues: &[&Issue],
    stats: &FilterStats,
    query: Option<String>,
    output: OutputFormat,
) -> Result<String> {
    let mut out = String::new();
    match output {
        OutputFormat::Text => {
            for issue in issues {
                out.push_str(&format_issue_line(issue));
                out.push('\n');
            }
            out.push_str(&format_list_summary(stats));
            out.push('\n');
            if let Some(query) = query {
                if query.is_empty() {
                    out.push_str("Query: (no filters)\n");
                } else {
                    out.push_str(&format!("Query: ?{query}\n"));
                }
            }
        }
        OutputFormat::Json => {
            let json = ListOutputJson {
                issues: issues.to_vec(),
                total: stats.total,
                shown: stats.shown,
                query,
            };
            out.push_str(&serde_json::to_string(&json)?);
            out.push('\n');
        }
        OutputFormat::Id => {
            for issue in issues {
                out.push_str(&issue.id);
                out.push('\n');
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
