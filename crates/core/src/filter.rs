// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side filtering of the issue collection.
//!
//! A [`FilterSpec`] has four dimensions: free-text search plus multi-select
//! type, status and severity sets. Values within a multi-select dimension
//! are OR'd, dimensions are AND'd, and an empty dimension matches everything.
//!
//! A filter round-trips through [`FilterParams`], a flat set of string
//! parameters (`search`, `types`, `statuses`, `severities`) suitable for
//! bookmarkable query strings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueType, Severity, Status};

/// Active filter constraints over the issue collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against id and description.
    pub search_text: String,
    pub types: Vec<IssueType>,
    pub statuses: Vec<Status>,
    pub severities: Vec<Severity>,
}

/// Flat string parameters for a [`FilterSpec`].
///
/// Multi-select values are comma-joined; absent parameters mean no
/// constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severities: Option<String>,
}

/// Counts shown next to a filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Issues in the unfiltered collection.
    pub total: usize,
    /// Issues passing the filter.
    pub shown: usize,
    pub has_active_filters: bool,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = IssueType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = Status>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    pub fn with_severities(mut self, severities: impl IntoIterator<Item = Severity>) -> Self {
        self.severities = severities.into_iter().collect();
        self
    }

    /// The lowercased search needle, or None when search is inactive.
    fn search_needle(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    /// Returns true if at least one dimension constrains the result.
    pub fn has_active_filters(&self) -> bool {
        !self.search_text.trim().is_empty()
            || !self.types.is_empty()
            || !self.statuses.is_empty()
            || !self.severities.is_empty()
    }

    /// Check if a single issue passes every active dimension.
    pub fn matches(&self, issue: &Issue) -> bool {
        matches_issue(self, self.search_needle().as_deref(), issue)
    }

    /// Add the type if absent, remove it if present.
    pub fn toggle_type(&mut self, issue_type: IssueType) {
        toggle(&mut self.types, issue_type);
    }

    /// Add the status if absent, remove it if present.
    pub fn toggle_status(&mut self, status: Status) {
        toggle(&mut self.statuses, status);
    }

    /// Add the severity if absent, remove it if present.
    pub fn toggle_severity(&mut self, severity: Severity) {
        toggle(&mut self.severities, severity);
    }

    /// Remove every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Serialize into flat parameters, omitting inactive dimensions.
    pub fn to_params(&self) -> FilterParams {
        let search = self.search_text.trim();
        FilterParams {
            search: (!search.is_empty()).then(|| search.to_string()),
            types: join_values(&self.types, IssueType::as_str),
            statuses: join_values(&self.statuses, Status::as_str),
            severities: join_values(&self.severities, Severity::as_str),
        }
    }

    /// Rebuild a spec from flat parameters.
    ///
    /// Unknown enum names are skipped so a stale bookmark still loads.
    pub fn from_params(params: &FilterParams) -> Self {
        FilterSpec {
            search_text: params.search.clone().unwrap_or_default(),
            types: split_values(params.types.as_deref(), "types"),
            statuses: split_values(params.statuses.as_deref(), "statuses"),
            severities: split_values(params.severities.as_deref(), "severities"),
        }
    }

    /// Encode as an URL query string such as `search=lamp&types=pothole%2Cgraffiti`.
    pub fn to_query_string(&self) -> Result<String> {
        serde_urlencoded::to_string(self.to_params()).map_err(|e| Error::InvalidQuery(e.to_string()))
    }

    /// Decode an URL query string; a leading `?` is accepted.
    pub fn from_query_string(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: FilterParams =
            serde_urlencoded::from_str(query).map_err(|e| Error::InvalidQuery(e.to_string()))?;
        Ok(Self::from_params(&params))
    }
}

/// Apply `spec` to `issues`, preserving input order.
pub fn apply_filter<'a>(issues: &'a [Issue], spec: &FilterSpec) -> Vec<&'a Issue> {
    let needle = spec.search_needle();
    issues
        .iter()
        .filter(|issue| matches_issue(spec, needle.as_deref(), issue))
        .collect()
}

/// Compute list counts for `spec` over `issues`.
pub fn filter_stats(issues: &[Issue], spec: &FilterSpec) -> FilterStats {
    FilterStats {
        total: issues.len(),
        shown: apply_filter(issues, spec).len(),
        has_active_filters: spec.has_active_filters(),
    }
}

fn matches_issue(spec: &FilterSpec, needle: Option<&str>, issue: &Issue) -> bool {
    if let Some(needle) = needle {
        let hit = issue.id.to_lowercase().contains(needle)
            || issue.description.to_lowercase().contains(needle);
        if !hit {
            return false;
        }
    }

    matches_selection(&spec.types, &issue.issue_type)
        && matches_selection(&spec.statuses, &issue.status)
        && matches_selection(&spec.severities, &issue.severity)
}

/// An empty selection matches everything; otherwise the value must be selected.
fn matches_selection<T: PartialEq>(selected: &[T], value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

fn join_values<T>(values: &[T], as_str: fn(&T) -> &'static str) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(as_str).collect::<Vec<_>>().join(","))
}

/// Parse a comma list, skipping empty segments, unknown names and repeats.
fn split_values<T: FromStr + PartialEq>(raw: Option<&str>, param: &str) -> Vec<T> {
    let mut values = Vec::new();
    let Some(raw) = raw else {
        return values;
    };
    for part in raw.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        match part.parse() {
            Ok(value) if !values.contains(&value) => values.push(value),
            Ok(_) => {}
            Err(_) => tracing::warn!(param, value = part, "ignoring unknown filter value"),
        }
    }
    values
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
