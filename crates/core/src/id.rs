// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential per-year issue identifiers.
//!
//! Ids look like `ISS-2024-007`: a fixed tag, the calendar year of the
//! report, and a sequence number zero-padded to at least three digits.

use crate::issue::Issue;

/// Tag that starts every issue id.
pub const ID_TAG: &str = "ISS";

/// Minimum width of the sequence suffix.
const SEQUENCE_WIDTH: usize = 3;

/// Returns the id prefix for a year, e.g. `ISS-2024-`.
pub fn year_prefix(year: i32) -> String {
    format!("{ID_TAG}-{year}-")
}

/// Parse the sequence suffix of `id` if it belongs to `prefix`.
///
/// The suffix must be all ASCII digits; anything else is not a sequence.
pub fn parse_sequence(id: &str, prefix: &str) -> Option<u64> {
    let suffix = id.strip_prefix(prefix)?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Format an id from its year and sequence number.
pub fn format_id(year: i32, sequence: u64) -> String {
    format!("{}{:0width$}", year_prefix(year), sequence, width = SEQUENCE_WIDTH)
}

/// Compute the next id for `year` from the ids that currently exist.
///
/// Ids from other years and ids with malformed suffixes are ignored. The
/// result is one past the highest sequence seen, so a deleted top id is
/// handed out again.
pub fn next_id_from<'a, I>(ids: I, year: i32) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let prefix = year_prefix(year);
    let max_seq = ids
        .into_iter()
        .filter_map(|id| parse_sequence(id, &prefix))
        .max()
        .unwrap_or(0);
    let next = max_seq.saturating_add(1);
    tracing::debug!(year, max_seq, next, "generated issue sequence");
    format_id(year, next)
}

/// Compute the next id for `year` from an issue collection.
pub fn next_id(issues: &[Issue], year: i32) -> String {
    next_id_from(issues.iter().map(|issue| issue.id.as_str()), year)
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
