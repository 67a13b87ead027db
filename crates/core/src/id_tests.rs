// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::{IssueType, Location, NewIssue, Severity};
use chrono::{TimeZone, Utc};
use yare::parameterized;

fn issue(id: &str) -> Issue {
    Issue::from_new(
        id.to_string(),
        NewIssue::new(IssueType::Other, Severity::Low, "x", Location::new(0.0, 0.0)),
        Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap(),
    )
}

#[test]
fn empty_collection_starts_at_one() {
    assert_eq!(next_id(&[], 2024), "ISS-2024-001");
}

#[test]
fn one_past_highest_sequence() {
    let issues = vec![issue("ISS-2024-001"), issue("ISS-2024-005")];
    assert_eq!(next_id(&issues, 2024), "ISS-2024-006");
}

#[test]
fn order_of_collection_does_not_matter() {
    let issues = vec![issue("ISS-2024-009"), issue("ISS-2024-002")];
    assert_eq!(next_id(&issues, 2024), "ISS-2024-010");
}

#[test]
fn new_year_resets_numbering() {
    let issues = vec![issue("ISS-2024-041"), issue("ISS-2023-099")];
    assert_eq!(next_id(&issues, 2025), "ISS-2025-001");
}

#[test]
fn ignores_other_years_when_computing_max() {
    let issues = vec![
        issue("ISS-2023-120"),
        issue("ISS-2024-003"),
        issue("ISS-2025-077"),
    ];
    assert_eq!(next_id(&issues, 2024), "ISS-2024-004");
}

#[test]
fn ignores_malformed_suffixes() {
    let issues = vec![
        issue("ISS-2024-abc"),
        issue("ISS-2024-"),
        issue("ISS-2024-12x"),
        issue("ISS-2024-002"),
        issue("REQ-2024-900"),
    ];
    assert_eq!(next_id(&issues, 2024), "ISS-2024-003");
}

#[test]
fn four_digit_sequences_are_not_truncated() {
    let issues = vec![issue("ISS-2024-999")];
    assert_eq!(next_id(&issues, 2024), "ISS-2024-1000");

    let issues = vec![issue("ISS-2024-1234")];
    assert_eq!(next_id(&issues, 2024), "ISS-2024-1235");
}

#[test]
fn deleted_top_sequence_is_reused() {
    let mut issues = vec![issue("ISS-2024-001"), issue("ISS-2024-002")];
    assert_eq!(next_id(&issues, 2024), "ISS-2024-003");
    issues.pop();
    assert_eq!(next_id(&issues, 2024), "ISS-2024-002");
}

#[parameterized(
    padded = { "ISS-2024-007", Some(7) },
    wide = { "ISS-2024-12345", Some(12345) },
    other_year = { "ISS-2023-007", None },
    letters = { "ISS-2024-0a7", None },
    signed = { "ISS-2024-+7", None },
    empty = { "ISS-2024-", None },
)]
fn parse_sequence_cases(id: &str, expected: Option<u64>) {
    assert_eq!(parse_sequence(id, "ISS-2024-"), expected);
}

#[test]
fn next_id_from_plain_ids() {
    let ids = ["ISS-2026-010", "ISS-2026-004"];
    assert_eq!(next_id_from(ids, 2026), "ISS-2026-011");
}

#[test]
fn format_id_pads_to_three_digits() {
    assert_eq!(format_id(2024, 4), "ISS-2024-004");
    assert_eq!(format_id(2024, 42), "ISS-2024-042");
}
