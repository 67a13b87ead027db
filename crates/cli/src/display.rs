// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use cityfix_core::{FilterStats, Issue, Location};

use crate::colors;

/// Descriptions longer than this are cut in list output.
pub const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Short date used in list output, e.g. `Jun 13, 2024`.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// Long date used in details output, e.g. `Thursday, June 13, 2024`.
pub fn format_long_date(at: &DateTime<Utc>) -> String {
    at.format("%A, %B %-d, %Y").to_string()
}

/// Format a single issue line for list output
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "- [{}] ({}, {}) {}: {} ({})",
        colors::type_badge(issue.issue_type),
        colors::severity_badge(issue.severity),
        colors::status_badge(issue.status),
        issue.id,
        truncate_text(&issue.description, DESCRIPTION_PREVIEW_LEN),
        format_date(&issue.reported_at),
    )
}

/// Summary line under a list: `Showing N of M issues` when filtered.
pub fn format_list_summary(stats: &FilterStats) -> String {
    if stats.has_active_filters {
        if stats.shown == 0 {
            return "No issues match the current filters".to_string();
        }
        return format!("Showing {} of {} issues", stats.shown, stats.total);
    }
    match stats.total {
        0 => "No issues reported yet".to_string(),
        1 => "1 issue reported".to_string(),
        n => format!("{n} issues reported"),
    }
}

/// OpenStreetMap link centered on `location` at the given zoom level.
pub fn format_map_link(location: &Location, zoom: u8) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat:.4}&mlon={lng:.4}#map={zoom}/{lat:.4}/{lng:.4}",
        lat = location.lat,
        lng = location.lng,
    )
}

/// Format issue details for show command; the map link uses `zoom`.
pub fn format_issue_details(issue: &Issue, zoom: u8) -> String {
    let mut output = Vec::new();

    output.push(format!(
        "[{}] {}",
        colors::type_badge(issue.issue_type),
        issue.id
    ));
    output.push(format!("Severity: {}", colors::severity_badge(issue.severity)));
    output.push(format!("Status: {}", colors::status_badge(issue.status)));
    output.push(format!("Reported: {}", format_long_date(&issue.reported_at)));

    let location = &issue.location;
    output.push(format!("Location: {:.4}, {:.4}", location.lat, location.lng));
    if let Some(address) = &location.address {
        output.push(format!("Address: {}", address));
    }
    output.push(format!("Map: {}", format_map_link(location, zoom)));

    output.push(String::new());
    output.push("Description:".to_string());
    for line in issue.description.lines() {
        output.push(format!("  {}", line));
    }

    let mut text = output.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
