// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output and issue badges.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use cityfix_core::{IssueType, Severity, Status};
use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const YELLOW: u8 = 178;
    pub const BLUE: u8 = 33;
    pub const GREEN: u8 = 71;
    pub const GRAY: u8 = 245;
    pub const ORANGE: u8 = 208;
    pub const RED: u8 = 160;
    pub const AMBER: u8 = 172;
    pub const PURPLE: u8 = 135;
    pub const PINK: u8 = 205;
    pub const EMERALD: u8 = 36;
    pub const CYAN: u8 = 37;
    pub const SLATE: u8 = 103;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Wrap `text` in a foreground color when `enabled`.
pub fn paint(text: &str, code: u8, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", fg256(code), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(text, codes::HEADER, should_colorize())
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(text, codes::LITERAL, should_colorize())
}

pub fn status_color(status: Status) -> u8 {
    match status {
        Status::Reported => codes::YELLOW,
        Status::InProgress => codes::BLUE,
        Status::Resolved => codes::GREEN,
        Status::Closed => codes::GRAY,
    }
}

pub fn severity_color(severity: Severity) -> u8 {
    match severity {
        Severity::Low => codes::GREEN,
        Severity::Medium => codes::YELLOW,
        Severity::High => codes::ORANGE,
        Severity::Critical => codes::RED,
    }
}

pub fn type_color(issue_type: IssueType) -> u8 {
    match issue_type {
        IssueType::Pothole => codes::AMBER,
        IssueType::BrokenStreetlight => codes::PURPLE,
        IssueType::Graffiti => codes::PINK,
        IssueType::IllegalDumping => codes::EMERALD,
        IssueType::DamagedSign => codes::CYAN,
        IssueType::Other => codes::SLATE,
    }
}

/// Status label in its badge color.
pub fn status_badge(status: Status) -> String {
    paint(status.label(), status_color(status), should_colorize())
}

/// Severity label in its badge color.
pub fn severity_badge(severity: Severity) -> String {
    paint(severity.label(), severity_color(severity), should_colorize())
}

/// Type label in its badge color.
pub fn type_badge(issue_type: IssueType) -> String {
    paint(issue_type.label(), type_color(issue_type), should_colorize())
}

/// Colorize an examples help block.
///
/// Lines ending with `:` are headers. In example lines the command (up to
/// the first run of two or more spaces) is colored as a literal and the
/// description is left plain.
pub fn examples(text: &str) -> String {
    colorize_examples(text, should_colorize())
}

fn colorize_examples(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", paint(trimmed, codes::HEADER, true)));
        } else if let Some(cmd_end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(cmd_end);
            lines.push(format!(
                "{indent}{}{desc}",
                paint(cmd, codes::LITERAL, true)
            ));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    line.find("  ")
        .filter(|&start| !line[start..].trim().is_empty())
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
