// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let ansi = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = ansi(colors::codes::HEADER);
    let context = ansi(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(ansi(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let row = |name: &str, pad: usize, about: &str| {
        format!("  {}{}{about}", colors::literal(name), " ".repeat(pad - name.len()))
    };
    let rows = |items: &[(&str, &str)]| {
        items
            .iter()
            .map(|(name, about)| row(name, 10, about))
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        "{}\n{}\n\n{}\n{}\n",
        colors::header("Reports:"),
        rows(&[
            ("new", "Report a new city issue"),
            ("list", "List and filter issues"),
            ("show", "Show issue details"),
            ("status", "Change an issue's status"),
            ("delete", "Delete an issue"),
            ("next-id", "Preview the next issue ID"),
        ]),
        colors::header("Setup:"),
        rows(&[
            ("init", "Initialize a report database"),
            ("export", "Export issues to JSONL"),
            ("import", "Import issues from JSONL"),
        ]),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  cityfix init                                Initialize with example reports
  cityfix new pothole high \"Deep hole\"        Report a pothole
  cityfix list -s reported                    List new reports
  cityfix status ISS-2024-001 in_progress     Start work on a report",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
