// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};

pub use args::{FilterArgs, LocationArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    #[value(alias = "ids")]
    Id,
}

#[derive(Parser)]
#[command(name = "cityfix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Report and track city problems: potholes, broken streetlights, graffiti and more")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if cityfix was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report a new city issue
    #[command(after_help = colors::examples("\
Examples:
  cityfix new pothole high \"Deep hole\"                    Report at the map center
  cityfix new graffiti low \"Tag\" --lat 34.02 --lng -6.84  Report at coordinates
  cityfix new other medium \"Fallen tree\" -a \"Rue Fes\"     Report with an address
  cityfix new damaged_sign high \"Stop sign down\" -o id    Output only the new ID"))]
    New {
        /// Issue type (pothole, broken_streetlight, graffiti, illegal_dumping, damaged_sign, other)
        issue_type: String,

        /// Severity (low, medium, high, critical)
        severity: String,

        /// What is wrong and where
        #[arg(value_parser = non_empty_string)]
        description: String,

        #[command(flatten)]
        location: LocationArgs,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List and filter issues, newest first
    #[command(after_help = colors::examples("\
Examples:
  cityfix list                               List all issues
  cityfix list -q pothole                    Search IDs and descriptions
  cityfix list -t pothole,graffiti           List potholes or graffiti
  cityfix list -s reported -S high,critical  List urgent new reports
  cityfix list -s reported --print-query     Print the filter as a query string
  cityfix list --query \"statuses=resolved\"   Apply a saved query string
  cityfix list -o json                       Output in JSON format"))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print the active filter as a query string
        #[arg(long)]
        print_query: bool,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show issue details
    Show {
        /// Issue ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', default_value = "text")]
        output: String,
    },

    /// Change an issue's status
    #[command(after_help = colors::examples("\
Examples:
  cityfix status ISS-2024-001 in_progress    Start work on a report
  cityfix status ISS-2024-001 resolved       Mark a report as fixed"))]
    Status {
        /// Issue ID
        id: String,

        /// New status (reported, in_progress, resolved, closed)
        status: String,
    },

    /// Delete an issue
    Delete {
        /// Issue ID
        id: String,
    },

    /// Print the ID the next report will receive
    NextId,

    /// Initialize a report database in the current directory (or specified path)
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,

        /// Do not seed the example reports
        #[arg(long)]
        no_seed: bool,
    },

    /// Export all issues to a JSONL file
    Export {
        /// Output file path
        filepath: String,
    },

    /// Import issues from a JSONL file, replacing issues with the same ID
    #[command(after_help = colors::examples("\
Examples:
  cityfix import issues.jsonl                Merge into the current reports

Import never seeds the example reports, but 'cityfix init' does unless
--no-seed is given. Use 'cityfix init --no-seed' to start from an export."))]
    Import {
        /// Input file path
        filepath: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
