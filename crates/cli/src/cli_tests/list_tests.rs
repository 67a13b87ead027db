// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_list_default() {
    let cli = parse(&["cityfix", "list"]).unwrap();
    match cli.command {
        Command::List {
            filter,
            print_query,
            output,
        } => {
            assert_eq!(filter.search, None);
            assert!(filter.types.is_empty());
            assert!(filter.statuses.is_empty());
            assert!(filter.severities.is_empty());
            assert_eq!(filter.query, None);
            assert!(!print_query);
            assert_eq!(output, OutputFormat::Text);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_short_flags() {
    let cli = parse(&[
        "cityfix", "list", "-q", "hole", "-t", "pothole", "-s", "reported", "-S", "high",
    ])
    .unwrap();
    match cli.command {
        Command::List { filter, .. } => {
            assert_eq!(filter.search.as_deref(), Some("hole"));
            assert_eq!(filter.types, vec!["pothole"]);
            assert_eq!(filter.statuses, vec!["reported"]);
            assert_eq!(filter.severities, vec!["high"]);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_repeated_type_flags() {
    let cli = parse(&["cityfix", "list", "-t", "pothole,graffiti", "--type", "other"]).unwrap();
    match cli.command {
        Command::List { filter, .. } => {
            assert_eq!(filter.types, vec!["pothole,graffiti", "other"]);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_query_and_print_query() {
    let cli = parse(&[
        "cityfix",
        "list",
        "--query",
        "statuses=resolved",
        "--print-query",
        "-o",
        "json",
    ])
    .unwrap();
    match cli.command {
        Command::List {
            filter,
            print_query,
            output,
        } => {
            assert_eq!(filter.query.as_deref(), Some("statuses=resolved"));
            assert!(print_query);
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("Expected List command"),
    }
}
