// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use clap::Parser;

#[test]
fn parse_dash_c_before_subcommand() {
    let cli = Cli::try_parse_from(["cityfix", "-C", "/tmp", "list"]).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
}

#[test]
fn parse_dash_c_after_subcommand() {
    let cli = Cli::try_parse_from(["cityfix", "list", "-C", "/tmp"]).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
}

#[test]
fn parse_long_directory_with_equals() {
    let cli = Cli::try_parse_from(["cityfix", "--directory=/tmp", "next-id"]).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
    assert!(matches!(cli.command, Command::NextId));
}

#[test]
fn no_directory_by_default() {
    let cli = Cli::try_parse_from(["cityfix", "list"]).unwrap();
    assert_eq!(cli.directory, None);
}
