// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn commands_lists_every_subcommand() {
    let text = commands();
    for name in [
        "new", "list", "show", "status", "delete", "next-id", "init", "export", "import",
    ] {
        assert!(text.contains(name), "missing {name} in:\n{text}");
    }
    assert!(text.contains("Reports:"));
    assert!(text.contains("Setup:"));
}

#[test]
fn template_has_options_header() {
    assert!(template().contains("Options:"));
    assert!(template().contains("{options}"));
}

#[test]
fn quickstart_mentions_init() {
    assert!(quickstart().contains("cityfix init"));
}
