// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables read by the CLI are named in [`vars`]
//! and read through the typed accessors below.

/// Environment variable names.
pub mod vars {
    /// `NO_COLOR=1` disables colored output.
    pub const NO_COLOR: &str = "NO_COLOR";
    /// `COLOR=1` forces colored output without a terminal.
    pub const COLOR: &str = "COLOR";
    /// Log filter directives (e.g. `debug`, `cityfix_core=trace`).
    pub const CITYFIX_LOG: &str = "CITYFIX_LOG";
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    is_one(std::env::var(vars::NO_COLOR).ok().as_deref())
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    is_one(std::env::var(vars::COLOR).ok().as_deref())
}

/// Returns the value of `CITYFIX_LOG` if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::CITYFIX_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

fn is_one(value: Option<&str>) -> bool {
    value == Some("1")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
