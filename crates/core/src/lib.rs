// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cityfix-core: Shared library for the cityfix issue reporter
//!
//! This crate provides the issue model, id generation, repositories,
//! the in-memory issue store and the filter engine used by the cityfix CLI.

pub mod clock;
pub mod db;
pub mod error;
pub mod filter;
pub mod id;
pub mod issue;
pub mod jsonl;
pub mod repo;
pub mod seed;
pub mod store;

#[cfg(test)]
#[path = "testing.rs"]
pub(crate) mod testing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use db::SqliteRepository;
pub use error::{Error, Result, StorageError, ValidationError};
pub use filter::{apply_filter, filter_stats, FilterParams, FilterSpec, FilterStats};
pub use issue::{Issue, IssueType, Location, NewIssue, Severity, Status};
pub use repo::{IssueRepository, MemoryRepository};
pub use store::{IssueStore, LoadState};
