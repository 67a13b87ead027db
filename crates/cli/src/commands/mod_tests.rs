// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! `TestContext` wraps a store over an in-memory repository with a clock
//! pinned to 2024-06-15, so commands can run without a `.cityfix/`
//! directory.

use chrono::{DateTime, TimeZone, Utc};
use cityfix_core::{FixedClock, IssueStore, MemoryRepository};

use crate::config::Config;

/// Store type used by command tests.
pub type TestStore = IssueStore<MemoryRepository, FixedClock>;

/// Test context providing an in-memory store and default config.
pub struct TestContext {
    pub store: TestStore,
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The instant every test context clock is frozen at.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

impl TestContext {
    /// Create a context loaded with the five example issues.
    pub fn new() -> Self {
        Self::build(true)
    }

    /// Create a loaded context with no issues.
    pub fn empty() -> Self {
        Self::build(false)
    }

    fn build(seed: bool) -> Self {
        let mut store = IssueStore::with_clock(MemoryRepository::new(), FixedClock(test_now()))
            .seed_when_empty(seed);
        store.load().expect("Failed to load test store");
        TestContext {
            store,
            config: Config::default(),
        }
    }
}
