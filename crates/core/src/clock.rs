// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock source for report timestamps.
//!
//! The store reads time through [`Clock`] so the year used for id
//! generation can be pinned in tests.

use chrono::{DateTime, Datelike, Local, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar year, used for issue ids.
    fn year(&self) -> i32 {
        self.now().year()
    }
}

/// System clock. Timestamps are UTC; the year is the local calendar year,
/// so a report filed just after local midnight on January 1 starts the new
/// year's sequence even where UTC is still in the old year.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn year(&self) -> i32 {
        Local::now().year()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }

    fn year(&self) -> i32 {
        (*self).year()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
