// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;

#[test]
fn fixed_clock_reports_its_year() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap());
    assert_eq!(clock.year(), 2024);
    assert_eq!(clock.now(), clock.now());
}

#[test]
fn clock_by_reference() {
    let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    let by_ref = &clock;
    assert_eq!(by_ref.year(), 2025);
}

#[test]
fn system_clock_is_recent() {
    assert!(SystemClock.year() >= 2024);
}

#[test]
fn system_clock_year_is_local() {
    let before = Local::now().year();
    let year = SystemClock.year();
    let after = Local::now().year();
    assert!(year == before || year == after);
}

struct ShiftedYear(FixedClock, i32);

impl Clock for ShiftedYear {
    fn now(&self) -> DateTime<Utc> {
        self.0.now()
    }

    fn year(&self) -> i32 {
        self.1
    }
}

#[test]
fn reference_forwards_year_override() {
    let clock = ShiftedYear(
        FixedClock(Utc.with_ymd_and_hms(2026, 12, 31, 23, 30, 0).unwrap()),
        2027,
    );
    let by_ref = &clock;
    assert_eq!(by_ref.year(), 2027);
}
