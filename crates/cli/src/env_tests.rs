// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::CITYFIX_LOG, "CITYFIX_LOG");
}

#[parameterized(
    one = { Some("1"), true },
    zero = { Some("0"), false },
    word = { Some("yes"), false },
    empty = { Some(""), false },
    unset = { None, false },
)]
fn test_is_one(value: Option<&str>, expected: bool) {
    assert_eq!(is_one(value), expected);
}
