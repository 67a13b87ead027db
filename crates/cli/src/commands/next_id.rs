// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cityfix_core::{Clock, IssueRepository, IssueStore};

use crate::error::Result;

use super::open_store;

pub fn run() -> Result<()> {
    let (store, _) = open_store()?;
    println!("{}", run_impl(&store));
    Ok(())
}

/// The ID `cityfix new` would assign right now.
pub(crate) fn run_impl<R: IssueRepository, C: Clock>(store: &IssueStore<R, C>) -> String {
    store.next_id()
}

#[cfg(test)]
#[path = "next_id_tests.rs"]
mod tests;
