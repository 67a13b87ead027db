// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use cityfix_core::{IssueStore, SqliteRepository};

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(path: Option<String>, no_seed: bool) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let (work_dir, seeded) = run_impl(&target_path, no_seed)?;

    println!("Initialized issue tracker at {}", work_dir.display());
    if seeded > 0 {
        println!("Seeded {} example issues", seeded);
    }
    Ok(())
}

/// Creates `.cityfix/` under `target_path` and opens its database once,
/// which seeds the example reports unless `no_seed` is set.
///
/// Returns the work directory and the number of issues in the new database.
pub(crate) fn run_impl(target_path: &Path, no_seed: bool) -> Result<(PathBuf, usize)> {
    let config = Config {
        seed_examples: !no_seed,
        ..Config::default()
    };
    let work_dir = init_work_dir(target_path, &config)?;

    let db_path = get_db_path(&work_dir, &config);
    let repo = SqliteRepository::open(&db_path)?;
    let mut store = IssueStore::new(repo).seed_when_empty(config.seed_examples);
    store.load()?;

    tracing::debug!(path = %db_path.display(), issues = store.issues().len(), "database created");
    Ok((work_dir, store.issues().len()))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
