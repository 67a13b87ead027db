// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod new;
pub mod next_id;
pub mod show;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use cityfix_core::{IssueStore, SqliteRepository};

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;

/// Issue store backed by the project database.
pub type Store = IssueStore<SqliteRepository>;

/// Helper to open and load the issue store from the current context.
pub fn open_store() -> Result<(Store, Config)> {
    load_store(true)
}

/// Like [`open_store`], but an empty database stays empty.
pub fn open_store_unseeded() -> Result<(Store, Config)> {
    load_store(false)
}

fn load_store(allow_seed: bool) -> Result<(Store, Config)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    let repo = SqliteRepository::open(&db_path)?;
    let mut store = IssueStore::new(repo).seed_when_empty(allow_seed && config.seed_examples);
    store.load()?;
    Ok((store, config))
}
