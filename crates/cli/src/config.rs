// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.cityfix/config.toml` and includes:
//! - `database`: Optional path to store the database in a different location
//! - `seed_examples`: Whether an empty database gets the example reports
//! - `[map]`: Default location for reports created without coordinates,
//!   and the zoom level of map links in `cityfix show`

use cityfix_core::issue::{DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM};
use cityfix_core::Location;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".cityfix";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "issues.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.cityfix/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Optional path for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Seed the example reports into an empty database on first load.
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
    #[serde(default)]
    pub map: MapConfig,
}

/// Map view defaults. Missing keys fall back to Rabat at zoom 13.
///
/// `lat`/`lng` place reports created without coordinates; `zoom` sets
/// the zoom of the map link printed by `cityfix show`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
}

fn default_seed_examples() -> bool {
    true
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            lat: DEFAULT_MAP_CENTER.lat,
            lng: DEFAULT_MAP_CENTER.lng,
            zoom: DEFAULT_MAP_ZOOM,
        }
    }
}

impl MapConfig {
    /// The location used for reports created without coordinates.
    pub fn center(&self) -> Location {
        Location::new(self.lat, self.lng)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: None,
            seed_examples: default_seed_examples(),
            map: MapConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.cityfix/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parses and validates configuration text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config
            .map
            .center()
            .validate()
            .map_err(|e| Error::Config(format!("invalid map center: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.cityfix/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .cityfix directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.database {
        Some(database) => {
            let database_path = Path::new(database);
            if database_path.is_absolute() {
                database_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(database)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .cityfix directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;
    write_gitignore(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file keeping the database out of version control.
fn write_gitignore(work_dir: &Path) -> Result<()> {
    let content = "# Local report database\nissues.db\nissues.db-wal\nissues.db-shm\n";
    fs::write(work_dir.join(GITIGNORE_FILE_NAME), content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
