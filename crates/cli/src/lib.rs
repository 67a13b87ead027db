// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cityfix - report and track city problems from the terminal.
//!
//! This crate provides the `cityfix` CLI on top of [`cityfix_core`]. Reports
//! live in a SQLite database inside a `.cityfix/` directory found by walking
//! up from the current directory.
//!
//! # Initialization
//!
//! ```rust,ignore
//! use cityfix_cli::{init_work_dir, find_work_dir, get_db_path, Config};
//!
//! let work_dir = init_work_dir(Path::new("."), &Config::default())?;
//!
//! // Later, find the project again
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db_path = get_db_path(&work_dir, &config);
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, FilterArgs, LocationArgs, OutputFormat};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config, MapConfig};
pub use error::{Error, Result};

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init { path, no_seed } => commands::init::run(path, no_seed),
        Command::New {
            issue_type,
            severity,
            description,
            location,
            output,
        } => commands::new::run(issue_type, severity, description, location, output),
        Command::List {
            filter,
            print_query,
            output,
        } => commands::list::run(filter, print_query, output),
        Command::Show { id, output } => commands::show::run(&id, &output),
        Command::Status { id, status } => commands::status::run(&id, &status),
        Command::Delete { id } => commands::delete::run(&id),
        Command::NextId => commands::next_id::run(),
        Command::Export { filepath } => commands::export::run(&filepath),
        Command::Import { filepath } => commands::import::run(&filepath),
    }
}
