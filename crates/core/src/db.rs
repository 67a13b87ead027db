// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed issue repository.
//!
//! [`SqliteRepository`] keeps one row per issue in the `issues` table and
//! implements [`IssueRepository`] on top of it.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result, StorageError};
use crate::issue::{Issue, Location};
use crate::repo::IssueRepository;

/// SQL schema for the issue store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS issues (
    id TEXT PRIMARY KEY,
    type TEXT NOT NULL,
    description TEXT NOT NULL,
    lat REAL NOT NULL,
    lng REAL NOT NULL,
    address TEXT,
    severity TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'reported',
    reported_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_issues_reported_at ON issues(reported_at DESC);
CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);
"#;

const SELECT_COLUMNS: &str =
    "SELECT id, type, description, lat, lng, address, severity, status, reported_at FROM issues";

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(StorageError::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(StorageError::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Map a row selected with [`SELECT_COLUMNS`] to an issue.
fn row_to_issue(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let type_str: String = row.get(1)?;
    let severity_str: String = row.get(6)?;
    let status_str: String = row.get(7)?;
    let reported_str: String = row.get(8)?;

    Ok(Issue {
        id: row.get(0)?,
        issue_type: parse_db(&type_str, "type")?,
        description: row.get(2)?,
        location: Location {
            lat: row.get(3)?,
            lng: row.get(4)?,
            address: row.get(5)?,
        },
        severity: parse_db(&severity_str, "severity")?,
        status: parse_db(&status_str, "status")?,
        reported_at: parse_timestamp(&reported_str, "reported_at")?,
    })
}

/// Run schema creation on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Issue repository stored in a SQLite database file.
pub struct SqliteRepository {
    conn: Mutex<Connection>,
}

impl SqliteRepository {
    /// Open a database at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        run_migrations(&conn)?;
        tracing::debug!(path = %path.display(), "opened issue database");

        Ok(SqliteRepository {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(SqliteRepository {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::Storage(StorageError::Poisoned))
    }
}

impl IssueRepository for SqliteRepository {
    fn list_all(&self) -> Result<Vec<Issue>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(SELECT_COLUMNS)?;
        let issues = stmt
            .query_map([], row_to_issue)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(count = issues.len(), "listed issues");
        Ok(issues)
    }

    fn get(&self, id: &str) -> Result<Option<Issue>> {
        let conn = self.conn()?;
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");
        let issue = conn
            .query_row(&sql, params![id], row_to_issue)
            .optional()?;
        Ok(issue)
    }

    fn put(&self, issue: &Issue) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO issues
             (id, type, description, lat, lng, address, severity, status, reported_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                issue.id,
                issue.issue_type.as_str(),
                issue.description,
                issue.location.lat,
                issue.location.lng,
                issue.location.address,
                issue.severity.as_str(),
                issue.status.as_str(),
                issue.reported_at.to_rfc3339(),
            ],
        )?;
        tracing::debug!(id = %issue.id, "stored issue");
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<()> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM issues WHERE id = ?1", params![id])?;
        tracing::debug!(id, affected, "deleted issue");
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| StorageError::CorruptedData(format!("negative row count {count}")).into())
    }

    fn clear(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM issues", [])?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
