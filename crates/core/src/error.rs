// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cityfix-core operations.

use thiserror::Error;

/// All possible errors that can occur in cityfix-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("invalid report: {0}")]
    Validation(#[from] ValidationError),

    #[error(
        "invalid issue type: '{0}'\n  hint: valid types are: pothole, broken_streetlight, graffiti, illegal_dumping, damaged_sign, other"
    )]
    InvalidIssueType(String),

    #[error("invalid severity: '{0}'\n  hint: valid severities are: low, medium, high, critical")]
    InvalidSeverity(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: reported, in_progress, resolved, closed")]
    InvalidStatus(String),

    #[error("invalid filter query: {0}")]
    InvalidQuery(String),
}

/// Failures reaching the durable issue store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// A report that cannot be accepted as a new issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("description cannot be empty")]
    EmptyDescription,

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("coordinates must be finite numbers")]
    NonFiniteCoordinate,
}

impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::Storage(StorageError::Database(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Storage(StorageError::Io(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Storage(StorageError::Json(e))
    }
}

impl Error {
    /// Returns true if this error came from the storage layer.
    pub fn is_storage(&self) -> bool {
        matches!(self, Error::Storage(_))
    }
}

/// A specialized Result type for cityfix-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
