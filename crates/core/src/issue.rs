// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for city problem reports.
//!
//! This module contains the fundamental data types: Issue, NewIssue,
//! IssueType, Severity, Status and Location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result, ValidationError};

/// Default map center for new reports (Rabat, Morocco).
pub const DEFAULT_MAP_CENTER: Location = Location {
    lat: 34.0209,
    lng: -6.8416,
    address: None,
};

/// Default zoom level of the map view.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Normalize user-typed enum text: case-insensitive, `-` accepted for `_`.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

/// Kind of city problem being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Pothole,
    BrokenStreetlight,
    Graffiti,
    IllegalDumping,
    DamagedSign,
    /// Anything that does not fit the other categories.
    Other,
}

impl IssueType {
    /// All types in display order.
    pub const ALL: [IssueType; 6] = [
        IssueType::Pothole,
        IssueType::BrokenStreetlight,
        IssueType::Graffiti,
        IssueType::IllegalDumping,
        IssueType::DamagedSign,
        IssueType::Other,
    ];

    /// Returns the string representation used in storage and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Pothole => "pothole",
            IssueType::BrokenStreetlight => "broken_streetlight",
            IssueType::Graffiti => "graffiti",
            IssueType::IllegalDumping => "illegal_dumping",
            IssueType::DamagedSign => "damaged_sign",
            IssueType::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            IssueType::Pothole => "Pothole",
            IssueType::BrokenStreetlight => "Broken Streetlight",
            IssueType::Graffiti => "Graffiti",
            IssueType::IllegalDumping => "Illegal Dumping",
            IssueType::DamagedSign => "Damaged Sign",
            IssueType::Other => "Other",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "pothole" => Ok(IssueType::Pothole),
            "broken_streetlight" => Ok(IssueType::BrokenStreetlight),
            "graffiti" => Ok(IssueType::Graffiti),
            "illegal_dumping" => Ok(IssueType::IllegalDumping),
            "damaged_sign" => Ok(IssueType::DamagedSign),
            "other" => Ok(IssueType::Other),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// How urgently a reported problem needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// All severities from least to most urgent.
    pub const ALL: [Severity; 4] = [
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];

    /// Returns the string representation used in storage and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// Processing state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Initial state of every new report.
    Reported,
    /// The city is working on it.
    InProgress,
    /// The problem has been fixed.
    Resolved,
    /// Closed without further action.
    Closed,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 4] = [
        Status::Reported,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
    ];

    /// Returns the string representation used in storage and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Reported => "reported",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Closed => "closed",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Reported => "Reported",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "reported" => Ok(Status::Reported),
            "in_progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A geographic point with an optional street address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Location {
            lat,
            lng,
            address: None,
        }
    }

    /// Sets the street address (builder pattern).
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Checks that the coordinate is finite and within WGS84 bounds.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(ValidationError::NonFiniteCoordinate);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(ValidationError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(ValidationError::LongitudeOutOfRange(self.lng));
        }
        Ok(())
    }
}

/// A reported city problem.
///
/// Serialized with the field names of the persisted record layout:
/// `id`, `type`, `description`, `location`, `severity`, `status`, `reportedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Unique identifier (format: `ISS-{year}-{sequence}`).
    pub id: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub location: Location,
    pub severity: Severity,
    /// The only field that changes after creation.
    pub status: Status,
    /// When the report was submitted.
    pub reported_at: DateTime<Utc>,
}

impl Issue {
    /// Builds a freshly reported issue from creation input.
    pub fn from_new(id: String, new_issue: NewIssue, reported_at: DateTime<Utc>) -> Self {
        Issue {
            id,
            issue_type: new_issue.issue_type,
            description: new_issue.description,
            location: new_issue.location,
            severity: new_issue.severity,
            status: Status::Reported,
            reported_at,
        }
    }
}

/// Creation input for an issue; id, status and timestamp are system-assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub description: String,
    pub location: Location,
}

impl NewIssue {
    pub fn new(
        issue_type: IssueType,
        severity: Severity,
        description: impl Into<String>,
        location: Location,
    ) -> Self {
        NewIssue {
            issue_type,
            severity,
            description: description.into(),
            location,
        }
    }

    /// Rejects reports with a blank description or an invalid coordinate.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        self.location.validate()
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
