// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Example reports written into an empty repository on first load.

use chrono::{DateTime, Duration, Utc};

use crate::issue::{Issue, IssueType, Location, Severity, Status};

/// Number of example issues.
pub const EXAMPLE_COUNT: usize = 5;

fn example(
    id: &str,
    issue_type: IssueType,
    description: &str,
    location: Location,
    severity: Severity,
    status: Status,
    reported_at: DateTime<Utc>,
) -> Issue {
    Issue {
        id: id.to_string(),
        issue_type,
        description: description.to_string(),
        location,
        severity,
        status,
        reported_at,
    }
}

/// Five example reports around Rabat, reported 1 to 10 days before `now`.
pub fn example_issues(now: DateTime<Utc>) -> Vec<Issue> {
    let days_ago = |days: i64| now - Duration::days(days);

    vec![
        example(
            "ISS-2024-001",
            IssueType::Pothole,
            "Large pothole in the middle of the road causing traffic issues. Several cars have been damaged trying to avoid it.",
            Location::new(34.0209, -6.8416).with_address("Avenue Mohammed V, Rabat"),
            Severity::High,
            Status::Reported,
            days_ago(2),
        ),
        example(
            "ISS-2024-002",
            IssueType::BrokenStreetlight,
            "Streetlight has been flickering for weeks and now completely stopped working. The area is very dark at night.",
            Location::new(34.0150, -6.8350).with_address("Rue Oukaimeden, Agdal"),
            Severity::Medium,
            Status::InProgress,
            days_ago(5),
        ),
        example(
            "ISS-2024-003",
            IssueType::Graffiti,
            "Offensive graffiti on the wall of the public library. Needs immediate removal.",
            Location::new(34.0250, -6.8450).with_address("Place Pietri, Hassan"),
            Severity::Low,
            Status::Resolved,
            days_ago(10),
        ),
        example(
            "ISS-2024-004",
            IssueType::IllegalDumping,
            "Large pile of construction debris dumped illegally near the park. Creating health hazard.",
            Location::new(34.0180, -6.8500).with_address("Avenue Al Marsa, Les Orangers"),
            Severity::Critical,
            Status::Reported,
            days_ago(1),
        ),
        example(
            "ISS-2024-005",
            IssueType::DamagedSign,
            "Stop sign knocked down by a vehicle. Currently lying on the sidewalk.",
            Location::new(34.0300, -6.8380).with_address("Boulevard Hassan II, Centre Ville"),
            Severity::High,
            Status::Reported,
            days_ago(3),
        ),
    ]
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
