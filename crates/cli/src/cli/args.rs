// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.

use clap::Args;

/// Filter arguments for listing issues.
///
/// Values within a flag are comma-separated and may be repeated; all values
/// of one flag are OR'd, different flags are AND'd.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Match text against issue ID and description (case-insensitive)
    #[arg(long, short = 'q')]
    pub search: Option<String>,

    /// Filter by type (comma-separated or repeated)
    #[arg(long = "type", short = 't', value_name = "TYPES")]
    pub types: Vec<String>,

    /// Filter by status (comma-separated or repeated)
    #[arg(long = "status", short = 's', value_name = "STATUSES")]
    pub statuses: Vec<String>,

    /// Filter by severity (comma-separated or repeated)
    #[arg(long = "severity", short = 'S', value_name = "SEVERITIES")]
    pub severities: Vec<String>,

    /// Start from a saved filter query string; explicit flags override it
    #[arg(long, value_name = "QUERY")]
    pub query: Option<String>,
}

/// Coordinates and address for a new report.
#[derive(Args, Clone, Debug, Default)]
pub struct LocationArgs {
    /// Latitude in degrees (defaults to the configured map center)
    #[arg(long, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees (defaults to the configured map center)
    #[arg(long, allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Street address or landmark
    #[arg(long, short)]
    pub address: Option<String>,
}
