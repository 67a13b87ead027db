// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON Lines export and import of issues.
//!
//! One issue per line, using the persisted record field names.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, StorageError};
use crate::issue::Issue;

/// Writes all issues to a JSONL file, replacing existing content.
pub fn write_issues(path: &Path, issues: &[Issue]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for issue in issues {
        let json = serde_json::to_string(issue)?;
        writeln!(writer, "{json}")?;
    }
    writer.flush()?;
    writer.get_ref().sync_all()?;

    Ok(())
}

/// Reads all issues from a JSONL file.
///
/// Skips blank lines. A line that is not a valid issue fails the whole
/// read with its line number.
pub fn read_issues(path: &Path) -> Result<Vec<Issue>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut issues = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let issue: Issue = serde_json::from_str(&line).map_err(|e| {
            StorageError::CorruptedData(format!("line {}: {e}", index + 1))
        })?;
        issues.push(issue);
    }

    Ok(issues)
}

#[cfg(test)]
#[path = "jsonl_tests.rs"]
mod tests;
