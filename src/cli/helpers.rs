//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use chrono::NaiveDate;

use crate::core::identity::ProjectId;

/// Format a ProjectId for display, truncating if too long
///
/// ULIDs are 26 characters; list tables show the first 10 plus "...".
pub fn format_short_id(id: &ProjectId) -> String {
    let s = id.as_str();
    if s.chars().count() > 13 {
        format!("{}...", s.chars().take(10).collect::<String>())
    } else {
        s.to_string()
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Counts characters rather than bytes so names with accents never split.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Parse a calendar date given on the command line
///
/// Accepts `YYYY-MM-DD` and normalizes it; an empty value clears the date.
pub fn parse_date(s: &str) -> Result<String, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(String::new());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("invalid date '{}': expected YYYY-MM-DD", s))
}
