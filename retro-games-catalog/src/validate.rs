//! Field-level validation and normalization.
//!
//! Every function is pure: it returns either a normalized value or a
//! [`ValidationError`] describing which field failed, which constraint it
//! broke, and the offending input. Both front doors and the CSV importer go
//! through these same rules.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::types::Condition;

pub const MAX_TITLE_LEN: usize = 500;
pub const MAX_PLATFORM_LEN: usize = 100;
pub const MIN_RELEASE_YEAR: i64 = 1970;
pub const MAX_RELEASE_YEAR: i64 = 2030;

/// A rejected input value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}: {constraint} (got {value:?})")]
pub struct ValidationError {
    /// Name of the field that failed, e.g. `"title"`.
    pub field: &'static str,
    /// Human-readable description of the broken constraint.
    pub constraint: String,
    /// The raw value that was rejected.
    pub value: String,
}

impl ValidationError {
    fn new(field: &'static str, constraint: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field,
            constraint: constraint.into(),
            value: value.into(),
        }
    }
}

/// Trim a title and check it is 1–500 characters long.
pub fn validate_title(s: &str) -> Result<String, ValidationError> {
    validate_text("title", s, MAX_TITLE_LEN)
}

/// Trim a platform name and check it is 1–100 characters long.
pub fn validate_platform(s: &str) -> Result<String, ValidationError> {
    validate_text("platform", s, MAX_PLATFORM_LEN)
}

fn validate_text(field: &'static str, s: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "must not be empty", s));
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
            s,
        ));
    }
    Ok(trimmed.to_string())
}

/// Check a release year lies in 1970–2030 inclusive.
pub fn validate_year(n: i64) -> Result<i32, ValidationError> {
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&n) {
        return Err(ValidationError::new(
            "release_year",
            format!("must be between {MIN_RELEASE_YEAR} and {MAX_RELEASE_YEAR}"),
            n.to_string(),
        ));
    }
    // Range check above guarantees the value fits.
    Ok(n as i32)
}

/// Parse a release year from text, then range-check it.
pub fn parse_year(s: &str) -> Result<i32, ValidationError> {
    let n: i64 = s
        .trim()
        .parse()
        .map_err(|_| ValidationError::new("release_year", "must be a whole number", s))?;
    validate_year(n)
}

/// Parse an ISO-8601 calendar date in `YYYY-MM-DD` form.
pub fn validate_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = s.trim();
    let invalid = || ValidationError::new("date_acquired", "must be a valid YYYY-MM-DD date", s);
    // chrono accepts signed years and unpadded fields; only `dddd-dd-dd` is canonical.
    let canonical = trimmed.len() == 10
        && trimmed.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !canonical {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| invalid())
}

/// Check a typed date is writable as `YYYY-MM-DD` (year 0000 through 9999).
pub fn check_date(date: NaiveDate) -> Result<NaiveDate, ValidationError> {
    if !(0..=9999).contains(&date.year()) {
        return Err(ValidationError::new(
            "date_acquired",
            "must be a valid YYYY-MM-DD date",
            date.to_string(),
        ));
    }
    Ok(date)
}

/// Normalize an optional condition.
///
/// Missing, empty, or whitespace-only input means "no condition". Anything
/// else is trimmed and lower-cased, then must be one of the allowed values.
pub fn validate_condition(s: Option<&str>) -> Result<Option<Condition>, ValidationError> {
    let Some(raw) = s else {
        return Ok(None);
    };
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return Ok(None);
    }
    Condition::from_canonical(&normalized).map(Some).ok_or_else(|| {
        ValidationError::new(
            "condition",
            format!("must be one of: {}", Condition::allowed_list()),
            raw,
        )
    })
}
