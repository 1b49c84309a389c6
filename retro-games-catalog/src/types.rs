//! Data model types for the retro games catalog.
//!
//! The catalog is a flat collection of [`CatalogEntry`] rows. Input arrives as
//! a [`RawEntry`] and only becomes an [`EntryFields`] after passing the
//! validator, so the store never persists unchecked values.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validate::{
    ValidationError, check_date, validate_condition, validate_date, validate_platform,
    validate_title, validate_year,
};

// ── Condition ───────────────────────────────────────────────────────────────

/// Physical condition of a catalogued game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Mint,
    /// Very good condition.
    Vgc,
    /// Good condition.
    Gc,
    Used,
}

impl Condition {
    /// Every allowed condition, in canonical order.
    ///
    /// The storage-level `CHECK` constraint is generated from this list.
    pub const ALL: [Condition; 4] = [Self::Mint, Self::Vgc, Self::Gc, Self::Used];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mint => "mint",
            Self::Vgc => "vgc",
            Self::Gc => "gc",
            Self::Used => "used",
        }
    }

    /// Match an already-normalized (lowercase, trimmed) condition string.
    ///
    /// Use [`validate_condition`] for user input.
    pub fn from_canonical(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    /// The allowed values joined for error messages, e.g. `gc, mint, used, vgc`.
    pub fn allowed_list() -> String {
        let mut names: Vec<&str> = Self::ALL.iter().map(Condition::as_str).collect();
        names.sort_unstable();
        names.join(", ")
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Raw input ───────────────────────────────────────────────────────────────

/// Unvalidated entry fields as collected by a front door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub title: String,
    pub release_year: i64,
    pub platform: String,
    pub date_acquired: String,
    #[serde(default)]
    pub condition: Option<String>,
}

// ── Validated fields ────────────────────────────────────────────────────────

/// A complete, validated set of entry fields (everything except the id).
///
/// Used for both creation and full-replacement updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    title: String,
    release_year: i32,
    platform: String,
    date_acquired: NaiveDate,
    condition: Option<Condition>,
}

impl EntryFields {
    /// Validate and normalize raw input.
    ///
    /// Fields are checked in declaration order; the first failure is returned.
    pub fn validate(raw: &RawEntry) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate_title(&raw.title)?,
            release_year: validate_year(raw.release_year)?,
            platform: validate_platform(&raw.platform)?,
            date_acquired: validate_date(&raw.date_acquired)?,
            condition: validate_condition(raw.condition.as_deref())?,
        })
    }

    /// Build fields from already-typed values, re-checking the text, year and date limits.
    pub fn new(
        title: &str,
        release_year: i32,
        platform: &str,
        date_acquired: NaiveDate,
        condition: Option<Condition>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: validate_title(title)?,
            release_year: validate_year(i64::from(release_year))?,
            platform: validate_platform(platform)?,
            date_acquired: check_date(date_acquired)?,
            condition,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn date_acquired(&self) -> NaiveDate {
        self.date_acquired
    }

    pub fn condition(&self) -> Option<Condition> {
        self.condition
    }
}

impl fmt::Display for EntryFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) acquired {}",
            self.title, self.platform, self.release_year, self.date_acquired
        )?;
        if let Some(c) = self.condition {
            write!(f, " [{c}]")?;
        }
        Ok(())
    }
}

// ── Catalog entry ───────────────────────────────────────────────────────────

/// A persisted catalog entry, produced once at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub title: String,
    pub release_year: i32,
    pub platform: String,
    pub date_acquired: NaiveDate,
    pub condition: Option<Condition>,
}

impl CatalogEntry {
    /// Attach a store-assigned id to validated fields.
    pub fn from_fields(id: i64, fields: EntryFields) -> Self {
        Self {
            id,
            title: fields.title,
            release_year: fields.release_year,
            platform: fields.platform,
            date_acquired: fields.date_acquired,
            condition: fields.condition,
        }
    }

    /// Whether this entry holds exactly the given field values.
    pub fn matches(&self, fields: &EntryFields) -> bool {
        self.title == fields.title
            && self.release_year == fields.release_year
            && self.platform == fields.platform
            && self.date_acquired == fields.date_acquired
            && self.condition == fields.condition
    }
}

// ── Ordering ────────────────────────────────────────────────────────────────

/// Sort order for listing entries.
///
/// Ties are broken by id so that paging is stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryOrder {
    /// Newest releases first. Used by the HTTP list endpoint.
    #[default]
    ReleaseYearDesc,
    /// Alphabetical. Used by the CLI listing and CSV export.
    TitleAsc,
}
