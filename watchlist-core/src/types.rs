//! Data model types for the watch-list.
//!
//! These types represent one session's state: movie records, the view
//! filters applied to them, and the summary counts derived from them.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseIdError, ParseStatusFilterError};

/// Earliest accepted release year.
pub const MIN_YEAR: u16 = 1888;

/// Latest accepted release year.
pub const MAX_YEAR: u16 = 2100;

// ── Identity ────────────────────────────────────────────────────────────────

/// Opaque identifier for a movie record.
///
/// Allocated by the [`Catalog`](crate::Catalog) in increasing order and never
/// reused within a session, so ordering by id is ordering by insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = ParseIdError;

    /// Accepts both the bare number and the displayed `#n` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

// ── Record ──────────────────────────────────────────────────────────────────

/// One movie on the watch-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieRecord {
    pub id: MovieId,
    /// Normalized display title; never empty.
    pub title: String,
    pub year: Option<u16>,
    pub watched: bool,
}

impl MovieRecord {
    /// Title with the year appended in parentheses, when known.
    pub fn label(&self) -> String {
        match self.year {
            Some(year) => format!("{} ({})", self.title, year),
            None => self.title.clone(),
        }
    }

    /// Whether this record has the same identity as a (title, year) pair
    /// for duplicate detection. Titles compare case-insensitively.
    pub fn same_movie(&self, title: &str, year: Option<u16>) -> bool {
        self.year == year && self.title.to_lowercase() == title.to_lowercase()
    }
}

// ── View state ──────────────────────────────────────────────────────────────

/// Which records the status filter lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Watched,
    Unwatched,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Watched => "watched",
            Self::Unwatched => "unwatched",
        }
    }

    pub fn all() -> &'static [StatusFilter] {
        &[Self::All, Self::Watched, Self::Unwatched]
    }

    /// Whether a record with the given watched flag passes this filter.
    pub fn admits(&self, watched: bool) -> bool {
        match self {
            Self::All => true,
            Self::Watched => watched,
            Self::Unwatched => !watched,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = ParseStatusFilterError;

    /// Parse a filter name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "watched" => Ok(Self::Watched),
            "unwatched" => Ok(Self::Unwatched),
            _ => Err(ParseStatusFilterError(s.to_string())),
        }
    }
}

/// Active filters for the view projection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub status: StatusFilter,
    /// Free-form search text, matched case-insensitively as a substring.
    pub search: String,
}

impl ViewState {
    /// Whether a record passes both the status filter and the search text.
    pub fn admits(&self, record: &MovieRecord) -> bool {
        if !self.status.admits(record.watched) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty() || record.title.to_lowercase().contains(&needle)
    }
}

// ── Stats ───────────────────────────────────────────────────────────────────

/// Summary counts over the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub watched: usize,
    pub remaining: usize,
}
