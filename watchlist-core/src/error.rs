use thiserror::Error;

use crate::hint::Hint;
use crate::types::{MAX_YEAR, MIN_YEAR};

/// Reasons an add request is rejected.
///
/// The display text doubles as the user-facing hint. Every variant leaves
/// the catalog unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title was empty or whitespace only
    #[error("Please enter a title.")]
    EmptyTitle,

    /// Year was not an integer in the accepted range
    #[error(
        "Year looks off ({raw:?}). Use a year between {min} and {max}.",
        min = MIN_YEAR,
        max = MAX_YEAR
    )]
    YearOutOfRange { raw: String },

    /// Same title and year already on the list
    #[error("\"{title}\" is already on your list.")]
    Duplicate { title: String },
}

impl ValidationError {
    pub fn year_out_of_range(raw: impl Into<String>) -> Self {
        Self::YearOutOfRange { raw: raw.into() }
    }

    pub fn duplicate(title: impl Into<String>) -> Self {
        Self::Duplicate {
            title: title.into(),
        }
    }

    /// Warning hint carrying this error's message.
    pub fn hint(&self) -> Hint {
        Hint::warn(self.to_string())
    }
}

/// A movie id string that is neither `n` nor `#n`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid movie id: {0:?} (expected a number such as 3 or #3)")]
pub struct ParseIdError(pub String);

/// An unknown status filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter: {0:?} (expected all, watched or unwatched)")]
pub struct ParseStatusFilterError(pub String);
