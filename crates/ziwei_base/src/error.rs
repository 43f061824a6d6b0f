//! Error types for parsing base identifiers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing stems, branches, palace names and star keys.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// Text is not a heavenly stem name.
    UnknownStem(String),
    /// Text is not an earthly branch name.
    UnknownBranch(String),
    /// Text is not one of the twelve palace names.
    UnknownPalaceName(String),
    /// Text is not a known star key.
    InvalidStarName(String),
    /// Text is not a gender.
    UnknownGender(String),
    /// Text is not a horoscope scope.
    UnknownScope(String),
    /// Numeric index outside its closed range.
    InvalidIndex(i64),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownStem(s) => write!(f, "unknown heavenly stem: {s}"),
            Self::UnknownBranch(s) => write!(f, "unknown earthly branch: {s}"),
            Self::UnknownPalaceName(s) => write!(f, "unknown palace name: {s}"),
            Self::InvalidStarName(s) => write!(f, "invalid star name: {s}"),
            Self::UnknownGender(s) => write!(f, "unknown gender: {s}"),
            Self::UnknownScope(s) => write!(f, "unknown scope: {s}"),
            Self::InvalidIndex(i) => write!(f, "index out of range: {i}"),
        }
    }
}

impl Error for BaseError {}
