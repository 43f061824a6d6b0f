//! Error types for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar/lunar conversion and pillar computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Malformed or impossible Gregorian date.
    InvalidDate(String),
    /// Year outside the supported range.
    OutOfRange(i32),
    /// Time index outside 0..=12.
    InvalidTimeIndex(u8),
    /// Iterative search did not converge.
    NoConvergence(&'static str),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::OutOfRange(y) => write!(f, "year {y} outside supported range"),
            Self::InvalidTimeIndex(t) => write!(f, "invalid time index: {t} (0-12)"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for CalendarError {}
