//! Error types for chart construction and queries.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ziwei_base::BaseError;
use ziwei_calendar::CalendarError;

/// Errors from building or querying a chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Palace index outside 0..12.
    InvalidIndex(i64),
    UnknownPalaceName(String),
    InvalidStarName(String),
    /// Time index outside 0..=12.
    InvalidTimeIndex(u8),
    Calendar(CalendarError),
    Base(BaseError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIndex(i) => write!(f, "invalid palace index: {i} (0-11)"),
            Self::UnknownPalaceName(s) => write!(f, "unknown palace name: {s}"),
            Self::InvalidStarName(s) => write!(f, "invalid star name: {s}"),
            Self::InvalidTimeIndex(t) => write!(f, "invalid time index: {t} (0-12)"),
            Self::Calendar(e) => write!(f, "calendar: {e}"),
            Self::Base(e) => write!(f, "{e}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Calendar(e) => Some(e),
            Self::Base(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::InvalidTimeIndex(t) => Self::InvalidTimeIndex(t),
            other => Self::Calendar(other),
        }
    }
}

impl From<BaseError> for ChartError {
    fn from(e: BaseError) -> Self {
        match e {
            BaseError::UnknownPalaceName(s) => Self::UnknownPalaceName(s),
            BaseError::InvalidStarName(s) => Self::InvalidStarName(s),
            BaseError::InvalidIndex(i) => Self::InvalidIndex(i),
            other => Self::Base(other),
        }
    }
}
