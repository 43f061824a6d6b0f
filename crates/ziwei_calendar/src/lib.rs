//! Chinese lunisolar calendar for chart casting.
//!
//! This crate provides:
//! - Gregorian ↔ Julian Day Number conversion
//! - Solar longitude, solar terms and true new moons (Meeus low-precision theories)
//! - The lunisolar month table with leap-month placement (UTC+8)
//! - Year, month, day and hour pillars under both year-boundary conventions
//! - The [`CalendarOracle`] trait the chart engine is written against
//!
//! Supported range is Gregorian 1900-2100.

pub mod astro;
pub mod date;
pub mod error;
pub mod julian;
pub mod lunisolar;
pub mod oracle;
pub mod pillars;

pub use date::{LunarDate, SolarDate};
pub use error::CalendarError;
pub use lunisolar::{
    CHINA_UTC_OFFSET, LunarMonthSpan, MAX_YEAR, MIN_YEAR, month_containing, month_table,
};
pub use oracle::{AstronomicalCalendar, CalendarOracle, FixedCalendar};
pub use pillars::{
    FourPillars, MAX_TIME_INDEX, YearBoundary, check_time_index, day_pillar, four_pillars,
    hour_branch,
};
