//! Chart configuration and birth input.
//!
//! Configuration travels with every chart as a plain value; there is no
//! process-wide state.

use ziwei_base::{Gender, StemBranch};
use ziwei_calendar::{MAX_TIME_INDEX, SolarDate, YearBoundary};

use crate::error::ChartError;

/// Placement school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// 通行版.
    #[default]
    Standard,
    /// 中州派.
    Zhongzhou,
}

impl Algorithm {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "通行版",
            Self::Zhongzhou => "中州派",
        }
    }
}

/// How the nominal age used by horoscope queries is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgeConvention {
    /// 虚岁: one at birth, plus one every lunar new year.
    #[default]
    Natural,
    /// Increments on the lunar birthday instead of at new year.
    Birthday,
}

/// Parameters shared by chart construction and horoscope queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartConfig {
    pub algorithm: Algorithm,
    /// Year boundary for the birth-year pillar (stems, mutagens, direction).
    pub year_boundary: YearBoundary,
    /// Year boundary for the yearly adjective stars and horoscope years.
    pub horoscope_boundary: YearBoundary,
    pub age_convention: AgeConvention,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Standard,
            year_boundary: YearBoundary::Normal,
            horoscope_boundary: YearBoundary::Exact,
            age_convention: AgeConvention::Natural,
        }
    }
}

/// Birth data of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthInput {
    pub solar_date: SolarDate,
    /// 0 = early Zi, 1 = Chou, ... 11 = Hai, 12 = late Zi.
    pub time_index: u8,
    pub gender: Gender,
    /// Count the second half of a leap month as the following month.
    pub fix_leap_month: bool,
    /// Explicit soul-palace stem-branch overriding the computed one.
    pub anchor: Option<StemBranch>,
}

impl BirthInput {
    pub fn new(solar_date: SolarDate, time_index: u8, gender: Gender) -> Result<Self, ChartError> {
        if time_index > MAX_TIME_INDEX {
            return Err(ChartError::InvalidTimeIndex(time_index));
        }
        Ok(Self {
            solar_date,
            time_index,
            gender,
            fix_leap_month: true,
            anchor: None,
        })
    }

    pub fn with_fix_leap_month(mut self, fix: bool) -> Self {
        self.fix_leap_month = fix;
        self
    }

    pub fn with_anchor(mut self, anchor: StemBranch) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ChartConfig::default();
        assert_eq!(c.algorithm, Algorithm::Standard);
        assert_eq!(c.year_boundary, YearBoundary::Normal);
        assert_eq!(c.horoscope_boundary, YearBoundary::Exact);
        assert_eq!(c.age_convention, AgeConvention::Natural);
    }

    #[test]
    fn time_index_validated() {
        let d = SolarDate::new(2000, 8, 16).unwrap();
        assert!(BirthInput::new(d, 12, Gender::Male).is_ok());
        assert_eq!(
            BirthInput::new(d, 13, Gender::Male),
            Err(ChartError::InvalidTimeIndex(13))
        );
    }
}
