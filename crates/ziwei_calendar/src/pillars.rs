//! Four pillars (四柱): year, month, day and hour stem-branch pairs.
//!
//! - Year: by lunar new year ([`YearBoundary::Normal`]) or by 立春
//!   ([`YearBoundary::Exact`]).
//! - Month: by the Sun's 30-deg sector counted from 立春 (315 deg), stem by
//!   the five-tiger rule on the 立春-bounded year stem.
//! - Day: sexagenary count from the Julian Day Number (JDN + 49 mod 60).
//!   The late Zi hour (time index 12) belongs to the next day.
//! - Hour: branch from the time index, stem by the five-rat rule.

use ziwei_base::{EarthlyBranch, StemBranch};

use crate::astro::{normalize_deg, solar_term_jd, sun_longitude_ut};
use crate::date::{LunarDate, SolarDate};
use crate::error::CalendarError;
use crate::lunisolar::CHINA_UTC_OFFSET;

/// Where a new sexagenary year begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearBoundary {
    /// Lunar new year (正月初一).
    #[default]
    Normal,
    /// Start of Spring (立春).
    Exact,
}

/// The four stem-branch pillars of a moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: StemBranch,
    pub month: StemBranch,
    pub day: StemBranch,
    pub hour: StemBranch,
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Highest valid time index (late Zi).
pub const MAX_TIME_INDEX: u8 = 12;

pub fn check_time_index(time_index: u8) -> Result<(), CalendarError> {
    if time_index > MAX_TIME_INDEX {
        Err(CalendarError::InvalidTimeIndex(time_index))
    } else {
        Ok(())
    }
}

/// Branch of a time index (0 = early Zi, 1 = Chou, ... 11 = Hai, 12 = late Zi).
pub fn hour_branch(time_index: u8) -> EarthlyBranch {
    EarthlyBranch::from_cyclic(i64::from(time_index % 12))
}

/// Representative local clock hour of a time index.
fn representative_hour(time_index: u8) -> f64 {
    match time_index {
        0 => 0.5,
        12 => 23.5,
        t => 2.0 * f64::from(t),
    }
}

/// UT instant of a date and time index in China civil time.
pub fn moment_jd(date: SolarDate, time_index: u8) -> f64 {
    date.jdn() as f64 - 0.5 + (representative_hour(time_index) - CHINA_UTC_OFFSET) / 24.0
}

/// Gregorian year whose 立春 starts the solar year containing `jd`.
fn solar_year(date: SolarDate, jd: f64) -> Result<i32, CalendarError> {
    let lichun = solar_term_jd(date.year, 315.0)?;
    Ok(if jd < lichun { date.year - 1 } else { date.year })
}

/// Day pillar of a civil JDN.
pub fn day_pillar(jdn: i64) -> StemBranch {
    StemBranch::from_cycle(jdn + 49)
}

/// Compute the four pillars of a moment.
///
/// `lunar` must be the lunar date of `date`; it supplies the year for
/// [`YearBoundary::Normal`].
pub fn four_pillars(
    date: SolarDate,
    time_index: u8,
    lunar: &LunarDate,
    boundary: YearBoundary,
) -> Result<FourPillars, CalendarError> {
    check_time_index(time_index)?;
    let jd = moment_jd(date, time_index);
    let spring_year = solar_year(date, jd)?;

    let year = match boundary {
        YearBoundary::Normal => StemBranch::of_year(lunar.year),
        YearBoundary::Exact => StemBranch::of_year(spring_year),
    };

    let sector = (normalize_deg(sun_longitude_ut(jd) - 315.0) / 30.0).floor() as i64;
    let month_stem = StemBranch::of_year(spring_year).stem.tiger_rule().offset(sector);
    let month = StemBranch::new(month_stem, EarthlyBranch::Yin.offset(sector));

    let day_jdn = if time_index == MAX_TIME_INDEX { date.jdn() + 1 } else { date.jdn() };
    let day = day_pillar(day_jdn);

    let branch = hour_branch(time_index);
    let hour = StemBranch::new(day.stem.rat_rule().offset(i64::from(branch.index())), branch);

    Ok(FourPillars { year, month, day, hour })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_pillar_epochs() {
        // 2000-01-01 戊午, 1900-01-01 甲戌
        assert_eq!(day_pillar(2_451_545).to_string(), "戊午");
        assert_eq!(
            day_pillar(SolarDate::new(1900, 1, 1).unwrap().jdn()).to_string(),
            "甲戌"
        );
    }

    #[test]
    fn hour_branches() {
        assert_eq!(hour_branch(0), EarthlyBranch::Zi);
        assert_eq!(hour_branch(2), EarthlyBranch::Yin);
        assert_eq!(hour_branch(12), EarthlyBranch::Zi);
    }

    #[test]
    fn invalid_time_index() {
        let date = SolarDate::new(2000, 8, 16).unwrap();
        let lunar = LunarDate { year: 2000, month: 7, day: 17, is_leap: false };
        assert_eq!(
            four_pillars(date, 13, &lunar, YearBoundary::Normal),
            Err(CalendarError::InvalidTimeIndex(13))
        );
    }

    #[test]
    fn pillars_2000_08_16_yin_hour() {
        let date = SolarDate::new(2000, 8, 16).unwrap();
        let lunar = LunarDate { year: 2000, month: 7, day: 17, is_leap: false };
        let p = four_pillars(date, 2, &lunar, YearBoundary::Normal).unwrap();
        assert_eq!(p.to_string(), "庚辰 甲申 丙午 庚寅");
    }

    #[test]
    fn late_zi_uses_next_day() {
        let date = SolarDate::new(2000, 8, 16).unwrap();
        let lunar = LunarDate { year: 2000, month: 7, day: 17, is_leap: false };
        let p = four_pillars(date, 12, &lunar, YearBoundary::Normal).unwrap();
        assert_eq!(p.day.to_string(), "丁未");
        // 丁 day: 子 hour stem is 庚
        assert_eq!(p.hour.to_string(), "庚子");
    }
}
