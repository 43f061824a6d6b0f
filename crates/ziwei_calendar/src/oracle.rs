//! The calendar oracle consumed by the chart engine.
//!
//! The chart pipeline only needs three answers about a solar date: its
//! lunar date, the length of its lunar month, and its four pillars under a
//! year-boundary convention. [`AstronomicalCalendar`] computes them from
//! first principles; [`FixedCalendar`] replays caller-supplied answers.

use crate::date::{LunarDate, SolarDate};
use crate::error::CalendarError;
use crate::lunisolar::month_containing;
use crate::pillars::{FourPillars, YearBoundary, check_time_index, four_pillars};

/// Solar ↔ lunar conversions needed to cast a chart.
pub trait CalendarOracle {
    /// Lunar date of a solar date.
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError>;

    /// Number of days (29 or 30) in the lunar month containing `date`.
    fn lunar_month_days(&self, date: SolarDate) -> Result<u8, CalendarError>;

    /// Four pillars of `date` at `time_index` (0..=12).
    fn four_pillars(
        &self,
        date: SolarDate,
        time_index: u8,
        boundary: YearBoundary,
    ) -> Result<FourPillars, CalendarError>;
}

/// Lunisolar calendar computed from solar and lunar theory (UTC+8).
#[derive(Debug, Clone, Copy, Default)]
pub struct AstronomicalCalendar;

impl AstronomicalCalendar {
    pub const fn new() -> Self {
        Self
    }
}

impl CalendarOracle for AstronomicalCalendar {
    fn solar_to_lunar(&self, date: SolarDate) -> Result<LunarDate, CalendarError> {
        let jdn = date.jdn();
        let span = month_containing(jdn)?;
        Ok(LunarDate {
            year: span.lunar_year,
            month: span.month,
            day: (jdn - span.start_jdn + 1) as u8,
            is_leap: span.is_leap,
        })
    }

    fn lunar_month_days(&self, date: SolarDate) -> Result<u8, CalendarError> {
        Ok(month_containing(date.jdn())?.days)
    }

    fn four_pillars(
        &self,
        date: SolarDate,
        time_index: u8,
        boundary: YearBoundary,
    ) -> Result<FourPillars, CalendarError> {
        check_time_index(time_index)?;
        let lunar = self.solar_to_lunar(date)?;
        four_pillars(date, time_index, &lunar, boundary)
    }
}

/// Oracle answering with fixed values regardless of the date asked.
///
/// Useful when the caller already holds the lunar date and pillars (from
/// another almanac) or to drive the engine with exact inputs in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCalendar {
    pub lunar: LunarDate,
    pub month_days: u8,
    pub pillars: FourPillars,
    /// Year pillar returned for [`YearBoundary::Exact`]; `None` reuses `pillars.year`.
    pub exact_year: Option<ziwei_base::StemBranch>,
}

impl FixedCalendar {
    pub fn new(lunar: LunarDate, month_days: u8, pillars: FourPillars) -> Self {
        Self {
            lunar,
            month_days,
            pillars,
            exact_year: None,
        }
    }
}

impl CalendarOracle for FixedCalendar {
    fn solar_to_lunar(&self, _date: SolarDate) -> Result<LunarDate, CalendarError> {
        Ok(self.lunar)
    }

    fn lunar_month_days(&self, _date: SolarDate) -> Result<u8, CalendarError> {
        Ok(self.month_days)
    }

    fn four_pillars(
        &self,
        _date: SolarDate,
        time_index: u8,
        boundary: YearBoundary,
    ) -> Result<FourPillars, CalendarError> {
        check_time_index(time_index)?;
        let mut out = self.pillars;
        if let (YearBoundary::Exact, Some(year)) = (boundary, self.exact_year) {
            out.year = year;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::StemBranch;

    #[test]
    fn astronomical_golden_date() {
        let cal = AstronomicalCalendar::new();
        let date = SolarDate::new(2000, 8, 16).unwrap();
        let lunar = cal.solar_to_lunar(date).unwrap();
        assert_eq!(lunar, LunarDate { year: 2000, month: 7, day: 17, is_leap: false });
        assert_eq!(cal.lunar_month_days(date).unwrap(), 29);
    }

    #[test]
    fn fixed_calendar_exact_year_override() {
        let pillars = FourPillars {
            year: StemBranch::from_cycle(0),
            month: StemBranch::from_cycle(2),
            day: StemBranch::from_cycle(10),
            hour: StemBranch::from_cycle(20),
        };
        let lunar = LunarDate { year: 1984, month: 1, day: 1, is_leap: false };
        let mut cal = FixedCalendar::new(lunar, 30, pillars);
        cal.exact_year = Some(StemBranch::from_cycle(59));
        let date = SolarDate::new(1984, 2, 2).unwrap();
        assert_eq!(cal.four_pillars(date, 0, YearBoundary::Normal).unwrap().year, pillars.year);
        assert_eq!(
            cal.four_pillars(date, 0, YearBoundary::Exact).unwrap().year,
            StemBranch::from_cycle(59)
        );
        assert!(cal.four_pillars(date, 13, YearBoundary::Normal).is_err());
    }
}
