//! Chinese lunisolar month table.
//!
//! Rules (时宪历, as used since 1645):
//! - A month begins on the civil day (UTC+8) containing a new moon.
//! - The winter solstice always falls in month 11.
//! - When 13 months separate two consecutive month-11 starts, the first of
//!   them that contains no principal term (中气, a multiple of 30 deg of solar
//!   longitude) is the leap month and repeats the previous month's number.
//!
//! The table for a date spans from the month-11 start at or before the date
//! to the next one.

use tracing::trace;

use crate::astro::{lunation_near, new_moon_ut, solar_term_jd, sun_longitude_ut};
use crate::error::CalendarError;
use crate::julian::{jdn_to_calendar, local_jdn, local_midnight_jd};

/// Civil time zone of the calendar, hours east of UTC.
pub const CHINA_UTC_OFFSET: f64 = 8.0;

/// Earliest and latest supported Gregorian years.
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// One lunar month of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonthSpan {
    /// Civil JDN of day 1.
    pub start_jdn: i64,
    /// 29 or 30.
    pub days: u8,
    /// 1..=12.
    pub month: u8,
    pub is_leap: bool,
    /// Chinese year the month belongs to (named by its Gregorian start year).
    pub lunar_year: i32,
}

impl LunarMonthSpan {
    pub fn contains(&self, jdn: i64) -> bool {
        jdn >= self.start_jdn && jdn < self.start_jdn + i64::from(self.days)
    }
}

fn new_moon_day(k: i64) -> i64 {
    local_jdn(new_moon_ut(k), CHINA_UTC_OFFSET)
}

/// Lunation whose civil day is the last new-moon day at or before `jdn`.
fn lunation_on_or_before(jdn: i64) -> i64 {
    let mut k = lunation_near(jdn as f64);
    while new_moon_day(k) > jdn {
        k -= 1;
    }
    while new_moon_day(k + 1) <= jdn {
        k += 1;
    }
    k
}

/// Lunation starting month 11 of the winter solstice in Gregorian `year`.
fn month11_lunation(year: i32) -> Result<i64, CalendarError> {
    let solstice = solar_term_jd(year, 270.0)?;
    Ok(lunation_on_or_before(local_jdn(solstice, CHINA_UTC_OFFSET)))
}

/// Principal-term sector (0..12) at local midnight starting `jdn`.
fn principal_sector(jdn: i64) -> u8 {
    let lon = sun_longitude_ut(local_midnight_jd(jdn, CHINA_UTC_OFFSET));
    ((lon / 30.0).floor() as u8).min(11)
}

/// Validate a Gregorian year against the supported range.
pub fn check_year(year: i32) -> Result<(), CalendarError> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::OutOfRange(year))
    }
}

/// Month table from the month-11 start at or before `jdn` to the next one.
pub fn month_table(jdn: i64) -> Result<Vec<LunarMonthSpan>, CalendarError> {
    let (year, _, _) = jdn_to_calendar(jdn);
    check_year(year)?;

    let this_k = month11_lunation(year)?;
    let (base_year, k_start, k_end) = if new_moon_day(this_k) <= jdn {
        (year, this_k, month11_lunation(year + 1)?)
    } else {
        (year - 1, month11_lunation(year - 1)?, this_k)
    };

    let count = k_end - k_start;
    if !(12..=13).contains(&count) {
        return Err(CalendarError::NoConvergence("month-11 bracket"));
    }

    let starts: Vec<i64> = (k_start..=k_end).map(new_moon_day).collect();
    let leap_slot = if count == 13 {
        (1..starts.len() - 1).find(|&i| principal_sector(starts[i]) == principal_sector(starts[i + 1]))
    } else {
        None
    };

    let mut months = Vec::with_capacity(count as usize);
    let mut label = 11u8;
    let mut lunar_year = base_year;
    for i in 0..starts.len() - 1 {
        let is_leap = leap_slot == Some(i);
        if i > 0 && !is_leap {
            label = label % 12 + 1;
            if label == 1 {
                lunar_year = base_year + 1;
            }
        }
        months.push(LunarMonthSpan {
            start_jdn: starts[i],
            days: (starts[i + 1] - starts[i]) as u8,
            month: label,
            is_leap,
            lunar_year,
        });
    }

    trace!(
        base_year,
        months = months.len(),
        leap = ?leap_slot,
        span_days = starts[starts.len() - 1] - starts[0],
        "lunisolar month table"
    );
    Ok(months)
}

/// The lunar month containing civil day `jdn`.
pub fn month_containing(jdn: i64) -> Result<LunarMonthSpan, CalendarError> {
    month_table(jdn)?
        .into_iter()
        .find(|m| m.contains(jdn))
        .ok_or(CalendarError::NoConvergence("date outside month table"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jdn;

    #[test]
    fn table_2000_has_twelve_months() {
        let table = month_table(calendar_to_jdn(2000, 8, 16)).unwrap();
        assert_eq!(table.len(), 12);
        assert!(table.iter().all(|m| !m.is_leap));
        assert!(table.iter().all(|m| m.days == 29 || m.days == 30));
    }

    #[test]
    fn leap_fourth_month_2020() {
        let table = month_table(calendar_to_jdn(2020, 6, 1)).unwrap();
        assert_eq!(table.len(), 13);
        let leap = table.iter().find(|m| m.is_leap).unwrap();
        assert_eq!(leap.month, 4);
        assert_eq!(leap.start_jdn, calendar_to_jdn(2020, 5, 23));
    }

    #[test]
    fn months_are_contiguous() {
        let table = month_table(calendar_to_jdn(2023, 3, 1)).unwrap();
        for w in table.windows(2) {
            assert_eq!(w[0].start_jdn + i64::from(w[0].days), w[1].start_jdn);
        }
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            month_table(calendar_to_jdn(1850, 1, 1)),
            Err(CalendarError::OutOfRange(1850))
        );
    }
}
