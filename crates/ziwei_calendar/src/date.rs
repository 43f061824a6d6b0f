//! Solar (Gregorian) and lunar calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::CalendarError;
use crate::julian::{calendar_to_jdn, days_in_month, jdn_to_calendar};

/// A Gregorian calendar date in China civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SolarDate {
    /// Validated constructor.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub fn jdn(&self) -> i64 {
        calendar_to_jdn(self.year, self.month, self.day)
    }

    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self { year, month, day }
    }

    /// Date `days` later (earlier when negative).
    pub fn add_days(&self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parses `YYYY-M-D` (zero padding optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || CalendarError::InvalidDate(s.to_string());
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(bad());
        }
        let year: i32 = parts[0].parse().map_err(|_| bad())?;
        let month: u32 = parts[1].parse().map_err(|_| bad())?;
        let day: u32 = parts[2].parse().map_err(|_| bad())?;
        Self::new(year, month, day)
    }
}

/// A date of the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Gregorian year in which this lunar year's first month begins.
    pub year: i32,
    /// 1..=12.
    pub month: u8,
    /// 1..=30.
    pub day: u8,
    pub is_leap: bool,
}

const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

fn chinese_day(day: u8) -> String {
    match day {
        1..=10 => format!("初{}", ["一", "二", "三", "四", "五", "六", "七", "八", "九", "十"][usize::from(day - 1)]),
        11..=19 => format!("十{}", DIGITS[usize::from(day - 10)]),
        20 => "二十".to_string(),
        21..=29 => format!("廿{}", DIGITS[usize::from(day - 20)]),
        30 => "三十".to_string(),
        _ => day.to_string(),
    }
}

impl LunarDate {
    /// Chinese rendering, e.g. `二〇〇〇年七月十七`.
    pub fn to_chinese(&self) -> String {
        let year: String = self
            .year
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| DIGITS[d as usize]))
            .collect();
        let month = MONTHS
            .get(usize::from(self.month.saturating_sub(1)))
            .copied()
            .unwrap_or("?");
        let leap = if self.is_leap { "闰" } else { "" };
        format!("{year}年{leap}{month}月{}", chinese_day(self.day))
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap { " (leap)" } else { "" };
        write!(f, "{:04}-{:02}-{:02}{leap}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert!(SolarDate::new(2024, 2, 29).is_ok());
        assert!(SolarDate::new(2023, 2, 29).is_err());
        assert!(SolarDate::new(2023, 13, 1).is_err());
        assert!(SolarDate::new(2023, 1, 0).is_err());
    }

    #[test]
    fn parse_and_display() {
        let d: SolarDate = "2000-8-16".parse().unwrap();
        assert_eq!(d, SolarDate { year: 2000, month: 8, day: 16 });
        assert_eq!(d.to_string(), "2000-08-16");
        assert!("2000/8/16".parse::<SolarDate>().is_err());
    }

    #[test]
    fn add_days_crosses_month() {
        let d = SolarDate::new(2000, 2, 28).unwrap();
        assert_eq!(d.add_days(1), SolarDate::new(2000, 2, 29).unwrap());
        assert_eq!(d.add_days(2), SolarDate::new(2000, 3, 1).unwrap());
        assert_eq!(d.add_days(-28), SolarDate::new(2000, 1, 31).unwrap());
    }

    #[test]
    fn lunar_chinese_rendering() {
        let l = LunarDate { year: 2000, month: 7, day: 17, is_leap: false };
        assert_eq!(l.to_chinese(), "二〇〇〇年七月十七");
        let l = LunarDate { year: 2020, month: 4, day: 1, is_leap: true };
        assert_eq!(l.to_chinese(), "二〇二〇年闰四月初一");
        let l = LunarDate { year: 2023, month: 12, day: 30, is_leap: false };
        assert_eq!(l.to_chinese(), "二〇二三年腊月三十");
    }
}
