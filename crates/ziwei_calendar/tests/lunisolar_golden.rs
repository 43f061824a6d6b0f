use ziwei_base::{EarthlyBranch, StemBranch};
use ziwei_calendar::{
    AstronomicalCalendar, CalendarError, CalendarOracle, LunarDate, SolarDate, YearBoundary,
};

fn solar(y: i32, m: u32, d: u32) -> SolarDate {
    SolarDate::new(y, m, d).unwrap()
}

fn lunar(y: i32, m: u32, d: u32) -> LunarDate {
    AstronomicalCalendar::new().solar_to_lunar(solar(y, m, d)).unwrap()
}

#[test]
fn lunar_new_years() {
    for (y, m, d) in [(1984, 2, 2), (2000, 2, 5), (2023, 1, 22), (2024, 2, 10)] {
        let l = lunar(y, m, d);
        assert_eq!((l.year, l.month, l.day, l.is_leap), (y, 1, 1, false), "{y}-{m}-{d}");
        let eve = AstronomicalCalendar::new()
            .solar_to_lunar(solar(y, m, d).add_days(-1))
            .unwrap();
        assert_eq!(eve.year, y - 1);
        assert_eq!(eve.month, 12);
    }
}

#[test]
fn golden_birth_date() {
    let l = lunar(2000, 8, 16);
    assert_eq!(l, LunarDate { year: 2000, month: 7, day: 17, is_leap: false });
}

#[test]
fn leap_second_month_2023() {
    let l = lunar(2023, 3, 22);
    assert_eq!(l, LunarDate { year: 2023, month: 2, day: 1, is_leap: true });
    let before = lunar(2023, 3, 21);
    assert_eq!((before.month, before.is_leap), (2, false));
}

#[test]
fn leap_fourth_month_2020() {
    let l = lunar(2020, 5, 23);
    assert_eq!(l, LunarDate { year: 2020, month: 4, day: 1, is_leap: true });
    let after = lunar(2020, 6, 21);
    assert_eq!((after.month, after.day, after.is_leap), (5, 1, false));
}

#[test]
fn month_lengths_are_29_or_30() {
    let cal = AstronomicalCalendar::new();
    let mut date = solar(2010, 1, 1);
    for _ in 0..24 {
        let days = cal.lunar_month_days(date).unwrap();
        assert!(days == 29 || days == 30);
        date = date.add_days(31);
    }
}

#[test]
fn exact_year_boundary_switches_at_lichun() {
    let cal = AstronomicalCalendar::new();
    // 2024 立春 on Feb 4, lunar new year on Feb 10
    let between = solar(2024, 2, 6);
    let normal = cal.four_pillars(between, 6, YearBoundary::Normal).unwrap();
    let exact = cal.four_pillars(between, 6, YearBoundary::Exact).unwrap();
    assert_eq!(normal.year, StemBranch::of_year(2023));
    assert_eq!(exact.year, StemBranch::of_year(2024));
    assert_eq!(exact.month.branch, EarthlyBranch::Yin);
}

#[test]
fn out_of_range_year() {
    let cal = AstronomicalCalendar::new();
    assert_eq!(
        cal.solar_to_lunar(solar(2150, 1, 1)),
        Err(CalendarError::OutOfRange(2150))
    );
}
