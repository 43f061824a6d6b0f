//! Gregorian calendar ↔ Julian Day Number.
//!
//! Integer algorithm from Fliegel & Van Flandern (1968). A JDN labels the
//! civil day; JD `jdn - 0.5` is that day's 00:00 UT.

/// Julian Day Number of a proleptic Gregorian date.
pub fn calendar_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - i64::from(month)) / 12;
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    i64::from(day) + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Gregorian (year, month, day) of a Julian Day Number.
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;
    (year as i32, month as u32, day as u32)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Civil day number in a fixed-offset zone for a JD in UT.
pub fn local_jdn(jd_ut: f64, utc_offset_hours: f64) -> i64 {
    (jd_ut + 0.5 + utc_offset_hours / 24.0).floor() as i64
}

/// JD (UT) of local midnight starting civil day `jdn`.
pub fn local_midnight_jd(jdn: i64, utc_offset_hours: f64) -> f64 {
    jdn as f64 - 0.5 - utc_offset_hours / 24.0
}
