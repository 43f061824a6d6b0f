//! Low-precision solar longitude and new-moon instants.
//!
//! Sun: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25 low-accuracy
//! theory (~0.01 deg), with the aberration/nutation shortcut to apparent
//! longitude. New moon: Meeus Chapter 49 mean phase plus periodic and
//! planetary corrections (~1 minute over 1900-2100). ΔT: Espenak & Meeus
//! polynomial fits.
//!
//! Clean-room implementation from the published formulas.

use crate::error::CalendarError;
use crate::julian::calendar_to_jdn;

/// JD of J2000.0.
pub const J2000: f64 = 2_451_545.0;

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_861;

/// Mean tropical year in days.
pub const TROPICAL_YEAR: f64 = 365.242_19;

const MAX_TERM_ITERATIONS: usize = 30;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
fn normalize_signed_deg(deg: f64) -> f64 {
    let r = normalize_deg(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// ΔT = TT - UT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };
    if year < 1900.0 {
        long_term(year)
    } else if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494_119 * t - 0.059_893_9 * t.powi(2) + 0.006_196_6 * t.powi(3)
            - 0.000_197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.844_93 * t - 0.076_100 * t.powi(2) + 0.002_093_6 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060_374 * t.powi(2)
            + 0.001_727_5 * t.powi(3)
            + 0.000_651_814 * t.powi(4)
            + 0.000_023_735_99 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.322_17 * t + 0.005_589 * t.powi(2)
    } else if year < 2150.0 {
        long_term(year) - 0.5628 * (2150.0 - year)
    } else {
        long_term(year)
    }
}

/// ΔT in days for a JD.
pub fn delta_t_days(jd: f64) -> f64 {
    let year = 2000.0 + (jd - J2000) / 365.25;
    delta_t_seconds(year) / 86_400.0
}

/// Apparent geocentric ecliptic longitude of the Sun, degrees [0, 360).
///
/// `jde` is a Julian Ephemeris Day (TT).
pub fn sun_apparent_longitude(jde: f64) -> f64 {
    let t = (jde - J2000) / 36_525.0;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(l0 + c - 0.005_69 - 0.004_78 * omega.sin())
}

/// Sun apparent longitude at a UT instant.
pub fn sun_longitude_ut(jd_ut: f64) -> f64 {
    sun_apparent_longitude(jd_ut + delta_t_days(jd_ut))
}

/// UT instant the Sun reaches `target_deg`, searched near `guess_jd`.
pub fn sun_longitude_crossing(target_deg: f64, guess_jd: f64) -> Result<f64, CalendarError> {
    let mut jd = guess_jd;
    for _ in 0..MAX_TERM_ITERATIONS {
        let diff = normalize_signed_deg(target_deg - sun_longitude_ut(jd));
        jd += diff * TROPICAL_YEAR / 360.0;
        if diff.abs() < 1e-7 {
            return Ok(jd);
        }
    }
    Err(CalendarError::NoConvergence("solar longitude crossing"))
}

/// UT instant of the solar term at `longitude_deg` falling in Gregorian `year`.
///
/// Terms at 285 deg and beyond (小寒 .. 惊蛰) fall in January-March.
pub fn solar_term_jd(year: i32, longitude_deg: f64) -> Result<f64, CalendarError> {
    let lon = normalize_deg(longitude_deg);
    let equinox = calendar_to_jdn(year, 3, 20) as f64;
    let mut guess = equinox + lon / 360.0 * TROPICAL_YEAR;
    if lon >= 285.0 {
        guess -= TROPICAL_YEAR;
    }
    sun_longitude_crossing(lon, guess)
}

/// Lunation number of the mean new moon nearest to a JD (k = 0 at 2000-01-06).
pub fn lunation_near(jd: f64) -> i64 {
    ((jd - 2_451_550.097_66) / SYNODIC_MONTH).round() as i64
}

/// JDE (TT) of the true new moon for lunation `k`.
pub fn new_moon_jde(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let jde = 2_451_550.097_66 + SYNODIC_MONTH * k + 0.000_154_37 * t2 - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let om = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    // Table 49.A, new moon column
    let periodic = -0.407_20 * mp.sin()
        + 0.172_41 * e * m.sin()
        + 0.016_08 * (2.0 * mp).sin()
        + 0.010_39 * (2.0 * f).sin()
        + 0.007_39 * e * (mp - m).sin()
        - 0.005_14 * e * (mp + m).sin()
        + 0.002_08 * e * e * (2.0 * m).sin()
        - 0.001_11 * (mp - 2.0 * f).sin()
        - 0.000_57 * (mp + 2.0 * f).sin()
        + 0.000_56 * e * (2.0 * mp + m).sin()
        - 0.000_42 * (3.0 * mp).sin()
        + 0.000_42 * e * (m + 2.0 * f).sin()
        + 0.000_38 * e * (m - 2.0 * f).sin()
        - 0.000_24 * e * (2.0 * mp - m).sin()
        - 0.000_17 * om.sin()
        - 0.000_07 * (mp + 2.0 * m).sin()
        + 0.000_04 * (2.0 * mp - 2.0 * f).sin()
        + 0.000_04 * (3.0 * m).sin()
        + 0.000_03 * (mp + m - 2.0 * f).sin()
        + 0.000_03 * (2.0 * mp + 2.0 * f).sin()
        - 0.000_03 * (mp + m + 2.0 * f).sin()
        + 0.000_03 * (mp - m + 2.0 * f).sin()
        - 0.000_02 * (mp - m - 2.0 * f).sin()
        - 0.000_02 * (3.0 * mp + m).sin()
        + 0.000_02 * (4.0 * mp).sin();

    // Planetary arguments A1..A14: [base, rate per lunation, amplitude]
    #[rustfmt::skip]
    static PLANETARY: [[f64; 3]; 14] = [
        [299.77,  0.107_408, 0.000_325],
        [251.88,  0.016_321, 0.000_165],
        [251.83, 26.651_886, 0.000_164],
        [349.42, 36.412_478, 0.000_126],
        [ 84.66, 18.206_239, 0.000_110],
        [141.74, 53.303_771, 0.000_062],
        [207.14,  2.453_732, 0.000_060],
        [154.84,  7.306_860, 0.000_056],
        [ 34.52, 27.261_239, 0.000_047],
        [207.19,  0.121_824, 0.000_042],
        [291.34,  1.844_379, 0.000_040],
        [161.72, 24.198_154, 0.000_037],
        [239.56, 25.513_099, 0.000_035],
        [331.55,  3.592_518, 0.000_023],
    ];
    let mut planetary = 0.0_f64;
    for (i, term) in PLANETARY.iter().enumerate() {
        let mut arg = term[0] + term[1] * k;
        if i == 0 {
            arg -= 0.009_173 * t2;
        }
        planetary += term[2] * arg.to_radians().sin();
    }

    jde + periodic + planetary
}

/// UT instant of the true new moon for lunation `k`.
pub fn new_moon_ut(k: i64) -> f64 {
    let jde = new_moon_jde(k);
    jde - delta_t_days(jde)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_longitude_meeus_example() {
        // Meeus example 25.a: 1992 Oct 13.0 TD, apparent longitude 199.90895 deg
        let lon = sun_apparent_longitude(2_448_908.5);
        assert!((lon - 199.909).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn new_moon_meeus_example() {
        // Meeus example 49.a: k = -283 gives 1977 Feb 18 03:37:42 TD
        let jde = new_moon_jde(-283);
        assert!((jde - 2_443_192.651_18).abs() < 0.0005, "got {jde}");
    }

    #[test]
    fn delta_t_is_about_a_minute_in_2000() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.5);
        assert!(delta_t_seconds(1900.0).abs() < 5.0);
    }

    #[test]
    fn winter_solstice_2000() {
        // 2000-12-21 13:37 UT
        let jd = solar_term_jd(2000, 270.0).unwrap();
        let expected = calendar_to_jdn(2000, 12, 21) as f64 - 0.5 + 13.62 / 24.0;
        assert!((jd - expected).abs() < 0.02, "got {jd}, want {expected}");
    }

    #[test]
    fn lichun_falls_in_february() {
        // 2024 立春: Feb 4 08:27 UT
        let jd = solar_term_jd(2024, 315.0).unwrap();
        let expected = calendar_to_jdn(2024, 2, 4) as f64 - 0.5 + 8.45 / 24.0;
        assert!((jd - expected).abs() < 0.02, "got {jd}, want {expected}");
    }

    #[test]
    fn lunation_near_round_trips() {
        for k in [-1200, -283, 0, 1, 500, 1236] {
            assert_eq!(lunation_near(new_moon_ut(k)), k);
        }
    }
}
