//! Soul palace (命宫), body palace (身宫) and the five-elements bureau.
//!
//! The soul counts from 寅 forward by the lunar month and backward by the
//! hour branch; the body counts forward by both. An explicit anchor pair
//! fixes the soul palace directly, and the body then follows the hour
//! from it.

use ziwei_base::{
    EarthlyBranch, FiveElementsClass, HeavenlyStem, StemBranch, branch_at, branch_index,
    five_elements_class, fix12,
};
use ziwei_calendar::LunarDate;

/// Body offset from an anchored soul, by time index (0..=12).
const ANCHOR_BODY_OFFSET: [u8; 13] = [0, 2, 4, 6, 8, 10, 0, 2, 4, 6, 8, 10, 0];

/// Resolved soul and body palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoulBody {
    pub soul_index: u8,
    pub body_index: u8,
    pub soul_stem: HeavenlyStem,
    pub soul_branch: EarthlyBranch,
    pub five_elements: FiveElementsClass,
}

/// Ordinal of the hour branch of a time index (late Zi counts as Zi).
pub fn hour_ordinal(time_index: u8) -> u8 {
    time_index % 12
}

/// 0-based lunar month index (0 = first month).
///
/// With `fix_leap_month`, the second half (day > 15) of a leap month counts
/// as the following month, except at late Zi.
pub fn lunar_month_index(lunar: &LunarDate, time_index: u8, fix_leap_month: bool) -> u8 {
    let carry = fix_leap_month && lunar.is_leap && lunar.day > 15 && time_index != 12;
    fix12(i64::from(lunar.month) - 1 + i64::from(carry))
}

/// Day offset used by the day-based stars (lunar day - 1; late Zi keeps the day).
pub fn lunar_day_index(lunar_day: u8, time_index: u8) -> u8 {
    if time_index >= 12 {
        lunar_day
    } else {
        lunar_day.saturating_sub(1)
    }
}

/// Resolve soul, body and bureau.
pub fn resolve_soul_body(
    year_stem: HeavenlyStem,
    month_index: u8,
    time_index: u8,
    anchor: Option<StemBranch>,
) -> SoulBody {
    let hour = i64::from(hour_ordinal(time_index));
    let (soul_index, body_index) = match anchor {
        Some(pair) => {
            let soul = branch_index(pair.branch);
            let offset = ANCHOR_BODY_OFFSET[usize::from(time_index.min(12))];
            (soul, fix12(i64::from(soul) + i64::from(offset)))
        }
        None => (
            fix12(i64::from(month_index) - hour),
            fix12(i64::from(month_index) + hour),
        ),
    };

    let soul_stem = year_stem.tiger_rule().offset(i64::from(soul_index));
    let soul_branch = branch_at(soul_index);
    let five_elements = match anchor {
        Some(pair) => five_elements_class(pair.stem, pair.branch),
        None => five_elements_class(soul_stem, soul_branch),
    };

    SoulBody {
        soul_index,
        body_index,
        soul_stem,
        soul_branch,
        five_elements,
    }
}
