//! The 14 major stars (主星).
//!
//! Ziwei is located from the lunar day and the bureau divisor: find the
//! smallest k >= 0 making (day + k) divisible by the divisor, take the
//! quotient Q, then step from Q - 1 forward by k when k is even and
//! backward by k when odd. Tianfu mirrors Ziwei across the 寅-申 axis.
//! The remaining stars keep fixed offsets from these two.

use ziwei_base::{HeavenlyStem, Star, StarId, brightness, fix12, mutagen_of};

use crate::palace::PlacedStar;

/// Ziwei group offsets (counter-clockwise from Ziwei).
const ZIWEI_GROUP: [(StarId, i64); 6] = [
    (StarId::Ziwei, 0),
    (StarId::Tianji, -1),
    (StarId::Taiyang, -3),
    (StarId::Wuqu, -4),
    (StarId::Tiantong, -5),
    (StarId::Lianzhen, -8),
];

/// Tianfu group offsets (clockwise from Tianfu).
const TIANFU_GROUP: [(StarId, i64); 8] = [
    (StarId::Tianfu, 0),
    (StarId::Taiyin, 1),
    (StarId::Tanlang, 2),
    (StarId::Jumen, 3),
    (StarId::Tianxiang, 4),
    (StarId::Tianliang, 5),
    (StarId::Qisha, 6),
    (StarId::Pojun, 10),
];

/// Lunar day used to locate Ziwei.
///
/// A late-Zi birth counts as the next day, wrapping to day 1 past the end
/// of the month.
pub fn effective_lunar_day(lunar_day: u8, month_days: u8, time_index: u8) -> u8 {
    let day = if time_index == 12 { lunar_day + 1 } else { lunar_day };
    if month_days > 0 && day > month_days { day - month_days } else { day }
}

/// Ring index of Ziwei for a lunar day and bureau divisor.
pub fn ziwei_index(lunar_day: u8, divisor: u8) -> u8 {
    let d = i64::from(divisor.max(1));
    let day = i64::from(lunar_day);
    let k = (d - day % d) % d;
    let q = ((day + k) / d) % 12;
    if k % 2 == 0 {
        fix12(q - 1 + k)
    } else {
        fix12(q - 1 - k)
    }
}

/// Ring index of Tianfu given Ziwei's.
pub fn tianfu_index(ziwei: u8) -> u8 {
    fix12(12 - i64::from(ziwei))
}

/// Place all 14 majors with brightness and birth-year mutagen.
pub fn place_major_stars(ziwei: u8, year_stem: HeavenlyStem) -> Vec<PlacedStar> {
    let tianfu = tianfu_index(ziwei);
    let from_ziwei = ZIWEI_GROUP
        .iter()
        .map(|&(id, off)| (id, fix12(i64::from(ziwei) + off)));
    let from_tianfu = TIANFU_GROUP
        .iter()
        .map(|&(id, off)| (id, fix12(i64::from(tianfu) + off)));

    from_ziwei
        .chain(from_tianfu)
        .map(|(id, index)| PlacedStar {
            index,
            star: Star {
                brightness: brightness(id, index),
                mutagen: mutagen_of(year_stem, id),
                ..Star::origin(id)
            },
        })
        .collect()
}
