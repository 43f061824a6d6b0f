//! Five-elements bureau (五行局) classification.
//!
//! The bureau of a stem-branch pair follows the nayin reduction: a stem
//! number (甲乙 = 1 .. 壬癸 = 5) plus a branch number (子丑午未 = 1,
//! 寅卯申酉 = 2, 辰巳戌亥 = 3), folded into 1..=5 and looked up in a fixed
//! table. The bureau number is the divisor used to place Zi Wei.

use crate::branch::EarthlyBranch;
use crate::sexagenary::StemBranch;
use crate::stem::HeavenlyStem;

/// The five bureaus, named by element and divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FiveElementsClass {
    Water2,
    Wood3,
    Metal4,
    Earth5,
    Fire6,
}

/// Bureau table indexed by folded sum - 1.
const BUREAU_TABLE: [FiveElementsClass; 5] = [
    FiveElementsClass::Wood3,
    FiveElementsClass::Metal4,
    FiveElementsClass::Water2,
    FiveElementsClass::Fire6,
    FiveElementsClass::Earth5,
];

impl FiveElementsClass {
    /// Chinese name of the bureau.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "水二局",
            Self::Wood3 => "木三局",
            Self::Metal4 => "金四局",
            Self::Earth5 => "土五局",
            Self::Fire6 => "火六局",
        }
    }

    /// Bureau number, in 2..=6.
    pub const fn divisor(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    /// Create from a bureau number.
    pub fn from_divisor(v: u8) -> Option<Self> {
        match v {
            2 => Some(Self::Water2),
            3 => Some(Self::Wood3),
            4 => Some(Self::Metal4),
            5 => Some(Self::Earth5),
            6 => Some(Self::Fire6),
            _ => None,
        }
    }
}

fn stem_number(stem: HeavenlyStem) -> u8 {
    stem.index() / 2 + 1
}

fn branch_number(branch: EarthlyBranch) -> u8 {
    (branch.index() % 6) / 2 + 1
}

/// Classify a stem-branch pair into its bureau.
pub fn five_elements_class(stem: HeavenlyStem, branch: EarthlyBranch) -> FiveElementsClass {
    let mut sum = stem_number(stem) + branch_number(branch);
    while sum > 5 {
        sum -= 5;
    }
    BUREAU_TABLE[usize::from(sum - 1)]
}

/// Convenience wrapper over [`five_elements_class`].
pub fn five_elements_of(pair: StemBranch) -> FiveElementsClass {
    five_elements_class(pair.stem, pair.branch)
}
