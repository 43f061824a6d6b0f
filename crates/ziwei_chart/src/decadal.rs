//! Decadal limits (大限) and small limits (小限).
//!
//! Decadal: ten-year ranges starting at the bureau divisor, laid from the
//! soul palace forward when gender and birth-year branch share polarity,
//! backward otherwise. Small limit: one palace per nominal age, from a
//! start fixed by the year branch's tri-harmony group, forward for men and
//! backward for women.

use ziwei_base::{
    EarthlyBranch, FiveElementsClass, Gender, TriHarmony, branch_index, walk,
};

/// Number of nominal ages listed per palace for the small limit.
pub const SMALL_LIMIT_CYCLES: usize = 10;

/// Inclusive age range of one decadal limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecadalRange {
    pub start: u8,
    pub end: u8,
}

impl DecadalRange {
    pub fn contains(&self, age: i32) -> bool {
        (i32::from(self.start)..=i32::from(self.end)).contains(&age)
    }
}

/// True when the decadal limits (and the 长生/博士 cycles) run forward.
pub fn decadal_forward(gender: Gender, year_branch: EarthlyBranch) -> bool {
    gender.yin_yang() == year_branch.yin_yang()
}

/// Decadal ranges by ring index.
pub fn decadal_ranges(soul_index: u8, bureau: FiveElementsClass, forward: bool) -> [DecadalRange; 12] {
    let mut out = [DecadalRange { start: 0, end: 0 }; 12];
    let base = bureau.divisor();
    for (i, index) in (0u8..).zip(walk(soul_index, forward)) {
        let start = base + 10 * i;
        out[usize::from(index)] = DecadalRange { start, end: start + 9 };
    }
    out
}

/// Ring index where age 1 of the small limit sits.
pub fn small_limit_start(year_branch: EarthlyBranch) -> u8 {
    branch_index(match year_branch.tri_harmony() {
        TriHarmony::YinWuXu => EarthlyBranch::Chen,
        TriHarmony::ShenZiChen => EarthlyBranch::Xu,
        TriHarmony::SiYouChou => EarthlyBranch::Wei,
        TriHarmony::HaiMaoWei => EarthlyBranch::Chou,
    })
}

/// Nominal ages of the small limit by ring index.
pub fn small_limit_ages(year_branch: EarthlyBranch, gender: Gender) -> [[u8; SMALL_LIMIT_CYCLES]; 12] {
    let forward = gender == Gender::Male;
    let mut out = [[0u8; SMALL_LIMIT_CYCLES]; 12];
    for (i, index) in (0u8..).zip(walk(small_limit_start(year_branch), forward)) {
        let slot = &mut out[usize::from(index)];
        for (j, age) in slot.iter_mut().enumerate() {
            *age = i + 1 + 12 * j as u8;
        }
    }
    out
}
