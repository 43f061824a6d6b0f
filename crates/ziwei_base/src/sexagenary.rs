//! Sexagenary (干支) stem-branch pairs.
//!
//! A pair is valid only when stem and branch share polarity, which yields
//! the 60-step cycle. Epoch: 甲子 = index 0.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::branch::EarthlyBranch;
use crate::error::BaseError;
use crate::stem::HeavenlyStem;

/// One stem-branch pair of the 60-cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StemBranch {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl StemBranch {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Pair at a (possibly negative) position of the 60-cycle.
    pub fn from_cycle(i: i64) -> Self {
        let idx = i.rem_euclid(60);
        Self {
            stem: HeavenlyStem::from_cyclic(idx),
            branch: EarthlyBranch::from_cyclic(idx),
        }
    }

    /// Position in the 60-cycle, or `None` for a mixed-polarity pair.
    pub fn cycle_index(self) -> Option<u8> {
        let s = self.stem.index();
        let b = self.branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // Smallest n with n ≡ s (mod 10) and n ≡ b (mod 12)
        (0..6u8).map(|k| s + 10 * k).find(|n| n % 12 == b)
    }

    /// Pair of the Chinese year whose lunar new year falls in `year`.
    ///
    /// CE 4 = 甲子; 1984 = 甲子.
    pub fn of_year(year: i32) -> Self {
        Self::from_cycle(i64::from(year) - 4)
    }
}

impl Display for StemBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl FromStr for StemBranch {
    type Err = BaseError;

    /// Accepts `"甲子"` or `"jia-zi"` / `"jia zi"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(a), Some(b), None) = (chars.next(), chars.next(), chars.next()) {
            if !a.is_ascii() {
                let stem: HeavenlyStem = a.to_string().parse()?;
                let branch: EarthlyBranch = b.to_string().parse()?;
                return Ok(Self::new(stem, branch));
            }
        }
        let mut parts = t.split(['-', ' ']).filter(|p| !p.is_empty());
        match (parts.next(), parts.next(), parts.next()) {
            (Some(st), Some(br), None) => Ok(Self::new(st.parse()?, br.parse()?)),
            _ => Err(BaseError::UnknownStem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_epochs() {
        assert_eq!(StemBranch::of_year(1984).to_string(), "甲子");
        assert_eq!(StemBranch::of_year(2000).to_string(), "庚辰");
        assert_eq!(StemBranch::of_year(2024).to_string(), "甲辰");
        assert_eq!(StemBranch::of_year(1900).to_string(), "庚子");
    }

    #[test]
    fn cycle_index_round_trip() {
        for i in 0..60 {
            let sb = StemBranch::from_cycle(i);
            assert_eq!(sb.cycle_index(), Some(i as u8));
        }
        let mixed = StemBranch::new(HeavenlyStem::Jia, EarthlyBranch::Chou);
        assert_eq!(mixed.cycle_index(), None);
    }

    #[test]
    fn parse_forms() {
        let want = StemBranch::new(HeavenlyStem::Ren, EarthlyBranch::Wu);
        assert_eq!("壬午".parse::<StemBranch>(), Ok(want));
        assert_eq!("ren-wu".parse::<StemBranch>(), Ok(want));
        assert_eq!("ren wu".parse::<StemBranch>(), Ok(want));
        assert!("壬".parse::<StemBranch>().is_err());
    }
}
