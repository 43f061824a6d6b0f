//! Earthly branches (地支) and their groupings.
//!
//! Ordinals start from Zi (子 = 0). Palace ring positions start from Yin
//! (寅 = 0) instead; see [`crate::ring`] for the conversion.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::BaseError;
use crate::stem::YinYang;

/// The 12 earthly branches starting from Zi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in ordinal order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// Tri-harmony (三合) frame a branch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriHarmony {
    /// 寅午戌 (fire frame).
    YinWuXu,
    /// 申子辰 (water frame).
    ShenZiChen,
    /// 巳酉丑 (metal frame).
    SiYouChou,
    /// 亥卯未 (wood frame).
    HaiMaoWei,
}

/// Seasonal (方) group of three consecutive branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// 寅卯辰
    Spring,
    /// 巳午未
    Summer,
    /// 申酉戌
    Autumn,
    /// 亥子丑
    Winter,
}

impl EarthlyBranch {
    /// Chinese character of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Pinyin key of the branch.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// Zodiac animal of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "鼠",
            Self::Chou => "牛",
            Self::Yin => "虎",
            Self::Mao => "兔",
            Self::Chen => "龙",
            Self::Si => "蛇",
            Self::Wu => "马",
            Self::Wei => "羊",
            Self::Shen => "猴",
            Self::You => "鸡",
            Self::Xu => "狗",
            Self::Hai => "猪",
        }
    }

    /// 0-based ordinal (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Create from a 0-based ordinal.
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_BRANCHES.get(usize::from(v)).copied()
    }

    /// Branch at any (possibly negative) cyclic ordinal.
    pub fn from_cyclic(i: i64) -> Self {
        ALL_BRANCHES[i.rem_euclid(12) as usize]
    }

    /// Branch `offset` steps after this one.
    pub fn offset(self, offset: i64) -> Self {
        Self::from_cyclic(i64::from(self.index()) + offset.rem_euclid(12))
    }

    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_ordinal(self.index())
    }

    pub const fn tri_harmony(self) -> TriHarmony {
        match self {
            Self::Yin | Self::Wu | Self::Xu => TriHarmony::YinWuXu,
            Self::Shen | Self::Zi | Self::Chen => TriHarmony::ShenZiChen,
            Self::Si | Self::You | Self::Chou => TriHarmony::SiYouChou,
            Self::Hai | Self::Mao | Self::Wei => TriHarmony::HaiMaoWei,
        }
    }

    pub const fn season(self) -> Season {
        match self {
            Self::Yin | Self::Mao | Self::Chen => Season::Spring,
            Self::Si | Self::Wu | Self::Wei => Season::Summer,
            Self::Shen | Self::You | Self::Xu => Season::Autumn,
            Self::Hai | Self::Zi | Self::Chou => Season::Winter,
        }
    }

    /// All 12 branches in order.
    pub const fn all() -> &'static [EarthlyBranch; 12] {
        &ALL_BRANCHES
    }
}

impl Display for EarthlyBranch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EarthlyBranch {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_BRANCHES
            .iter()
            .copied()
            .find(|b| b.name() == t || b.key().eq_ignore_ascii_case(t))
            .ok_or_else(|| BaseError::UnknownBranch(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(EarthlyBranch::from_u8(i as u8), Some(*b));
        }
        assert_eq!(EarthlyBranch::from_u8(12), None);
    }

    #[test]
    fn tri_harmony_members_are_four_apart() {
        for b in ALL_BRANCHES {
            assert_eq!(b.tri_harmony(), b.offset(4).tri_harmony());
            assert_eq!(b.tri_harmony(), b.offset(8).tri_harmony());
            assert_ne!(b.tri_harmony(), b.offset(1).tri_harmony());
        }
    }

    #[test]
    fn seasons_are_consecutive() {
        assert_eq!(EarthlyBranch::Yin.season(), Season::Spring);
        assert_eq!(EarthlyBranch::Chen.season(), Season::Spring);
        assert_eq!(EarthlyBranch::Zi.season(), Season::Winter);
        assert_eq!(EarthlyBranch::Chou.season(), Season::Winter);
    }

    #[test]
    fn polarity() {
        assert_eq!(EarthlyBranch::Zi.yin_yang(), YinYang::Yang);
        assert_eq!(EarthlyBranch::Chou.yin_yang(), YinYang::Yin);
        assert_eq!(EarthlyBranch::Chen.yin_yang(), YinYang::Yang);
    }

    #[test]
    fn parse() {
        assert_eq!("午".parse::<EarthlyBranch>(), Ok(EarthlyBranch::Wu));
        assert_eq!("hai".parse::<EarthlyBranch>(), Ok(EarthlyBranch::Hai));
        assert!("x".parse::<EarthlyBranch>().is_err());
    }
}
