//! Heavenly stems (天干) and yin-yang polarity.
//!
//! The ten stems cycle continuously; even ordinals are yang, odd are yin.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::BaseError;

/// Yin-yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    /// Polarity of a 0-based ordinal (even = yang).
    pub const fn from_ordinal(ordinal: u8) -> Self {
        if ordinal % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "阳",
            Self::Yin => "阴",
        }
    }
}

/// The 10 heavenly stems starting from Jia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Chinese character of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// Pinyin key of the stem.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based ordinal (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Create from a 0-based ordinal.
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_STEMS.get(usize::from(v)).copied()
    }

    /// Stem at any (possibly negative) cyclic position.
    pub fn from_cyclic(i: i64) -> Self {
        ALL_STEMS[i.rem_euclid(10) as usize]
    }

    /// Stem `offset` steps after this one.
    pub fn offset(self, offset: i64) -> Self {
        Self::from_cyclic(i64::from(self.index()) + offset.rem_euclid(10))
    }

    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_ordinal(self.index())
    }

    /// Stem of the Yin (寅) palace for a birth-year stem (五虎遁).
    ///
    /// 甲己 → 丙, 乙庚 → 戊, 丙辛 → 庚, 丁壬 → 壬, 戊癸 → 甲.
    pub const fn tiger_rule(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Bing,
            Self::Yi | Self::Geng => Self::Wu,
            Self::Bing | Self::Xin => Self::Geng,
            Self::Ding | Self::Ren => Self::Ren,
            Self::Wu | Self::Gui => Self::Jia,
        }
    }

    /// Stem of the Zi (子) hour for a day stem (五鼠遁).
    ///
    /// 甲己 → 甲, 乙庚 → 丙, 丙辛 → 戊, 丁壬 → 庚, 戊癸 → 壬.
    pub const fn rat_rule(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Jia,
            Self::Yi | Self::Geng => Self::Bing,
            Self::Bing | Self::Xin => Self::Wu,
            Self::Ding | Self::Ren => Self::Geng,
            Self::Wu | Self::Gui => Self::Ren,
        }
    }

    /// All 10 stems in order.
    pub const fn all() -> &'static [HeavenlyStem; 10] {
        &ALL_STEMS
    }
}

impl Display for HeavenlyStem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeavenlyStem {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_STEMS
            .iter()
            .copied()
            .find(|st| st.name() == t || st.key().eq_ignore_ascii_case(t))
            .ok_or_else(|| BaseError::UnknownStem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(HeavenlyStem::from_u8(i as u8), Some(*s));
        }
        assert_eq!(HeavenlyStem::from_u8(10), None);
    }

    #[test]
    fn cyclic_wraps_negative() {
        assert_eq!(HeavenlyStem::from_cyclic(-1), HeavenlyStem::Gui);
        assert_eq!(HeavenlyStem::from_cyclic(23), HeavenlyStem::Ding);
        assert_eq!(HeavenlyStem::Ren.offset(3), HeavenlyStem::Yi);
        assert_eq!(HeavenlyStem::Jia.offset(i64::MIN), HeavenlyStem::from_cyclic(i64::MIN));
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(HeavenlyStem::Jia.yin_yang(), YinYang::Yang);
        assert_eq!(HeavenlyStem::Yi.yin_yang(), YinYang::Yin);
        assert_eq!(HeavenlyStem::Gui.yin_yang(), YinYang::Yin);
    }

    #[test]
    fn tiger_rule_pairs() {
        assert_eq!(HeavenlyStem::Jia.tiger_rule(), HeavenlyStem::Bing);
        assert_eq!(HeavenlyStem::Geng.tiger_rule(), HeavenlyStem::Wu);
        assert_eq!(HeavenlyStem::Gui.tiger_rule(), HeavenlyStem::Jia);
        // Stems five apart share a start
        for s in ALL_STEMS {
            assert_eq!(s.tiger_rule(), s.offset(5).tiger_rule());
        }
    }

    #[test]
    fn parse_name_and_key() {
        assert_eq!("庚".parse::<HeavenlyStem>(), Ok(HeavenlyStem::Geng));
        assert_eq!("Ren".parse::<HeavenlyStem>(), Ok(HeavenlyStem::Ren));
        assert!("foo".parse::<HeavenlyStem>().is_err());
    }
}
