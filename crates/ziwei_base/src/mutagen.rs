//! Four transformations (四化) keyed by heavenly stem.

use std::str::FromStr;

use crate::error::BaseError;
use crate::star::StarId;
use crate::stem::HeavenlyStem;

/// The four transformations in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutagen {
    /// 化禄
    Lu,
    /// 化权
    Quan,
    /// 化科
    Ke,
    /// 化忌
    Ji,
}

pub const ALL_MUTAGENS: [Mutagen; 4] = [Mutagen::Lu, Mutagen::Quan, Mutagen::Ke, Mutagen::Ji];

impl Mutagen {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lu => "禄",
            Self::Quan => "权",
            Self::Ke => "科",
            Self::Ji => "忌",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Lu => "lu",
            Self::Quan => "quan",
            Self::Ke => "ke",
            Self::Ji => "ji",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Lu => 0,
            Self::Quan => 1,
            Self::Ke => 2,
            Self::Ji => 3,
        }
    }
}

impl FromStr for Mutagen {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().trim_start_matches('化');
        ALL_MUTAGENS
            .iter()
            .copied()
            .find(|m| m.key().eq_ignore_ascii_case(t) || m.name() == t)
            .ok_or_else(|| BaseError::InvalidStarName(s.to_string()))
    }
}

/// Stars transformed by a stem, in Lu / Quan / Ke / Ji order.
pub const fn mutagen_stars(stem: HeavenlyStem) -> [StarId; 4] {
    use StarId::*;
    match stem {
        HeavenlyStem::Jia => [Lianzhen, Pojun, Wuqu, Taiyang],
        HeavenlyStem::Yi => [Tianji, Tianliang, Ziwei, Taiyin],
        HeavenlyStem::Bing => [Tiantong, Tianji, Wenchang, Lianzhen],
        HeavenlyStem::Ding => [Taiyin, Tiantong, Tianji, Jumen],
        HeavenlyStem::Wu => [Tanlang, Taiyin, Youbi, Tianji],
        HeavenlyStem::Ji => [Wuqu, Tanlang, Tianliang, Wenqu],
        HeavenlyStem::Geng => [Taiyang, Wuqu, Taiyin, Tiantong],
        HeavenlyStem::Xin => [Jumen, Taiyang, Wenqu, Wenchang],
        HeavenlyStem::Ren => [Tianliang, Ziwei, Zuofu, Wuqu],
        HeavenlyStem::Gui => [Pojun, Jumen, Taiyin, Tanlang],
    }
}

/// Transformation `star` receives under `stem`, if any.
pub fn mutagen_of(stem: HeavenlyStem, star: StarId) -> Option<Mutagen> {
    mutagen_stars(stem)
        .iter()
        .position(|s| *s == star)
        .map(|i| ALL_MUTAGENS[i])
}

/// Star carrying `mutagen` under `stem`.
pub const fn mutagen_star(stem: HeavenlyStem, mutagen: Mutagen) -> StarId {
    mutagen_stars(stem)[mutagen.index()]
}
