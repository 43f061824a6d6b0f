//! Star identities, categories and scopes.
//!
//! A star on the chart is a tagged value `{ id, scope }`: the same base
//! star (e.g. 禄存) may appear once at birth scope and again as a flowing
//! copy for each horoscope layer. Queries compare both fields.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::brightness::Brightness;
use crate::error::BaseError;
use crate::mutagen::Mutagen;

/// Star category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarKind {
    /// The 14 major stars (主星).
    Major,
    /// Auspicious minor stars (吉星).
    Soft,
    /// Malefic minor stars (煞星).
    Tough,
    /// Peach-blossom stars (桃花星).
    Flower,
    /// Relief stars (解神).
    Helper,
    Lucun,
    Tianma,
    /// Miscellaneous stars (杂耀).
    Adjective,
}

/// Time scope a star (or palace lookup) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The natal chart.
    Origin,
    Decadal,
    /// Small limit (小限).
    Age,
    Yearly,
    Monthly,
    Daily,
    Hourly,
}

/// All scopes from natal outward.
pub const ALL_SCOPES: [Scope; 7] = [
    Scope::Origin,
    Scope::Decadal,
    Scope::Age,
    Scope::Yearly,
    Scope::Monthly,
    Scope::Daily,
    Scope::Hourly,
];

impl Scope {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Origin => "本命",
            Self::Decadal => "大限",
            Self::Age => "小限",
            Self::Yearly => "流年",
            Self::Monthly => "流月",
            Self::Daily => "流日",
            Self::Hourly => "流时",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Origin => "origin",
            Self::Decadal => "decadal",
            Self::Age => "age",
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    /// Prefix used when printing a flowing copy of a star (运禄, 流禄, ...).
    pub const fn star_prefix(self) -> &'static str {
        match self {
            Self::Origin | Self::Age => "",
            Self::Decadal => "运",
            Self::Yearly => "流",
            Self::Monthly => "月",
            Self::Daily => "日",
            Self::Hourly => "时",
        }
    }
}

impl FromStr for Scope {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_SCOPES
            .iter()
            .copied()
            .find(|sc| sc.key().eq_ignore_ascii_case(t) || sc.name() == t)
            .ok_or_else(|| BaseError::UnknownScope(s.to_string()))
    }
}

/// Every star the engine can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum StarId {
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
    Zuofu,
    Youbi,
    Wenchang,
    Wenqu,
    Tiankui,
    Tianyue,
    Lucun,
    Tianma,
    Dikong,
    Dijie,
    Huoxing,
    Lingxing,
    Qingyang,
    Tuoluo,
    Hongluan,
    Tianxi,
    Tianyao,
    Xianchi,
    Jieshen,
    Nianjie,
    Santai,
    Bazuo,
    Enguang,
    Tiangui,
    Longchi,
    Fengge,
    Tiancai,
    Tianshou,
    Taifu,
    Fenggao,
    Tianwu,
    Huagai,
    Tianguan,
    TianfuAdj,
    Tianchu,
    TianyueAdj,
    Tiande,
    Yuede,
    Tiankong,
    Xunkong,
    Jielu,
    Kongwang,
    Longde,
    Jiekong,
    Jiesha,
    Dahao,
    Guchen,
    Guasu,
    Feilian,
    Posui,
    Tianxing,
    Yinsha,
    Tianku,
    Tianxu,
    Tianshi,
    Tianshang,
}

/// All 70 stars: 14 major, 14 minor, then the adjective stars.
pub const ALL_STARS: [StarId; 70] = [
    StarId::Ziwei,
    StarId::Tianji,
    StarId::Taiyang,
    StarId::Wuqu,
    StarId::Tiantong,
    StarId::Lianzhen,
    StarId::Tianfu,
    StarId::Taiyin,
    StarId::Tanlang,
    StarId::Jumen,
    StarId::Tianxiang,
    StarId::Tianliang,
    StarId::Qisha,
    StarId::Pojun,
    StarId::Zuofu,
    StarId::Youbi,
    StarId::Wenchang,
    StarId::Wenqu,
    StarId::Tiankui,
    StarId::Tianyue,
    StarId::Lucun,
    StarId::Tianma,
    StarId::Dikong,
    StarId::Dijie,
    StarId::Huoxing,
    StarId::Lingxing,
    StarId::Qingyang,
    StarId::Tuoluo,
    StarId::Hongluan,
    StarId::Tianxi,
    StarId::Tianyao,
    StarId::Xianchi,
    StarId::Jieshen,
    StarId::Nianjie,
    StarId::Santai,
    StarId::Bazuo,
    StarId::Enguang,
    StarId::Tiangui,
    StarId::Longchi,
    StarId::Fengge,
    StarId::Tiancai,
    StarId::Tianshou,
    StarId::Taifu,
    StarId::Fenggao,
    StarId::Tianwu,
    StarId::Huagai,
    StarId::Tianguan,
    StarId::TianfuAdj,
    StarId::Tianchu,
    StarId::TianyueAdj,
    StarId::Tiande,
    StarId::Yuede,
    StarId::Tiankong,
    StarId::Xunkong,
    StarId::Jielu,
    StarId::Kongwang,
    StarId::Longde,
    StarId::Jiekong,
    StarId::Jiesha,
    StarId::Dahao,
    StarId::Guchen,
    StarId::Guasu,
    StarId::Feilian,
    StarId::Posui,
    StarId::Tianxing,
    StarId::Yinsha,
    StarId::Tianku,
    StarId::Tianxu,
    StarId::Tianshi,
    StarId::Tianshang,
];

/// The 14 major stars in placement order.
pub const MAJOR_STARS: [StarId; 14] = [
    StarId::Ziwei,
    StarId::Tianji,
    StarId::Taiyang,
    StarId::Wuqu,
    StarId::Tiantong,
    StarId::Lianzhen,
    StarId::Tianfu,
    StarId::Taiyin,
    StarId::Tanlang,
    StarId::Jumen,
    StarId::Tianxiang,
    StarId::Tianliang,
    StarId::Qisha,
    StarId::Pojun,
];

impl StarId {
    /// Chinese name of the star.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ziwei => "紫微",
            Self::Tianji => "天机",
            Self::Taiyang => "太阳",
            Self::Wuqu => "武曲",
            Self::Tiantong => "天同",
            Self::Lianzhen => "廉贞",
            Self::Tianfu => "天府",
            Self::Taiyin => "太阴",
            Self::Tanlang => "贪狼",
            Self::Jumen => "巨门",
            Self::Tianxiang => "天相",
            Self::Tianliang => "天梁",
            Self::Qisha => "七杀",
            Self::Pojun => "破军",
            Self::Zuofu => "左辅",
            Self::Youbi => "右弼",
            Self::Wenchang => "文昌",
            Self::Wenqu => "文曲",
            Self::Tiankui => "天魁",
            Self::Tianyue => "天钺",
            Self::Lucun => "禄存",
            Self::Tianma => "天马",
            Self::Dikong => "地空",
            Self::Dijie => "地劫",
            Self::Huoxing => "火星",
            Self::Lingxing => "铃星",
            Self::Qingyang => "擎羊",
            Self::Tuoluo => "陀罗",
            Self::Hongluan => "红鸾",
            Self::Tianxi => "天喜",
            Self::Tianyao => "天姚",
            Self::Xianchi => "咸池",
            Self::Jieshen => "解神",
            Self::Nianjie => "年解",
            Self::Santai => "三台",
            Self::Bazuo => "八座",
            Self::Enguang => "恩光",
            Self::Tiangui => "天贵",
            Self::Longchi => "龙池",
            Self::Fengge => "凤阁",
            Self::Tiancai => "天才",
            Self::Tianshou => "天寿",
            Self::Taifu => "台辅",
            Self::Fenggao => "封诰",
            Self::Tianwu => "天巫",
            Self::Huagai => "华盖",
            Self::Tianguan => "天官",
            Self::TianfuAdj => "天福",
            Self::Tianchu => "天厨",
            Self::TianyueAdj => "天月",
            Self::Tiande => "天德",
            Self::Yuede => "月德",
            Self::Tiankong => "天空",
            Self::Xunkong => "旬空",
            Self::Jielu => "截路",
            Self::Kongwang => "空亡",
            Self::Longde => "龙德",
            Self::Jiekong => "截空",
            Self::Jiesha => "劫杀",
            Self::Dahao => "大耗",
            Self::Guchen => "孤辰",
            Self::Guasu => "寡宿",
            Self::Feilian => "蜚廉",
            Self::Posui => "破碎",
            Self::Tianxing => "天刑",
            Self::Yinsha => "阴煞",
            Self::Tianku => "天哭",
            Self::Tianxu => "天虚",
            Self::Tianshi => "天使",
            Self::Tianshang => "天伤",
        }
    }

    /// ASCII key of the star.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ziwei => "ziwei",
            Self::Tianji => "tianji",
            Self::Taiyang => "taiyang",
            Self::Wuqu => "wuqu",
            Self::Tiantong => "tiantong",
            Self::Lianzhen => "lianzhen",
            Self::Tianfu => "tianfu",
            Self::Taiyin => "taiyin",
            Self::Tanlang => "tanlang",
            Self::Jumen => "jumen",
            Self::Tianxiang => "tianxiang",
            Self::Tianliang => "tianliang",
            Self::Qisha => "qisha",
            Self::Pojun => "pojun",
            Self::Zuofu => "zuofu",
            Self::Youbi => "youbi",
            Self::Wenchang => "wenchang",
            Self::Wenqu => "wenqu",
            Self::Tiankui => "tiankui",
            Self::Tianyue => "tianyue",
            Self::Lucun => "lucun",
            Self::Tianma => "tianma",
            Self::Dikong => "dikong",
            Self::Dijie => "dijie",
            Self::Huoxing => "huoxing",
            Self::Lingxing => "lingxing",
            Self::Qingyang => "qingyang",
            Self::Tuoluo => "tuoluo",
            Self::Hongluan => "hongluan",
            Self::Tianxi => "tianxi",
            Self::Tianyao => "tianyao",
            Self::Xianchi => "xianchi",
            Self::Jieshen => "jieshen",
            Self::Nianjie => "nianjie",
            Self::Santai => "santai",
            Self::Bazuo => "bazuo",
            Self::Enguang => "enguang",
            Self::Tiangui => "tiangui",
            Self::Longchi => "longchi",
            Self::Fengge => "fengge",
            Self::Tiancai => "tiancai",
            Self::Tianshou => "tianshou",
            Self::Taifu => "taifu",
            Self::Fenggao => "fenggao",
            Self::Tianwu => "tianwu",
            Self::Huagai => "huagai",
            Self::Tianguan => "tianguan",
            Self::TianfuAdj => "tianfu_adj",
            Self::Tianchu => "tianchu",
            Self::TianyueAdj => "tianyue_adj",
            Self::Tiande => "tiande",
            Self::Yuede => "yuede",
            Self::Tiankong => "tiankong",
            Self::Xunkong => "xunkong",
            Self::Jielu => "jielu",
            Self::Kongwang => "kongwang",
            Self::Longde => "longde",
            Self::Jiekong => "jiekong",
            Self::Jiesha => "jiesha",
            Self::Dahao => "dahao",
            Self::Guchen => "guchen",
            Self::Guasu => "guasu",
            Self::Feilian => "feilian",
            Self::Posui => "posui",
            Self::Tianxing => "tianxing",
            Self::Yinsha => "yinsha",
            Self::Tianku => "tianku",
            Self::Tianxu => "tianxu",
            Self::Tianshi => "tianshi",
            Self::Tianshang => "tianshang",
        }
    }

    pub const fn kind(self) -> StarKind {
        match self {
            Self::Ziwei | Self::Tianji | Self::Taiyang | Self::Wuqu | Self::Tiantong
            | Self::Lianzhen | Self::Tianfu | Self::Taiyin | Self::Tanlang | Self::Jumen
            | Self::Tianxiang | Self::Tianliang | Self::Qisha | Self::Pojun => StarKind::Major,
            Self::Zuofu | Self::Youbi | Self::Wenchang | Self::Wenqu | Self::Tiankui
            | Self::Tianyue => StarKind::Soft,
            Self::Lucun => StarKind::Lucun,
            Self::Tianma => StarKind::Tianma,
            Self::Dikong | Self::Dijie | Self::Huoxing | Self::Lingxing | Self::Qingyang
            | Self::Tuoluo => StarKind::Tough,
            Self::Hongluan | Self::Tianxi | Self::Tianyao | Self::Xianchi => StarKind::Flower,
            Self::Jieshen | Self::Nianjie => StarKind::Helper,
            Self::Santai | Self::Bazuo | Self::Enguang | Self::Tiangui | Self::Longchi
            | Self::Fengge | Self::Tiancai | Self::Tianshou | Self::Taifu | Self::Fenggao
            | Self::Tianwu | Self::Huagai | Self::Tianguan | Self::TianfuAdj | Self::Tianchu
            | Self::TianyueAdj | Self::Tiande | Self::Yuede | Self::Tiankong | Self::Xunkong
            | Self::Jielu | Self::Kongwang | Self::Longde | Self::Jiekong | Self::Jiesha
            | Self::Dahao | Self::Guchen | Self::Guasu | Self::Feilian | Self::Posui
            | Self::Tianxing | Self::Yinsha | Self::Tianku | Self::Tianxu | Self::Tianshi
            | Self::Tianshang => StarKind::Adjective,
        }
    }

    /// Single-character name used for flowing copies (流禄, 运魁).
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Tiankui => "魁",
            Self::Tianyue => "钺",
            Self::Wenchang => "昌",
            Self::Wenqu => "曲",
            Self::Lucun => "禄",
            Self::Qingyang => "羊",
            Self::Tuoluo => "陀",
            Self::Tianma => "马",
            Self::Hongluan => "鸾",
            Self::Tianxi => "喜",
            other => other.name(),
        }
    }

    pub const fn is_major(self) -> bool {
        matches!(self.kind(), StarKind::Major)
    }

    /// Major and minor stars: the ones that can carry a mutagen.
    pub fn is_principal(self) -> bool {
        self.ordinal() < 28
    }

    /// Position in [`ALL_STARS`].
    pub fn ordinal(self) -> usize {
        ALL_STARS.iter().position(|s| *s == self).unwrap_or(ALL_STARS.len())
    }
}

impl Display for StarId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StarId {
    type Err = BaseError;

    /// Accepts the ASCII key or the Chinese name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_STARS
            .iter()
            .copied()
            .find(|st| st.key().eq_ignore_ascii_case(t) || st.name() == t)
            .ok_or_else(|| BaseError::InvalidStarName(s.to_string()))
    }
}

/// A star placed on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Star {
    pub id: StarId,
    pub scope: Scope,
    pub brightness: Option<Brightness>,
    /// Birth-year mutagen carried by this star, if any.
    pub mutagen: Option<Mutagen>,
}

impl Star {
    /// A natal star with no brightness or mutagen.
    pub const fn origin(id: StarId) -> Self {
        Self {
            id,
            scope: Scope::Origin,
            brightness: None,
            mutagen: None,
        }
    }

    /// A flowing copy of `id` for a horoscope layer.
    pub const fn flowing(id: StarId, scope: Scope) -> Self {
        Self {
            id,
            scope,
            brightness: None,
            mutagen: None,
        }
    }

    pub const fn kind(&self) -> StarKind {
        self.id.kind()
    }

    /// True when `id` and `scope` both match.
    pub fn is(&self, id: StarId, scope: Scope) -> bool {
        self.id == id && self.scope == scope
    }
}

impl Display for Star {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.scope == Scope::Origin || self.id == StarId::Nianjie {
            f.write_str(self.id.name())?;
        } else {
            write!(f, "{}{}", self.scope.star_prefix(), self.id.short_name())?;
        }
        if let Some(b) = self.brightness {
            write!(f, "({})", b.name())?;
        }
        if let Some(m) = self.mutagen {
            write!(f, "[{}]", m.name())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_and_names_unique() {
        let keys: HashSet<_> = ALL_STARS.iter().map(|s| s.key()).collect();
        let names: HashSet<_> = ALL_STARS.iter().map(|s| s.name()).collect();
        assert_eq!(keys.len(), ALL_STARS.len());
        assert_eq!(names.len(), ALL_STARS.len());
    }

    #[test]
    fn category_counts() {
        let count = |k: StarKind| ALL_STARS.iter().filter(|s| s.kind() == k).count();
        assert_eq!(count(StarKind::Major), 14);
        assert_eq!(count(StarKind::Soft), 6);
        assert_eq!(count(StarKind::Tough), 6);
        assert_eq!(count(StarKind::Flower), 4);
        assert_eq!(count(StarKind::Helper), 2);
        assert_eq!(count(StarKind::Lucun), 1);
        assert_eq!(count(StarKind::Tianma), 1);
    }

    #[test]
    fn principal_stars_are_first_28() {
        for (i, s) in ALL_STARS.iter().enumerate() {
            assert_eq!(s.is_principal(), i < 28, "{}", s.key());
            assert_eq!(s.ordinal(), i);
        }
        for s in MAJOR_STARS {
            assert!(s.is_major());
        }
    }

    #[test]
    fn parse_by_key_or_name() {
        assert_eq!("ziwei".parse::<StarId>(), Ok(StarId::Ziwei));
        assert_eq!("天福".parse::<StarId>(), Ok(StarId::TianfuAdj));
        assert_eq!("tianyue_adj".parse::<StarId>(), Ok(StarId::TianyueAdj));
        assert_eq!(
            "nope".parse::<StarId>(),
            Err(BaseError::InvalidStarName("nope".to_string()))
        );
    }

    #[test]
    fn flowing_display_prefix() {
        assert_eq!(Star::flowing(StarId::Lucun, Scope::Yearly).to_string(), "流禄");
        assert_eq!(Star::flowing(StarId::Nianjie, Scope::Yearly).to_string(), "年解");
        assert_eq!(Star::flowing(StarId::Tiankui, Scope::Decadal).to_string(), "运魁");
        assert_eq!(Star::origin(StarId::Lucun).to_string(), "禄存");
    }
}
