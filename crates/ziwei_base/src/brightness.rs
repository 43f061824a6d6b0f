//! Star brightness (庙旺) by palace.
//!
//! Tables are indexed by ring position (寅 = 0). Only the major stars and
//! the six stars with a traditional brightness table are covered; every
//! other star has no brightness.

use crate::star::StarId;

/// Seven-grade brightness scale, brightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Brightness {
    /// 庙
    Miao,
    /// 旺
    Wang,
    /// 得
    De,
    /// 利
    Li,
    /// 平
    Ping,
    /// 不
    Bu,
    /// 陷
    Xian,
}

impl Brightness {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Miao => "庙",
            Self::Wang => "旺",
            Self::De => "得",
            Self::Li => "利",
            Self::Ping => "平",
            Self::Bu => "不",
            Self::Xian => "陷",
        }
    }
}

use Brightness::{Bu as B, De as D, Li as L, Miao as M, Ping as P, Wang as W, Xian as X};

#[rustfmt::skip]
const ZIWEI: [Brightness; 12]     = [W, W, D, W, M, M, W, W, D, W, P, M];
#[rustfmt::skip]
const TIANJI: [Brightness; 12]    = [D, W, L, P, M, X, D, W, L, P, M, X];
#[rustfmt::skip]
const TAIYANG: [Brightness; 12]   = [W, M, W, W, W, D, D, X, B, X, X, B];
#[rustfmt::skip]
const WUQU: [Brightness; 12]      = [D, L, M, P, W, M, D, L, M, P, W, M];
#[rustfmt::skip]
const TIANTONG: [Brightness; 12]  = [L, P, P, M, X, B, W, P, P, M, W, B];
#[rustfmt::skip]
const LIANZHEN: [Brightness; 12]  = [M, P, L, X, P, L, M, P, L, X, P, L];
#[rustfmt::skip]
const TIANFU: [Brightness; 12]    = [M, D, M, D, W, M, D, W, M, D, M, M];
#[rustfmt::skip]
const TAIYIN: [Brightness; 12]    = [W, X, X, X, B, B, L, B, W, M, M, M];
#[rustfmt::skip]
const TANLANG: [Brightness; 12]   = [P, L, M, X, W, M, P, L, M, X, W, M];
#[rustfmt::skip]
const JUMEN: [Brightness; 12]     = [M, M, X, W, W, B, M, M, X, W, W, B];
#[rustfmt::skip]
const TIANXIANG: [Brightness; 12] = [M, X, D, D, M, D, M, X, D, D, M, M];
#[rustfmt::skip]
const TIANLIANG: [Brightness; 12] = [M, M, M, X, M, W, X, D, M, X, M, W];
#[rustfmt::skip]
const QISHA: [Brightness; 12]     = [M, W, M, P, W, M, M, M, M, P, W, M];
#[rustfmt::skip]
const POJUN: [Brightness; 12]     = [D, X, W, P, M, W, D, X, W, P, M, W];
#[rustfmt::skip]
const WENCHANG: [Brightness; 12]  = [X, L, D, M, X, L, D, M, X, L, D, M];
#[rustfmt::skip]
const WENQU: [Brightness; 12]     = [P, W, D, M, X, W, D, M, X, W, D, M];
#[rustfmt::skip]
const HUO_LING: [Brightness; 12]  = [M, L, X, D, M, L, X, D, M, L, X, D];

// Qingyang never sits in 寅申巳亥, Tuoluo never in 子午卯酉
#[rustfmt::skip]
const QINGYANG: [Option<Brightness>; 12] =
    [None, Some(X), Some(M), None, Some(X), Some(M), None, Some(X), Some(M), None, Some(X), Some(M)];
#[rustfmt::skip]
const TUOLUO: [Option<Brightness>; 12] =
    [Some(X), None, Some(M), Some(X), None, Some(M), Some(X), None, Some(M), Some(X), None, Some(M)];

/// Brightness of `star` at ring index `index`, if the star has a table.
pub fn brightness(star: StarId, index: u8) -> Option<Brightness> {
    let i = usize::from(index % 12);
    let table = match star {
        StarId::Ziwei => &ZIWEI,
        StarId::Tianji => &TIANJI,
        StarId::Taiyang => &TAIYANG,
        StarId::Wuqu => &WUQU,
        StarId::Tiantong => &TIANTONG,
        StarId::Lianzhen => &LIANZHEN,
        StarId::Tianfu => &TIANFU,
        StarId::Taiyin => &TAIYIN,
        StarId::Tanlang => &TANLANG,
        StarId::Jumen => &JUMEN,
        StarId::Tianxiang => &TIANXIANG,
        StarId::Tianliang => &TIANLIANG,
        StarId::Qisha => &QISHA,
        StarId::Pojun => &POJUN,
        StarId::Wenchang => &WENCHANG,
        StarId::Wenqu => &WENQU,
        StarId::Huoxing | StarId::Lingxing => &HUO_LING,
        StarId::Qingyang => return QINGYANG[i],
        StarId::Tuoluo => return TUOLUO[i],
        _ => return None,
    };
    Some(table[i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::star::MAJOR_STARS;

    #[test]
    fn every_major_star_has_a_grade_everywhere() {
        for s in MAJOR_STARS {
            for i in 0..12 {
                assert!(brightness(s, i).is_some(), "{} at {i}", s.key());
            }
        }
    }

    #[test]
    fn ziwei_is_temple_at_wu() {
        // Ring 4 = 午
        assert_eq!(brightness(StarId::Ziwei, 4), Some(Brightness::Miao));
    }

    #[test]
    fn stars_without_table() {
        assert_eq!(brightness(StarId::Zuofu, 0), None);
        assert_eq!(brightness(StarId::Hongluan, 3), None);
        assert_eq!(brightness(StarId::Qingyang, 0), None);
    }

    #[test]
    fn grades_are_ordered() {
        assert!(Brightness::Miao < Brightness::Wang);
        assert!(Brightness::Bu < Brightness::Xian);
    }
}
