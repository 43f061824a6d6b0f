//! The 14 minor stars (辅星): six auspicious, six malefic, 禄存 and 天马.
//!
//! Month-based: 左辅 右弼. Hour-based: 文昌 文曲 地空 地劫. Year-stem:
//! 天魁 天钺 禄存 擎羊 陀罗. Year-branch: 天马, and 火星 铃星 (plus hour).

use ziwei_base::{
    EarthlyBranch, HeavenlyStem, Star, StarId, StemBranch, TriHarmony, branch_index, brightness,
    fix12, mutagen_of,
};

use crate::palace::PlacedStar;
use crate::soul_body::hour_ordinal;

pub(crate) fn at(branch: EarthlyBranch) -> i64 {
    i64::from(branch_index(branch))
}

/// 左辅 from 辰 forward, 右弼 from 戌 backward, by month index.
pub fn zuo_you_index(month_index: u8) -> (u8, u8) {
    let m = i64::from(month_index);
    (
        fix12(at(EarthlyBranch::Chen) + m),
        fix12(at(EarthlyBranch::Xu) - m),
    )
}

/// 文昌 from 戌 backward, 文曲 from 辰 forward, by hour.
pub fn chang_qu_index(time_index: u8) -> (u8, u8) {
    let t = i64::from(hour_ordinal(time_index));
    (
        fix12(at(EarthlyBranch::Xu) - t),
        fix12(at(EarthlyBranch::Chen) + t),
    )
}

/// Flowing 文昌 / 文曲 by the stem of a horoscope layer.
pub fn chang_qu_by_stem(stem: HeavenlyStem) -> (u8, u8) {
    use EarthlyBranch::*;
    let (chang, qu) = match stem {
        HeavenlyStem::Jia => (Si, You),
        HeavenlyStem::Yi => (Wu, Shen),
        HeavenlyStem::Bing | HeavenlyStem::Wu => (Shen, Wu),
        HeavenlyStem::Ding | HeavenlyStem::Ji => (You, Si),
        HeavenlyStem::Geng => (Hai, Mao),
        HeavenlyStem::Xin => (Zi, Yin),
        HeavenlyStem::Ren => (Yin, Zi),
        HeavenlyStem::Gui => (Mao, Hai),
    };
    (branch_index(chang), branch_index(qu))
}

/// 天魁 / 天钺.
pub fn kui_yue_index(stem: HeavenlyStem) -> (u8, u8) {
    use EarthlyBranch::*;
    let (kui, yue) = match stem {
        HeavenlyStem::Jia | HeavenlyStem::Wu | HeavenlyStem::Geng => (Chou, Wei),
        HeavenlyStem::Yi | HeavenlyStem::Ji => (Zi, Shen),
        HeavenlyStem::Xin => (Wu, Yin),
        HeavenlyStem::Bing | HeavenlyStem::Ding => (Hai, You),
        HeavenlyStem::Ren | HeavenlyStem::Gui => (Mao, Si),
    };
    (branch_index(kui), branch_index(yue))
}

/// 禄存.
pub fn lucun_index(stem: HeavenlyStem) -> u8 {
    use EarthlyBranch::*;
    branch_index(match stem {
        HeavenlyStem::Jia => Yin,
        HeavenlyStem::Yi => Mao,
        HeavenlyStem::Bing | HeavenlyStem::Wu => Si,
        HeavenlyStem::Ding | HeavenlyStem::Ji => Wu,
        HeavenlyStem::Geng => Shen,
        HeavenlyStem::Xin => You,
        HeavenlyStem::Ren => Hai,
        HeavenlyStem::Gui => Zi,
    })
}

/// 擎羊 / 陀罗 flank 禄存.
pub fn yang_tuo_index(stem: HeavenlyStem) -> (u8, u8) {
    let lu = i64::from(lucun_index(stem));
    (fix12(lu + 1), fix12(lu - 1))
}

/// 天马.
pub fn tianma_index(branch: EarthlyBranch) -> u8 {
    branch_index(match branch.tri_harmony() {
        TriHarmony::YinWuXu => EarthlyBranch::Shen,
        TriHarmony::ShenZiChen => EarthlyBranch::Yin,
        TriHarmony::SiYouChou => EarthlyBranch::Hai,
        TriHarmony::HaiMaoWei => EarthlyBranch::Si,
    })
}

/// 地空 from 亥 backward, 地劫 from 亥 forward, by hour.
pub fn kong_jie_index(time_index: u8) -> (u8, u8) {
    let t = i64::from(hour_ordinal(time_index));
    let hai = at(EarthlyBranch::Hai);
    (fix12(hai - t), fix12(hai + t))
}

/// 火星 / 铃星: base by year-branch group, then forward by hour.
pub fn huo_ling_index(branch: EarthlyBranch, time_index: u8) -> (u8, u8) {
    use EarthlyBranch::*;
    let (huo, ling) = match branch.tri_harmony() {
        TriHarmony::YinWuXu => (Chou, Mao),
        TriHarmony::ShenZiChen => (Yin, Xu),
        TriHarmony::SiYouChou => (Mao, Xu),
        TriHarmony::HaiMaoWei => (You, Xu),
    };
    let t = i64::from(hour_ordinal(time_index));
    (fix12(at(huo) + t), fix12(at(ling) + t))
}

/// Place all 14 minors for a birth year, month index and time index.
pub fn place_minor_stars(year: StemBranch, month_index: u8, time_index: u8) -> Vec<PlacedStar> {
    let (zuo, you) = zuo_you_index(month_index);
    let (chang, qu) = chang_qu_index(time_index);
    let (kui, yue) = kui_yue_index(year.stem);
    let lu = lucun_index(year.stem);
    let (yang, tuo) = yang_tuo_index(year.stem);
    let ma = tianma_index(year.branch);
    let (kong, jie) = kong_jie_index(time_index);
    let (huo, ling) = huo_ling_index(year.branch, time_index);

    [
        (StarId::Zuofu, zuo),
        (StarId::Youbi, you),
        (StarId::Wenchang, chang),
        (StarId::Wenqu, qu),
        (StarId::Tiankui, kui),
        (StarId::Tianyue, yue),
        (StarId::Lucun, lu),
        (StarId::Tianma, ma),
        (StarId::Dikong, kong),
        (StarId::Dijie, jie),
        (StarId::Huoxing, huo),
        (StarId::Lingxing, ling),
        (StarId::Qingyang, yang),
        (StarId::Tuoluo, tuo),
    ]
    .into_iter()
    .map(|(id, index)| PlacedStar {
        index,
        star: Star {
            brightness: brightness(id, index),
            mutagen: mutagen_of(year.stem, id),
            ..Star::origin(id)
        },
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::{ALL_BRANCHES, ALL_STEMS, Mutagen};

    #[test]
    fn golden_minors() {
        // 庚辰 year, month index 6, 寅 hour
        let year: StemBranch = "庚辰".parse().unwrap();
        let stars = place_minor_stars(year, 6, 2);
        let idx = |id: StarId| stars.iter().find(|p| p.star.id == id).unwrap().index;
        let expected = [
            (StarId::Zuofu, 8),
            (StarId::Youbi, 2),
            (StarId::Wenchang, 6),
            (StarId::Wenqu, 4),
            (StarId::Tiankui, 11),
            (StarId::Tianyue, 5),
            (StarId::Huoxing, 2),
            (StarId::Lingxing, 10),
            (StarId::Dikong, 7),
            (StarId::Dijie, 11),
            (StarId::Lucun, 6),
            (StarId::Qingyang, 7),
            (StarId::Tuoluo, 5),
            (StarId::Tianma, 0),
        ];
        for (id, want) in expected {
            assert_eq!(idx(id), want, "{}", id.name());
        }
    }

    #[test]
    fn mutagen_on_soft_stars() {
        // 壬: 左辅 化科
        let year: StemBranch = "壬午".parse().unwrap();
        let stars = place_minor_stars(year, 0, 0);
        let zuo = stars.iter().find(|p| p.star.id == StarId::Zuofu).unwrap();
        assert_eq!(zuo.star.mutagen, Some(Mutagen::Ke));
    }

    #[test]
    fn yang_tuo_never_on_lucun() {
        for stem in ALL_STEMS {
            let lu = lucun_index(stem);
            let (yang, tuo) = yang_tuo_index(stem);
            assert_eq!(yang, fix12(i64::from(lu) + 1));
            assert_eq!(tuo, fix12(i64::from(lu) - 1));
        }
    }

    #[test]
    fn tianma_sits_on_four_horse_branches() {
        let horses = [EarthlyBranch::Yin, EarthlyBranch::Shen, EarthlyBranch::Si, EarthlyBranch::Hai]
            .map(branch_index);
        for b in ALL_BRANCHES {
            assert!(horses.contains(&tianma_index(b)));
        }
    }

    #[test]
    fn chang_qu_symmetric_about_chen_xu() {
        for t in 0..=12u8 {
            let (chang, qu) = chang_qu_index(t);
            assert_eq!((u32::from(chang) + u32::from(qu)) % 12, 10);
        }
    }
}
