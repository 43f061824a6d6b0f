//! The miscellaneous stars (杂耀): 38 per chart, 40 under 中州派.
//!
//! Placement keys, by star family:
//! - birth-year branch: 红鸾 天喜
//! - lunar month: 解神 天姚 天刑 阴煞 天月 天巫
//! - lunar day on top of 左辅 右弼 文昌 文曲: 三台 八座 恩光 天贵
//! - hour: 台辅 封诰
//! - year stem-branch of the horoscope year boundary: everything else
//!
//! The school setting swaps 截路/空亡 for 截空, 劫杀, 大耗 and 龙德, and may
//! swap 天伤 with 天使.

use ziwei_base::{
    EarthlyBranch, Gender, HeavenlyStem, Season, Star, StarId, StemBranch, TriHarmony,
    branch_index, fix12,
};

use crate::config::Algorithm;
use crate::minor_star::{at, chang_qu_index, zuo_you_index};
use crate::palace::PlacedStar;
use crate::soul_body::{hour_ordinal, lunar_day_index};

use ziwei_base::EarthlyBranch::*;

/// Everything the adjective placer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjectiveInput {
    /// Birth-year pillar under the chart's year boundary.
    pub birth_year: StemBranch,
    /// Birth-year pillar under the horoscope year boundary.
    pub horoscope_year: StemBranch,
    pub month_index: u8,
    pub lunar_day: u8,
    pub time_index: u8,
    pub soul_index: u8,
    pub body_index: u8,
    pub gender: Gender,
    pub algorithm: Algorithm,
}

/// 红鸾 from 卯 backward by year branch; 天喜 opposite.
pub fn luan_xi_index(branch: EarthlyBranch) -> (u8, u8) {
    let luan = fix12(at(Mao) - i64::from(branch.index()));
    (luan, fix12(i64::from(luan) + 6))
}

/// 年解, from 戌 backward by year branch.
pub fn nianjie_index(branch: EarthlyBranch) -> u8 {
    fix12(at(Xu) - i64::from(branch.index()))
}

/// 华盖 / 咸池.
pub fn huagai_xianchi_index(branch: EarthlyBranch) -> (u8, u8) {
    let (huagai, xianchi) = match branch.tri_harmony() {
        TriHarmony::YinWuXu => (Xu, Mao),
        TriHarmony::ShenZiChen => (Chen, You),
        TriHarmony::SiYouChou => (Chou, Wu),
        TriHarmony::HaiMaoWei => (Wei, Zi),
    };
    (branch_index(huagai), branch_index(xianchi))
}

/// 孤辰 / 寡宿.
pub fn guchen_guasu_index(branch: EarthlyBranch) -> (u8, u8) {
    let (guchen, guasu) = match branch.season() {
        Season::Spring => (Si, Chou),
        Season::Summer => (Shen, Chen),
        Season::Autumn => (Hai, Wei),
        Season::Winter => (Yin, Xu),
    };
    (branch_index(guchen), branch_index(guasu))
}

fn tianchu_branch(stem: HeavenlyStem) -> EarthlyBranch {
    match stem {
        HeavenlyStem::Jia | HeavenlyStem::Ding => Si,
        HeavenlyStem::Yi | HeavenlyStem::Wu | HeavenlyStem::Xin => Wu,
        HeavenlyStem::Bing => Zi,
        HeavenlyStem::Ji => Shen,
        HeavenlyStem::Geng => Yin,
        HeavenlyStem::Ren => You,
        HeavenlyStem::Gui => Hai,
    }
}

fn tianguan_branch(stem: HeavenlyStem) -> EarthlyBranch {
    match stem {
        HeavenlyStem::Jia => Wei,
        HeavenlyStem::Yi => Chen,
        HeavenlyStem::Bing => Si,
        HeavenlyStem::Ding => Yin,
        HeavenlyStem::Wu => Mao,
        HeavenlyStem::Ji | HeavenlyStem::Xin => You,
        HeavenlyStem::Geng => Hai,
        HeavenlyStem::Ren => Xu,
        HeavenlyStem::Gui => Wu,
    }
}

fn tianfu_adj_branch(stem: HeavenlyStem) -> EarthlyBranch {
    match stem {
        HeavenlyStem::Jia => You,
        HeavenlyStem::Yi => Shen,
        HeavenlyStem::Bing => Zi,
        HeavenlyStem::Ding => Hai,
        HeavenlyStem::Wu => Mao,
        HeavenlyStem::Ji => Yin,
        HeavenlyStem::Geng | HeavenlyStem::Ren => Wu,
        HeavenlyStem::Xin | HeavenlyStem::Gui => Si,
    }
}

/// 截路 / 空亡, by stem pair (甲己 申酉, 乙庚 午未, 丙辛 辰巳, 丁壬 寅卯, 戊癸 子丑).
pub fn jielu_kongwang_index(stem: HeavenlyStem) -> (u8, u8) {
    let (jielu, kongwang) = match stem {
        HeavenlyStem::Jia | HeavenlyStem::Ji => (Shen, You),
        HeavenlyStem::Yi | HeavenlyStem::Geng => (Wu, Wei),
        HeavenlyStem::Bing | HeavenlyStem::Xin => (Chen, Si),
        HeavenlyStem::Ding | HeavenlyStem::Ren => (Yin, Mao),
        HeavenlyStem::Wu | HeavenlyStem::Gui => (Zi, Chou),
    };
    (branch_index(jielu), branch_index(kongwang))
}

/// 旬空: the void pair of the year's decade, on the slot matching the
/// year branch's polarity.
pub fn xunkong_index(year: StemBranch) -> u8 {
    let b = i64::from(year.branch.index());
    let s = i64::from(year.stem.index());
    let first = fix12(at(year.branch) + 9 - s + 1);
    if b % 2 != i64::from(first) % 2 {
        fix12(i64::from(first) + 1)
    } else {
        first
    }
}

/// 劫杀 (adjective).
pub fn jiesha_adj_index(branch: EarthlyBranch) -> u8 {
    branch_index(match branch.tri_harmony() {
        TriHarmony::ShenZiChen => Si,
        TriHarmony::HaiMaoWei => Shen,
        TriHarmony::YinWuXu => Hai,
        TriHarmony::SiYouChou => Yin,
    })
}

/// 大耗 (adjective): one step off the year branch's opposite, forward for
/// yang branches and backward for yin.
pub fn dahao_adj_index(branch: EarthlyBranch) -> u8 {
    static DAHAO: [EarthlyBranch; 12] = [
        Wei, Wu, You, Shen, Hai, Xu, Chou, Zi, Mao, Yin, Si, Chen,
    ];
    fix12(i64::from(DAHAO[usize::from(branch.index())].index()) - 2)
}

/// Month-based stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyIndices {
    pub jieshen: u8,
    pub tianyao: u8,
    pub tianxing: u8,
    pub yinsha: u8,
    pub tianyue: u8,
    pub tianwu: u8,
}

/// Ring positions of the six month-keyed stars for a 0-based lunar month.
pub fn monthly_indices(month_index: u8) -> MonthlyIndices {
    static JIESHEN: [EarthlyBranch; 6] = [Shen, Xu, Zi, Yin, Chen, Wu];
    static YINSHA: [EarthlyBranch; 6] = [Yin, Zi, Xu, Shen, Wu, Chen];
    static TIANYUE: [EarthlyBranch; 12] = [
        Xu, Si, Chen, Yin, Wei, Mao, Hai, Wei, Yin, Wu, Xu, Yin,
    ];
    static TIANWU: [EarthlyBranch; 4] = [Si, Shen, Yin, Hai];

    let m = usize::from(month_index % 12);
    MonthlyIndices {
        jieshen: branch_index(JIESHEN[m / 2]),
        tianyao: fix12(at(Chou) + m as i64),
        tianxing: fix12(at(You) + m as i64),
        yinsha: branch_index(YINSHA[m % 6]),
        tianyue: branch_index(TIANYUE[m]),
        tianwu: branch_index(TIANWU[m % 4]),
    }
}

/// Day-based stars, offset from the already placed 左辅 右弼 文昌 文曲.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyIndices {
    pub santai: u8,
    pub bazuo: u8,
    pub enguang: u8,
    pub tiangui: u8,
}

/// 三台 八座 恩光 天贵, stepped by lunar day from 左辅 右弼 (month) and 文昌 文曲 (hour).
pub fn daily_indices(month_index: u8, lunar_day: u8, time_index: u8) -> DailyIndices {
    let (zuo, you) = zuo_you_index(month_index);
    let (chang, qu) = chang_qu_index(time_index);
    let d = i64::from(lunar_day_index(lunar_day, time_index));
    DailyIndices {
        santai: fix12(i64::from(zuo) + d),
        bazuo: fix12(i64::from(you) - d),
        enguang: fix12(i64::from(chang) + d - 1),
        tiangui: fix12(i64::from(qu) + d - 1),
    }
}

/// 台辅 from 午 and 封诰 from 寅, forward by hour.
pub fn taifu_fenggao_index(time_index: u8) -> (u8, u8) {
    let t = i64::from(hour_ordinal(time_index));
    (fix12(at(Wu) + t), fix12(at(Yin) + t))
}

/// Year-based stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyIndices {
    pub huagai: u8,
    pub xianchi: u8,
    pub guchen: u8,
    pub guasu: u8,
    pub tiancai: u8,
    pub tianshou: u8,
    pub tianchu: u8,
    pub posui: u8,
    pub feilian: u8,
    pub longchi: u8,
    pub fengge: u8,
    pub tianku: u8,
    pub tianxu: u8,
    pub tianguan: u8,
    pub tianfu: u8,
    pub tiande: u8,
    pub yuede: u8,
    pub tiankong: u8,
    pub jielu: u8,
    pub kongwang: u8,
    pub xunkong: u8,
    pub jiekong: u8,
    pub jiesha: u8,
    pub dahao: u8,
    pub tianshang: u8,
    pub tianshi: u8,
    pub nianjie: u8,
}

/// Year-keyed stars; the school setting decides which optional ones are filled.
pub fn yearly_indices(
    year: StemBranch,
    soul_index: u8,
    body_index: u8,
    gender: Gender,
    algorithm: Algorithm,
) -> YearlyIndices {
    static POSUI: [EarthlyBranch; 3] = [Si, Chou, You];
    static FEILIAN: [EarthlyBranch; 12] = [
        Shen, You, Xu, Si, Wu, Wei, Yin, Mao, Chen, Hai, Zi, Chou,
    ];

    let b = year.branch.index();
    let bi = i64::from(b);
    let (huagai, xianchi) = huagai_xianchi_index(year.branch);
    let (guchen, guasu) = guchen_guasu_index(year.branch);
    let (jielu, kongwang) = jielu_kongwang_index(year.stem);
    let jiekong = if b % 2 == 0 { jielu } else { kongwang };

    // 天伤 in the friends palace, 天使 in the health palace
    let friends = fix12(i64::from(soul_index) + 5);
    let health = fix12(i64::from(soul_index) + 7);
    let agree = year.branch.yin_yang() == gender.yin_yang();
    let (tianshang, tianshi) = match (algorithm, agree) {
        (Algorithm::Standard, _) | (Algorithm::Zhongzhou, true) => (friends, health),
        (Algorithm::Zhongzhou, false) => (health, friends),
    };

    YearlyIndices {
        huagai,
        xianchi,
        guchen,
        guasu,
        tiancai: fix12(i64::from(soul_index) + bi),
        tianshou: fix12(i64::from(body_index) + bi),
        tianchu: branch_index(tianchu_branch(year.stem)),
        posui: branch_index(POSUI[usize::from(b % 3)]),
        feilian: branch_index(FEILIAN[usize::from(b)]),
        longchi: fix12(at(Chen) + bi),
        fengge: fix12(at(Xu) - bi),
        tianku: fix12(at(Wu) - bi),
        tianxu: fix12(at(Wu) + bi),
        tianguan: branch_index(tianguan_branch(year.stem)),
        tianfu: branch_index(tianfu_adj_branch(year.stem)),
        tiande: fix12(at(You) + bi),
        yuede: fix12(at(Si) + bi),
        tiankong: fix12(at(year.branch) + 1),
        jielu,
        kongwang,
        xunkong: xunkong_index(year),
        jiekong,
        jiesha: jiesha_adj_index(year.branch),
        dahao: dahao_adj_index(year.branch),
        tianshang,
        tianshi,
        nianjie: nianjie_index(year.branch),
    }
}

/// Place the adjective stars of a natal chart.
pub fn place_adjective_stars(input: &AdjectiveInput) -> Vec<PlacedStar> {
    let (hongluan, tianxi) = luan_xi_index(input.birth_year.branch);
    let m = monthly_indices(input.month_index);
    let d = daily_indices(input.month_index, input.lunar_day, input.time_index);
    let (taifu, fenggao) = taifu_fenggao_index(input.time_index);
    let y = yearly_indices(
        input.horoscope_year,
        input.soul_index,
        input.body_index,
        input.gender,
        input.algorithm,
    );

    let mut out = vec![
        (StarId::Hongluan, hongluan),
        (StarId::Tianxi, tianxi),
        (StarId::Tianyao, m.tianyao),
        (StarId::Xianchi, y.xianchi),
        (StarId::Jieshen, m.jieshen),
        (StarId::Santai, d.santai),
        (StarId::Bazuo, d.bazuo),
        (StarId::Enguang, d.enguang),
        (StarId::Tiangui, d.tiangui),
        (StarId::Longchi, y.longchi),
        (StarId::Fengge, y.fengge),
        (StarId::Tiancai, y.tiancai),
        (StarId::Tianshou, y.tianshou),
        (StarId::Taifu, taifu),
        (StarId::Fenggao, fenggao),
        (StarId::Tianwu, m.tianwu),
        (StarId::Huagai, y.huagai),
        (StarId::Tianguan, y.tianguan),
        (StarId::TianfuAdj, y.tianfu),
        (StarId::Tianchu, y.tianchu),
        (StarId::TianyueAdj, m.tianyue),
        (StarId::Tiande, y.tiande),
        (StarId::Yuede, y.yuede),
        (StarId::Tiankong, y.tiankong),
        (StarId::Xunkong, y.xunkong),
    ];

    match input.algorithm {
        Algorithm::Standard => {
            out.push((StarId::Jielu, y.jielu));
            out.push((StarId::Kongwang, y.kongwang));
        }
        Algorithm::Zhongzhou => {
            // 龙德 is the eighth of the twelve year gods, counted from the year branch
            let longde = fix12(at(input.horoscope_year.branch) + 7);
            out.push((StarId::Longde, longde));
            out.push((StarId::Jiekong, y.jiekong));
            out.push((StarId::Jiesha, y.jiesha));
            out.push((StarId::Dahao, y.dahao));
        }
    }

    out.extend([
        (StarId::Guchen, y.guchen),
        (StarId::Guasu, y.guasu),
        (StarId::Feilian, y.feilian),
        (StarId::Posui, y.posui),
        (StarId::Tianxing, m.tianxing),
        (StarId::Yinsha, m.yinsha),
        (StarId::Tianku, y.tianku),
        (StarId::Tianxu, y.tianxu),
        (StarId::Tianshi, y.tianshi),
        (StarId::Tianshang, y.tianshang),
        (StarId::Nianjie, y.nianjie),
    ]);

    out.into_iter()
        .map(|(id, index)| PlacedStar { index, star: Star::origin(id) })
        .collect()
}
