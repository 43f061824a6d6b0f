//! The four twelve-god cycles (十二神) written on every palace.
//!
//! - 长生十二神: starts from the bureau's birth branch.
//! - 博士十二神: starts on 禄存.
//! - 将前十二神: 将星 on the year branch's tri-harmony leader.
//! - 岁前十二神: 岁建 on the year branch.
//!
//! The first two run in the decadal direction; the last two always run
//! forward.

use ziwei_base::{EarthlyBranch, FiveElementsClass, TriHarmony, branch_index, walk};

/// 长生十二神.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Changsheng12 {
    Changsheng,
    Muyu,
    Guandai,
    Linguan,
    Diwang,
    Shuai,
    Bing,
    Si,
    Mu,
    Jue,
    Tai,
    Yang,
}

pub const ALL_CHANGSHENG12: [Changsheng12; 12] = [
    Changsheng12::Changsheng,
    Changsheng12::Muyu,
    Changsheng12::Guandai,
    Changsheng12::Linguan,
    Changsheng12::Diwang,
    Changsheng12::Shuai,
    Changsheng12::Bing,
    Changsheng12::Si,
    Changsheng12::Mu,
    Changsheng12::Jue,
    Changsheng12::Tai,
    Changsheng12::Yang,
];

impl Changsheng12 {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Changsheng => "长生",
            Self::Muyu => "沐浴",
            Self::Guandai => "冠带",
            Self::Linguan => "临官",
            Self::Diwang => "帝旺",
            Self::Shuai => "衰",
            Self::Bing => "病",
            Self::Si => "死",
            Self::Mu => "墓",
            Self::Jue => "绝",
            Self::Tai => "胎",
            Self::Yang => "养",
        }
    }
}

/// 博士十二神.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boshi12 {
    Boshi,
    Lishi,
    Qinglong,
    Xiaohao,
    Jiangjun,
    Zoushu,
    Feilian,
    Xishen,
    Bingfu,
    Dahao,
    Fubing,
    Guanfu,
}

pub const ALL_BOSHI12: [Boshi12; 12] = [
    Boshi12::Boshi,
    Boshi12::Lishi,
    Boshi12::Qinglong,
    Boshi12::Xiaohao,
    Boshi12::Jiangjun,
    Boshi12::Zoushu,
    Boshi12::Feilian,
    Boshi12::Xishen,
    Boshi12::Bingfu,
    Boshi12::Dahao,
    Boshi12::Fubing,
    Boshi12::Guanfu,
];

impl Boshi12 {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boshi => "博士",
            Self::Lishi => "力士",
            Self::Qinglong => "青龙",
            Self::Xiaohao => "小耗",
            Self::Jiangjun => "将军",
            Self::Zoushu => "奏书",
            Self::Feilian => "飞廉",
            Self::Xishen => "喜神",
            Self::Bingfu => "病符",
            Self::Dahao => "大耗",
            Self::Fubing => "伏兵",
            Self::Guanfu => "官府",
        }
    }
}

/// 将前十二神.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jiangqian12 {
    Jiangxing,
    Panan,
    Suiyi,
    Xishen,
    Huagai,
    Jiesha,
    Zaisha,
    Tiansha,
    Zhibei,
    Xianchi,
    Yuesha,
    Wangshen,
}

pub const ALL_JIANGQIAN12: [Jiangqian12; 12] = [
    Jiangqian12::Jiangxing,
    Jiangqian12::Panan,
    Jiangqian12::Suiyi,
    Jiangqian12::Xishen,
    Jiangqian12::Huagai,
    Jiangqian12::Jiesha,
    Jiangqian12::Zaisha,
    Jiangqian12::Tiansha,
    Jiangqian12::Zhibei,
    Jiangqian12::Xianchi,
    Jiangqian12::Yuesha,
    Jiangqian12::Wangshen,
];

impl Jiangqian12 {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jiangxing => "将星",
            Self::Panan => "攀鞍",
            Self::Suiyi => "岁驿",
            Self::Xishen => "息神",
            Self::Huagai => "华盖",
            Self::Jiesha => "劫煞",
            Self::Zaisha => "灾煞",
            Self::Tiansha => "天煞",
            Self::Zhibei => "指背",
            Self::Xianchi => "咸池",
            Self::Yuesha => "月煞",
            Self::Wangshen => "亡神",
        }
    }
}

/// 岁前十二神.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suiqian12 {
    Suijian,
    Huiqi,
    Sangmen,
    Guansuo,
    Guanfu,
    Xiaohao,
    Dahao,
    Longde,
    Baihu,
    Tiande,
    Diaoke,
    Bingfu,
}

pub const ALL_SUIQIAN12: [Suiqian12; 12] = [
    Suiqian12::Suijian,
    Suiqian12::Huiqi,
    Suiqian12::Sangmen,
    Suiqian12::Guansuo,
    Suiqian12::Guanfu,
    Suiqian12::Xiaohao,
    Suiqian12::Dahao,
    Suiqian12::Longde,
    Suiqian12::Baihu,
    Suiqian12::Tiande,
    Suiqian12::Diaoke,
    Suiqian12::Bingfu,
];

impl Suiqian12 {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Suijian => "岁建",
            Self::Huiqi => "晦气",
            Self::Sangmen => "丧门",
            Self::Guansuo => "贯索",
            Self::Guanfu => "官符",
            Self::Xiaohao => "小耗",
            Self::Dahao => "大耗",
            Self::Longde => "龙德",
            Self::Baihu => "白虎",
            Self::Tiande => "天德",
            Self::Diaoke => "吊客",
            Self::Bingfu => "病符",
        }
    }
}

/// Lay `gods` around the ring from `start`, returning them by ring index.
fn lay<T: Copy>(gods: &[T; 12], start: u8, forward: bool) -> [T; 12] {
    let mut out = *gods;
    for (god, index) in gods.iter().zip(walk(start, forward)) {
        out[usize::from(index)] = *god;
    }
    out
}

/// Branch where 长生 sits for a bureau.
pub fn changsheng_start(bureau: FiveElementsClass) -> EarthlyBranch {
    match bureau {
        FiveElementsClass::Water2 | FiveElementsClass::Earth5 => EarthlyBranch::Shen,
        FiveElementsClass::Wood3 => EarthlyBranch::Hai,
        FiveElementsClass::Metal4 => EarthlyBranch::Si,
        FiveElementsClass::Fire6 => EarthlyBranch::Yin,
    }
}

/// 长生十二神 by ring index.
pub fn changsheng12(bureau: FiveElementsClass, forward: bool) -> [Changsheng12; 12] {
    lay(&ALL_CHANGSHENG12, branch_index(changsheng_start(bureau)), forward)
}

/// 博士十二神 by ring index, starting on 禄存.
pub fn boshi12(lucun_index: u8, forward: bool) -> [Boshi12; 12] {
    lay(&ALL_BOSHI12, lucun_index, forward)
}

/// 将前十二神 by ring index for a year branch.
pub fn jiangqian12(year_branch: EarthlyBranch) -> [Jiangqian12; 12] {
    let start = match year_branch.tri_harmony() {
        TriHarmony::YinWuXu => EarthlyBranch::Wu,
        TriHarmony::ShenZiChen => EarthlyBranch::Zi,
        TriHarmony::SiYouChou => EarthlyBranch::You,
        TriHarmony::HaiMaoWei => EarthlyBranch::Mao,
    };
    lay(&ALL_JIANGQIAN12, branch_index(start), true)
}

/// 岁前十二神 by ring index for a year branch.
pub fn suiqian12(year_branch: EarthlyBranch) -> [Suiqian12; 12] {
    lay(&ALL_SUIQIAN12, branch_index(year_branch), true)
}
