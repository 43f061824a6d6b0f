//! Flowing stars (流耀) of a horoscope layer.
//!
//! Every layer (decadal, yearly, monthly, daily, hourly) places its own
//! copies of 魁 钺 昌 曲 禄 羊 陀 from the layer stem and 马 鸾 喜 from the
//! layer branch. The yearly layer also carries 年解.

use ziwei_base::{EarthlyBranch, HeavenlyStem, Scope, Star, StarId};

use crate::adjective_star::{luan_xi_index, nianjie_index};
use crate::minor_star::{chang_qu_by_stem, kui_yue_index, lucun_index, tianma_index, yang_tuo_index};
use crate::palace::PlacedStar;

/// A star identity qualified by scope, used to query flowing stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopedStar {
    pub id: StarId,
    pub scope: Scope,
}

impl ScopedStar {
    pub const fn new(id: StarId, scope: Scope) -> Self {
        Self { id, scope }
    }
}

impl From<&Star> for ScopedStar {
    fn from(star: &Star) -> Self {
        Self::new(star.id, star.scope)
    }
}

/// Flowing stars of one layer.
pub fn flowing_stars(stem: HeavenlyStem, branch: EarthlyBranch, scope: Scope) -> Vec<PlacedStar> {
    let (kui, yue) = kui_yue_index(stem);
    let (chang, qu) = chang_qu_by_stem(stem);
    let lu = lucun_index(stem);
    let (yang, tuo) = yang_tuo_index(stem);
    let ma = tianma_index(branch);
    let (luan, xi) = luan_xi_index(branch);

    let mut placed = vec![
        (StarId::Tiankui, kui),
        (StarId::Tianyue, yue),
        (StarId::Wenchang, chang),
        (StarId::Wenqu, qu),
        (StarId::Lucun, lu),
        (StarId::Qingyang, yang),
        (StarId::Tuoluo, tuo),
        (StarId::Tianma, ma),
        (StarId::Hongluan, luan),
        (StarId::Tianxi, xi),
    ];
    if scope == Scope::Yearly {
        placed.push((StarId::Nianjie, nianjie_index(branch)));
    }

    placed
        .into_iter()
        .map(|(id, index)| PlacedStar { index, star: Star::flowing(id, scope) })
        .collect()
}
