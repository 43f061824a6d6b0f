//! A palace (宫) of the natal chart and its star queries.

use ziwei_base::{EarthlyBranch, HeavenlyStem, Mutagen, PalaceName, Star, StarId};

use crate::decadal::{DecadalRange, SMALL_LIMIT_CYCLES};
use crate::decorative::{Boshi12, Changsheng12, Jiangqian12, Suiqian12};

/// A star with the ring index it was placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedStar {
    pub index: u8,
    pub star: Star,
}

/// One of the twelve palaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Palace {
    /// Ring index (寅 = 0).
    pub index: u8,
    pub name: PalaceName,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub is_body_palace: bool,
    /// 来因宫: carries the birth-year stem (子 and 丑 excluded).
    pub is_primary_palace: bool,
    pub major_stars: Vec<Star>,
    pub minor_stars: Vec<Star>,
    pub adjective_stars: Vec<Star>,
    pub changsheng12: Changsheng12,
    pub boshi12: Boshi12,
    pub jiangqian12: Jiangqian12,
    pub suiqian12: Suiqian12,
    pub decadal: DecadalRange,
    /// Nominal ages whose small limit falls here.
    pub ages: [u8; SMALL_LIMIT_CYCLES],
}

impl Palace {
    /// All stars in the palace: majors, minors, then adjectives.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.major_stars
            .iter()
            .chain(&self.minor_stars)
            .chain(&self.adjective_stars)
    }

    /// Stars that can carry a mutagen (majors and minors).
    pub fn principal_stars(&self) -> impl Iterator<Item = &Star> {
        self.major_stars.iter().chain(&self.minor_stars)
    }

    pub fn has_star(&self, id: StarId) -> bool {
        self.stars().any(|s| s.id == id)
    }

    /// True when every star in `ids` is here.
    pub fn has_stars(&self, ids: &[StarId]) -> bool {
        ids.iter().all(|id| self.has_star(*id))
    }

    /// True when none of `ids` is here.
    pub fn not_have_stars(&self, ids: &[StarId]) -> bool {
        !ids.iter().any(|id| self.has_star(*id))
    }

    pub fn has_one_of_stars(&self, ids: &[StarId]) -> bool {
        ids.iter().any(|id| self.has_star(*id))
    }

    /// True when a birth-year mutagen sits here.
    pub fn has_mutagen(&self, mutagen: Mutagen) -> bool {
        self.principal_stars().any(|s| s.mutagen == Some(mutagen))
    }

    pub fn not_have_mutagen(&self, mutagen: Mutagen) -> bool {
        !self.has_mutagen(mutagen)
    }

    /// No major star, and none of `exclude` either.
    pub fn is_empty(&self, exclude: &[StarId]) -> bool {
        self.major_stars.is_empty() && !self.has_one_of_stars(exclude)
    }

    pub fn star(&self, id: StarId) -> Option<&Star> {
        self.stars().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::Scope;

    fn palace() -> Palace {
        Palace {
            index: 0,
            name: PalaceName::Wealth,
            stem: HeavenlyStem::Wu,
            branch: EarthlyBranch::Yin,
            is_body_palace: false,
            is_primary_palace: false,
            major_stars: vec![
                Star { mutagen: Some(Mutagen::Quan), ..Star::origin(StarId::Wuqu) },
                Star::origin(StarId::Tianxiang),
            ],
            minor_stars: vec![Star::origin(StarId::Tianma)],
            adjective_stars: vec![Star::origin(StarId::Tianxing)],
            changsheng12: Changsheng12::Changsheng,
            boshi12: Boshi12::Boshi,
            jiangqian12: Jiangqian12::Jiangxing,
            suiqian12: Suiqian12::Suijian,
            decadal: DecadalRange { start: 43, end: 52 },
            ages: [0; SMALL_LIMIT_CYCLES],
        }
    }

    #[test]
    fn star_queries() {
        let p = palace();
        assert!(p.has_stars(&[StarId::Wuqu, StarId::Tianxiang]));
        assert!(!p.has_stars(&[StarId::Wuqu, StarId::Ziwei]));
        assert!(p.not_have_stars(&[StarId::Ziwei, StarId::Pojun]));
        assert!(p.has_one_of_stars(&[StarId::Ziwei, StarId::Tianma]));
        assert!(p.has_mutagen(Mutagen::Quan));
        assert!(p.not_have_mutagen(Mutagen::Ji));
        assert!(!p.is_empty(&[]));
        assert_eq!(p.stars().count(), 4);
        assert_eq!(p.star(StarId::Tianxing).map(|s| s.scope), Some(Scope::Origin));
    }

    #[test]
    fn empty_palace() {
        let mut p = palace();
        p.major_stars.clear();
        assert!(p.is_empty(&[]));
        assert!(!p.is_empty(&[StarId::Tianma]));
        assert!(p.is_empty(&[StarId::Wenchang]));
    }
}
