//! The twelve palace names and their rotation around the ring.
//!
//! Names run counter-clockwise from the Soul (命宫) palace in the fixed
//! order of [`ALL_PALACE_NAMES`]. The ring slot holding the soul
//! determines every other name: `names[i] = ALL[(i - soul) mod 12]`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::BaseError;
use crate::ring::fix12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PalaceName {
    Soul,
    Parents,
    Spirit,
    Property,
    Career,
    Friends,
    Surface,
    Health,
    Wealth,
    Children,
    Spouse,
    Siblings,
}

/// Palace names in ring order from the soul palace.
pub const ALL_PALACE_NAMES: [PalaceName; 12] = [
    PalaceName::Soul,
    PalaceName::Parents,
    PalaceName::Spirit,
    PalaceName::Property,
    PalaceName::Career,
    PalaceName::Friends,
    PalaceName::Surface,
    PalaceName::Health,
    PalaceName::Wealth,
    PalaceName::Children,
    PalaceName::Spouse,
    PalaceName::Siblings,
];

impl PalaceName {
    /// Chinese name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Soul => "命宫",
            Self::Parents => "父母",
            Self::Spirit => "福德",
            Self::Property => "田宅",
            Self::Career => "官禄",
            Self::Friends => "仆役",
            Self::Surface => "迁移",
            Self::Health => "疾厄",
            Self::Wealth => "财帛",
            Self::Children => "子女",
            Self::Spouse => "夫妻",
            Self::Siblings => "兄弟",
        }
    }

    /// ASCII key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Soul => "soul",
            Self::Parents => "parents",
            Self::Spirit => "spirit",
            Self::Property => "property",
            Self::Career => "career",
            Self::Friends => "friends",
            Self::Surface => "surface",
            Self::Health => "health",
            Self::Wealth => "wealth",
            Self::Children => "children",
            Self::Spouse => "spouse",
            Self::Siblings => "siblings",
        }
    }

    /// Offset of this name from the soul palace, in ring steps.
    pub const fn offset(self) -> u8 {
        match self {
            Self::Soul => 0,
            Self::Parents => 1,
            Self::Spirit => 2,
            Self::Property => 3,
            Self::Career => 4,
            Self::Friends => 5,
            Self::Surface => 6,
            Self::Health => 7,
            Self::Wealth => 8,
            Self::Children => 9,
            Self::Spouse => 10,
            Self::Siblings => 11,
        }
    }
}

impl Display for PalaceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PalaceName {
    type Err = BaseError;

    /// Accepts the ASCII key or the Chinese name, with or without 宫.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let bare = t.trim_end_matches('宫');
        ALL_PALACE_NAMES
            .iter()
            .copied()
            .find(|p| {
                p.key().eq_ignore_ascii_case(t)
                    || p.name() == t
                    || p.name().trim_end_matches('宫') == bare
            })
            .ok_or_else(|| BaseError::UnknownPalaceName(s.to_string()))
    }
}

/// Name sitting at ring index `index` when the soul is at `soul_index`.
pub fn palace_name_at(index: u8, soul_index: u8) -> PalaceName {
    ALL_PALACE_NAMES[usize::from(fix12(i64::from(index) - i64::from(soul_index)))]
}

/// Names of all 12 ring slots for a given soul slot.
pub fn palace_names(soul_index: u8) -> [PalaceName; 12] {
    let mut out = [PalaceName::Soul; 12];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = palace_name_at(i as u8, soul_index);
    }
    out
}

/// Ring index carrying `name` when the soul is at `soul_index`.
pub fn palace_index_of(name: PalaceName, soul_index: u8) -> u8 {
    fix12(i64::from(soul_index) + i64::from(name.offset()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_puts_soul_at_index() {
        for soul in 0..12u8 {
            let names = palace_names(soul);
            assert_eq!(names[soul as usize], PalaceName::Soul);
            for name in ALL_PALACE_NAMES {
                assert_eq!(names[palace_index_of(name, soul) as usize], name);
            }
        }
    }

    #[test]
    fn wealth_eight_steps_from_soul() {
        // Soul at 午 (ring 4): 寅 (ring 0) holds wealth
        assert_eq!(palace_name_at(0, 4), PalaceName::Wealth);
        assert_eq!(palace_name_at(5, 4), PalaceName::Parents);
    }

    #[test]
    fn parse_variants() {
        assert_eq!("命宫".parse::<PalaceName>(), Ok(PalaceName::Soul));
        assert_eq!("命".parse::<PalaceName>(), Ok(PalaceName::Soul));
        assert_eq!("财帛宫".parse::<PalaceName>(), Ok(PalaceName::Wealth));
        assert_eq!("Career".parse::<PalaceName>(), Ok(PalaceName::Career));
        assert!("nowhere".parse::<PalaceName>().is_err());
    }
}
