//! Surrounded palaces (三方四正): a palace, its opposite, and the two
//! palaces of its tri-harmony.

use ziwei_base::{Mutagen, StarId, jump};

use crate::palace::Palace;

/// Ring indices of the four surrounding palaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurroundedIndices {
    pub target: u8,
    pub opposite: u8,
    /// Four steps back (the wealth position relative to a soul).
    pub wealth: u8,
    /// Four steps on (the career position relative to a soul).
    pub career: u8,
}

impl SurroundedIndices {
    pub fn all(&self) -> [u8; 4] {
        [self.target, self.opposite, self.wealth, self.career]
    }
}

pub fn surrounded_indices(index: u8) -> SurroundedIndices {
    SurroundedIndices {
        target: index % 12,
        opposite: jump(index, 6),
        wealth: jump(index, 8),
        career: jump(index, 4),
    }
}

/// The four palaces around a target, borrowed from a chart.
#[derive(Debug, Clone, Copy)]
pub struct SurroundedPalaces<'a> {
    pub target: &'a Palace,
    pub opposite: &'a Palace,
    pub wealth: &'a Palace,
    pub career: &'a Palace,
}

impl<'a> SurroundedPalaces<'a> {
    pub fn palaces(&self) -> [&'a Palace; 4] {
        [self.target, self.opposite, self.wealth, self.career]
    }

    fn contains(&self, id: StarId) -> bool {
        self.palaces().iter().any(|p| p.has_star(id))
    }

    /// Every star in `ids` sits in one of the four palaces.
    pub fn have_stars(&self, ids: &[StarId]) -> bool {
        ids.iter().all(|id| self.contains(*id))
    }

    pub fn not_have_stars(&self, ids: &[StarId]) -> bool {
        !ids.iter().any(|id| self.contains(*id))
    }

    pub fn have_one_of_stars(&self, ids: &[StarId]) -> bool {
        ids.iter().any(|id| self.contains(*id))
    }

    pub fn have_mutagen(&self, mutagen: Mutagen) -> bool {
        self.palaces().iter().any(|p| p.has_mutagen(mutagen))
    }

    pub fn not_have_mutagen(&self, mutagen: Mutagen) -> bool {
        !self.have_mutagen(mutagen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn four_distinct_palaces() {
        for i in 0..12u8 {
            let s = surrounded_indices(i);
            assert_eq!(s.all().iter().collect::<HashSet<_>>().len(), 4);
            assert_eq!(s.opposite, (i + 6) % 12);
            assert_eq!(s.wealth, (i + 8) % 12);
            assert_eq!(s.career, (i + 4) % 12);
        }
    }
}
