//! Horoscope (运限): the decadal, small-limit, yearly, monthly, daily and
//! hourly layers of a chart at a target moment.
//!
//! Layer indices:
//! - decadal: the palace whose age range holds the nominal age (childhood
//!   table for ages 1-6 before the first range opens)
//! - age: the palace whose small-limit ages hold the nominal age
//! - yearly: the palace of the target year branch
//! - monthly: yearly - birth month + birth hour + target month
//! - daily: monthly + target day - 1
//! - hourly: daily + target hour
//!
//! Each layer renames the twelve palaces with its own index as 命宫 and
//! carries the four mutagens of its stem.

use tracing::debug;
use ziwei_base::{
    EarthlyBranch, HeavenlyStem, Mutagen, PalaceName, Scope, Star, StarId, branch_index, fix12,
    mutagen_star, mutagen_stars, palace_index_of, palace_names,
};
use ziwei_calendar::{CalendarOracle, FourPillars, LunarDate, SolarDate, check_time_index};

use crate::chart::Chart;
use crate::config::AgeConvention;
use crate::decorative::{Jiangqian12, Suiqian12, jiangqian12, suiqian12};
use crate::error::ChartError;
use crate::flowing_star::{ScopedStar, flowing_stars};
use crate::palace::{Palace, PlacedStar};
use crate::soul_body::hour_ordinal;
use crate::surrounded::SurroundedPalaces;

/// Decadal palaces for nominal ages 1-6 when the first range starts later.
pub const CHILDHOOD_PALACES: [PalaceName; 6] = [
    PalaceName::Soul,
    PalaceName::Wealth,
    PalaceName::Health,
    PalaceName::Spouse,
    PalaceName::Spirit,
    PalaceName::Career,
];

/// One time layer of a horoscope.
#[derive(Debug, Clone, PartialEq)]
pub struct HoroscopeLayer {
    pub scope: Scope,
    /// Ring index acting as this layer's 命宫.
    pub index: u8,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    /// Layer palace names by ring index.
    pub palace_names: [PalaceName; 12],
    /// Stars transformed by the layer stem, in 禄 权 科 忌 order.
    pub mutagens: [StarId; 4],
    /// Flowing stars of the layer.
    pub stars: Vec<PlacedStar>,
}

impl HoroscopeLayer {
    fn new(scope: Scope, index: u8, stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        let stars = match scope {
            Scope::Origin | Scope::Age => Vec::new(),
            _ => flowing_stars(stem, branch, scope),
        };
        Self {
            scope,
            index,
            stem,
            branch,
            palace_names: palace_names(index),
            mutagens: mutagen_stars(stem),
            stars,
        }
    }

    /// Ring index carrying `name` in this layer.
    pub fn palace_index(&self, name: PalaceName) -> u8 {
        palace_index_of(name, self.index)
    }

    pub fn mutagen_star(&self, mutagen: Mutagen) -> StarId {
        mutagen_star(self.stem, mutagen)
    }

    /// Flowing stars sitting at a ring index.
    pub fn stars_at(&self, index: u8) -> impl Iterator<Item = &Star> {
        self.stars
            .iter()
            .filter(move |p| p.index == index)
            .map(|p| &p.star)
    }
}

/// Nominal age at `target` for someone born on `birth` (both lunar).
pub fn nominal_age(birth: &LunarDate, target: &LunarDate, convention: AgeConvention) -> i32 {
    let diff = target.year - birth.year;
    match convention {
        AgeConvention::Natural => diff + 1,
        AgeConvention::Birthday => {
            diff + i32::from((target.month, target.day) >= (birth.month, birth.day))
        }
    }
}

/// Stars carrying the given mutagens under `stem`.
pub fn mutagens_to_stars(stem: HeavenlyStem, mutagens: &[Mutagen]) -> Vec<StarId> {
    mutagens.iter().map(|m| mutagen_star(stem, *m)).collect()
}

/// A chart's horoscope at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct Horoscope<'a> {
    chart: &'a Chart,
    pub solar_date: SolarDate,
    pub lunar_date: LunarDate,
    pub time_index: u8,
    /// Target pillars, year under the horoscope boundary.
    pub pillars: FourPillars,
    pub nominal_age: i32,
    /// `None` when no decadal range (nor the childhood table) covers the age.
    pub decadal: Option<HoroscopeLayer>,
    /// The decadal layer came from the childhood table.
    pub childhood: bool,
    /// Small limit, `None` outside ages 1-120.
    pub age: Option<HoroscopeLayer>,
    pub yearly: HoroscopeLayer,
    pub monthly: HoroscopeLayer,
    pub daily: HoroscopeLayer,
    pub hourly: HoroscopeLayer,
    /// 将前十二神 of the target year by ring index.
    pub jiangqian12: [Jiangqian12; 12],
    /// 岁前十二神 of the target year by ring index.
    pub suiqian12: [Suiqian12; 12],
}

impl<'a> Horoscope<'a> {
    /// Resolves every layer for `date` at hour `time_index` without touching `chart`.
    pub fn new<C: CalendarOracle + ?Sized>(
        chart: &'a Chart,
        calendar: &C,
        date: SolarDate,
        time_index: u8,
    ) -> Result<Self, ChartError> {
        check_time_index(time_index)?;
        let lunar_date = calendar.solar_to_lunar(date)?;
        let pillars = calendar.four_pillars(date, time_index, chart.config.horoscope_boundary)?;
        let age = nominal_age(&chart.lunar_date, &lunar_date, chart.config.age_convention);

        let (decadal, childhood) = match chart.palaces.iter().find(|p| p.decadal.contains(age)) {
            Some(p) => (Some(p), false),
            None if (1..=6).contains(&age) => {
                let name = CHILDHOOD_PALACES[(age - 1) as usize];
                (Some(chart.palace_of(name)), true)
            }
            None => (None, false),
        };
        let decadal = decadal.map(|p| HoroscopeLayer::new(Scope::Decadal, p.index, p.stem, p.branch));

        let small = u8::try_from(age)
            .ok()
            .and_then(|a| chart.palaces.iter().find(|p| p.ages.contains(&a)))
            .map(|p| HoroscopeLayer::new(Scope::Age, p.index, p.stem, p.branch));

        let yearly_index = branch_index(pillars.year.branch);
        let birth_hour = i64::from(hour_ordinal(chart.birth.time_index));
        let monthly_index = fix12(
            i64::from(yearly_index) - i64::from(chart.lunar_date.month)
                + birth_hour
                + i64::from(lunar_date.month),
        );
        let daily_index = fix12(i64::from(monthly_index) + i64::from(lunar_date.day) - 1);
        let hourly_index = fix12(i64::from(daily_index) + i64::from(hour_ordinal(time_index)));
        debug!(
            age,
            decadal = ?decadal.as_ref().map(|l| l.index),
            yearly = yearly_index,
            monthly = monthly_index,
            daily = daily_index,
            hourly = hourly_index,
            "horoscope indices"
        );

        Ok(Self {
            chart,
            solar_date: date,
            lunar_date,
            time_index,
            pillars,
            nominal_age: age,
            decadal,
            childhood,
            age: small,
            yearly: HoroscopeLayer::new(
                Scope::Yearly,
                yearly_index,
                pillars.year.stem,
                pillars.year.branch,
            ),
            monthly: HoroscopeLayer::new(
                Scope::Monthly,
                monthly_index,
                pillars.month.stem,
                pillars.month.branch,
            ),
            daily: HoroscopeLayer::new(Scope::Daily, daily_index, pillars.day.stem, pillars.day.branch),
            hourly: HoroscopeLayer::new(
                Scope::Hourly,
                hourly_index,
                pillars.hour.stem,
                pillars.hour.branch,
            ),
            jiangqian12: jiangqian12(pillars.year.branch),
            suiqian12: suiqian12(pillars.year.branch),
        })
    }

    pub fn chart(&self) -> &'a Chart {
        self.chart
    }

    /// Layer of a scope; `None` for the natal scope and undetermined layers.
    pub fn layer(&self, scope: Scope) -> Option<&HoroscopeLayer> {
        match scope {
            Scope::Origin => None,
            Scope::Decadal => self.decadal.as_ref(),
            Scope::Age => self.age.as_ref(),
            Scope::Yearly => Some(&self.yearly),
            Scope::Monthly => Some(&self.monthly),
            Scope::Daily => Some(&self.daily),
            Scope::Hourly => Some(&self.hourly),
        }
    }

    /// Palace of the current small limit.
    pub fn age_palace(&self) -> Option<&'a Palace> {
        let index = self.age.as_ref()?.index;
        self.chart.palaces.get(usize::from(index))
    }

    fn palace_index(&self, name: PalaceName, scope: Scope) -> Option<u8> {
        match scope {
            Scope::Origin => Some(palace_index_of(name, self.chart.soul_index)),
            _ => self.layer(scope).map(|l| l.palace_index(name)),
        }
    }

    /// Palace named `name` within `scope`.
    pub fn palace(&self, name: PalaceName, scope: Scope) -> Option<&'a Palace> {
        let index = self.palace_index(name, scope)?;
        self.chart.palaces.get(usize::from(index))
    }

    /// Surrounded palaces of the palace named `name` within `scope`.
    pub fn surrounded_palaces(&self, name: PalaceName, scope: Scope) -> Option<SurroundedPalaces<'a>> {
        let index = self.palace_index(name, scope)?;
        Some(self.chart.surrounding(index))
    }

    /// Decadal and yearly flowing stars at a ring index.
    fn flowing_at(&self, index: u8) -> impl Iterator<Item = ScopedStar> + '_ {
        self.decadal
            .iter()
            .chain(std::iter::once(&self.yearly))
            .flat_map(move |l| l.stars_at(index))
            .map(ScopedStar::from)
    }

    fn flowing_contains(&self, index: u8, star: ScopedStar) -> bool {
        self.flowing_at(index).any(|s| s == star)
    }

    /// Every flowing star in `stars` sits in the palace named `name` of `scope`.
    pub fn has_horoscope_stars(&self, name: PalaceName, scope: Scope, stars: &[ScopedStar]) -> bool {
        match self.palace_index(name, scope) {
            Some(i) => stars.iter().all(|s| self.flowing_contains(i, *s)),
            None => false,
        }
    }

    pub fn not_have_horoscope_stars(
        &self,
        name: PalaceName,
        scope: Scope,
        stars: &[ScopedStar],
    ) -> bool {
        match self.palace_index(name, scope) {
            Some(i) => !stars.iter().any(|s| self.flowing_contains(i, *s)),
            None => false,
        }
    }

    pub fn has_one_of_horoscope_stars(
        &self,
        name: PalaceName,
        scope: Scope,
        stars: &[ScopedStar],
    ) -> bool {
        match self.palace_index(name, scope) {
            Some(i) => stars.iter().any(|s| self.flowing_contains(i, *s)),
            None => false,
        }
    }

    /// The `scope` layer's `mutagen` star sits in the palace named `name`.
    ///
    /// Always false for the natal scope.
    pub fn has_horoscope_mutagen(&self, name: PalaceName, scope: Scope, mutagen: Mutagen) -> bool {
        let Some(layer) = self.layer(scope) else {
            return false;
        };
        let target = layer.mutagen_star(mutagen);
        self.chart
            .palaces
            .get(usize::from(layer.palace_index(name)))
            .is_some_and(|p| p.principal_stars().any(|s| s.id == target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lunar(year: i32, month: u8, day: u8) -> LunarDate {
        LunarDate { year, month, day, is_leap: false }
    }

    #[test]
    fn nominal_age_conventions() {
        let birth = lunar(2000, 7, 17);
        assert_eq!(nominal_age(&birth, &lunar(2000, 7, 17), AgeConvention::Natural), 1);
        assert_eq!(nominal_age(&birth, &lunar(2023, 1, 1), AgeConvention::Natural), 24);
        assert_eq!(nominal_age(&birth, &lunar(2023, 7, 16), AgeConvention::Birthday), 23);
        assert_eq!(nominal_age(&birth, &lunar(2023, 7, 17), AgeConvention::Birthday), 24);
    }

    #[test]
    fn mutagen_lookup() {
        let stars = mutagens_to_stars(HeavenlyStem::Geng, &[Mutagen::Lu, Mutagen::Ji]);
        assert_eq!(stars, vec![StarId::Taiyang, StarId::Tiantong]);
    }

    #[test]
    fn layer_names_rotate() {
        let layer = HoroscopeLayer::new(Scope::Yearly, 3, HeavenlyStem::Jia, EarthlyBranch::Si);
        assert_eq!(layer.palace_names[3], PalaceName::Soul);
        assert_eq!(layer.palace_index(PalaceName::Parents), 4);
        assert_eq!(layer.mutagens[0], StarId::Lianzhen);
        assert_eq!(layer.stars.len(), 11);
        let age = HoroscopeLayer::new(Scope::Age, 3, HeavenlyStem::Jia, EarthlyBranch::Si);
        assert!(age.stars.is_empty());
    }
}
