//! Natal chart assembly and chart-wide queries.
//!
//! Pipeline: calendar lookup → soul/body and bureau → majors → minors →
//! adjectives → twelve-god cycles → decadal and small-limit partitions.
//! A chart is immutable once built; horoscope queries borrow it.

use tracing::debug;
use ziwei_base::{
    EarthlyBranch, FiveElementsClass, PalaceName, Star, StarId, StemBranch, body_master,
    branch_at, palace_index_of, palace_name_at, soul_master,
};
use ziwei_calendar::{CalendarOracle, FourPillars, LunarDate, SolarDate, check_time_index};

use crate::adjective_star::{AdjectiveInput, place_adjective_stars};
use crate::config::{BirthInput, ChartConfig};
use crate::decadal::{decadal_forward, decadal_ranges, small_limit_ages};
use crate::decorative::{boshi12, changsheng12, jiangqian12, suiqian12};
use crate::error::ChartError;
use crate::horoscope::Horoscope;
use crate::major_star::{effective_lunar_day, place_major_stars, ziwei_index};
use crate::minor_star::{lucun_index, place_minor_stars};
use crate::palace::{Palace, PlacedStar};
use crate::soul_body::{lunar_month_index, resolve_soul_body};
use crate::surrounded::{SurroundedPalaces, surrounded_indices};

/// A natal Zi Wei Dou Shu chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub config: ChartConfig,
    pub birth: BirthInput,
    pub lunar_date: LunarDate,
    /// Length of the birth lunar month.
    pub month_days: u8,
    /// Four pillars under the chart's year boundary.
    pub pillars: FourPillars,
    /// Birth-year pillar under the horoscope year boundary.
    pub horoscope_year: StemBranch,
    pub soul_index: u8,
    pub body_index: u8,
    pub five_elements: FiveElementsClass,
    /// 命主.
    pub soul_master: StarId,
    /// 身主.
    pub body_master: StarId,
    /// Direction of the decadal limits and the 长生/博士 cycles.
    pub decadal_forward: bool,
    /// Palaces by ring index (寅 = 0).
    pub palaces: Vec<Palace>,
}

fn sort_into(slots: &mut [Vec<Star>], placed: Vec<PlacedStar>) {
    for p in placed {
        slots[usize::from(p.index % 12)].push(p.star);
    }
}

impl Chart {
    /// Cast a chart.
    pub fn build<C: CalendarOracle + ?Sized>(
        calendar: &C,
        birth: BirthInput,
        config: ChartConfig,
    ) -> Result<Self, ChartError> {
        let date = birth.solar_date;
        let t = birth.time_index;
        check_time_index(t)?;

        let lunar_date = calendar.solar_to_lunar(date)?;
        let month_days = calendar.lunar_month_days(date)?;
        let pillars = calendar.four_pillars(date, t, config.year_boundary)?;
        let horoscope_year = calendar.four_pillars(date, t, config.horoscope_boundary)?.year;
        let year = pillars.year;

        let month_index = lunar_month_index(&lunar_date, t, birth.fix_leap_month);
        let sb = resolve_soul_body(year.stem, month_index, t, birth.anchor);
        debug!(
            soul = sb.soul_index,
            body = sb.body_index,
            bureau = sb.five_elements.name(),
            "soul and body resolved"
        );

        let day = effective_lunar_day(lunar_date.day, month_days, t);
        let ziwei = ziwei_index(day, sb.five_elements.divisor());
        debug!(lunar_day = day, ziwei, "ziwei located");

        let mut majors: Vec<Vec<Star>> = vec![Vec::new(); 12];
        let mut minors: Vec<Vec<Star>> = vec![Vec::new(); 12];
        let mut adjectives: Vec<Vec<Star>> = vec![Vec::new(); 12];
        sort_into(&mut majors, place_major_stars(ziwei, year.stem));
        sort_into(&mut minors, place_minor_stars(year, month_index, t));
        sort_into(
            &mut adjectives,
            place_adjective_stars(&AdjectiveInput {
                birth_year: year,
                horoscope_year,
                month_index,
                lunar_day: lunar_date.day,
                time_index: t,
                soul_index: sb.soul_index,
                body_index: sb.body_index,
                gender: birth.gender,
                algorithm: config.algorithm,
            }),
        );

        let forward = decadal_forward(birth.gender, year.branch);
        let changsheng = changsheng12(sb.five_elements, forward);
        let boshi = boshi12(lucun_index(year.stem), forward);
        let jiangqian = jiangqian12(horoscope_year.branch);
        let suiqian = suiqian12(horoscope_year.branch);
        let ranges = decadal_ranges(sb.soul_index, sb.five_elements, forward);
        let ages = small_limit_ages(year.branch, birth.gender);
        let first_stem = year.stem.tiger_rule();

        let palaces = majors
            .into_iter()
            .zip(minors)
            .zip(adjectives)
            .enumerate()
            .map(|(i, ((major_stars, minor_stars), adjective_stars))| {
                let index = i as u8;
                let stem = first_stem.offset(i as i64);
                let branch = branch_at(index);
                Palace {
                    index,
                    name: palace_name_at(index, sb.soul_index),
                    stem,
                    branch,
                    is_body_palace: index == sb.body_index,
                    is_primary_palace: stem == year.stem
                        && !matches!(branch, EarthlyBranch::Zi | EarthlyBranch::Chou),
                    major_stars,
                    minor_stars,
                    adjective_stars,
                    changsheng12: changsheng[i],
                    boshi12: boshi[i],
                    jiangqian12: jiangqian[i],
                    suiqian12: suiqian[i],
                    decadal: ranges[i],
                    ages: ages[i],
                }
            })
            .collect();

        debug!(%date, pillars = %pillars, forward, "chart built");

        Ok(Self {
            config,
            birth,
            lunar_date,
            month_days,
            pillars,
            horoscope_year,
            soul_index: sb.soul_index,
            body_index: sb.body_index,
            five_elements: sb.five_elements,
            soul_master: soul_master(sb.soul_branch),
            body_master: body_master(year.branch),
            decadal_forward: forward,
            palaces,
        })
    }

    pub fn solar_date(&self) -> SolarDate {
        self.birth.solar_date
    }

    /// Palace at a ring index.
    pub fn palace(&self, index: i64) -> Result<&Palace, ChartError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.palaces.get(i))
            .ok_or(ChartError::InvalidIndex(index))
    }

    /// Palace carrying a name.
    pub fn palace_of(&self, name: PalaceName) -> &Palace {
        &self.palaces[usize::from(palace_index_of(name, self.soul_index))]
    }

    /// Palace by key or Chinese name; `body` / `身宫` selects the body palace.
    pub fn palace_named(&self, name: &str) -> Result<&Palace, ChartError> {
        let t = name.trim();
        if t.eq_ignore_ascii_case("body") || t == "身宫" || t == "身" {
            return Ok(self.body_palace());
        }
        let parsed: PalaceName = t.parse()?;
        Ok(self.palace_of(parsed))
    }

    pub fn soul_palace(&self) -> &Palace {
        &self.palaces[usize::from(self.soul_index)]
    }

    pub fn body_palace(&self) -> &Palace {
        &self.palaces[usize::from(self.body_index)]
    }

    /// Palace holding a natal star, if the star is on this chart.
    pub fn star_palace(&self, id: StarId) -> Option<&Palace> {
        self.palaces.iter().find(|p| p.has_star(id))
    }

    /// Look up a natal star by key or Chinese name.
    pub fn star(&self, name: &str) -> Result<(&Palace, &Star), ChartError> {
        let id: StarId = name.parse()?;
        self.palaces
            .iter()
            .find_map(|p| p.star(id).map(|s| (p, s)))
            .ok_or_else(|| ChartError::InvalidStarName(name.to_string()))
    }

    /// The four palaces around the palace at `index`.
    pub fn surrounded_palaces(&self, index: i64) -> Result<SurroundedPalaces<'_>, ChartError> {
        let target = self.palace(index)?;
        Ok(self.surrounding(target.index))
    }

    pub fn surrounded_palaces_named(&self, name: &str) -> Result<SurroundedPalaces<'_>, ChartError> {
        let target = self.palace_named(name)?;
        Ok(self.surrounding(target.index))
    }

    pub(crate) fn surrounding(&self, index: u8) -> SurroundedPalaces<'_> {
        let s = surrounded_indices(index);
        let at = |i: u8| &self.palaces[usize::from(i)];
        SurroundedPalaces {
            target: at(s.target),
            opposite: at(s.opposite),
            wealth: at(s.wealth),
            career: at(s.career),
        }
    }

    /// Every star in `ids` sits in the surrounded palaces of `index`.
    pub fn is_surrounded(&self, index: i64, ids: &[StarId]) -> Result<bool, ChartError> {
        Ok(self.surrounded_palaces(index)?.have_stars(ids))
    }

    pub fn is_surrounded_one_of(&self, index: i64, ids: &[StarId]) -> Result<bool, ChartError> {
        Ok(self.surrounded_palaces(index)?.have_one_of_stars(ids))
    }

    pub fn not_surrounded(&self, index: i64, ids: &[StarId]) -> Result<bool, ChartError> {
        Ok(self.surrounded_palaces(index)?.not_have_stars(ids))
    }

    /// Horoscope of this chart at a target date and time index.
    pub fn horoscope<C: CalendarOracle + ?Sized>(
        &self,
        calendar: &C,
        date: SolarDate,
        time_index: u8,
    ) -> Result<Horoscope<'_>, ChartError> {
        Horoscope::new(self, calendar, date, time_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::{Gender, Mutagen};
    use ziwei_calendar::FixedCalendar;

    fn golden() -> Chart {
        let pillars = FourPillars {
            year: "庚辰".parse().unwrap(),
            month: "甲申".parse().unwrap(),
            day: "丙午".parse().unwrap(),
            hour: "庚寅".parse().unwrap(),
        };
        let lunar = LunarDate { year: 2000, month: 7, day: 17, is_leap: false };
        let cal = FixedCalendar::new(lunar, 29, pillars);
        let birth =
            BirthInput::new(SolarDate::new(2000, 8, 16).unwrap(), 2, Gender::Female).unwrap();
        Chart::build(&cal, birth, ChartConfig::default()).unwrap()
    }

    #[test]
    fn golden_layout() {
        let c = golden();
        assert_eq!(c.soul_palace().branch, EarthlyBranch::Wu);
        assert_eq!(c.body_palace().branch, EarthlyBranch::Xu);
        assert_eq!(c.five_elements, FiveElementsClass::Wood3);
        assert_eq!(c.soul_master, StarId::Pojun);
        assert_eq!(c.body_master, StarId::Wenchang);
        let yin = c.palace(0).unwrap();
        assert_eq!(yin.name, PalaceName::Wealth);
        assert!(yin.has_stars(&[StarId::Wuqu, StarId::Tianxiang]));
        assert_eq!(yin.decadal.start, 43);
        assert!(c.palace(2).unwrap().is_primary_palace);
    }

    #[test]
    fn birth_year_mutagens() {
        let c = golden();
        let find = |id: StarId| c.star(id.key()).unwrap().1.mutagen;
        assert_eq!(find(StarId::Taiyang), Some(Mutagen::Lu));
        assert_eq!(find(StarId::Wuqu), Some(Mutagen::Quan));
        assert_eq!(find(StarId::Taiyin), Some(Mutagen::Ke));
        assert_eq!(find(StarId::Tiantong), Some(Mutagen::Ji));
    }

    #[test]
    fn lookups() {
        let c = golden();
        assert_eq!(c.palace(12), Err(ChartError::InvalidIndex(12)));
        assert_eq!(c.palace(-1), Err(ChartError::InvalidIndex(-1)));
        assert_eq!(c.palace_named("body").unwrap().index, c.body_index);
        assert_eq!(c.palace_named("命宫").unwrap().index, c.soul_index);
        assert!(matches!(c.palace_named("attic"), Err(ChartError::UnknownPalaceName(_))));
        assert!(matches!(c.star("nope"), Err(ChartError::InvalidStarName(_))));
        // Standard charts carry no 截空
        assert!(matches!(c.star("jiekong"), Err(ChartError::InvalidStarName(_))));
    }

    #[test]
    fn surrounded_queries() {
        let c = golden();
        // soul 午 with 财帛 寅 and 官禄 戌 and 迁移 子
        let s = c.surrounded_palaces(4).unwrap();
        assert_eq!(s.wealth.name, PalaceName::Wealth);
        assert_eq!(s.career.name, PalaceName::Career);
        assert_eq!(s.opposite.name, PalaceName::Surface);
        assert!(c.is_surrounded(4, &[StarId::Wuqu]).unwrap());
        assert!(c.surrounded_palaces(12).is_err());
    }

    #[test]
    fn every_star_placed_once() {
        let c = golden();
        let total: usize = c.palaces.iter().map(|p| p.stars().count()).sum();
        assert_eq!(total, 14 + 14 + 38);
    }
}
