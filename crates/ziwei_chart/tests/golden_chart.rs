use ziwei_base::{
    Brightness, EarthlyBranch, FiveElementsClass, Gender, HeavenlyStem, Mutagen, PalaceName,
    StarId,
};
use ziwei_calendar::{AstronomicalCalendar, SolarDate};
use ziwei_chart::{Algorithm, BirthInput, Chart, ChartConfig, ChartError};

fn golden(config: ChartConfig) -> Chart {
    let birth = BirthInput::new(SolarDate::new(2000, 8, 16).unwrap(), 2, Gender::Female).unwrap();
    Chart::build(&AstronomicalCalendar::new(), birth, config).unwrap()
}

#[test]
fn calendar_facts() {
    let c = golden(ChartConfig::default());
    assert_eq!((c.lunar_date.year, c.lunar_date.month, c.lunar_date.day), (2000, 7, 17));
    assert_eq!(c.month_days, 29);
    assert_eq!(c.pillars.to_string(), "庚辰 甲申 丙午 庚寅");
    assert_eq!(c.horoscope_year.to_string(), "庚辰");
}

#[test]
fn soul_body_and_bureau() {
    let c = golden(ChartConfig::default());
    assert_eq!(c.soul_index, 4);
    assert_eq!(c.body_index, 8);
    assert_eq!(c.soul_palace().stem, HeavenlyStem::Ren);
    assert_eq!(c.five_elements, FiveElementsClass::Wood3);
    assert!(c.body_palace().is_body_palace);
    assert_eq!(c.palaces.iter().filter(|p| p.is_body_palace).count(), 1);
    assert!(!c.decadal_forward);
}

#[test]
fn palace_names_and_stems() {
    let c = golden(ChartConfig::default());
    let names: Vec<PalaceName> = c.palaces.iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        vec![
            PalaceName::Wealth,
            PalaceName::Children,
            PalaceName::Spouse,
            PalaceName::Siblings,
            PalaceName::Soul,
            PalaceName::Parents,
            PalaceName::Spirit,
            PalaceName::Property,
            PalaceName::Career,
            PalaceName::Friends,
            PalaceName::Surface,
            PalaceName::Health,
        ]
    );
    // 庚 year: 寅 palace stem 戊
    assert_eq!(c.palaces[0].stem, HeavenlyStem::Wu);
    assert_eq!(c.palaces[0].branch, EarthlyBranch::Yin);
    assert_eq!(c.palaces[11].branch, EarthlyBranch::Chou);
}

#[test]
fn major_star_layout() {
    let c = golden(ChartConfig::default());
    let expected = [
        (StarId::Ziwei, 4),
        (StarId::Tianji, 3),
        (StarId::Taiyang, 1),
        (StarId::Wuqu, 0),
        (StarId::Tiantong, 11),
        (StarId::Lianzhen, 8),
        (StarId::Tianfu, 8),
        (StarId::Taiyin, 9),
        (StarId::Tanlang, 10),
        (StarId::Jumen, 11),
        (StarId::Tianxiang, 0),
        (StarId::Tianliang, 1),
        (StarId::Qisha, 2),
        (StarId::Pojun, 6),
    ];
    for (id, index) in expected {
        assert_eq!(c.star_palace(id).map(|p| p.index), Some(index), "{id:?}");
    }
    let yin = &c.palaces[0];
    assert_eq!(yin.star(StarId::Wuqu).unwrap().brightness, Some(Brightness::De));
    assert_eq!(yin.star(StarId::Tianxiang).unwrap().brightness, Some(Brightness::Miao));
    assert_eq!(yin.star(StarId::Wuqu).unwrap().mutagen, Some(Mutagen::Quan));
}

#[test]
fn masters_and_primary_palace() {
    let c = golden(ChartConfig::default());
    assert_eq!(c.soul_master, StarId::Pojun);
    assert_eq!(c.body_master, StarId::Wenchang);
    let primary: Vec<u8> =
        c.palaces.iter().filter(|p| p.is_primary_palace).map(|p| p.index).collect();
    assert_eq!(primary, vec![2]);
}

#[test]
fn decadal_and_small_limits() {
    let c = golden(ChartConfig::default());
    assert_eq!((c.palaces[4].decadal.start, c.palaces[4].decadal.end), (3, 12));
    assert_eq!((c.palaces[3].decadal.start, c.palaces[3].decadal.end), (13, 22));
    assert_eq!((c.palaces[0].decadal.start, c.palaces[0].decadal.end), (43, 52));
    // 辰 year: age 1 at 戌, female runs backward
    assert_eq!(c.palaces[8].ages[0], 1);
    assert_eq!(c.palaces[7].ages[0], 2);
    assert_eq!(c.palaces[9].ages[0], 12);
}

#[test]
fn zhongzhou_adds_two_stars() {
    let standard = golden(ChartConfig::default());
    let zhongzhou = golden(ChartConfig { algorithm: Algorithm::Zhongzhou, ..ChartConfig::default() });
    let count = |c: &Chart| c.palaces.iter().map(|p| p.adjective_stars.len()).sum::<usize>();
    assert_eq!(count(&standard), 38);
    assert_eq!(count(&zhongzhou), 40);
    assert!(zhongzhou.star("longde").is_ok());
    assert!(matches!(standard.star("longde"), Err(ChartError::InvalidStarName(_))));
}

#[test]
fn out_of_range_birth_date() {
    let birth = BirthInput::new(SolarDate::new(1850, 1, 1).unwrap(), 0, Gender::Male).unwrap();
    let err = Chart::build(&AstronomicalCalendar::new(), birth, ChartConfig::default());
    assert!(matches!(err, Err(ChartError::Calendar(_))));
}

#[test]
fn invalid_time_index_rejected() {
    let date = SolarDate::new(2000, 8, 16).unwrap();
    assert_eq!(
        BirthInput::new(date, 13, Gender::Male),
        Err(ChartError::InvalidTimeIndex(13))
    );
}
