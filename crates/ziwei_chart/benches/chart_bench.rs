use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::{Gender, HeavenlyStem, StemBranch};
use ziwei_calendar::{AstronomicalCalendar, FixedCalendar, FourPillars, LunarDate, SolarDate};
use ziwei_chart::adjective_star::{AdjectiveInput, place_adjective_stars};
use ziwei_chart::major_star::place_major_stars;
use ziwei_chart::minor_star::place_minor_stars;
use ziwei_chart::{Algorithm, BirthInput, Chart, ChartConfig};

fn fixed() -> FixedCalendar {
    let sb = |s: &str| s.parse::<StemBranch>().unwrap();
    FixedCalendar::new(
        LunarDate { year: 2000, month: 7, day: 17, is_leap: false },
        29,
        FourPillars { year: sb("庚辰"), month: sb("甲申"), day: sb("丙午"), hour: sb("庚寅") },
    )
}

fn placement_bench(c: &mut Criterion) {
    let year: StemBranch = "庚辰".parse().unwrap();
    let adjective = AdjectiveInput {
        birth_year: year,
        horoscope_year: year,
        month_index: 6,
        lunar_day: 17,
        time_index: 2,
        soul_index: 4,
        body_index: 8,
        gender: Gender::Female,
        algorithm: Algorithm::Standard,
    };
    let mut group = c.benchmark_group("placement");
    group.bench_function("major", |b| {
        b.iter(|| place_major_stars(black_box(4), black_box(HeavenlyStem::Geng)))
    });
    group.bench_function("minor", |b| {
        b.iter(|| place_minor_stars(black_box(year), black_box(6), black_box(2)))
    });
    group.bench_function("adjective", |b| b.iter(|| place_adjective_stars(black_box(&adjective))));
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let date = SolarDate { year: 2000, month: 8, day: 16 };
    let birth = BirthInput::new(date, 2, Gender::Female).unwrap();
    let fixed = fixed();
    let astro = AstronomicalCalendar::new();
    let mut group = c.benchmark_group("chart");
    group.bench_function("build_fixed", |b| {
        b.iter(|| Chart::build(&fixed, black_box(birth), ChartConfig::default()))
    });
    group.bench_function("build_astronomical", |b| {
        b.iter(|| Chart::build(&astro, black_box(birth), ChartConfig::default()))
    });
    let chart = Chart::build(&fixed, birth, ChartConfig::default()).unwrap();
    let target = SolarDate { year: 2023, month: 10, day: 1 };
    group.bench_function("horoscope", |b| {
        b.iter(|| chart.horoscope(&fixed, black_box(target), black_box(0)).map(|h| h.nominal_age))
    });
    group.finish();
}

criterion_group!(benches, placement_bench, chart_bench);
criterion_main!(benches);
