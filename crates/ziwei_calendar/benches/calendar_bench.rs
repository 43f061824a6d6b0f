use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_calendar::{
    AstronomicalCalendar, CalendarOracle, SolarDate, YearBoundary, astro, month_table,
};

fn astro_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("astro");
    group.bench_function("sun_longitude_ut", |b| {
        b.iter(|| astro::sun_longitude_ut(black_box(2_451_772.5)))
    });
    group.bench_function("new_moon_ut", |b| b.iter(|| astro::new_moon_ut(black_box(250))));
    group.bench_function("solar_term_jd", |b| {
        b.iter(|| astro::solar_term_jd(black_box(2000), black_box(270.0)))
    });
    group.finish();
}

fn conversion_bench(c: &mut Criterion) {
    let cal = AstronomicalCalendar::new();
    let date = SolarDate { year: 2000, month: 8, day: 16 };
    let mut group = c.benchmark_group("conversion");
    group.bench_function("month_table", |b| b.iter(|| month_table(black_box(date.jdn()))));
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| cal.solar_to_lunar(black_box(date)))
    });
    group.bench_function("four_pillars", |b| {
        b.iter(|| cal.four_pillars(black_box(date), black_box(2), YearBoundary::Exact))
    });
    group.finish();
}

criterion_group!(benches, astro_bench, conversion_bench);
criterion_main!(benches);
