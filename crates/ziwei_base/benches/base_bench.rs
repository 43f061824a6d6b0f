use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::{
    HeavenlyStem, StarId, StemBranch, brightness, five_elements_of, fix12, mutagen_of,
    palace_names,
};

fn ring_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring");
    group.bench_function("fix12", |b| b.iter(|| fix12(black_box(-12_345))));
    group.bench_function("palace_names", |b| b.iter(|| palace_names(black_box(7))));
    group.finish();
}

fn table_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    group.bench_function("five_elements_of", |b| {
        b.iter(|| five_elements_of(StemBranch::from_cycle(black_box(37))))
    });
    group.bench_function("mutagen_of", |b| {
        b.iter(|| mutagen_of(black_box(HeavenlyStem::Xin), black_box(StarId::Wenchang)))
    });
    group.bench_function("brightness", |b| {
        b.iter(|| brightness(black_box(StarId::Taiyang), black_box(9)))
    });
    group.finish();
}

criterion_group!(benches, ring_bench, table_bench);
criterion_main!(benches);
