use colorkit::{BlendMode, Color};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn hex_parse(c: &mut Criterion) {
    c.bench_function("from_hex_str", |b| {
        b.iter(|| Color::from_hex_str(black_box("#3355AA")).unwrap())
    });
}

fn hsb_round_trip(c: &mut Criterion) {
    let color = Color::new(51., 85., 170., 1.);
    c.bench_function("hsb_round_trip", |b| {
        b.iter(|| Color::from_hsba(&black_box(color).to_hsba()).unwrap())
    });
}

fn blend(c: &mut Criterion) {
    let base = Color::new(51., 85., 170., 1.);
    let other = Color::new(200., 100., 50., 1.);
    let mut group = c.benchmark_group("blend");
    for mode in [
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::SoftLight,
        BlendMode::HardLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
    ] {
        group.bench_function(format!("{:?}", mode), |b| {
            b.iter(|| black_box(base).blend(&black_box(other), mode))
        });
    }
    group.finish();
}

criterion_group!(benches, hex_parse, hsb_round_trip, blend);
criterion_main!(benches);
