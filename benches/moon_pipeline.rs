use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lunar::horizontal::moon_horizontal_position;
use lunar::phase::phase_state;
use lunar::time::julian_date;
use lunar::{MoonTracker, ObserverContext};

/// Random site and timestamp between 1900 and 2100.
#[inline]
fn random_context(rng: &mut StdRng) -> ObserverContext {
    ObserverContext::new(
        rng.random_range(-90.0..=90.0),
        rng.random_range(-180.0..=180.0),
        rng.random_range(1900..2100),
        rng.random_range(1..=12),
        rng.random_range(1..=28),
        rng.random_range(0..24),
        rng.random_range(0..60),
        rng.random_range(0..60),
    )
}

fn bench_julian_date(c: &mut Criterion) {
    c.bench_function("moon_pipeline/julian_date", |b| {
        b.iter(|| {
            black_box(julian_date(
                black_box(2024),
                black_box(3),
                black_box(25),
                black_box(7),
                black_box(0),
                black_box(0),
            ))
        })
    });
}

fn bench_horizontal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED_1A7E);
    let samples = 10_000usize;

    c.bench_function("moon_pipeline/horizontal_random_sites", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| random_context(&mut rng))
                    .collect::<Vec<_>>()
            },
            |contexts| {
                for ctx in contexts {
                    black_box(moon_horizontal_position(black_box(&ctx)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_phase(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x0F0F_CAFE);
    let samples = 10_000usize;

    c.bench_function("moon_pipeline/phase_random_dates", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| rng.random_range(2_415_020.0..2_488_070.0))
                    .collect::<Vec<f64>>()
            },
            |dates| {
                for jd in dates {
                    black_box(phase_state(black_box(jd)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full report for one fixed site, including the phase bucket and age.
fn bench_report(c: &mut Criterion) {
    let mut tracker = MoonTracker::default();
    tracker.set_context(48.8566, 2.3522, 2024, 4, 8, 18, 0, 0);

    c.bench_function("moon_pipeline/report_paris", |b| {
        b.iter(|| black_box(black_box(&tracker).report()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_julian_date, bench_horizontal, bench_phase, bench_report
);
criterion_main!(benches);
