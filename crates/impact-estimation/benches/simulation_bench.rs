//! Criterion benchmarks for impact-estimation.
//!
//! Targets:
//! - PERT estimate < 0.001ms
//! - Monte Carlo, 2K samples < 1ms
//! - Monte Carlo, 50K samples < 20ms

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use impact_core::models::ThreePointEstimate;
use impact_estimation::{monte_carlo_with_seed, pert};

fn bench_pert(c: &mut Criterion) {
    let est = ThreePointEstimate::new(80_000.0, 100_000.0, 160_000.0);
    c.bench_function("pert", |b| b.iter(|| pert(black_box(&est))));
}

fn bench_monte_carlo(c: &mut Criterion) {
    let est = ThreePointEstimate::new(80_000.0, 100_000.0, 160_000.0);
    let mut group = c.benchmark_group("monte_carlo");
    for n in [2_000usize, 50_000] {
        group.bench_function(format!("{n}_samples"), |b| {
            b.iter(|| monte_carlo_with_seed(black_box(&est), n, 42))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pert, bench_monte_carlo);
criterion_main!(benches);
