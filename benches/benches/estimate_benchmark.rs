//! Estimator benchmarks over synthetic series.
//!
//! Run with: `cargo bench --package fracvar-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fracvar_bench::{SeriesKind, generate, generate_bars};
use fracvar_lib::{FractalEstimator, RollingEstimator};
use std::hint::black_box;

/// Series lengths, in bars.
const SIZES: &[usize] = &[128, 1_024, 16_384, 262_144];

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = FractalEstimator::new();
    let mut group = c.benchmark_group("estimate");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        for &kind in SeriesKind::all() {
            let (low, high) = generate(kind, size, 7);
            group.bench_with_input(BenchmarkId::new(kind.label(), size), &size, |b, _| {
                b.iter(|| estimator.estimate(black_box(&low), black_box(&high)));
            });
        }
    }

    group.finish();
}

fn rolling_benchmark(c: &mut Criterion) {
    let bars = generate_bars(SeriesKind::RandomWalk, 16_384, 7);
    let mut group = c.benchmark_group("rolling");
    group.sample_size(20);

    for &(window, step) in &[(128, 1), (512, 1), (512, 32)] {
        let rolling = RollingEstimator::new(window, step).expect("valid window");
        group.throughput(Throughput::Elements(rolling.window_count(bars.len()) as u64));
        group.bench_function(format!("w{window}-s{step}"), |b| {
            b.iter(|| rolling.estimate_bars(black_box(&bars)));
        });
    }

    group.finish();
}

criterion_group!(benches, estimate_benchmark, rolling_benchmark);
criterion_main!(benches);
