use criterion::{Criterion, criterion_group, criterion_main};
use pfnorm::normalize::{apply_range, estimate_range, pool_valid_samples};
use pfnorm::types::{Bounds, Dimensions, SampleGrid};
use std::hint::black_box;

/// Deterministic 1024x1024 grid with a sentinel sprinkled in
fn synthetic_grid() -> SampleGrid {
    let dimensions = Dimensions::new(1024, 1024);
    let samples = (0..dimensions.sample_count())
        .map(|i| {
            if i % 97 == 0 {
                -1.0
            } else {
                (i.wrapping_mul(2_654_435_761) % 100_000) as f32 / 100.0
            }
        })
        .collect();
    SampleGrid::new(dimensions, samples)
}

// ============================================================================
// TIER 1: FULL PIPELINE BENCHMARK (Primary Baseline)
// ============================================================================

/// Pool, estimate and apply on an in-memory grid
/// Measures processing performance isolated from I/O
fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    let grid = synthetic_grid();

    group.bench_function("normalize_1m_samples", |b| {
        b.iter(|| {
            let mut target = grid.clone();
            let mut values = pool_valid_samples(black_box(&[&target]), -1.0);
            let estimate = estimate_range(&mut values, black_box(0.1), None, None).unwrap();
            let outliers = apply_range(&mut target, estimate.bounds, -1.0, false);
            black_box((target, outliers));
        });
    });

    group.finish();
}

// ============================================================================
// TIER 2: COMPONENT-LEVEL BENCHMARKS (Diagnostic)
// ============================================================================

/// Benchmark valid-value pooling
fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool");

    let grid = synthetic_grid();

    group.bench_function("pool_1m_samples", |b| {
        b.iter(|| {
            let values = pool_valid_samples(black_box(&[&grid]), -1.0);
            black_box(values);
        });
    });

    group.finish();
}

/// Benchmark the two order-statistic selections
fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");

    let grid = synthetic_grid();
    let values = pool_valid_samples(&[&grid], -1.0);

    group.bench_function("estimate_eps_0.1", |b| {
        b.iter(|| {
            let mut buffer = values.clone();
            let estimate = estimate_range(&mut buffer, black_box(0.1), None, None).unwrap();
            black_box(estimate);
        });
    });

    group.finish();
}

/// Benchmark the in-place rewrite pass
fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    let grid = synthetic_grid();
    let bounds = Bounds::new(50.0, 950.0);

    group.bench_function("apply_1m_samples", |b| {
        b.iter(|| {
            let mut target = grid.clone();
            let outliers = apply_range(&mut target, black_box(bounds), -1.0, true);
            black_box((target, outliers));
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK REGISTRATION
// ============================================================================

criterion_group!(
    benches,
    // Primary baseline (these run by default with `cargo bench`)
    bench_full_pipeline,
    // Diagnostic benchmarks (help identify bottlenecks)
    bench_pool,
    bench_estimate,
    bench_apply,
);

criterion_main!(benches);
