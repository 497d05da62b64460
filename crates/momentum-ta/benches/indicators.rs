//! Performance benchmarks for momentum-ta indicators.
//!
//! Run with: `cargo bench -p momentum-ta`
//!
//! These benchmarks measure throughput across input sizes for both binary
//! floats and `Decimal`, to confirm the cascade stays O(n).

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use momentum_ta::indicators::{pmo, pmo_from_roc, roc};
use momentum_ta::quote::Bar;
use momentum_ta::SeriesElement;
use rust_decimal::Decimal;

/// Generate a deterministic close series.
fn generate_series(size: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(size);
    let mut price = 100.0;
    for i in 0..size {
        let delta = ((i as f64 * 0.1).sin() * 2.0) + ((i as f64 * 0.03).cos() * 1.5);
        price += delta;
        price = f64::max(price, 10.0);
        data.push(price);
    }
    data
}

/// Wrap closes into daily bars.
fn to_bars<T: SeriesElement>(closes: &[T]) -> Vec<Bar<T>> {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::from_close(start + Duration::days(i as i64), c))
        .collect()
}

fn decimal_series(size: usize) -> Vec<Decimal> {
    generate_series(size)
        .into_iter()
        .map(|p| Decimal::from_f64_retain(p).map_or(Decimal::ONE_HUNDRED, |d| d.round_dp(4)))
        .collect()
}

// Standard sizes for benchmarking
const SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn bench_roc(c: &mut Criterion) {
    let mut group = c.benchmark_group("roc");
    for &size in SIZES {
        let bars = to_bars(&generate_series(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bars, |b, bars| {
            b.iter(|| roc(black_box(bars), black_box(1)))
        });
    }
    group.finish();
}

fn bench_pmo_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmo_f64");
    for &size in SIZES {
        let bars = to_bars(&generate_series(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bars, |b, bars| {
            b.iter(|| pmo(black_box(bars), black_box(35), black_box(20), black_box(10)))
        });
    }
    group.finish();
}

fn bench_pmo_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmo_decimal");
    // Decimal arithmetic is much slower; skip the largest size
    for &size in &SIZES[..3] {
        let bars = to_bars(&decimal_series(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &bars, |b, bars| {
            b.iter(|| pmo(black_box(bars), black_box(35), black_box(20), black_box(10)))
        });
    }
    group.finish();
}

fn bench_pmo_from_roc(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmo_from_roc");
    for &size in SIZES {
        let bars = to_bars(&generate_series(size));
        let Ok(points) = roc(&bars, 1) else {
            continue;
        };
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| pmo_from_roc(black_box(points), black_box(35), black_box(20), black_box(10)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_roc,
    bench_pmo_f64,
    bench_pmo_decimal,
    bench_pmo_from_roc,
);

criterion_main!(benches);
