//! Benchmark for Array vs standard Vec.
//!
//! Measures the cost of the lock that guards every Array operation against
//! the unguarded standard Vec for the same workloads.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kitbag::collection::Array;
use std::hint::black_box;

// =============================================================================
// push Benchmark
// =============================================================================

fn benchmark_push(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("push");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Array", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let array = Array::new();
                for index in 0..size {
                    array.push(black_box(index));
                }
                black_box(array)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// at Benchmark (Random Access)
// =============================================================================

fn benchmark_at(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("at");

    for size in [100, 1000, 10000] {
        let array: Array<i64> = (0..size).collect();
        let vector: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Array", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for index in 0..size as usize {
                    if let Ok(value) = array.at(black_box(index)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for index in 0..size as usize {
                    if let Some(&value) = vector.get(black_box(index)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// splice Benchmark
// =============================================================================

fn benchmark_splice(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("splice_middle");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("Array", size), &size, |bencher, &size| {
            let array: Array<i64> = (0..size).collect();
            let middle = size as usize / 2;
            bencher.iter(|| {
                let removed = array.splice(black_box(middle), 2, [7, 8, 9]).unwrap();
                array.splice(middle, 3, removed).unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            let mut vector: Vec<i64> = (0..size).collect();
            let middle = size as usize / 2;
            bencher.iter(|| {
                let removed: Vec<i64> = vector
                    .splice(black_box(middle)..middle + 2, [7, 8, 9])
                    .collect();
                vector.splice(middle..middle + 3, removed).for_each(drop);
            });
        });
    }

    group.finish();
}

// =============================================================================
// filter Benchmark
// =============================================================================

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in [100, 1000, 10000] {
        let array: Array<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("Array", size), &size, |bencher, _| {
            bencher.iter(|| black_box(array.filter(|value| value % 2 == 0)));
        });

        group.bench_with_input(BenchmarkId::new("for_each", size), &size, |bencher, _| {
            bencher.iter(|| {
                let mut sum = 0;
                array.for_each(|value, _| sum += value);
                black_box(sum)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_push,
    benchmark_at,
    benchmark_splice,
    benchmark_filter
);
criterion_main!(benches);
