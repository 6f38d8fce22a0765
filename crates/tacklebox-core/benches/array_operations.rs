//! Benchmarks for array set operations and statistics

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use tacklebox_core::arrays;

// Overlapping integer slices so every operation has real work to do
fn create_test_arrays(len: usize) -> (Vec<u64>, Vec<u64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let upper = (len as u64).max(1) * 2;
    let first = (0..len).map(|_| rng.gen_range(0..upper)).collect();
    let second = (0..len).map(|_| rng.gen_range(0..upper)).collect();
    (first, second)
}

fn bench_set_operations(c: &mut Criterion) {
    let sizes = [10, 100, 1_000, 5_000];
    let mut group = c.benchmark_group("set_operations");

    for &len in &sizes {
        let (first, second) = create_test_arrays(len);
        group.throughput(Throughput::Elements(len as u64));

        // Hash-based
        group.bench_with_input(BenchmarkId::new("union", len), &len, |b, _| {
            b.iter(|| arrays::array_union(black_box(&first), black_box(&second)));
        });
        group.bench_with_input(BenchmarkId::new("symmetric_difference", len), &len, |b, _| {
            b.iter(|| arrays::array_symmetric_difference(black_box(&first), black_box(&second)));
        });

        // Linear membership scans
        group.bench_with_input(BenchmarkId::new("intersection", len), &len, |b, _| {
            b.iter(|| arrays::array_intersection(black_box(&first), black_box(&second)));
        });
        group.bench_with_input(BenchmarkId::new("difference", len), &len, |b, _| {
            b.iter(|| arrays::array_difference(black_box(&first), black_box(&second)));
        });
    }

    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");

    for &len in &[100, 10_000, 100_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<f64> = (0..len).map(|_| rng.gen_range(-1_000.0..1_000.0)).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| arrays::array_median(black_box(values)));
        });
    }

    group.finish();
}

fn bench_chunk_and_shuffle(c: &mut Criterion) {
    let values: Vec<u32> = (0..10_000).collect();

    c.bench_function("chunk_array_10k_by_64", |b| {
        b.iter(|| arrays::chunk_array(black_box(&values), 64));
    });

    c.bench_function("shuffle_array_10k", |b| {
        let mut rng = StdRng::seed_from_u64(3);
        let mut working = values.clone();
        b.iter(|| {
            arrays::shuffle_array_with(black_box(&mut working), &mut rng);
        });
    });
}

criterion_group!(benches, bench_set_operations, bench_median, bench_chunk_and_shuffle);
criterion_main!(benches);
