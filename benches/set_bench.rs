//! Set construction and algebra benchmarks.
//!
//! Compares bulk construction through `from_elements` against repeated `add`,
//! and measures the variadic algebra operations across inline and spilled sizes.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use scalar_set::collections::Set;
use std::hint::black_box;

const SIZES: [i32; 4] = [4, 8, 64, 512];

/// Pre-generates input with every value repeated twice.
fn generate_input(size: i32) -> Vec<i32> {
    (0..size).chain(0..size).collect()
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_construction");

    for size in SIZES {
        let base_vec = generate_input(size);

        group.bench_with_input(
            BenchmarkId::new("from_elements", size),
            &size,
            |bencher, _| {
                bencher.iter_batched(
                    || base_vec.clone(),
                    |elements| black_box(Set::from_elements(black_box(elements))),
                    BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(BenchmarkId::new("repeated_add", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |elements| {
                    let mut set = Set::new();
                    for element in elements {
                        set.add(black_box(element));
                    }
                    black_box(set)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_algebra(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_algebra");

    for size in SIZES {
        let set_a = Set::from_elements(0..size);
        let set_b = Set::from_elements(size / 2..size + size / 2);
        let set_c = Set::from_elements((0..size).step_by(3));

        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set_a.union([&set_b, &set_c])));
        });

        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set_a.intersection([&set_b, &set_c])));
        });

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set_a.difference([&set_b, &set_c])));
        });

        group.bench_with_input(
            BenchmarkId::new("symmetric_difference", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(set_a.symmetric_difference(&set_b)));
            },
        );
    }

    group.finish();
}

fn benchmark_membership(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_membership");

    for size in SIZES {
        let set = Set::from_elements(0..size);
        let missing = size + 1;

        group.bench_with_input(BenchmarkId::new("contains_hit", size), &size, |bencher, &size| {
            bencher.iter(|| black_box(set.contains(black_box(&(size - 1)))));
        });

        group.bench_with_input(BenchmarkId::new("contains_miss", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.contains(black_box(&missing))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_algebra,
    benchmark_membership
);
criterion_main!(benches);
