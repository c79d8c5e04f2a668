//! Benchmark for SortedList vs a standard Vec kept sorted.
//!
//! Compares ordered insertion, lookup and deletion on the linked list against
//! a `Vec<i64>` maintained with binary search.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sorted_linked_list::sorted::SortedList;
use std::hint::black_box;

/// Deterministic, scrambled sequence of `size` values in `0..size`.
fn scrambled(size: i64) -> Vec<i64> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// =============================================================================
// add Benchmark
// =============================================================================

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("add");

    for size in [100_i64, 1000, 5000] {
        let values = scrambled(size);

        // SortedList add (O(n) walk per insertion)
        group.bench_with_input(
            BenchmarkId::new("SortedList", size),
            &values,
            |bencher, values| {
                bencher.iter(|| {
                    let mut list = SortedList::new();
                    for value in values {
                        list.add(black_box(*value)).unwrap();
                    }
                    black_box(list)
                });
            },
        );

        // Vec binary search + insert
        group.bench_with_input(BenchmarkId::new("Vec", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut vector: Vec<i64> = Vec::new();
                for value in values {
                    let position = vector.partition_point(|existing| existing <= value);
                    vector.insert(position, black_box(*value));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// exists Benchmark
// =============================================================================

fn benchmark_exists(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("exists");

    for size in [100_i64, 1000, 10000] {
        let list: SortedList = (0..size).collect();
        let vector: Vec<i64> = (0..size).collect();
        let needle = size - 1;

        group.bench_with_input(
            BenchmarkId::new("SortedList", size),
            &needle,
            |bencher, &needle| {
                bencher.iter(|| black_box(list.exists(black_box(needle))));
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &needle, |bencher, needle| {
            bencher.iter(|| black_box(vector.binary_search(black_box(needle)).is_ok()));
        });
    }

    group.finish();
}

// =============================================================================
// delete Benchmark
// =============================================================================

fn benchmark_delete(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("delete");

    for size in [100_i64, 1000] {
        let list: SortedList = (0..size).collect();

        // Delete every element from a fresh copy, tail first (worst case walk)
        group.bench_with_input(
            BenchmarkId::new("SortedList_tail_first", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut copy = list.clone();
                    for value in (0..size).rev() {
                        black_box(copy.delete(value));
                    }
                    black_box(copy)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// iteration Benchmark
// =============================================================================

fn benchmark_iteration(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("iteration");

    for size in [100_i64, 1000, 10000] {
        let list: SortedList = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("iter", size), &size, |bencher, _| {
            bencher.iter(|| {
                let sum: i64 = list.iter().filter_map(|element| element.as_integer()).sum();
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("to_string", size), &size, |bencher, _| {
            bencher.iter(|| black_box(list.to_string()));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_add,
    benchmark_exists,
    benchmark_delete,
    benchmark_iteration
);

criterion_main!(benches);
