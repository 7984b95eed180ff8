use chain_collections::linked_list::owned::{chain::Chain, list::LinkedList};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::seq::SliceRandom;
use std::hint::black_box;

const SIZES: &[usize] = &[100, 1_000, 10_000];

fn shuffled(size: usize) -> Vec<usize> {
    let mut values: Vec<usize> = (0..size).collect();
    values.shuffle(&mut rand::rng());
    values
}

// --- Benchmarks for the sized LinkedList handle ---

fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_push");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("push_front", size), |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for value in 0..size {
                    list.push_front(black_box(value));
                }
                list
            })
        });

        group.bench_function(BenchmarkId::new("push_back", size), |b| {
            b.iter(|| {
                let mut list = LinkedList::new();
                for value in 0..size {
                    list.push_back(black_box(value));
                }
                list
            })
        });
    }

    group.finish();
}

fn reverse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("linked_list_reverse");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("reverse", size), |b| {
            b.iter_with_setup(
                || shuffled(size).into_iter().collect::<LinkedList<usize>>(),
                |mut list| {
                    list.reverse();
                    list
                },
            )
        });
    }

    group.finish();
}

// --- Benchmark for the chain merge ---

fn merge_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_merge_sorted");

    for &size in SIZES {
        group.throughput(Throughput::Elements(2 * size as u64));

        group.bench_function(BenchmarkId::new("merge_sorted", size), |b| {
            b.iter_with_setup(
                || {
                    let mut first = shuffled(size);
                    let mut second = shuffled(size);
                    first.sort_unstable();
                    second.sort_unstable();
                    (
                        first.into_iter().collect::<Chain<usize>>(),
                        second.into_iter().collect::<Chain<usize>>(),
                    )
                },
                |(first, second)| Chain::merge_sorted(first, second),
            )
        });
    }

    group.finish();
}

criterion_group!(benches, push_benchmark, reverse_benchmark, merge_benchmark);
criterion_main!(benches);
