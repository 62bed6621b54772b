//! Benchmarks for sequence alignment.
//!
//! Performance-critical paths:
//! - `matching_blocks`: greedy longest-block search
//! - `MyersDiff`: shortest edit script
//! - granularity: the same edit at char, word and line level

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use docdiff_benchmarks::{prose, revise};
use docdiff_engine::{
    Algorithm, BlockMatcher, DiffAlgorithm, DiffOptions, Granularity, MyersDiff, TextDiff,
    matching_blocks, tokenize,
};

fn bench_block_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/block");

    let sizes = [1_000usize, 10_000, 50_000];

    for size in sizes {
        let old = prose(size);
        let new = revise(&old, 15);
        let (a, b) = (
            tokenize(&old, Granularity::Char),
            tokenize(&new, Granularity::Char),
        );

        group.throughput(Throughput::Elements(a.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_chars")),
            &size,
            |bench, _| bench.iter(|| BlockMatcher.opcodes(black_box(&a), black_box(&b))),
        );
    }

    group.finish();
}

fn bench_matching_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/matching_blocks");

    // Edit density: fewer unchanged runs means more windows to search
    let strides = [("sparse", 40usize), ("moderate", 10), ("dense", 3)];
    let old = prose(20_000);

    for (name, stride) in strides {
        let new = revise(&old, stride);
        let (a, b) = (
            tokenize(&old, Granularity::Word),
            tokenize(&new, Granularity::Word),
        );
        group.bench_function(name, |bench| {
            bench.iter(|| matching_blocks(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_myers(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/myers");

    let sizes = [1_000usize, 10_000];

    for size in sizes {
        let old = prose(size);
        let new = revise(&old, 40);
        let (a, b) = (
            tokenize(&old, Granularity::Char),
            tokenize(&new, Granularity::Char),
        );

        group.throughput(Throughput::Elements(a.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_chars")),
            &size,
            |bench, _| bench.iter(|| MyersDiff.opcodes(black_box(&a), black_box(&b))),
        );
    }

    group.finish();
}

fn bench_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/granularity");

    let old = prose(5_000);
    let new = revise(&old, 20);

    for granularity in [Granularity::Char, Granularity::Word, Granularity::Line] {
        for algorithm in [Algorithm::Block, Algorithm::Myers] {
            let engine = TextDiff::new(
                DiffOptions::default()
                    .with_algorithm(algorithm)
                    .with_granularity(granularity),
            );
            group.bench_function(format!("{algorithm}/{granularity}"), |bench| {
                bench.iter(|| engine.compare(black_box(&old), black_box(&new)));
            });
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_block_matcher,
    bench_matching_blocks,
    bench_myers,
    bench_granularity
);
criterion_main!(benches);
