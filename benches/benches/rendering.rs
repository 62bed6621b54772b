//! Benchmarks for turning an edit script into segments.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use docdiff_benchmarks::{prose, revise};
use docdiff_engine::{Counters, Granularity, align, render, tokenize};

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering/segments");

    let sizes = [10_000usize, 100_000];

    for size in sizes {
        let old = prose(size);
        let new = revise(&old, 8);
        let (a, b) = (
            tokenize(&old, Granularity::Word),
            tokenize(&new, Granularity::Word),
        );
        let opcodes = align(&a, &b);

        group.throughput(Throughput::Elements(opcodes.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}_chars")),
            &size,
            |bench, _| bench.iter(|| render(black_box(&a), black_box(&b), black_box(&opcodes))),
        );
        group.bench_with_input(
            BenchmarkId::new("counters", format!("{size}_chars")),
            &size,
            |bench, _| bench.iter(|| Counters::from_opcodes(black_box(&opcodes))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
