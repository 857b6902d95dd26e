//! Benchmarks for filter expression assembly and encoding.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sieve::prelude::*;

/// Create a single-condition filter.
fn create_equals_filter() -> FilterBuilder {
    FilterBuilder::new().equals("id", 42)
}

/// Create a filter with `count` conditions joined by `&&`.
fn create_and_filter(count: usize) -> FilterBuilder {
    let mut builder = FilterBuilder::new();
    for i in 0..count {
        if i > 0 {
            builder = builder.and();
        }
        builder = builder.equals(format!("field_{}", i), i as i64);
    }
    builder
}

/// Create a filter with `depth` nested groups.
fn create_nested_filter(depth: usize) -> FilterBuilder {
    let mut builder = FilterBuilder::new();
    for _ in 0..depth {
        builder = builder.open_paren();
    }
    builder = builder.equals("leaf", true);
    for i in 0..depth {
        builder = builder
            .or()
            .contains_case_insensitive("check", format!("v{}", i))
            .close_paren();
    }
    builder
}

/// Benchmark filter creation.
fn bench_filter_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_creation");

    group.bench_function("equals", |b| b.iter(|| black_box(create_equals_filter())));

    group.bench_function("in_10_values", |b| {
        b.iter(|| black_box(FilterBuilder::new().in_("Price", 0..10)))
    });

    group.bench_function("grouped", |b| {
        b.iter(|| {
            black_box(
                FilterBuilder::new()
                    .starts_with("City", "New")
                    .and()
                    .open_paren()
                    .greater_than("Population", 1_000_000)
                    .or()
                    .equals("Country", "USA")
                    .close_paren(),
            )
        })
    });

    for count in [5, 10, 20] {
        group.bench_with_input(BenchmarkId::new("and_conditions", count), &count, |b, &count| {
            b.iter(|| black_box(create_and_filter(count)))
        });
    }

    for depth in [2, 5, 10] {
        group.bench_with_input(BenchmarkId::new("nested", depth), &depth, |b, &depth| {
            b.iter(|| black_box(create_nested_filter(depth)))
        });
    }

    group.finish();
}

/// Benchmark terminal builds.
fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for count in [1, 10, 50] {
        let filter = create_and_filter(count);
        group.throughput(Throughput::Bytes(filter.as_str().len() as u64));

        group.bench_with_input(BenchmarkId::new("raw", count), &filter, |b, filter| {
            b.iter(|| black_box(filter.build()))
        });

        group.bench_with_input(BenchmarkId::new("encoded", count), &filter, |b, filter| {
            b.iter(|| black_box(filter.build_query()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_creation, bench_build);
criterion_main!(benches);
