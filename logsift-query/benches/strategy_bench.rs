//! Benchmarks for statement strategy builds.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use logsift_query::{FilterEntity, MatchStrategy, QueryStringOptions, StrategyKind};
use std::hint::black_box;

fn entities(count: usize) -> Vec<FilterEntity> {
    (0..count)
        .map(|i| FilterEntity::new(format!("status:{}", 400 + i % 200)).with_field("status"))
        .collect()
}

/// Benchmark each strategy across entity counts.
fn bench_strategy_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategy_build");

    for count in [1usize, 10, 100] {
        let input = entities(count);
        group.throughput(Throughput::Elements(count as u64));

        for kind in StrategyKind::VARIANTS {
            let strategy = kind.strategy(QueryStringOptions::default());
            group.bench_with_input(BenchmarkId::new(kind.name(), count), &input, |b, input| {
                b.iter(|| black_box(strategy.build(black_box(input))))
            });
        }
    }

    group.finish();
}

/// Benchmark building plus JSON serialization.
fn bench_build_to_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_to_json");
    let options = QueryStringOptions::new()
        .default_field("message")
        .analyze_wildcard(true);
    let strategy = StrategyKind::NoneOf.strategy(options);

    for count in [10usize, 100] {
        let input = entities(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| black_box(strategy.build(input).to_json()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategy_build, bench_build_to_json);
criterion_main!(benches);
