//! Criterion benchmarks for the two solvers under comparison.
//!
//! Uses a small fixed freight instance so timings measure algorithm
//! overhead rather than instance generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use heurlab::alns::{AlnsConfig, AlnsRunner};
use heurlab::problem::{FreightDestroy, FreightInstance, FreightRepair};
use heurlab::tabu::{TabuConfig, TabuRunner};

fn bench_alns(c: &mut Criterion) {
    let mut group = c.benchmark_group("alns");
    for &n_packages in &[30usize, 60] {
        let instance = FreightInstance::generate(n_packages, 4, 3);
        let destroy = [
            FreightDestroy::random(&instance),
            FreightDestroy::costliest(&instance),
        ];
        let repair = [
            FreightRepair::greedy(&instance),
            FreightRepair::scatter(&instance),
        ];
        let config = AlnsConfig::default().with_max_iterations(500).with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_packages),
            &n_packages,
            |b, _| {
                b.iter(|| {
                    let result =
                        AlnsRunner::run(black_box(&instance), &destroy, &repair, &config)
                            .expect("valid config");
                    black_box(result.best_objective)
                })
            },
        );
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    for &n_packages in &[30usize, 60] {
        let instance = FreightInstance::generate(n_packages, 4, 3);
        let config = TabuConfig::default()
            .with_max_iterations(500)
            .with_max_no_improve(200)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_packages),
            &n_packages,
            |b, _| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(&instance), &config)
                        .expect("valid config");
                    black_box(result.best_objective)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_alns, bench_tabu);
criterion_main!(benches);
