//! Criterion benchmarks for the Monte Carlo pricing engine.
//!
//! Benchmarks cover:
//! - Batch normal sampling (foundation for the simulation)
//! - Vanilla and barrier pricing with varying path counts
//! - Sequential vs parallel backend
//! - Bump-and-revalue Delta

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use diffmc_core::types::{Barrier, BarrierDirection, MarketParams, OptionKind};
use diffmc_engine::greeks::{monte_carlo_greeks, Greek};
use diffmc_engine::mc::{Backend, MonteCarloPricer, SimulationConfig};
use diffmc_engine::rng::SimRng;

fn market() -> MarketParams {
    MarketParams::new(100.0, 100.0, 1.0, 0.2, 0.05).unwrap()
}

fn down_barrier() -> Barrier {
    Barrier::new(90.0, BarrierDirection::Down).unwrap()
}

fn pricer(n_paths: usize, n_steps: usize, backend: Backend) -> MonteCarloPricer {
    let config = SimulationConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(42)
        .backend(backend)
        .build()
        .unwrap();
    MonteCarloPricer::new(config)
}

fn bench_rng_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_batch");
    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("fill_normal", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = SimRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    rng.fill_normal(&mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }
    group.finish();
}

fn bench_vanilla_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("vanilla_pricing");
    group.sample_size(30);

    let n_steps = 50;
    for n_paths in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("sequential", n_paths),
            &n_paths,
            |b, &n| {
                let mut mc = pricer(n, n_steps, Backend::Sequential);
                b.iter(|| black_box(mc.price_vanilla(market(), OptionKind::Call).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_barrier_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("barrier_pricing");
    group.sample_size(30);

    let n_paths = 50_000;
    let n_steps = 250;

    group.bench_function("sequential", |b| {
        let mut mc = pricer(n_paths, n_steps, Backend::Sequential);
        b.iter(|| {
            black_box(
                mc.price_barrier(market(), OptionKind::Call, down_barrier())
                    .unwrap(),
            )
        });
    });

    group.bench_function("parallel", |b| {
        let mut mc = pricer(n_paths, n_steps, Backend::Parallel { threads: 0 });
        b.iter(|| {
            black_box(
                mc.price_barrier(market(), OptionKind::Call, down_barrier())
                    .unwrap(),
            )
        });
    });

    group.finish();
}

fn bench_bump_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("greeks");
    group.sample_size(20);

    group.bench_function("bump_delta_barrier", |b| {
        let mut mc = pricer(20_000, 100, Backend::Sequential);
        b.iter(|| {
            black_box(
                monte_carlo_greeks(
                    &mut mc,
                    market(),
                    OptionKind::Call,
                    Some(down_barrier()),
                    &[Greek::Delta],
                )
                .unwrap(),
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rng_batch,
    bench_vanilla_pricing,
    bench_barrier_pricing,
    bench_bump_delta
);
criterion_main!(benches);
