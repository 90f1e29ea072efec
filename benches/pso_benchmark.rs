use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fastrand::Rng;
use swarm_surface::prelude::*;
use swarm_surface::test_functions::{Rastrigin, Rosenbrock};

fn pso_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso: step");
    for n in [10, 30, 100, 300] {
        group.bench_with_input(BenchmarkId::new("Rastrigin", n), &n, |b, n| {
            let mut params = SwarmParameters::default();
            params.with_population_size(*n);
            let mut optimizer = SwarmOptimizer::new(Rastrigin, params, Rng::with_seed(0)).unwrap();
            b.iter(|| optimizer.step());
        });
        group.bench_with_input(BenchmarkId::new("Rosenbrock (reflect)", n), &n, |b, n| {
            let mut params = SwarmParameters::default();
            params
                .with_population_size(*n)
                .with_boundary_method(SwarmBoundaryMethod::Reflect)
                .with_max_velocity(2.0);
            let mut optimizer =
                SwarmOptimizer::new(Rosenbrock, params, Rng::with_seed(0)).unwrap();
            b.iter(|| optimizer.step());
        });
    }
    group.finish();
}

criterion_group!(benches, pso_benchmark);
criterion_main!(benches);
