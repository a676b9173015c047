mod utils;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use taxi_heap::{Simulation, SimulationConfig};
use utils::{as_locations, get_random_points};

pub fn simulation_benchmark(c: &mut Criterion) {
    let operations = 100_000;
    let points = get_random_points(operations, 342);
    let mut group = c.benchmark_group("simulation");
    for p in [0.1, 0.5, 0.9].iter() {
        let config = SimulationConfig::new(operations, *p).unwrap();
        group.bench_with_input(BenchmarkId::new("dispatch", p), p, |b, _| {
            b.iter(|| {
                let rng = SmallRng::seed_from_u64(7);
                Simulation::new(config, as_locations(&points), rng)
                    .run()
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, simulation_benchmark);
criterion_main!(benches);
