pub mod other_impls;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use taxi_heap::errors::InputError;
use taxi_heap::simulation::DEFAULT_HOTEL;
use taxi_heap::{Coordinate, Distance};

//// Utility functions

pub(crate) fn get_random_points(n: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        results.push(Coordinate::new(
            rng.gen_range(26., 45.),
            rng.gen_range(36., 42.),
        ));
    }

    results
}

#[allow(dead_code)]
pub(crate) fn get_random_distances(n: usize, seed: u64) -> Vec<Distance> {
    get_random_points(n, seed)
        .into_iter()
        .map(|p| Distance(p.distance(DEFAULT_HOTEL)))
        .collect()
}

#[allow(dead_code)]
pub(crate) fn as_locations(
    points: &[Coordinate],
) -> impl Iterator<Item = Result<Coordinate, InputError>> + '_ {
    points.iter().copied().map(Ok)
}
