use crate::algorithms::MinHeap;
use crate::errors::{ConfigError, InputError, SimulationError};
use crate::{Coordinate, Distance};
use rand::Rng;
use std::time::{Duration, Instant};

pub const DEFAULT_HOTEL: Coordinate = Coordinate {
    x: 33.40819,
    y: 39.19001,
};
pub const DEFAULT_CALL_INTERVAL: usize = 100;
pub const DEFAULT_UPDATE_STEP: f64 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub operations: usize,
    pub update_probability: f64,
    pub hotel: Coordinate,
    /// Every `call_interval`th operation first dispatches the nearest taxi.
    pub call_interval: usize,
    /// How much closer a taxi gets on each update.
    pub update_step: f64,
}

impl SimulationConfig {
    pub fn new(operations: usize, update_probability: f64) -> Result<Self, ConfigError> {
        SimulationConfig {
            operations,
            update_probability,
            hotel: DEFAULT_HOTEL,
            call_interval: DEFAULT_CALL_INTERVAL,
            update_step: DEFAULT_UPDATE_STEP,
        }
        .validated()
    }

    pub fn validated(self) -> Result<Self, ConfigError> {
        if !(0. ..=1.).contains(&self.update_probability) {
            return Err(ConfigError::Probability(self.update_probability));
        }
        if self.call_interval == 0 {
            return Err(ConfigError::CallInterval);
        }
        Ok(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    /// Distances of the dispatched taxis, in dispatch order.
    pub calls: Vec<Distance>,
    pub updates: usize,
    pub inserts: usize,
    /// Taxis still waiting when the run ended.
    pub remaining: usize,
    pub elapsed: Duration,
}

/**
 * Taxi dispatch driven by a min-heap of distances to a hotel.
 *
 * Each operation either moves a random waiting taxi closer (with probability
 * `update_probability`, when any are waiting) or adds the next taxi from the
 * location source.  Every `call_interval`th operation first dispatches the
 * closest taxi, if there is one.
 */
pub struct Simulation<L, R> {
    config: SimulationConfig,
    locations: L,
    rng: R,
    distances: MinHeap<Distance>,
}

impl<L, R> Simulation<L, R>
where
    L: Iterator<Item = Result<Coordinate, InputError>>,
    R: Rng,
{
    pub fn new(config: SimulationConfig, locations: L, rng: R) -> Self {
        Simulation {
            config,
            locations,
            rng,
            distances: MinHeap::new(),
        }
    }

    pub fn run(mut self) -> Result<Report, SimulationError> {
        self.config = self.config.validated()?;
        let mut report = Report {
            calls: Vec::new(),
            updates: 0,
            inserts: 0,
            remaining: 0,
            elapsed: Duration::default(),
        };
        let start = Instant::now();

        for operation in 1..=self.config.operations {
            if operation % self.config.call_interval == 0 && !self.distances.is_empty() {
                report.calls.push(self.distances.extract_min()?);
            }

            let roll: f64 = self.rng.gen();
            if roll < self.config.update_probability && !self.distances.is_empty() {
                self.move_random_taxi()?;
                report.updates += 1;
            } else {
                self.add_taxi(operation)?;
                report.inserts += 1;
            }
        }

        report.remaining = self.distances.len();
        report.elapsed = start.elapsed();
        Ok(report)
    }

    fn move_random_taxi(&mut self) -> Result<(), SimulationError> {
        let index = self.rng.gen_range(0, self.distances.len());
        let current = self.distances.at(index)?;
        self.distances.update_value(index, current - self.config.update_step)?;
        Ok(())
    }

    fn add_taxi(&mut self, operation: usize) -> Result<(), SimulationError> {
        let taxi = self
            .locations
            .next()
            .ok_or(SimulationError::LocationsExhausted { operation })??;
        self.distances.insert(Distance(taxi.distance(self.config.hotel)));
        Ok(())
    }
}
