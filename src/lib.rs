mod coordinate;
mod distance;

pub mod algorithms;
pub mod errors;
pub mod from_wkt;
pub mod locations;
pub mod simulation;

pub use algorithms::MinHeap;
pub use coordinate::Coordinate;
pub use distance::Distance;
pub use locations::LocationReader;
pub use simulation::{Report, Simulation, SimulationConfig};
