mod min_heap;

use crate::Coordinate;

pub use min_heap::MinHeap;

/// Euclidean distance between two locations.
pub fn distance(a: Coordinate, b: Coordinate) -> f64 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_properties() {
        let a = Coordinate::new(33.40819, 39.19001);
        let b = Coordinate::new(32.5, 40.);
        assert_eq!(distance(a, b), distance(b, a));
        assert!(distance(a, b) > 0.);
        assert_eq!(distance(a, a), 0.);
    }
}
