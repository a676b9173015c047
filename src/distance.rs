use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/**
 * A totally ordered `f64`, so distances can live in a `MinHeap`.
 *
 * Ordering follows IEEE 754 `totalOrder`: `-0.0 < 0.0`, and NaNs sort to the
 * ends instead of poisoning comparisons.
 */
#[derive(Copy, Clone, Debug)]
pub struct Distance(pub f64);

impl Distance {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance(value)
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Sub<f64> for Distance {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        Distance(self.0 - rhs)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
