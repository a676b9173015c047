use std::fmt;
use std::io;
use thiserror::Error;

/// Why a heap operation could not address the position it was asked for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BoundsCondition {
    EmptyHeap,
    IndexPastEnd { index: usize, size: usize },
}

impl fmt::Display for BoundsCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundsCondition::EmptyHeap => write!(f, "heap is empty"),
            BoundsCondition::IndexPastEnd { index, size } => {
                write!(f, "index {} out of range for heap of size {}", index, size)
            }
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("{operation}: {condition}")]
pub struct BoundsViolation {
    pub operation: &'static str,
    pub condition: BoundsCondition,
}

impl BoundsViolation {
    pub(crate) fn empty(operation: &'static str) -> Self {
        BoundsViolation {
            operation,
            condition: BoundsCondition::EmptyHeap,
        }
    }

    pub(crate) fn past_end(operation: &'static str, index: usize, size: usize) -> Self {
        BoundsViolation {
            operation,
            condition: BoundsCondition::IndexPastEnd { index, size },
        }
    }
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read locations: {0}")]
    Io(#[from] io::Error),

    #[error("Location input is empty: expected a header line")]
    MissingHeader,

    #[error("Malformed location on line {line}: {content:?}")]
    Malformed { line: usize, content: String },

    #[error("Invalid WKT: {0}")]
    Wkt(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Update probability must be within [0, 1], got {0}")]
    Probability(f64),

    #[error("Call interval must be positive")]
    CallInterval,
}

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Heap(#[from] BoundsViolation),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Ran out of locations at operation {operation}")]
    LocationsExhausted { operation: usize },
}
