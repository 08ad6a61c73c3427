//! Common types for the simulator: errors and shot outcomes.

use core::fmt;

/// Outcome of a single `Player::shoot_at` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    /// At least one ship occupies the targeted cell.
    pub hit: bool,
    /// The cell had already been shot before this call.
    pub already_shot: bool,
}

/// Reasons a ship could not be placed on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ships must occupy at least one cell.
    ZeroLength,
    /// Ship is longer than both grid dimensions and can never fit.
    ShipTooLong {
        length: usize,
        width: usize,
        height: usize,
    },
    /// A directly constructed ship leaves the grid.
    ShipOutOfBounds,
    /// Cells given for a ship do not form one straight run.
    NotContiguous,
    /// Random placement gave up after the configured number of attempts.
    RetriesExhausted { length: usize, attempts: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::ZeroLength => write!(f, "Ship length must be at least 1"),
            PlacementError::ShipTooLong {
                length,
                width,
                height,
            } => write!(
                f,
                "Ship of length {} cannot fit on a {}x{} grid",
                length, width, height
            ),
            PlacementError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::NotContiguous => write!(f, "Ship cells are not one contiguous run"),
            PlacementError::RetriesExhausted { length, attempts } => write!(
                f,
                "Unable to place ship of length {} after {} attempts",
                length, attempts
            ),
        }
    }
}

/// Errors returned by grid, player and strategy operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Grid dimensions must both be non-zero.
    InvalidGrid { width: usize, height: usize },
    /// Ship or fleet placement failed.
    Placement(PlacementError),
    /// Coordinate lies outside the grid.
    OutOfBounds { x: usize, y: usize },
    /// Predictive delegate returned a score vector of the wrong length.
    DelegateShape { expected: usize, actual: usize },
    /// A caller-supplied shot record does not cover the grid.
    RecordShape { expected: usize, actual: usize },
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::Placement(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidGrid { width, height } => {
                write!(f, "Invalid grid dimensions {}x{}", width, height)
            }
            GameError::Placement(e) => write!(f, "Placement error: {}", e),
            GameError::OutOfBounds { x, y } => write!(f, "Coordinate ({}, {}) is out of bounds", x, y),
            GameError::DelegateShape { expected, actual } => write!(
                f,
                "Predictor returned {} scores, expected {}",
                actual, expected
            ),
            GameError::RecordShape { expected, actual } => write!(
                f,
                "Shot record has {} cells, expected {}",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Placement(e) => Some(e),
            _ => None,
        }
    }
}
