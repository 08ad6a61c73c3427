use alloc::vec::Vec;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Ship lengths of the standard fleet, in placement order.
pub const DEFAULT_FLEET: [usize; 5] = [5, 4, 3, 2, 2];

/// Upper bound on rejection-sampling draws per ship.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Fraction of cells revealed in a synthetic training overlay.
pub const DEFAULT_OVERLAY_PROBABILITY: f64 = 0.5;

/// Fleet composition and placement rules for a player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetConfig {
    /// Ship lengths, placed in this order.
    pub lengths: Vec<usize>,
    /// Let ships of the same fleet share cells.
    pub allow_overlap: bool,
    /// Draws allowed per ship before placement fails.
    pub max_attempts: usize,
}

impl FleetConfig {
    pub fn new(lengths: Vec<usize>) -> Self {
        Self {
            lengths,
            ..Self::default()
        }
    }

    pub fn with_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sum of all ship lengths.
    pub fn total_cells(&self) -> usize {
        self.lengths.iter().sum()
    }
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            lengths: DEFAULT_FLEET.to_vec(),
            allow_overlap: false,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }
}
