//! Ship definitions and randomized placement.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::core::common::PlacementError;
use crate::core::grid::{Coord, GridConfig};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells run towards increasing `x` at a fixed `y`.
    Horizontal,
    /// Cells run towards increasing `y` at a fixed `x`.
    Vertical,
}

impl Orientation {
    fn step(self, origin: Coord, i: usize) -> Option<Coord> {
        match self {
            Orientation::Horizontal => origin.x.checked_add(i).map(|x| Coord::new(x, origin.y)),
            Orientation::Vertical => origin.y.checked_add(i).map(|y| Coord::new(origin.x, y)),
        }
    }
}

/// A straight run of cells, with the cells that have been hit so far.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    orientation: Orientation,
    cells: Vec<Coord>,
    hits: BTreeSet<Coord>,
}

impl Ship {
    /// Place a ship of `length` starting at `origin`.
    /// The whole run must lie inside `grid`.
    pub fn new(
        grid: &GridConfig,
        origin: Coord,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, PlacementError> {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        if length > grid.max_ship_length() {
            return Err(PlacementError::ShipOutOfBounds);
        }
        let cells = (0..length)
            .map(|i| {
                orientation
                    .step(origin, i)
                    .filter(|c| grid.contains(*c))
                    .ok_or(PlacementError::ShipOutOfBounds)
            })
            .collect::<Result<Vec<Coord>, _>>()?;
        Ok(Ship {
            orientation,
            cells,
            hits: BTreeSet::new(),
        })
    }

    /// Build a ship from an explicit list of cells, in any order.
    ///
    /// The cells must be in bounds and form one straight, gap-free run. A
    /// single cell is treated as horizontal.
    pub fn from_cells(grid: &GridConfig, cells: &[Coord]) -> Result<Self, PlacementError> {
        if !cells.iter().all(|c| grid.contains(*c)) {
            return Err(PlacementError::ShipOutOfBounds);
        }
        let mut sorted = cells.to_vec();
        sorted.sort_by_key(|c| (c.y, c.x));
        sorted.dedup();
        if sorted.len() != cells.len() {
            return Err(PlacementError::NotContiguous);
        }
        let origin = *sorted.first().ok_or(PlacementError::ZeroLength)?;
        let orientation = if sorted.iter().all(|c| c.y == origin.y) {
            Orientation::Horizontal
        } else if sorted.iter().all(|c| c.x == origin.x) {
            Orientation::Vertical
        } else {
            return Err(PlacementError::NotContiguous);
        };
        let ship = Ship::new(grid, origin, orientation, sorted.len())?;
        if ship.cells != sorted {
            return Err(PlacementError::NotContiguous);
        }
        Ok(ship)
    }

    /// Rejection-sample a ship of `length`: pick an orientation and an anchor
    /// anywhere on the grid, and redraw from scratch until the run fits.
    pub fn random<R: Rng + ?Sized>(
        grid: &GridConfig,
        length: usize,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self, PlacementError> {
        Self::random_where(grid, length, max_attempts, rng, |_| true)
    }

    /// Like [`Ship::random`], but a candidate is also redrawn when `accept`
    /// rejects it. Rejections count against the same attempt budget.
    pub fn random_where<R, F>(
        grid: &GridConfig,
        length: usize,
        max_attempts: usize,
        rng: &mut R,
        mut accept: F,
    ) -> Result<Self, PlacementError>
    where
        R: Rng + ?Sized,
        F: FnMut(&Ship) -> bool,
    {
        if length == 0 {
            return Err(PlacementError::ZeroLength);
        }
        if length > grid.max_ship_length() {
            return Err(PlacementError::ShipTooLong {
                length,
                width: grid.width(),
                height: grid.height(),
            });
        }
        for _ in 0..max_attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(
                rng.random_range(0..grid.width()),
                rng.random_range(0..grid.height()),
            );
            match Ship::new(grid, origin, orientation, length) {
                Ok(ship) if accept(&ship) => return Ok(ship),
                Ok(_) | Err(PlacementError::ShipOutOfBounds) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(PlacementError::RetriesExhausted {
            length,
            attempts: max_attempts,
        })
    }

    /// Register a shot at `coord`. Returns `true` if the ship occupies it.
    /// Hitting the same cell again changes nothing.
    pub fn register_shot(&mut self, coord: Coord) -> bool {
        if self.contains(coord) {
            self.hits.insert(coord);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// A ship is alive until every one of its cells has been hit.
    pub fn is_alive(&self) -> bool {
        self.hits.len() < self.cells.len()
    }

    pub fn is_sunk(&self) -> bool {
        !self.is_alive()
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First cell of the run.
    pub fn origin(&self) -> Coord {
        self.cells[0]
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Cells hit so far, in coordinate order.
    pub fn hit_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.hits.iter().copied()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn overlaps(&self, other: &Ship) -> bool {
        self.cells.iter().any(|c| other.contains(*c))
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, orientation: {:?}, length: {}, hits: {} }}",
            self.origin(),
            self.orientation,
            self.length(),
            self.hits.len(),
        )
    }
}
