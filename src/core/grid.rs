//! Grid dimensions and coordinates.
//!
//! Every dense per-cell vector in the crate (scores, shot matrices, ship
//! matrices, training records) is laid out row-major: the cell `(x, y)` lives
//! at index `y * width + x`.

use core::fmt;

use crate::core::common::GameError;
use crate::core::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// A cell on the grid. `x` grows to the right, `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Immutable grid dimensions shared by every ship and shot record of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    width: usize,
    height: usize,
}

impl GridConfig {
    /// Create a grid; both dimensions must be at least 1 and the cell count
    /// must fit in a `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(GameError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Largest ship that fits in at least one orientation.
    pub fn max_ship_length(&self) -> usize {
        self.width.max(self.height)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Row-major index of `coord`.
    pub fn index_of(&self, coord: Coord) -> Result<usize, GameError> {
        if !self.contains(coord) {
            return Err(GameError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            });
        }
        Ok(coord.y * self.width + coord.x)
    }

    /// Inverse of [`GridConfig::index_of`].
    pub fn coord_at(&self, index: usize) -> Option<Coord> {
        if index >= self.cell_count() {
            return None;
        }
        Some(Coord::new(index % self.width, index / self.width))
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.cell_count()).map(move |i| Coord::new(i % width, i / width))
    }

    /// In-bounds orthogonal neighbours of `coord`: up, down, left, right.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let Coord { x, y } = coord;
        let up = y.checked_sub(1).map(|y| Coord::new(x, y));
        let down = y.checked_add(1).map(|y| Coord::new(x, y));
        let left = x.checked_sub(1).map(|x| Coord::new(x, y));
        let right = x.checked_add(1).map(|x| Coord::new(x, y));
        let grid = *self;
        [up, down, left, right]
            .into_iter()
            .flatten()
            .filter(move |c| grid.contains(*c))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
