//! Per-player record of where shots have landed.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::core::common::GameError;
use crate::core::grid::{Coord, GridConfig};

/// State of a single cell in a shot record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Unshot,
    Hit,
    Miss,
}

impl CellState {
    /// Signed encoding shared with predictive delegates and training data:
    /// miss `-1`, unshot `0`, hit `1`.
    pub fn signed(self) -> i8 {
        match self {
            CellState::Miss => -1,
            CellState::Unshot => 0,
            CellState::Hit => 1,
        }
    }

    pub fn is_shot(self) -> bool {
        self != CellState::Unshot
    }
}

/// One entry per grid cell, row-major, every cell starting `Unshot`.
#[derive(Clone, PartialEq, Eq)]
pub struct ShotRecord {
    grid: GridConfig,
    cells: Vec<CellState>,
}

impl ShotRecord {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            cells: vec![CellState::Unshot; grid.cell_count()],
        }
    }

    /// Build a record from signed values (`-1`, `0`, `1`).
    /// Any positive value is a hit and any negative value a miss.
    pub fn from_signed(grid: GridConfig, values: &[i8]) -> Result<Self, GameError> {
        if values.len() != grid.cell_count() {
            return Err(GameError::RecordShape {
                expected: grid.cell_count(),
                actual: values.len(),
            });
        }
        let cells = values
            .iter()
            .map(|v| match v.signum() {
                1 => CellState::Hit,
                -1 => CellState::Miss,
                _ => CellState::Unshot,
            })
            .collect();
        Ok(Self { grid, cells })
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn get(&self, coord: Coord) -> Result<CellState, GameError> {
        Ok(self.cells[self.grid.index_of(coord)?])
    }

    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<(), GameError> {
        let i = self.grid.index_of(coord)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Cell states in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of cells that are not `Unshot`.
    pub fn shot_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_shot()).count()
    }

    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == CellState::Hit).count()
    }

    /// Coordinates of every recorded hit, row-major.
    pub fn hits(&self) -> impl Iterator<Item = Coord> + '_ {
        self.grid
            .coords()
            .zip(self.cells.iter())
            .filter(|(_, s)| **s == CellState::Hit)
            .map(|(c, _)| c)
    }

    /// Flattened signed encoding, see [`CellState::signed`].
    pub fn to_signed(&self) -> Vec<i8> {
        self.cells.iter().map(|c| c.signed()).collect()
    }
}

impl fmt::Debug for ShotRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShotRecord {}x{}", self.grid.width(), self.grid.height())?;
        for row in self.cells.chunks(self.grid.width()) {
            for cell in row {
                let ch = match cell {
                    CellState::Unshot => '.',
                    CellState::Hit => 'X',
                    CellState::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_encoding_roundtrip() {
        let grid = GridConfig::new(2, 2).unwrap();
        let mut shots = ShotRecord::new(grid);
        shots.set(Coord::new(1, 0), CellState::Hit).unwrap();
        shots.set(Coord::new(0, 1), CellState::Miss).unwrap();
        assert_eq!(shots.to_signed(), vec![0, 1, -1, 0]);
        assert_eq!(ShotRecord::from_signed(grid, &shots.to_signed()).unwrap(), shots);
        assert_eq!(shots.shot_count(), 2);
        assert_eq!(shots.hits().collect::<Vec<_>>(), vec![Coord::new(1, 0)]);
    }

    #[test]
    fn from_signed_checks_length() {
        let grid = GridConfig::new(2, 2).unwrap();
        assert_eq!(
            ShotRecord::from_signed(grid, &[0, 1]),
            Err(GameError::RecordShape { expected: 4, actual: 2 })
        );
    }
}
