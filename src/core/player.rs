//! A single simulated player: a hidden fleet and the record of shots taken at it.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::core::board::{CellState, ShotRecord};
use crate::core::common::{GameError, PlacementError, Shot};
use crate::core::config::FleetConfig;
use crate::core::grid::{Coord, GridConfig};
use crate::core::ship::Ship;

#[derive(Debug, Clone)]
pub struct Player {
    grid: GridConfig,
    fleet: Vec<Ship>,
    shots: ShotRecord,
    shots_fired: usize,
}

impl Player {
    /// Create a player whose fleet is randomly placed according to `fleet`.
    pub fn random<R: Rng + ?Sized>(
        grid: GridConfig,
        fleet: &FleetConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut ships: Vec<Ship> = Vec::with_capacity(fleet.lengths.len());
        for &length in &fleet.lengths {
            let ship = if fleet.allow_overlap {
                Ship::random(&grid, length, fleet.max_attempts, rng)?
            } else {
                Ship::random_where(&grid, length, fleet.max_attempts, rng, |candidate| {
                    !ships.iter().any(|placed| placed.overlaps(candidate))
                })?
            };
            ships.push(ship);
        }
        Ok(Self::from_parts(grid, ships))
    }

    /// Create a player with an explicit fleet, bypassing random placement.
    /// Ships may overlap; every cell must lie inside `grid`.
    pub fn with_fleet(grid: GridConfig, fleet: Vec<Ship>) -> Result<Self, GameError> {
        if fleet
            .iter()
            .any(|ship| !ship.cells().iter().all(|c| grid.contains(*c)))
        {
            return Err(PlacementError::ShipOutOfBounds.into());
        }
        Ok(Self::from_parts(grid, fleet))
    }

    fn from_parts(grid: GridConfig, fleet: Vec<Ship>) -> Self {
        Self {
            grid,
            fleet,
            shots: ShotRecord::new(grid),
            shots_fired: 0,
        }
    }

    /// Fire at `coord`.
    ///
    /// Every ship covering the cell records the hit and the shot record is
    /// overwritten with the outcome, even when the cell was shot before.
    /// Each call counts towards [`Player::shots_fired`].
    pub fn shoot_at(&mut self, coord: Coord) -> Result<Shot, GameError> {
        let already_shot = self.shots.get(coord)?.is_shot();

        let mut hit = false;
        for ship in self.fleet.iter_mut() {
            if ship.register_shot(coord) {
                hit = true;
            }
        }

        let state = if hit { CellState::Hit } else { CellState::Miss };
        self.shots.set(coord, state)?;
        self.shots_fired += 1;
        Ok(Shot { hit, already_shot })
    }

    pub fn ships_alive(&self) -> usize {
        self.fleet.iter().filter(|s| s.is_alive()).count()
    }

    /// Number of `shoot_at` calls so far, repeats included.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Number of distinct cells shot so far.
    pub fn cells_shot(&self) -> usize {
        self.shots.shot_count()
    }

    /// Number of cells currently recorded as hits.
    pub fn hits(&self) -> usize {
        self.shots.hit_count()
    }

    /// The player keeps going while a ship is afloat and fewer shots than
    /// cells have been fired.
    pub fn still_playing(&self) -> bool {
        self.ships_alive() > 0 && self.shots_fired < self.grid.cell_count()
    }

    /// Ships remain but the shot cap was reached. Only a strategy that keeps
    /// re-shooting cells ends up here.
    pub fn overran(&self) -> bool {
        self.ships_alive() > 0 && self.shots_fired >= self.grid.cell_count()
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    pub fn shot_record(&self) -> &ShotRecord {
        &self.shots
    }

    /// Row-major occupancy of the whole fleet.
    pub fn ship_matrix(&self) -> Vec<bool> {
        let mut matrix = vec![false; self.grid.cell_count()];
        for ship in &self.fleet {
            for &cell in ship.cells() {
                // cells were bounds-checked at construction
                if let Ok(i) = self.grid.index_of(cell) {
                    matrix[i] = true;
                }
            }
        }
        matrix
    }

    /// Row-major signed shot record: miss `-1`, unshot `0`, hit `1`.
    pub fn shot_matrix(&self) -> Vec<i8> {
        self.shots.to_signed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ship::Orientation;

    #[test]
    fn out_of_bounds_shot_does_not_count() {
        let grid = GridConfig::new(3, 3).unwrap();
        let ship = Ship::new(&grid, Coord::new(0, 0), Orientation::Vertical, 2).unwrap();
        let mut player = Player::with_fleet(grid, vec![ship]).unwrap();
        assert_eq!(
            player.shoot_at(Coord::new(3, 0)),
            Err(GameError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(player.shots_fired(), 0);
    }

    #[test]
    fn overlapping_ships_both_take_the_hit() {
        let grid = GridConfig::new(4, 4).unwrap();
        let a = Ship::new(&grid, Coord::new(0, 1), Orientation::Horizontal, 2).unwrap();
        let b = Ship::new(&grid, Coord::new(1, 0), Orientation::Vertical, 2).unwrap();
        let mut player = Player::with_fleet(grid, vec![a, b]).unwrap();
        assert!(player.shoot_at(Coord::new(1, 1)).unwrap().hit);
        assert!(player.fleet().iter().all(|s| s.hit_count() == 1));
    }
}
