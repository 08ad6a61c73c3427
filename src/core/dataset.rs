//! Synthetic training records for predictive delegates.
//!
//! A record is the player's true occupancy (`0`/`1`, one per cell) followed
//! by an observed overlay (`-1` miss, `0` unknown, `1` hit, one per cell),
//! both row-major. The overlay mimics a partly played game.

use alloc::vec::Vec;
use rand::Rng;

use crate::core::common::GameError;
use crate::core::config::FleetConfig;
use crate::core::game::Game;
use crate::core::grid::GridConfig;
use crate::core::player::Player;

/// Build the record for one player, revealing each cell with
/// `overlay_probability`. The probability is clamped to `[0, 1]`; NaN reveals
/// nothing.
pub fn training_record<R: Rng + ?Sized>(
    player: &Player,
    overlay_probability: f64,
    rng: &mut R,
) -> Vec<i8> {
    let ships = player.ship_matrix();
    let p = if overlay_probability.is_nan() {
        0.0
    } else {
        overlay_probability.clamp(0.0, 1.0)
    };
    let mut record: Vec<i8> = ships.iter().map(|&occupied| occupied as i8).collect();
    record.extend(ships.iter().map(|&occupied| {
        if !rng.random_bool(p) {
            0
        } else if occupied {
            1
        } else {
            -1
        }
    }));
    record
}

/// Place `count` fresh fleets and produce one record each.
pub fn generate_records<R: Rng + ?Sized>(
    grid: GridConfig,
    fleet: &FleetConfig,
    count: usize,
    overlay_probability: f64,
    rng: &mut R,
) -> Result<Vec<Vec<i8>>, GameError> {
    let game = Game::new(grid, fleet, count, rng)?;
    Ok(game
        .players()
        .iter()
        .map(|player| training_record(player, overlay_probability, rng))
        .collect())
}

/// Split a record back into `(occupancy, overlay)`.
pub fn split_record<'a>(grid: &GridConfig, record: &'a [i8]) -> Option<(&'a [i8], &'a [i8])> {
    let cells = grid.cell_count();
    if record.len() != 2 * cells {
        return None;
    }
    Some(record.split_at(cells))
}
