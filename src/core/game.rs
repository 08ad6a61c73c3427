use alloc::vec::Vec;
use rand::Rng;

use crate::core::{
    common::GameError,
    config::FleetConfig,
    grid::GridConfig,
    player::Player,
};

/// A set of independent players sharing only their grid dimensions.
#[derive(Debug, Clone)]
pub struct Game {
    grid: GridConfig,
    players: Vec<Player>,
}

impl Game {
    /// Create `player_count` players, each with a freshly placed fleet.
    pub fn new<R: Rng + ?Sized>(
        grid: GridConfig,
        fleet: &FleetConfig,
        player_count: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let players = (0..player_count)
            .map(|_| Player::random(grid, fleet, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { grid, players })
    }

    /// Wrap already constructed players.
    pub fn from_players(grid: GridConfig, players: Vec<Player>) -> Self {
        Self { grid, players }
    }

    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// `true` while at least one player is still playing.
    pub fn players_still_playing(&self) -> bool {
        self.players.iter().any(|p| p.still_playing())
    }
}
